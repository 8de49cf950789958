//! Fluent builder for constructing an [`AgentData`] from nested lists.
//!
//! # Usage
//!
//! ```rust
//! use traj_agent::AgentDataBuilder;
//! use traj_core::Vec3;
//!
//! let agents = AgentDataBuilder::new(vec![0.0, 0.5])
//!     .types(vec![vec!["A".into()], vec!["A".into(), "B".into()]])
//!     .positions(vec![vec![Vec3::ZERO], vec![Vec3::ZERO, Vec3::splat(1.0)]])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(agents.n_agents(1), 2);
//! assert_eq!(agents.unique_id(1, 1).0, 1);
//! ```
//!
//! Every per-frame input is optional except the times.  Agent counts default
//! to the length of each frame's type list.

use std::collections::BTreeMap;

use traj_core::{DimensionData, DisplayData, TrajError, TrajResult, UniqueId, Vec3, VizType};

use crate::AgentData;

/// Radius given to agents when none is supplied.
pub const DEFAULT_RADIUS: f32 = 1.0;

/// Fluent builder for [`AgentData`].
#[derive(Default)]
pub struct AgentDataBuilder {
    times:             Vec<f32>,
    n_agents:          Option<Vec<usize>>,
    viz_types:         Option<Vec<Vec<VizType>>>,
    unique_ids:        Option<Vec<Vec<i64>>>,
    types:             Option<Vec<Vec<String>>>,
    positions:         Option<Vec<Vec<Vec3>>>,
    radii:             Option<Vec<Vec<f32>>>,
    rotations:         Option<Vec<Vec<Vec3>>>,
    subpoints:         Option<Vec<Vec<Vec<f32>>>>,
    display_data:      BTreeMap<String, DisplayData>,
    draw_fiber_points: bool,
}

impl AgentDataBuilder {
    pub fn new(times: Vec<f32>) -> Self {
        Self { times, ..Self::default() }
    }

    pub fn n_agents(mut self, v: Vec<usize>) -> Self {
        self.n_agents = Some(v);
        self
    }

    pub fn viz_types(mut self, v: Vec<Vec<VizType>>) -> Self {
        self.viz_types = Some(v);
        self
    }

    /// Per-frame unique IDs.  Defaults to `0..n_agents[t]`.
    pub fn unique_ids(mut self, v: Vec<Vec<i64>>) -> Self {
        self.unique_ids = Some(v);
        self
    }

    pub fn types(mut self, v: Vec<Vec<String>>) -> Self {
        self.types = Some(v);
        self
    }

    pub fn positions(mut self, v: Vec<Vec<Vec3>>) -> Self {
        self.positions = Some(v);
        self
    }

    /// Per-frame radii.  Defaults to [`DEFAULT_RADIUS`].
    pub fn radii(mut self, v: Vec<Vec<f32>>) -> Self {
        self.radii = Some(v);
        self
    }

    pub fn rotations(mut self, v: Vec<Vec<Vec3>>) -> Self {
        self.rotations = Some(v);
        self
    }

    /// Per-agent flattened subpoints.
    pub fn subpoints(mut self, v: Vec<Vec<Vec<f32>>>) -> Self {
        self.subpoints = Some(v);
        self
    }

    pub fn display_data(mut self, d: DisplayData) -> Self {
        self.display_data.insert(d.name.clone(), d);
        self
    }

    pub fn draw_fiber_points(mut self, on: bool) -> Self {
        self.draw_fiber_points = on;
        self
    }

    /// Validate shapes and allocate a store sized exactly to the data.
    pub fn build(self) -> TrajResult<AgentData> {
        let steps = self.times.len();

        let n_agents = match (&self.n_agents, &self.types) {
            (Some(n), _) => n.clone(),
            (None, Some(types)) => types.iter().map(Vec::len).collect(),
            (None, None) => {
                return Err(TrajError::MissingData("agent counts or types".into()));
            }
        };
        check_frames("n_agents", steps, n_agents.len())?;

        check_nested("viz_types", &n_agents, self.viz_types.as_deref())?;
        check_nested("unique_ids", &n_agents, self.unique_ids.as_deref())?;
        check_nested("types", &n_agents, self.types.as_deref())?;
        check_nested("positions", &n_agents, self.positions.as_deref())?;
        check_nested("radii", &n_agents, self.radii.as_deref())?;
        check_nested("rotations", &n_agents, self.rotations.as_deref())?;
        check_nested("subpoints", &n_agents, self.subpoints.as_deref())?;

        let max_agents = n_agents.iter().copied().max().unwrap_or(0);
        let max_subpoints = self
            .subpoints
            .iter()
            .flatten()
            .flatten()
            .map(Vec::len)
            .max()
            .unwrap_or(0);

        let mut data = AgentData::from_dimensions(DimensionData::new(steps, max_agents, max_subpoints));
        for (t, &time) in self.times.iter().enumerate() {
            data.times[t] = time;
            data.n_agents[t] = n_agents[t];
            for a in 0..n_agents[t] {
                let i = data.slot(t, a);
                data.viz_types[i] = pick(&self.viz_types, t, a).unwrap_or_default();
                data.unique_ids[i] = UniqueId(pick(&self.unique_ids, t, a).unwrap_or(a as i64));
                data.positions[i] = pick(&self.positions, t, a).unwrap_or_default();
                data.radii[i] = pick(&self.radii, t, a).unwrap_or(DEFAULT_RADIUS);
                data.rotations[i] = pick(&self.rotations, t, a).unwrap_or_default();
                if let Some(sp) = self.subpoints.as_ref().map(|s| &s[t][a]) {
                    data.set_subpoints(t, a, sp);
                }
                let name = self.types.as_ref().map_or("", |ty| ty[t][a].as_str());
                data.types.push(t, name);
            }
        }
        data.display_data = self.display_data;
        data.draw_fiber_points = self.draw_fiber_points;
        Ok(data)
    }
}

fn pick<T: Clone>(v: &Option<Vec<Vec<T>>>, t: usize, a: usize) -> Option<T> {
    v.as_ref().map(|v| v[t][a].clone())
}

fn check_frames(what: &'static str, expected: usize, got: usize) -> TrajResult<()> {
    if expected != got {
        return Err(TrajError::data(format!(
            "{what} has {got} frames but there are {expected} timesteps"
        )));
    }
    Ok(())
}

/// Every frame of `v` must hold at least `n_agents[t]` entries.
fn check_nested<T>(what: &'static str, n_agents: &[usize], v: Option<&[Vec<T>]>) -> TrajResult<()> {
    let Some(v) = v else { return Ok(()) };
    check_frames(what, n_agents.len(), v.len())?;
    for (t, (frame, &n)) in v.iter().zip(n_agents).enumerate() {
        if frame.len() < n {
            return Err(TrajError::data(format!(
                "{what} frame {t} has {} entries but {n} agents",
                frame.len()
            )));
        }
    }
    Ok(())
}
