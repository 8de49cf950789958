use std::collections::BTreeMap;
use std::str::FromStr;

use traj_agent::TrajectoryData;
use traj_core::{TrajError, Vec3};

use super::{Filter, per_type};
use crate::ConvertResult;

// ── EveryNthSubpoint ──────────────────────────────────────────────────────────

/// Keep the 0th, nth, 2nth… subpoint item of each agent.  An item is an
/// XYZ point, or XYZ plus radius for sphere groups.  `n` of 0 or 1 keeps
/// everything.
#[derive(Clone, Debug, PartialEq)]
pub struct EveryNthSubpoint {
    pub n_per_type: BTreeMap<String, usize>,
    pub default_n:  usize,
}

impl EveryNthSubpoint {
    pub fn new(default_n: usize) -> Self {
        Self { n_per_type: BTreeMap::new(), default_n }
    }

    pub fn with_type(mut self, name: impl Into<String>, n: usize) -> Self {
        self.n_per_type.insert(name.into(), n);
        self
    }
}

impl Filter for EveryNthSubpoint {
    fn name(&self) -> &'static str {
        "every nth subpoint"
    }

    fn apply(&self, mut data: TrajectoryData) -> ConvertResult<TrajectoryData> {
        let agents = &mut data.agent_data;
        let slots: Vec<_> = agents.occupied().filter(|&(t, a)| agents.n_subpoints(t, a) > 0).collect();
        for (t, a) in slots {
            let n = per_type(&self.n_per_type, self.default_n, agents.type_name(t, a));
            if n < 2 {
                continue;
            }
            let item = agents.display_type_of(t, a).subpoint_item_len();
            let kept: Vec<f32> = agents
                .subpoints(t, a)
                .chunks_exact(item)
                .step_by(n)
                .flatten()
                .copied()
                .collect();
            agents.set_subpoints(t, a, &kept);
        }
        Ok(data)
    }
}

// ── Translate ─────────────────────────────────────────────────────────────────

/// Move agents by a per-type offset.  Fiber subpoints move too;
/// sphere-group members are agent-relative and stay.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Translate {
    pub per_type: BTreeMap<String, Vec3>,
    pub default:  Vec3,
}

impl Translate {
    pub fn new(default: Vec3) -> Self {
        Self { per_type: BTreeMap::new(), default }
    }

    pub fn with_type(mut self, name: impl Into<String>, offset: Vec3) -> Self {
        self.per_type.insert(name.into(), offset);
        self
    }
}

impl Filter for Translate {
    fn name(&self) -> &'static str {
        "translate"
    }

    fn apply(&self, mut data: TrajectoryData) -> ConvertResult<TrajectoryData> {
        let agents = &mut data.agent_data;
        let slots: Vec<_> = agents.occupied().collect();
        for (t, a) in slots {
            let offset = per_type(&self.per_type, self.default, agents.type_name(t, a));
            if offset != Vec3::ZERO {
                agents.translate_agent(t, a, offset);
            }
        }
        Ok(data)
    }
}

// ── MultiplySpace ─────────────────────────────────────────────────────────────

/// Multiply positions, radii, subpoints and the box, and divide the spatial
/// unit so physical sizes are unchanged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MultiplySpace {
    pub multiplier: f32,
}

impl MultiplySpace {
    pub fn new(multiplier: f32) -> Self {
        Self { multiplier }
    }
}

impl Filter for MultiplySpace {
    fn name(&self) -> &'static str {
        "multiply space"
    }

    fn apply(&self, mut data: TrajectoryData) -> ConvertResult<TrajectoryData> {
        let m = self.multiplier;
        if !(m.is_finite() && m != 0.0) {
            return Err(TrajError::data(format!("cannot multiply space by {m}")).into());
        }
        data.agent_data.scale_spatial(m);
        data.meta_data.box_size = data.meta_data.box_size.map(|b| b * m);
        data.spatial_units.multiply(1.0 / f64::from(m));
        Ok(data)
    }
}

// ── TransformSpatialAxes ──────────────────────────────────────────────────────

/// Where one output axis reads from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AxisMapping {
    /// Input axis, 0 = X, 1 = Y, 2 = Z.
    pub source: usize,
    pub negate: bool,
}

impl FromStr for AxisMapping {
    type Err = TrajError;

    /// `"+X"`, `"-z"`, `"y"`…
    fn from_str(s: &str) -> Result<Self, TrajError> {
        let lower = s.trim().to_ascii_lowercase();
        let (negate, axis) = match lower.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, lower.strip_prefix('+').unwrap_or(&lower)),
        };
        let source = match axis {
            "x" => 0,
            "y" => 1,
            "z" => 2,
            _ => return Err(TrajError::data(format!("{s:?} is not an axis like \"+X\" or \"-Z\""))),
        };
        Ok(Self { source, negate })
    }
}

/// Permute and flip the spatial axes to rotate or mirror the scene.
///
/// `["+X", "-Z", "+Y"]` sends Y to -Z and Z to Y.  Positions and subpoints
/// get the signs; the box only the permutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransformSpatialAxes {
    pub axes: [AxisMapping; 3],
}

impl TransformSpatialAxes {
    /// Each input axis must appear exactly once.
    pub fn new(axes: [AxisMapping; 3]) -> ConvertResult<Self> {
        let mut used = [false; 3];
        for m in &axes {
            if m.source > 2 {
                return Err(TrajError::data(format!("axis source {} is not 0, 1 or 2", m.source)).into());
            }
            if used[m.source] {
                return Err(TrajError::data("axis mapping must use each of X, Y and Z once").into());
            }
            used[m.source] = true;
        }
        Ok(Self { axes })
    }

    pub fn parse(axes: [&str; 3]) -> ConvertResult<Self> {
        Self::new([axes[0].parse()?, axes[1].parse()?, axes[2].parse()?])
    }

    fn transform(&self, v: [f32; 3], signed: bool) -> [f32; 3] {
        self.axes.map(|m| {
            let x = v[m.source];
            if signed && m.negate { -x } else { x }
        })
    }
}

impl Filter for TransformSpatialAxes {
    fn name(&self) -> &'static str {
        "transform spatial axes"
    }

    fn apply(&self, mut data: TrajectoryData) -> ConvertResult<TrajectoryData> {
        if let Some(b) = data.meta_data.box_size {
            data.meta_data.box_size = Some(Vec3::from_array(self.transform(b.to_array(), false)));
        }
        let agents = &mut data.agent_data;
        let slots: Vec<_> = agents.occupied().collect();
        for (t, a) in slots {
            let p = agents.position(t, a).to_array();
            agents.set_position(t, a, Vec3::from_array(self.transform(p, true)));

            let item = agents.display_type_of(t, a).subpoint_item_len();
            for chunk in agents.subpoints_mut(t, a).chunks_exact_mut(item) {
                let moved = self.transform([chunk[0], chunk[1], chunk[2]], true);
                chunk[..3].copy_from_slice(&moved);
            }
        }
        Ok(data)
    }
}
