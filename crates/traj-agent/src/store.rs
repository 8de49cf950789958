//! Core agent storage: `AgentData`.
//!
//! # Layout
//!
//! Every numeric array is allocated for the full capacity described by a
//! [`DimensionData`] and indexed with a fixed stride:
//!
//! ```text
//! slot(t, a)        = t * max_agents + a
//! subpoint(t, a, s) = slot(t, a) * max_subpoints + s
//! ```
//!
//! Slots past `n_agents[t]` are capacity, not data.  They read back as zero
//! and are never visited by iteration helpers.  Frames follow the same rule:
//! only the first [`total_steps`](AgentData::total_steps) are in use, however
//! far the time axis has grown.  Type names are kept apart in
//! a [`TypeTable`] whose frames are exactly `n_agents[t]` long.

use std::collections::BTreeMap;

use traj_core::{
    BufferAxis, DimensionData, DisplayData, DisplayType, TrajError, TrajResult, TypeId, UniqueId,
    Vec3, VizType,
};

use crate::TypeTable;

// ── AgentRecord ───────────────────────────────────────────────────────────────

/// One agent at one timestep, owned.
///
/// Used to push agents into an [`AgentData`] and to read them back out.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AgentRecord {
    pub viz_type:  VizType,
    pub unique_id: UniqueId,
    pub type_name: String,
    pub position:  Vec3,
    /// Euler angles in degrees.
    pub rotation:  Vec3,
    pub radius:    f32,
    /// Flattened subpoint values.  Empty for point agents.
    pub subpoints: Vec<f32>,
}

impl AgentRecord {
    /// A point agent with no rotation.
    pub fn new(unique_id: i64, type_name: impl Into<String>, position: Vec3, radius: f32) -> Self {
        Self {
            unique_id: UniqueId(unique_id),
            type_name: type_name.into(),
            position,
            radius,
            ..Self::default()
        }
    }

    /// A fiber through `points`, flattened as XYZ triples.
    pub fn fiber(unique_id: i64, type_name: impl Into<String>, points: Vec<f32>, radius: f32) -> Self {
        Self {
            viz_type: VizType::Fiber,
            unique_id: UniqueId(unique_id),
            type_name: type_name.into(),
            radius,
            subpoints: points,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_subpoints(mut self, subpoints: Vec<f32>) -> Self {
        self.subpoints = subpoints;
        self
    }
}

// ── AgentData ─────────────────────────────────────────────────────────────────

/// Per-timestep jagged collection of agents.
///
/// Created at a capacity with [`AgentData::from_dimensions`], filled in place
/// by an engine reader, then treated as read-only.  Writes past capacity go
/// through [`check_increase_buffer_size`](AgentData::check_increase_buffer_size).
#[derive(Clone, Debug)]
pub struct AgentData {
    pub(crate) dims:        DimensionData,
    /// Frames in use.  Starts at the constructed capacity and is raised by
    /// any write to a later frame.
    pub(crate) n_timesteps: usize,
    pub(crate) times:       Vec<f32>,
    pub(crate) n_agents:    Vec<usize>,
    pub(crate) viz_types:   Vec<VizType>,
    pub(crate) unique_ids:  Vec<UniqueId>,
    pub(crate) types:       TypeTable,
    pub(crate) positions:   Vec<Vec3>,
    pub(crate) radii:       Vec<f32>,
    pub(crate) rotations:   Vec<Vec3>,
    pub(crate) n_subpoints: Vec<usize>,
    pub(crate) subpoints:   Vec<f32>,

    /// Rendering metadata keyed by type name.
    pub display_data: BTreeMap<String, DisplayData>,

    /// Interleave marker spheres along fibers when encoding frames.
    pub draw_fiber_points: bool,

    /// Type IDs pinned to specific names.  Unpinned names are numbered in
    /// first-seen order around them.
    pub type_id_overrides: BTreeMap<String, TypeId>,
}

impl AgentData {
    // ── Indexing ──────────────────────────────────────────────────────────

    #[inline(always)]
    pub(crate) fn slot(&self, t: usize, a: usize) -> usize {
        debug_assert!(t < self.dims.total_steps && a < self.dims.max_agents);
        t * self.dims.max_agents + a
    }

    #[inline(always)]
    pub(crate) fn sp_offset(&self, t: usize, a: usize) -> usize {
        self.slot(t, a) * self.dims.max_subpoints
    }

    // ── Frames ────────────────────────────────────────────────────────────

    /// Number of frames in use.  Capacity is [`get_dimensions`](Self::get_dimensions).
    #[inline]
    pub fn total_steps(&self) -> usize {
        self.n_timesteps
    }

    /// Declare the first `n` frames in use, growing the time axis if needed.
    pub fn set_total_steps(&mut self, n: usize) {
        if n > 0 {
            self.check_increase_buffer_size(n - 1, BufferAxis::Time);
        }
        self.n_timesteps = n;
    }

    #[inline]
    fn touch_frame(&mut self, t: usize) {
        self.n_timesteps = self.n_timesteps.max(t + 1);
    }

    #[inline]
    pub fn times(&self) -> &[f32] {
        &self.times[..self.n_timesteps]
    }

    #[inline]
    pub fn time(&self, t: usize) -> f32 {
        self.times[t]
    }

    /// Set the time of frame `t`, allocating the frame if needed.
    pub fn set_time(&mut self, t: usize, time: f32) {
        self.check_increase_buffer_size(t, BufferAxis::Time);
        self.touch_frame(t);
        self.times[t] = time;
    }

    /// Agents present in frame `t`.
    #[inline]
    pub fn n_agents(&self, t: usize) -> usize {
        self.n_agents[t]
    }

    #[inline]
    pub fn n_agents_per_frame(&self) -> &[usize] {
        &self.n_agents[..self.n_timesteps]
    }

    /// Set the agent count of frame `t`.
    ///
    /// The type list is padded with empty names or truncated to match.
    pub fn set_n_agents(&mut self, t: usize, n: usize) -> TrajResult<()> {
        if t >= self.dims.total_steps || n > self.dims.max_agents {
            return Err(TrajError::data(format!(
                "frame {t} cannot hold {n} agents in a buffer of {}",
                self.dims
            )));
        }
        self.touch_frame(t);
        self.n_agents[t] = n;
        if self.types.frame_len(t) > n {
            self.types.truncate_frame(t, n);
        } else if n > 0 && self.types.frame_len(t) < n {
            self.types.set(t, n - 1, "");
        }
        Ok(())
    }

    /// Largest agent count over all frames.
    pub fn max_n_agents(&self) -> usize {
        self.n_agents_per_frame().iter().copied().max().unwrap_or(0)
    }

    /// Largest subpoint count over all occupied slots.
    pub fn max_n_subpoints(&self) -> usize {
        self.occupied().map(|(t, a)| self.n_subpoints(t, a)).max().unwrap_or(0)
    }

    /// `true` if any occupied slot has subpoints.
    pub fn has_subpoints(&self) -> bool {
        self.occupied().any(|(t, a)| self.n_subpoints(t, a) > 0)
    }

    /// Every occupied `(t, a)` in frame then agent order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.n_agents_per_frame()
            .iter()
            .enumerate()
            .flat_map(|(t, &n)| (0..n).map(move |a| (t, a)))
    }

    // ── Per-slot access ───────────────────────────────────────────────────

    #[inline]
    pub fn viz_type(&self, t: usize, a: usize) -> VizType {
        self.viz_types[self.slot(t, a)]
    }

    #[inline]
    pub fn set_viz_type(&mut self, t: usize, a: usize, v: VizType) {
        let i = self.slot(t, a);
        self.viz_types[i] = v;
    }

    #[inline]
    pub fn unique_id(&self, t: usize, a: usize) -> UniqueId {
        self.unique_ids[self.slot(t, a)]
    }

    #[inline]
    pub fn set_unique_id(&mut self, t: usize, a: usize, id: UniqueId) {
        let i = self.slot(t, a);
        self.unique_ids[i] = id;
    }

    /// Type name at `(t, a)`.  Empty for slots without a name.
    #[inline]
    pub fn type_name(&self, t: usize, a: usize) -> &str {
        self.types.get(t, a).unwrap_or("")
    }

    pub fn set_type_name(&mut self, t: usize, a: usize, name: &str) {
        self.types.set(t, a, name);
    }

    /// Type names of frame `t` in agent order.
    pub fn frame_types(&self, t: usize) -> impl Iterator<Item = &str> + '_ {
        self.types.frame(t)
    }

    #[inline]
    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    #[inline]
    pub fn position(&self, t: usize, a: usize) -> Vec3 {
        self.positions[self.slot(t, a)]
    }

    #[inline]
    pub fn set_position(&mut self, t: usize, a: usize, p: Vec3) {
        let i = self.slot(t, a);
        self.positions[i] = p;
    }

    #[inline]
    pub fn radius(&self, t: usize, a: usize) -> f32 {
        self.radii[self.slot(t, a)]
    }

    #[inline]
    pub fn set_radius(&mut self, t: usize, a: usize, r: f32) {
        let i = self.slot(t, a);
        self.radii[i] = r;
    }

    #[inline]
    pub fn rotation(&self, t: usize, a: usize) -> Vec3 {
        self.rotations[self.slot(t, a)]
    }

    #[inline]
    pub fn set_rotation(&mut self, t: usize, a: usize, r: Vec3) {
        let i = self.slot(t, a);
        self.rotations[i] = r;
    }

    /// Number of subpoint floats at `(t, a)`.
    #[inline]
    pub fn n_subpoints(&self, t: usize, a: usize) -> usize {
        self.n_subpoints[self.slot(t, a)]
    }

    /// The valid subpoint values at `(t, a)`.
    #[inline]
    pub fn subpoints(&self, t: usize, a: usize) -> &[f32] {
        let start = self.sp_offset(t, a);
        &self.subpoints[start..start + self.n_subpoints(t, a)]
    }

    /// Mutable view of the valid subpoint values at `(t, a)`.
    #[inline]
    pub fn subpoints_mut(&mut self, t: usize, a: usize) -> &mut [f32] {
        let start = self.sp_offset(t, a);
        let n = self.n_subpoints(t, a);
        &mut self.subpoints[start..start + n]
    }

    /// Replace the subpoints at `(t, a)`, growing subpoint capacity if needed.
    ///
    /// Values past the new count are zeroed.
    pub fn set_subpoints(&mut self, t: usize, a: usize, values: &[f32]) {
        if !values.is_empty() {
            self.check_increase_buffer_size(values.len() - 1, BufferAxis::Subpoints);
        }
        let start = self.sp_offset(t, a);
        let old = self.n_subpoints(t, a);
        self.subpoints[start..start + values.len()].copy_from_slice(values);
        if old > values.len() {
            self.subpoints[start + values.len()..start + old].fill(0.0);
        }
        let i = self.slot(t, a);
        self.n_subpoints[i] = values.len();
    }

    // ── Whole-agent access ────────────────────────────────────────────────

    /// Append an agent to frame `t`, growing any axis that is too small.
    ///
    /// Returns the agent's index within the frame.
    pub fn push_agent(&mut self, t: usize, record: AgentRecord) -> usize {
        self.check_increase_buffer_size(t, BufferAxis::Time);
        self.touch_frame(t);
        let a = self.n_agents[t];
        self.check_increase_buffer_size(a, BufferAxis::Agents);
        self.write_slot(t, a, &record);
        self.n_agents[t] = a + 1;
        self.types.truncate_frame(t, a);
        self.types.set(t, a, &record.type_name);
        a
    }

    /// Overwrite every numeric field of `(t, a)` from `record`.
    pub(crate) fn write_slot(&mut self, t: usize, a: usize, record: &AgentRecord) {
        let i = self.slot(t, a);
        self.viz_types[i] = record.viz_type;
        self.unique_ids[i] = record.unique_id;
        self.positions[i] = record.position;
        self.rotations[i] = record.rotation;
        self.radii[i] = record.radius;
        self.set_subpoints(t, a, &record.subpoints);
    }

    /// Owned copy of agent `a` in frame `t`.
    pub fn agent(&self, t: usize, a: usize) -> AgentRecord {
        AgentRecord {
            viz_type:  self.viz_type(t, a),
            unique_id: self.unique_id(t, a),
            type_name: self.type_name(t, a).to_owned(),
            position:  self.position(t, a),
            rotation:  self.rotation(t, a),
            radius:    self.radius(t, a),
            subpoints: self.subpoints(t, a).to_vec(),
        }
    }

    /// All agents of frame `t`.
    pub fn frame_agents(&self, t: usize) -> Vec<AgentRecord> {
        (0..self.n_agents(t)).map(|a| self.agent(t, a)).collect()
    }

    // ── Display ───────────────────────────────────────────────────────────

    /// Display type for `name`, defaulting by viz type when there is no
    /// display data.
    pub fn display_type_for(&self, name: &str, viz: VizType) -> DisplayType {
        self.display_data
            .get(name)
            .map_or_else(|| DisplayType::default_for(viz), |d| d.display_type_or(viz))
    }

    /// Effective display type of the agent at `(t, a)`.
    pub fn display_type_of(&self, t: usize, a: usize) -> DisplayType {
        self.display_type_for(self.type_name(t, a), self.viz_type(t, a))
    }
}

impl PartialEq for AgentData {
    /// Logical equality: occupied slots only, regardless of capacity.
    fn eq(&self, other: &Self) -> bool {
        self.times() == other.times()
            && self.n_agents_per_frame() == other.n_agents_per_frame()
            && self.display_data == other.display_data
            && self.draw_fiber_points == other.draw_fiber_points
            && self.type_id_overrides == other.type_id_overrides
            && self.occupied().all(|(t, a)| self.agent(t, a) == other.agent(t, a))
    }
}
