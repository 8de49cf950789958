//! Capacity allocation and growth for [`AgentData`].
//!
//! Growth is in fixed increments ([`BUFFER_SIZE_INC`]), never doubling, so
//! reaching an index far past capacity takes several steps.  All steps are
//! summed first and the data is copied once.

use std::collections::BTreeMap;

use traj_core::constants::BUFFER_SIZE_INC;
use traj_core::{BufferAxis, DimensionData, Vec3, VizType, UniqueId};

use crate::{AgentData, TypeTable};

impl AgentData {
    /// Zero-filled store with exactly the requested capacity.
    pub fn from_dimensions(dims: DimensionData) -> Self {
        let slots = dims.agent_slots();
        Self {
            dims,
            n_timesteps:       dims.total_steps,
            times:             vec![0.0; dims.total_steps],
            n_agents:          vec![0; dims.total_steps],
            viz_types:         vec![VizType::Default; slots],
            unique_ids:        vec![UniqueId(0); slots],
            types:             TypeTable::with_frames(dims.total_steps),
            positions:         vec![Vec3::ZERO; slots],
            radii:             vec![0.0; slots],
            rotations:         vec![Vec3::ZERO; slots],
            n_subpoints:       vec![0; slots],
            subpoints:         vec![0.0; dims.subpoint_slots()],
            display_data:      BTreeMap::new(),
            draw_fiber_points: false,
            type_id_overrides: BTreeMap::new(),
        }
    }

    /// Allocated capacity, not occupancy.
    #[inline]
    pub fn get_dimensions(&self) -> DimensionData {
        self.dims
    }

    /// Capacity with the time axis cut to the frames in use.
    #[inline]
    pub fn occupied_dimensions(&self) -> DimensionData {
        DimensionData { total_steps: self.n_timesteps, ..self.dims }
    }

    /// Grow along `axis` until `next_index` is in range, using the default
    /// increments.
    pub fn check_increase_buffer_size(&mut self, next_index: usize, axis: BufferAxis) {
        self.check_increase_buffer_size_by(next_index, axis, BUFFER_SIZE_INC);
    }

    /// Grow along `axis` in steps of `increment.along(axis)` until
    /// `next_index` is in range.  Existing values are kept and new capacity is
    /// zero-filled.
    pub fn check_increase_buffer_size_by(
        &mut self,
        next_index: usize,
        axis: BufferAxis,
        increment: DimensionData,
    ) {
        let step = increment.along(axis).max(1);
        let mut target = self.dims;
        while next_index >= target.along(axis) {
            target = target.grown(axis, step);
        }
        if target != self.dims {
            log::debug!("growing agent buffers from {} to {}", self.dims, target);
            self.reshape(target);
        }
    }

    /// Release capacity beyond what the occupied slots use.
    pub fn shrink_to_fit(&mut self) {
        let target = DimensionData::new(
            self.n_timesteps,
            self.max_n_agents(),
            self.max_n_subpoints(),
        );
        if target != self.dims {
            self.reshape(target);
        }
    }

    /// Drop every frame from `n` on, releasing their capacity too.
    pub fn truncate_steps(&mut self, n: usize) {
        if n < self.dims.total_steps {
            self.reshape(DimensionData { total_steps: n, ..self.dims });
        }
    }

    /// Reallocate at `new`, copying whatever overlaps with the current shape.
    ///
    /// Agent counts and subpoint counts are clamped to the new capacity.
    pub(crate) fn reshape(&mut self, new: DimensionData) {
        let old = self.dims;

        self.times.resize(new.total_steps, 0.0);
        self.n_agents.resize(new.total_steps, 0);
        for n in &mut self.n_agents {
            *n = (*n).min(new.max_agents);
        }

        self.viz_types   = regrid(&self.viz_types, old, new, VizType::Default);
        self.unique_ids  = regrid(&self.unique_ids, old, new, UniqueId(0));
        self.positions   = regrid(&self.positions, old, new, Vec3::ZERO);
        self.radii       = regrid(&self.radii, old, new, 0.0);
        self.rotations   = regrid(&self.rotations, old, new, Vec3::ZERO);
        self.n_subpoints = regrid(&self.n_subpoints, old, new, 0);
        for n in &mut self.n_subpoints {
            *n = (*n).min(new.max_subpoints);
        }
        self.subpoints = regrid_subpoints(&self.subpoints, old, new);

        self.types.resize_frames(new.total_steps);
        for t in 0..new.total_steps {
            self.types.truncate_frame(t, new.max_agents);
        }

        self.n_timesteps = self.n_timesteps.min(new.total_steps);
        self.dims = new;
    }
}

/// Copy a `[t][a]` array into a new shape.
fn regrid<T: Copy>(src: &[T], old: DimensionData, new: DimensionData, fill: T) -> Vec<T> {
    if old.max_agents == new.max_agents {
        let mut out = src.to_vec();
        out.resize(new.agent_slots(), fill);
        return out;
    }
    let mut out = vec![fill; new.agent_slots()];
    let steps = old.total_steps.min(new.total_steps);
    let agents = old.max_agents.min(new.max_agents);
    for t in 0..steps {
        let s = t * old.max_agents;
        let d = t * new.max_agents;
        out[d..d + agents].copy_from_slice(&src[s..s + agents]);
    }
    out
}

/// Copy a `[t][a][s]` array into a new shape.
fn regrid_subpoints(src: &[f32], old: DimensionData, new: DimensionData) -> Vec<f32> {
    if old.max_agents == new.max_agents && old.max_subpoints == new.max_subpoints {
        let mut out = src.to_vec();
        out.resize(new.subpoint_slots(), 0.0);
        return out;
    }
    let mut out = vec![0.0; new.subpoint_slots()];
    let steps = old.total_steps.min(new.total_steps);
    let agents = old.max_agents.min(new.max_agents);
    let sps = old.max_subpoints.min(new.max_subpoints);
    if sps == 0 {
        return out;
    }
    for t in 0..steps {
        for a in 0..agents {
            let s = (t * old.max_agents + a) * old.max_subpoints;
            let d = (t * new.max_agents + a) * new.max_subpoints;
            out[d..d + sps].copy_from_slice(&src[s..s + sps]);
        }
    }
    out
}
