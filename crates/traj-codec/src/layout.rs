//! Exact frame sizing.
//!
//! The binary writer declares block lengths before writing them, so these
//! counts must agree with [`write_frame`](crate::write_frame) to the value.

use traj_agent::AgentData;
use traj_core::DisplayType;
use traj_core::constants::MIN_VALUES_PER_AGENT;

/// Marker spheres drawn along agent `(t, a)`: one for every other XYZ point,
/// and none unless fiber points are enabled and the agent displays as FIBER.
pub fn fiber_marker_count(agents: &AgentData, t: usize, a: usize) -> usize {
    let n_subpoints = agents.n_subpoints(t, a);
    if !agents.draw_fiber_points
        || n_subpoints == 0
        || agents.display_type_of(t, a) != DisplayType::Fiber
    {
        return 0;
    }
    (n_subpoints / 3).div_ceil(2)
}

/// Number of values `write_frame` produces for frame `t`.
pub fn frame_len(agents: &AgentData, t: usize) -> usize {
    (0..agents.n_agents(t))
        .map(|a| {
            MIN_VALUES_PER_AGENT
                + agents.n_subpoints(t, a)
                + MIN_VALUES_PER_AGENT * fiber_marker_count(agents, t, a)
        })
        .sum()
}

/// Number of records in frame `t`, markers included.
pub fn frame_record_count(agents: &AgentData, t: usize) -> usize {
    (0..agents.n_agents(t))
        .map(|a| 1 + fiber_marker_count(agents, t, a))
        .sum()
}
