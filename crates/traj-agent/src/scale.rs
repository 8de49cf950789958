//! Normalizing the scene to the viewer's numeric range.
//!
//! # Extent rules
//!
//! | Geometry                  | Contributes                                   |
//! |---------------------------|-----------------------------------------------|
//! | every occupied agent      | `position ± radius`                           |
//! | fiber (and other) subpoints | each absolute XYZ triple                    |
//! | sphere-group subpoints    | `position + (x, y, z) ± r` per member         |
//!
//! Centering moves positions and absolute subpoints.  Sphere-group members
//! are relative to their agent and move with it for free.

use traj_core::constants::{DEGENERATE_RANGE_EPSILON, viewer_dimension_range};
use traj_core::{Bounds, DisplayType, Vec3};

use crate::AgentData;

/// Result of [`scale_agent_data`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleOutcome {
    /// Multiplier that was applied.
    pub scale_factor: f32,
    /// Offset applied before scaling, when centering was requested.
    pub translation: Option<Vec3>,
}

/// Componentwise extent of every occupied agent, including radii and
/// subpoints.  Empty bounds if there are no agents.
pub fn spatial_bounds(agents: &AgentData) -> Bounds {
    let mut bounds = Bounds::EMPTY;
    for (t, a) in agents.occupied() {
        let position = agents.position(t, a);
        bounds.include_sphere(position, agents.radius(t, a));

        let subpoints = agents.subpoints(t, a);
        if subpoints.is_empty() {
            continue;
        }
        match agents.display_type_of(t, a) {
            DisplayType::SphereGroup => {
                for member in subpoints.chunks_exact(4) {
                    let offset = Vec3::new(member[0], member[1], member[2]);
                    bounds.include_sphere(position + offset, member[3]);
                }
            }
            _ => {
                for p in subpoints.chunks_exact(3) {
                    bounds.include_point(Vec3::new(p[0], p[1], p[2]));
                }
            }
        }
    }
    bounds
}

/// Factor that brings a span of `range` into the viewer range.
pub fn scale_factor_for_range(range: f32) -> f32 {
    if range.abs() < DEGENERATE_RANGE_EPSILON || !range.is_finite() {
        1.0
    } else if range > viewer_dimension_range::MAX {
        viewer_dimension_range::MAX / range
    } else if range < viewer_dimension_range::MIN {
        viewer_dimension_range::MIN / range
    } else {
        1.0
    }
}

/// Scale factor for the current extent of `agents`.
pub fn get_scale_factor(agents: &AgentData) -> f32 {
    scale_factor_for_range(spatial_bounds(agents).max_span())
}

/// Optionally center, then scale `agents` in place.
///
/// With `fixed_scale` the extent is not measured for scaling and the given
/// factor is applied as is.  The caller owns propagating the factor into the
/// spatial units and metadata.
pub fn scale_agent_data(agents: &mut AgentData, fixed_scale: Option<f32>, center: bool) -> ScaleOutcome {
    let needs_bounds = center || fixed_scale.is_none();
    let bounds = if needs_bounds { spatial_bounds(agents) } else { Bounds::EMPTY };

    let translation = if center && !bounds.is_empty() {
        let offset = -bounds.center();
        let slots: Vec<_> = agents.occupied().collect();
        for (t, a) in slots {
            agents.translate_agent(t, a, offset);
        }
        Some(offset)
    } else {
        None
    };

    let scale_factor = fixed_scale.unwrap_or_else(|| scale_factor_for_range(bounds.max_span()));
    if scale_factor != 1.0 {
        agents.scale_spatial(scale_factor);
    }
    log::debug!("scaled agent data by {scale_factor}");
    ScaleOutcome { scale_factor, translation }
}

impl AgentData {
    /// Move agent `(t, a)` by `offset`, along with any absolute subpoints.
    pub fn translate_agent(&mut self, t: usize, a: usize, offset: Vec3) {
        let p = self.position(t, a);
        self.set_position(t, a, p + offset);
        if self.n_subpoints(t, a) == 0 || self.display_type_of(t, a) == DisplayType::SphereGroup {
            return;
        }
        let o = offset.to_array();
        for p in self.subpoints_mut(t, a).chunks_exact_mut(3) {
            for (v, d) in p.iter_mut().zip(o) {
                *v += d;
            }
        }
    }

    /// Multiply positions, radii and subpoints of every occupied slot.
    ///
    /// Rotations, times and IDs are untouched.
    pub fn scale_spatial(&mut self, factor: f32) {
        let slots: Vec<_> = self.occupied().collect();
        for (t, a) in slots {
            let i = self.slot(t, a);
            self.positions[i] *= factor;
            self.radii[i] *= factor;
            for v in self.subpoints_mut(t, a) {
                *v *= factor;
            }
        }
    }
}
