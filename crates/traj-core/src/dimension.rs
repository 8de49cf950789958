//! Buffer shape descriptors.

use serde::{Deserialize, Serialize};

use crate::{TrajError, TrajResult};

/// Axis of an agent buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BufferAxis {
    Time,
    Agents,
    Subpoints,
}

impl TryFrom<usize> for BufferAxis {
    type Error = TrajError;
    fn try_from(n: usize) -> TrajResult<Self> {
        match n {
            0 => Ok(BufferAxis::Time),
            1 => Ok(BufferAxis::Agents),
            2 => Ok(BufferAxis::Subpoints),
            _ => Err(TrajError::data(format!("buffer axis {n} is not 0, 1 or 2"))),
        }
    }
}

impl std::fmt::Display for BufferAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BufferAxis::Time => "time",
            BufferAxis::Agents => "agents",
            BufferAxis::Subpoints => "subpoints",
        })
    }
}

/// Shape of a `timesteps × agents × subpoints` buffer.
///
/// `max_subpoints` counts floats, not points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DimensionData {
    pub total_steps:   usize,
    pub max_agents:    usize,
    pub max_subpoints: usize,
}

impl DimensionData {
    pub const fn new(total_steps: usize, max_agents: usize, max_subpoints: usize) -> Self {
        Self { total_steps, max_agents, max_subpoints }
    }

    /// Capacity along one axis.
    pub fn along(&self, axis: BufferAxis) -> usize {
        match axis {
            BufferAxis::Time => self.total_steps,
            BufferAxis::Agents => self.max_agents,
            BufferAxis::Subpoints => self.max_subpoints,
        }
    }

    /// Copy of `self` with `axis` increased by `by`.
    pub fn grown(&self, axis: BufferAxis, by: usize) -> Self {
        let mut out = *self;
        match axis {
            BufferAxis::Time => out.total_steps += by,
            BufferAxis::Agents => out.max_agents += by,
            BufferAxis::Subpoints => out.max_subpoints += by,
        }
        out
    }

    /// Shape of two buffers concatenated along `axis`.
    ///
    /// The concatenated axis is summed and the others take the larger of the
    /// two.  Concatenating agents requires both sides to cover the same
    /// timesteps.
    pub fn add(&self, other: &DimensionData, axis: BufferAxis) -> TrajResult<DimensionData> {
        match axis {
            BufferAxis::Time => Ok(DimensionData {
                total_steps:   self.total_steps + other.total_steps,
                max_agents:    self.max_agents.max(other.max_agents),
                max_subpoints: self.max_subpoints.max(other.max_subpoints),
            }),
            BufferAxis::Agents => {
                if self.total_steps != other.total_steps {
                    return Err(TrajError::data(format!(
                        "cannot concatenate agents over {} and {} timesteps",
                        self.total_steps, other.total_steps
                    )));
                }
                Ok(DimensionData {
                    total_steps:   self.total_steps,
                    max_agents:    self.max_agents + other.max_agents,
                    max_subpoints: self.max_subpoints.max(other.max_subpoints),
                })
            }
            BufferAxis::Subpoints => Ok(DimensionData {
                total_steps:   self.total_steps.max(other.total_steps),
                max_agents:    self.max_agents.max(other.max_agents),
                max_subpoints: self.max_subpoints + other.max_subpoints,
            }),
        }
    }

    /// Number of `(t, a)` slots.
    #[inline]
    pub fn agent_slots(&self) -> usize {
        self.total_steps * self.max_agents
    }

    /// Number of `(t, a, s)` slots.
    #[inline]
    pub fn subpoint_slots(&self) -> usize {
        self.agent_slots() * self.max_subpoints
    }
}

impl std::fmt::Display for DimensionData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} steps x {} agents x {} subpoints",
            self.total_steps, self.max_agents, self.max_subpoints
        )
    }
}
