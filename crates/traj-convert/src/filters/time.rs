use traj_agent::TrajectoryData;
use traj_core::TrajError;

use super::{Filter, empty_like};
use crate::ConvertResult;

/// Keep frames 0, n, 2n…
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EveryNthTimestep {
    pub n: usize,
}

impl EveryNthTimestep {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Filter for EveryNthTimestep {
    fn name(&self) -> &'static str {
        "every nth timestep"
    }

    /// `n` below 2 would keep every frame and is refused.
    fn apply(&self, mut data: TrajectoryData) -> ConvertResult<TrajectoryData> {
        if self.n < 2 {
            return Err(TrajError::data(format!("every nth timestep needs n >= 2, got {}", self.n)).into());
        }
        let src = &data.agent_data;
        let mut out = empty_like(src, src.total_steps().div_ceil(self.n));
        for (i, t) in (0..src.total_steps()).step_by(self.n).enumerate() {
            out.set_time(i, src.time(t));
            for a in 0..src.n_agents(t) {
                out.push_agent(i, src.agent(t, a));
            }
        }
        log::debug!("kept {} of {} timesteps", out.total_steps(), src.total_steps());
        data.agent_data = out;
        Ok(data)
    }
}

/// Multiply every frame time.  Units are left alone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MultiplyTime {
    pub multiplier: f32,
}

impl MultiplyTime {
    pub fn new(multiplier: f32) -> Self {
        Self { multiplier }
    }
}

impl Filter for MultiplyTime {
    fn name(&self) -> &'static str {
        "multiply time"
    }

    fn apply(&self, mut data: TrajectoryData) -> ConvertResult<TrajectoryData> {
        let agents = &mut data.agent_data;
        for t in 0..agents.total_steps() {
            let time = agents.time(t);
            agents.set_time(t, time * self.multiplier);
        }
        Ok(data)
    }
}
