//! Concatenating two stores along the agent axis.

use traj_core::{BufferAxis, DimensionData, TrajResult, UniqueId};

use crate::{AgentData, HashMap, HashSet};

impl AgentData {
    /// Every unique ID in an occupied slot.
    pub fn used_unique_ids(&self) -> HashSet<UniqueId> {
        self.occupied().map(|(t, a)| self.unique_id(t, a)).collect()
    }

    /// `self` with `other`'s agents appended to each frame.
    ///
    /// Both stores must cover the same number of timesteps; times are taken
    /// from `self`.  An ID from `other` that is already used is moved to the
    /// smallest free ID at or above it, and that choice is kept for every
    /// later frame so the same entity keeps one ID.  Display data missing
    /// from `self` is copied over.
    pub fn append_agents(&self, other: &AgentData) -> TrajResult<AgentData> {
        let dims = self
            .occupied_dimensions()
            .add(&other.occupied_dimensions(), BufferAxis::Agents)?;

        let mut result = self.clone();
        let needed_agents = (0..dims.total_steps)
            .map(|t| self.n_agents(t) + other.n_agents(t))
            .max()
            .unwrap_or(0);
        let target = DimensionData {
            max_agents: needed_agents.max(self.get_dimensions().max_agents),
            ..dims
        };
        result.reshape(target);

        let mut used = self.used_unique_ids();
        let mut remap: HashMap<UniqueId, UniqueId> = HashMap::default();

        for t in 0..dims.total_steps {
            for a in 0..other.n_agents(t) {
                let mut record = other.agent(t, a);
                let raw = record.unique_id;
                let uid = *remap.entry(raw).or_insert_with(|| {
                    let mut uid = raw;
                    while used.contains(&uid) {
                        uid = UniqueId(uid.0 + 1);
                    }
                    used.insert(uid);
                    uid
                });
                record.unique_id = uid;
                result.push_agent(t, record);
            }
        }

        for (name, display) in &other.display_data {
            result.display_data.entry(name.clone()).or_insert_with(|| display.clone());
        }
        if remap.iter().any(|(raw, new)| raw != new) {
            log::debug!("remapped colliding unique IDs while appending agents");
        }
        Ok(result)
    }
}
