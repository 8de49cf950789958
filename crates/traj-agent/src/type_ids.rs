//! Assigning small integer IDs to display-type names.
//!
//! IDs are handed out in first-seen order over frames then agents, starting
//! at 0.  Empty names are padding: they keep the placeholder ID 0 and never
//! allocate one.  Names pinned in
//! [`AgentData::type_id_overrides`](crate::AgentData::type_id_overrides)
//! keep their pinned ID and the counter skips over it.

use std::collections::BTreeMap;

use traj_core::{TrajError, TrajResult, TypeId};

use crate::{AgentData, HashMap, HashSet};

// ── TypeMapping ───────────────────────────────────────────────────────────────

/// Bidirectional `name ↔ TypeId` table.  Append-only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeMapping {
    by_id:   BTreeMap<TypeId, String>,
    by_name: HashMap<String, TypeId>,
}

impl TypeMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` under `id`.  Fails if either side is already taken by a
    /// different partner.
    pub fn insert(&mut self, id: TypeId, name: impl Into<String>) -> TrajResult<()> {
        let name = name.into();
        match (self.by_id.get(&id), self.by_name.get(&name)) {
            (None, None) => {
                self.by_name.insert(name.clone(), id);
                self.by_id.insert(id, name);
                Ok(())
            }
            (Some(n), Some(i)) if *n == name && *i == id => Ok(()),
            _ => Err(TrajError::data(format!(
                "type mapping already uses ID {id} or name {name:?}"
            ))),
        }
    }

    #[inline]
    pub fn id_of(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    #[inline]
    pub fn name_of(&self, id: TypeId) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    /// Entries in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &str)> + '_ {
        self.by_id.iter().map(|(id, n)| (*id, n.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

// ── TypeIds ───────────────────────────────────────────────────────────────────

/// Per-slot type IDs, strided like the store they were taken from.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeIds {
    max_agents: usize,
    n_agents:   Vec<usize>,
    ids:        Vec<TypeId>,
}

impl TypeIds {
    /// Grid for frames of the given agent counts, all zero.
    pub fn zeroed(n_agents: &[usize]) -> Self {
        let max_agents = n_agents.iter().copied().max().unwrap_or(0);
        Self {
            max_agents,
            n_agents: n_agents.to_vec(),
            ids: vec![TypeId(0); max_agents * n_agents.len()],
        }
    }

    /// Grid from decoded per-frame ID lists.
    pub fn from_frames(frames: &[Vec<TypeId>]) -> Self {
        let n_agents: Vec<usize> = frames.iter().map(Vec::len).collect();
        let mut out = Self::zeroed(&n_agents);
        for (t, frame) in frames.iter().enumerate() {
            for (a, id) in frame.iter().enumerate() {
                out.set(t, a, *id);
            }
        }
        out
    }

    #[inline]
    pub fn get(&self, t: usize, a: usize) -> TypeId {
        self.ids[t * self.max_agents + a]
    }

    #[inline]
    pub fn set(&mut self, t: usize, a: usize, id: TypeId) {
        self.ids[t * self.max_agents + a] = id;
    }

    /// Occupied IDs of frame `t`.
    pub fn frame(&self, t: usize) -> &[TypeId] {
        let start = t * self.max_agents;
        &self.ids[start..start + self.n_agents[t]]
    }

    #[inline]
    pub fn total_steps(&self) -> usize {
        self.n_agents.len()
    }
}

// ── Assignment ────────────────────────────────────────────────────────────────

/// Assign type IDs to every occupied slot and build the mapping.
///
/// Pure on its input: calling it twice on the same data gives the same
/// result.
pub fn get_type_ids_and_mapping(agents: &AgentData) -> TrajResult<(TypeIds, TypeMapping)> {
    let mut mapping = TypeMapping::new();
    for (name, id) in &agents.type_id_overrides {
        mapping.insert(*id, name.clone())?;
    }
    let reserved: HashSet<TypeId> = agents.type_id_overrides.values().copied().collect();

    let mut ids = TypeIds::zeroed(agents.n_agents_per_frame());
    let mut next = 0u32;
    for (t, a) in agents.occupied() {
        let name = agents.type_name(t, a);
        if name.is_empty() {
            continue;
        }
        let id = match mapping.id_of(name) {
            Some(id) => id,
            None => {
                while reserved.contains(&TypeId(next)) {
                    next += 1;
                }
                let id = TypeId(next);
                next += 1;
                mapping.insert(id, name)?;
                id
            }
        };
        ids.set(t, a, id);
    }
    Ok((ids, mapping))
}

/// Map IDs back to names.  Every ID must be in `mapping`.
pub fn get_type_names(type_ids: &TypeIds, mapping: &TypeMapping) -> TrajResult<Vec<Vec<String>>> {
    (0..type_ids.total_steps())
        .map(|t| {
            type_ids
                .frame(t)
                .iter()
                .map(|id| {
                    mapping.name_of(*id).map(str::to_owned).ok_or_else(|| {
                        TrajError::data(format!("type ID {id} in frame {t} is not in the type mapping"))
                    })
                })
                .collect()
        })
        .collect()
}
