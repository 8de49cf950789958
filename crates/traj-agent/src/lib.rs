//! `traj-agent` — the agent trajectory store.
//!
//! Engine readers fill an [`AgentData`] one timestep at a time, growing its
//! capacity as they discover agents and subpoints.  Once filled it is scaled,
//! given type IDs, and wrapped in a [`TrajectoryData`] for the writers.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `AgentData` (capacity-strided numeric arrays), `AgentRecord` |
//! | [`types`]       | `TypeTable` (per-timestep type-name lists)                |
//! | [`buffer`]      | Capacity growth                                           |
//! | [`append`]      | `append_agents` with unique-ID remapping                  |
//! | [`type_ids`]    | `TypeMapping`, `TypeIds`, first-seen ID assignment        |
//! | [`scale`]       | Spatial extent, scale factor, centering                   |
//! | [`trajectory`]  | `TrajectoryData` envelope                                 |
//! | [`builder`]     | `AgentDataBuilder` (nested-list construction)             |
//! | [`table`]       | CSV table loading                                         |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash for the unique-ID sets and type-name lookups.       |

pub mod append;
pub mod buffer;
pub mod builder;
pub mod scale;
pub mod store;
pub mod table;
pub mod trajectory;
pub mod type_ids;
pub mod types;

#[cfg(test)]
mod tests;

pub use builder::AgentDataBuilder;
pub use scale::{ScaleOutcome, get_scale_factor, scale_agent_data, spatial_bounds};
pub use store::{AgentData, AgentRecord};
pub use table::{load_agents_csv, load_agents_reader};
pub use trajectory::TrajectoryData;
pub use type_ids::{TypeIds, TypeMapping, get_type_ids_and_mapping, get_type_names};
pub use types::TypeTable;

#[cfg(feature = "fx-hash")]
pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
pub type HashMap<K, V> = std::collections::HashMap<K, V>;

#[cfg(feature = "fx-hash")]
pub type HashSet<K> = rustc_hash::FxHashSet<K>;
#[cfg(not(feature = "fx-hash"))]
pub type HashSet<K> = std::collections::HashSet<K>;
