//! `traj-core` — foundational types for the trajectory conversion workspace.
//!
//! This crate is a dependency of every other `traj-*` crate.  It has no
//! `traj-*` dependencies and only `serde` and `thiserror` as external ones.
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`constants`]   | Buffer layout, viz tags, increments, versions, binary settings |
//! | [`ids`]         | `UniqueId`, `TypeId`                                       |
//! | [`geometry`]    | `Vec3`, `Bounds`                                           |
//! | [`dimension`]   | `DimensionData`, `BufferAxis`                              |
//! | [`display`]     | `VizType`, `DisplayType`, `DisplayData`                    |
//! | [`units`]       | `UnitData`, significant-figure rounding                    |
//! | [`meta`]        | `MetaData`, `CameraData`, `ModelMetaData`                  |
//! | [`plot`]        | Plot input data and the formatted `Plot` payload           |
//! | [`error`]       | `TrajError`, `TrajResult`                                  |

pub mod constants;
pub mod dimension;
pub mod display;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod meta;
pub mod plot;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dimension::{BufferAxis, DimensionData};
pub use display::{DisplayData, DisplayType, VizType};
pub use error::{TrajError, TrajResult};
pub use geometry::{Bounds, Vec3};
pub use ids::{TypeId, UniqueId};
pub use meta::{CameraData, MetaData, ModelMetaData};
pub use plot::{HistogramPlotData, Plot, PlotData, PlotKind, PlotLayout, PlotTrace, ScatterPlotData};
pub use units::UnitData;
