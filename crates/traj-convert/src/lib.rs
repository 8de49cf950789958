//! `traj-convert` — the trajectory converter.
//!
//! An engine reader produces a [`TrajectoryData`](traj_agent::TrajectoryData);
//! the converter normalizes it (fiber display types, centering, scaling),
//! optionally derives filtered copies and plots, and saves `.simularium`
//! files through the `traj-output` writers.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`converter`] | `TrajectoryConverter`: save, JSON, plots, filtering     |
//! | [`builder`]   | `ConverterBuilder` (normalization on build)             |
//! | [`config`]    | `ConverterConfig`, `ScaleMode`, `SaveOptions`           |
//! | [`filters`]   | The `Filter` trait and the filter passes                |
//! | [`plots`]     | Plots computed from the trajectory                      |
//! | [`reader`]    | `TrajectoryReader`, `SourceEngine`, in-tree readers     |
//! | [`progress`]  | `ProgressObserver`, `RateLimitedProgress`               |
//! | [`error`]     | `ConvertError`, `ConvertResult`                         |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Encode binary frames on the rayon pool                    |
//! | `fx-hash`  | FxHash in the agent, codec and output crates              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use traj_convert::{SaveOptions, ScaleMode, TableInput, TableReader, TrajectoryConverter};
//!
//! let data = TableReader.read(TableInput::new(csv), &mut NoopProgress)?;
//! let mut converter = TrajectoryConverter::builder(data)
//!     .scale(ScaleMode::Auto)
//!     .build()?;
//! converter.add_number_of_agents_plot()?;
//! converter.save(Path::new("out/run"), &SaveOptions::binary())?;
//! ```

pub mod builder;
pub mod config;
pub mod converter;
pub mod error;
pub mod filters;
pub mod plots;
pub mod progress;
pub mod reader;

#[cfg(test)]
mod tests;

pub use builder::ConverterBuilder;
pub use config::{ConverterConfig, SaveOptions, ScaleMode};
pub use converter::TrajectoryConverter;
pub use error::{ConvertError, ConvertResult};
pub use filters::{
    AddAgents, AxisMapping, EveryNthAgent, EveryNthSubpoint, EveryNthTimestep, Filter, MultiplySpace, MultiplyTime,
    ReorderAgents, TransformSpatialAxes, Translate,
};
pub use plots::number_of_agents_plot;
pub use progress::{NoopProgress, ProgressObserver, RateLimitedProgress};
pub use reader::{SimulariumFileReader, SourceEngine, TableInput, TableReader, TrajectoryReader};
