//! `traj-output` — `.simularium` writers and readers.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                |
//! |-------------------|---------------------------------------------------------|
//! | [`writer`]        | `TrajectoryWriter` trait, shared preparation, file names |
//! | [`document`]      | Serde wire types of the three document sections         |
//! | [`json`]          | `JsonWriter` (in-memory and streaming)                  |
//! | [`binary_format`] | Block kinds and byte-size arithmetic                    |
//! | [`binary_writer`] | `BinaryWriter` with chunking under a byte budget        |
//! | [`binary_reader`] | Validating binary parser                                |
//! | [`json_reader`]   | JSON parser with trajectory-info version upgrades       |
//! | [`decode`]        | Document → `TrajectoryData`                             |
//! | [`error`]         | `OutputError`, `OutputResult`                           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Encode binary frames on the rayon pool when no fiber markers are drawn |
//! | `fx-hash`  | FxHash in the agent and codec crates                        |

pub mod binary_format;
pub mod binary_reader;
pub mod binary_writer;
pub mod decode;
pub mod document;
pub mod error;
pub mod json;
pub mod json_reader;
pub mod writer;


pub use binary_reader::{is_binary, read_binary_document, read_block_table};
pub use binary_writer::{BinaryWriter, ChunkPlan};
pub use decode::{from_document, load_simularium, read_simularium};
pub use document::{FrameData, Geometry, PlotDataBlock, SimulariumDocument, SpatialData, TrajectoryInfo, TypeEntry};
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use json_reader::read_json_document;
pub use writer::{SIMULARIUM_EXTENSION, TrajectoryWriter, output_file};
