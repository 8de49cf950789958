//! `traj-codec` — the flat frame buffer shared by both wire formats.
//!
//! A frame is a run of agent records laid end to end:
//!
//! ```text
//! [viz, uid, tid, x, y, z, rx, ry, rz, r, nsp, sp_0 .. sp_{nsp-1}]  [next record] ...
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`layout`]   | Exact buffer sizing, fiber-marker counts                   |
//! | [`encode`]   | `FrameEncoder`, `FiberPointIds`                            |
//! | [`decode`]   | `decode_frame`, `count_records`, `buffer_dimensions`       |
//! | [`validate`] | Unique-ID range and per-frame uniqueness, subpoint checks  |
//! |              | (on the store and on encoded frames)                       |
//! | [`error`]    | `CodecError`, `CodecResult`                                |

pub mod decode;
pub mod encode;
pub mod error;
pub mod layout;
pub mod validate;


pub use decode::{DecodedAgent, buffer_dimensions, count_records, decode_frame};
pub use encode::{EncodedFrame, FiberPointIds, FrameEncoder, write_frame};
pub use error::{CodecError, CodecResult};
pub use layout::{fiber_marker_count, frame_len, frame_record_count};
pub use validate::{
    FramePrecision, check_encoded_ids, check_frame_ids_unique, check_types_match_subpoints, check_unique_ids_per_frame,
    validate_ids,
};
