//! Byte layout of the binary container.
//!
//! ```text
//! header:  "SIMULARIUMBINARY" | header_length | version | n_blocks
//!          | n_blocks × (offset, type, length)
//! block:   type | length | payload, padded with NULs to 4 bytes
//!          (length counts the 8-byte block header and the padding)
//! spatial: version | n_frames | n_frames × (offset, length)
//!          | frames: frame_index | time | n_records | f32 values
//! ```
//!
//! Offsets in the header are from the start of the file.  Frame offsets in
//! the spatial block are from the start of the block, header included, and
//! frame lengths include the three-value frame header.  All values are
//! 4 bytes, little-endian.

use traj_core::TrajError;
use traj_core::constants::binary::{
    BLOCK_HEADER_N_VALUES, BYTES_PER_VALUE, FILE_IDENTIFIER, FRAME_HEADER_N_VALUES,
    HEADER_CONSTANT_N_VALUES, HEADER_N_VALUES_PER_BLOCK, block_type,
};

// ── Block kinds ───────────────────────────────────────────────────────────────

/// What a block holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Legacy: `spatialData` as JSON text.
    SpatialDataJson,
    TrajectoryInfoJson,
    PlotDataJson,
    SpatialDataBinary,
}

impl BlockKind {
    pub fn code(self) -> u32 {
        match self {
            BlockKind::SpatialDataJson => block_type::SPATIAL_DATA_JSON,
            BlockKind::TrajectoryInfoJson => block_type::TRAJ_INFO_JSON,
            BlockKind::PlotDataJson => block_type::PLOT_DATA_JSON,
            BlockKind::SpatialDataBinary => block_type::SPATIAL_DATA_BINARY,
        }
    }

    /// Document section this block fills.
    pub fn section(self) -> &'static str {
        match self {
            BlockKind::SpatialDataJson | BlockKind::SpatialDataBinary => "spatialData",
            BlockKind::TrajectoryInfoJson => "trajectoryInfo",
            BlockKind::PlotDataJson => "plotData",
        }
    }
}

impl TryFrom<u32> for BlockKind {
    type Error = TrajError;

    fn try_from(code: u32) -> Result<Self, TrajError> {
        match code {
            block_type::SPATIAL_DATA_JSON => Ok(BlockKind::SpatialDataJson),
            block_type::TRAJ_INFO_JSON => Ok(BlockKind::TrajectoryInfoJson),
            block_type::PLOT_DATA_JSON => Ok(BlockKind::PlotDataJson),
            block_type::SPATIAL_DATA_BINARY => Ok(BlockKind::SpatialDataBinary),
            other => Err(TrajError::unsupported("binary block type", other)),
        }
    }
}

/// One row of the header's block table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockInfo {
    pub offset:     u32,
    pub block_type: u32,
    pub length:     u32,
}

// ── Sizes ─────────────────────────────────────────────────────────────────────

/// `n` rounded up to a multiple of four.
#[inline]
pub fn pad4(n: usize) -> usize {
    n.div_ceil(BYTES_PER_VALUE) * BYTES_PER_VALUE
}

/// Bytes of the file header for `n_blocks` blocks.
pub fn header_len(n_blocks: usize) -> usize {
    FILE_IDENTIFIER.len()
        + BYTES_PER_VALUE * (HEADER_CONSTANT_N_VALUES + HEADER_N_VALUES_PER_BLOCK * n_blocks)
}

/// Bytes of the block header.
pub const BLOCK_HEADER_LEN: usize = BLOCK_HEADER_N_VALUES * BYTES_PER_VALUE;

/// Bytes of a JSON block whose text is `json_len` bytes.
pub fn json_block_len(json_len: usize) -> usize {
    BLOCK_HEADER_LEN + pad4(json_len)
}

/// Bytes of one encoded frame of `n_values` floats.
pub fn frame_bytes(n_values: usize) -> usize {
    BYTES_PER_VALUE * (FRAME_HEADER_N_VALUES + n_values)
}

/// Bytes of the spatial-block prelude for `n_frames` frames: block header,
/// version, count and the offset table.
pub fn spatial_prelude_len(n_frames: usize) -> usize {
    BLOCK_HEADER_LEN + BYTES_PER_VALUE * (2 + 2 * n_frames)
}
