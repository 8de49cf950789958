//! Binary `.simularium` reader.
//!
//! Nothing in the file is trusted: the identifier and version must match
//! exactly, every block must lie inside the file and agree with its entry in
//! the header table, and every frame must lie inside its block and hold the
//! number of records its header declares.

use byteorder::{ByteOrder, LittleEndian};
use serde_json::Value;

use traj_codec::count_records;
use traj_core::TrajError;
use traj_core::constants::binary::{BYTES_PER_VALUE, FILE_IDENTIFIER, FRAME_HEADER_N_VALUES, VERSION};
use traj_core::constants::current_version;

use crate::binary_format::{BLOCK_HEADER_LEN, BlockInfo, BlockKind, header_len, spatial_prelude_len};
use crate::document::{FrameData, SimulariumDocument, SpatialData};
use crate::json_reader::{parse_plot_data, parse_spatial_data, parse_trajectory_info};
use crate::{OutputError, OutputResult};

/// `true` if `bytes` starts with the binary file identifier.
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes.starts_with(FILE_IDENTIFIER)
}

/// Bounds-checked little-endian `u32` at byte `at`.
fn u32_at(bytes: &[u8], at: usize) -> OutputResult<u32> {
    bytes
        .get(at..at + BYTES_PER_VALUE)
        .map(LittleEndian::read_u32)
        .ok_or_else(|| OutputError::format(format!("value at byte {at} is past the end of the data")))
}

/// Parse the header's block table.
pub fn read_block_table(bytes: &[u8]) -> OutputResult<Vec<BlockInfo>> {
    if !is_binary(bytes) {
        return Err(OutputError::format("missing SIMULARIUMBINARY identifier"));
    }
    let base = FILE_IDENTIFIER.len();
    let header_length = u32_at(bytes, base)? as usize;
    let version = u32_at(bytes, base + 4)?;
    if version != VERSION {
        return Err(TrajError::unsupported("binary version", version).into());
    }
    let n_blocks = u32_at(bytes, base + 8)? as usize;
    if header_length != header_len(n_blocks) || header_length > bytes.len() {
        return Err(OutputError::format(format!(
            "header length {header_length} does not match {n_blocks} blocks in {} bytes",
            bytes.len()
        )));
    }

    (0..n_blocks)
        .map(|i| {
            let row = base + 12 + 12 * i;
            Ok(BlockInfo {
                offset:     u32_at(bytes, row)?,
                block_type: u32_at(bytes, row + 4)?,
                length:     u32_at(bytes, row + 8)?,
            })
        })
        .collect()
}

/// The bytes of block `i`, header included, after checking them against
/// the table entry.
fn block_bytes<'a>(bytes: &'a [u8], i: usize, info: &BlockInfo) -> OutputResult<&'a [u8]> {
    let start = info.offset as usize;
    let len = info.length as usize;
    if start % BYTES_PER_VALUE != 0 || len < BLOCK_HEADER_LEN || start + len > bytes.len() {
        return Err(OutputError::format(format!(
            "block #{i} at {start} with length {len} does not fit in {} bytes",
            bytes.len()
        )));
    }
    let block = &bytes[start..start + len];
    let block_type = u32_at(block, 0)?;
    if block_type != info.block_type {
        return Err(OutputError::format(format!(
            "block #{i} has type {block_type} but the header says {}",
            info.block_type
        )));
    }
    let block_len = u32_at(block, 4)?;
    if block_len != info.length {
        return Err(OutputError::format(format!(
            "block #{i} has length {block_len} but the header says {}",
            info.length
        )));
    }
    Ok(block)
}

fn json_payload(block: &[u8]) -> OutputResult<Value> {
    let payload = &block[BLOCK_HEADER_LEN..];
    let end = payload.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);
    Ok(serde_json::from_slice(&payload[..end])?)
}

/// Parse a binary spatial-data block.
fn spatial_payload(block: &[u8]) -> OutputResult<SpatialData> {
    let version = u32_at(block, BLOCK_HEADER_LEN)?;
    if version > current_version::SPATIAL_DATA {
        return Err(TrajError::unsupported("spatialData version", version).into());
    }
    let n_frames = u32_at(block, BLOCK_HEADER_LEN + 4)? as usize;
    if spatial_prelude_len(n_frames) > block.len() {
        return Err(OutputError::format(format!(
            "{n_frames} frame entries do not fit in a {}-byte spatial block",
            block.len()
        )));
    }

    let frame_header = FRAME_HEADER_N_VALUES * BYTES_PER_VALUE;
    let mut bundle = Vec::with_capacity(n_frames);
    for i in 0..n_frames {
        let row = BLOCK_HEADER_LEN + 8 + 8 * i;
        let offset = u32_at(block, row)? as usize;
        let length = u32_at(block, row + 4)? as usize;
        if length < frame_header || length % BYTES_PER_VALUE != 0 || offset + length > block.len() {
            return Err(OutputError::format(format!(
                "frame #{i} at {offset} with length {length} does not fit in the spatial block"
            )));
        }
        let frame = &block[offset..offset + length];
        let frame_number = u32_at(frame, 0)? as usize;
        let time = LittleEndian::read_f32(&frame[4..8]);
        let n_records = u32_at(frame, 8)? as usize;

        let mut values = vec![0.0f32; (length - frame_header) / BYTES_PER_VALUE];
        LittleEndian::read_f32_into(&frame[frame_header..], &mut values);
        let data: Vec<f64> = values.into_iter().map(f64::from).collect();
        let found = count_records(&data)?;
        if found != n_records {
            return Err(OutputError::format(format!(
                "frame #{i} declares {n_records} agents but holds {found}"
            )));
        }
        bundle.push(FrameData { frame_number, time, data });
    }

    let start = bundle.first().map_or(0, |f| f.frame_number);
    Ok(SpatialData { version, ..SpatialData::new(start, bundle) })
}

/// Parse a binary `.simularium` file into the same document the JSON
/// reader produces.
pub fn read_binary_document(bytes: &[u8]) -> OutputResult<SimulariumDocument> {
    log::info!("Reading simularium binary");
    let table = read_block_table(bytes)?;

    let mut trajectory_info = None;
    let mut spatial_data = None;
    let mut plot_data = None;
    for (i, info) in table.iter().enumerate() {
        let block = block_bytes(bytes, i, info)?;
        let kind = BlockKind::try_from(info.block_type)?;
        let replaced = match kind {
            BlockKind::TrajectoryInfoJson => {
                trajectory_info.replace(parse_trajectory_info(json_payload(block)?)?).is_some()
            }
            BlockKind::SpatialDataJson => {
                spatial_data.replace(parse_spatial_data(json_payload(block)?)?).is_some()
            }
            BlockKind::SpatialDataBinary => spatial_data.replace(spatial_payload(block)?).is_some(),
            BlockKind::PlotDataJson => plot_data.replace(parse_plot_data(json_payload(block)?)?).is_some(),
        };
        if replaced {
            log::warn!("more than one {} block found, only using the last one", kind.section());
        }
    }

    Ok(SimulariumDocument {
        trajectory_info: trajectory_info.ok_or_else(|| TrajError::MissingData("trajectoryInfo block".into()))?,
        spatial_data:    spatial_data.ok_or_else(|| TrajError::MissingData("spatialData block".into()))?,
        plot_data:       plot_data.unwrap_or_default(),
    })
}
