//! Binary `.simularium` writer with chunking.
//!
//! Frames are split across several files when one would exceed
//! `max_bytes`.  Each chunk is a complete document with its own header,
//! trajectory info (with `totalSteps` set to the chunk's frame count) and
//! plot block.  Chunk frames keep their global frame numbers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, WriteBytesExt};

use traj_agent::TrajectoryData;
use traj_codec::{EncodedFrame, FrameEncoder, FramePrecision, frame_len};
use traj_core::constants::binary::{FILE_IDENTIFIER, MAX_BYTES, N_BLOCKS, VERSION};
use traj_core::constants::current_version;

use crate::binary_format::{
    BLOCK_HEADER_LEN, BlockKind, frame_bytes, header_len, json_block_len, spatial_prelude_len,
};
use crate::document::PlotDataBlock;
use crate::writer::{Prepared, TrajectoryWriter, output_file};
use crate::{OutputError, OutputResult};

/// Frames `start..end` of the trajectory, written as one file of `n_bytes`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChunkPlan {
    pub start:   usize,
    pub end:     usize,
    pub n_bytes: u64,
}

impl ChunkPlan {
    #[inline]
    pub fn n_frames(&self) -> usize {
        self.end - self.start
    }
}

/// Writes the binary flavor of `.simularium`.
#[derive(Copy, Clone, Debug)]
pub struct BinaryWriter {
    max_bytes: u64,
}

impl Default for BinaryWriter {
    fn default() -> Self {
        Self { max_bytes: MAX_BYTES }
    }
}

/// Byte counts that do not depend on which frames a chunk holds.
struct Sizing {
    frame_bytes:   Vec<usize>,
    /// Length of the trajectory-info JSON when `totalSteps` is 0.
    info_base_len: usize,
    plot_json:     Vec<u8>,
}

impl Sizing {
    /// Length of the trajectory-info JSON for a chunk of `n_frames`.
    fn info_len(&self, n_frames: usize) -> usize {
        self.info_base_len - 1 + decimal_digits(n_frames)
    }

    fn file_len(&self, n_frames: usize, frame_total: usize) -> u64 {
        (header_len(N_BLOCKS as usize)
            + json_block_len(self.info_len(n_frames))
            + spatial_prelude_len(n_frames)
            + frame_total
            + json_block_len(self.plot_json.len())) as u64
    }
}

fn decimal_digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

fn to_u32(n: usize, what: &str) -> OutputResult<u32> {
    u32::try_from(n).map_err(|_| OutputError::format(format!("{what} of {n} does not fit in 32 bits")))
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper bound on the size of each output file.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    #[inline]
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    fn sizing(&self, prepared: &Prepared<'_>) -> OutputResult<Sizing> {
        let agents = prepared.agents();
        let frame_bytes = (0..agents.total_steps())
            .map(|t| frame_bytes(frame_len(agents, t)))
            .collect();
        Ok(Sizing {
            frame_bytes,
            info_base_len: serde_json::to_vec(&prepared.trajectory_info(0))?.len(),
            plot_json: serde_json::to_vec(&PlotDataBlock::new(prepared.data.plots.clone()))?,
        })
    }

    /// Greedy split of the frames into files no larger than `max_bytes`.
    fn plan(&self, sizing: &Sizing) -> OutputResult<Vec<ChunkPlan>> {
        let total = sizing.frame_bytes.len();
        if total == 0 {
            return Ok(vec![ChunkPlan { start: 0, end: 0, n_bytes: sizing.file_len(0, 0) }]);
        }
        let mut chunks = Vec::new();
        let mut start = 0;
        while start < total {
            let mut end = start;
            let mut frame_total = 0;
            while end < total {
                let next = frame_total + sizing.frame_bytes[end];
                if sizing.file_len(end - start + 1, next) > self.max_bytes {
                    break;
                }
                frame_total = next;
                end += 1;
            }
            if end == start {
                return Err(OutputError::FrameTooLarge {
                    frame:     start,
                    needed:    sizing.file_len(1, sizing.frame_bytes[start]),
                    max_bytes: self.max_bytes,
                });
            }
            chunks.push(ChunkPlan { start, end, n_bytes: sizing.file_len(end - start, frame_total) });
            start = end;
        }
        Ok(chunks)
    }

    /// How `data` would be split, without encoding it.
    pub fn plan_chunks(&self, data: &TrajectoryData) -> OutputResult<Vec<ChunkPlan>> {
        let prepared = Prepared::new(data, None)?;
        self.plan(&self.sizing(&prepared)?)
    }

    /// Encode every chunk and hand each to `f(index, n_chunks, bytes)`.
    pub fn for_each_chunk<F>(&self, data: &TrajectoryData, validate_ids: bool, mut f: F) -> OutputResult<()>
    where
        F: FnMut(usize, usize, &[u8]) -> OutputResult<()>,
    {
        log::info!("Converting trajectory data to binary");
        let prepared = Prepared::new(data, validate_ids.then_some(FramePrecision::Single))?;
        let sizing = self.sizing(&prepared)?;
        let chunks = self.plan(&sizing)?;
        let n_chunks = chunks.len();

        let agents = prepared.agents();
        let mut encoder = FrameEncoder::new(agents, &prepared.type_ids);
        let mut out = Vec::new();
        for (i, chunk) in chunks.iter().enumerate() {
            let frames = encode_frames(&mut encoder, chunk);
            let info = serde_json::to_vec(&prepared.trajectory_info(chunk.n_frames()))?;
            debug_assert_eq!(info.len(), sizing.info_len(chunk.n_frames()));

            out.clear();
            out.reserve(chunk.n_bytes as usize);
            write_chunk(&mut out, &info, &sizing.plot_json, chunk.start, agents.times(), &frames)?;
            debug_assert_eq!(out.len() as u64, chunk.n_bytes);
            f(i, n_chunks, &out)?;
        }
        Ok(())
    }

    /// Every chunk in memory.
    pub fn format_chunks(&self, data: &TrajectoryData) -> OutputResult<Vec<Vec<u8>>> {
        let mut chunks = Vec::new();
        self.for_each_chunk(data, false, |_, _, bytes| {
            chunks.push(bytes.to_vec());
            Ok(())
        })?;
        Ok(chunks)
    }
}

impl TrajectoryWriter for BinaryWriter {
    /// One file is written as `{output_path}.simularium`.  Several are
    /// written as `{output_path}_{i}.simularium`.
    fn save(&self, data: &TrajectoryData, output_path: &Path, validate_ids: bool) -> OutputResult<Vec<PathBuf>> {
        let mut paths = Vec::new();
        self.for_each_chunk(data, validate_ids, |i, n, bytes| {
            let suffix = if n == 1 { String::new() } else { format!("_{i}") };
            let path = output_file(output_path, &suffix);
            log::info!("Writing binary chunk {}/{n} to {}", i + 1, path.display());
            let mut file = BufWriter::new(File::create(&path)?);
            file.write_all(bytes)?;
            file.flush()?;
            paths.push(path);
            Ok(())
        })?;
        Ok(paths)
    }
}

// ── Encoding ──────────────────────────────────────────────────────────────────

fn encode_frames(encoder: &mut FrameEncoder<'_>, chunk: &ChunkPlan) -> Vec<EncodedFrame> {
    #[cfg(feature = "parallel")]
    {
        if !encoder.is_stateful() {
            use rayon::prelude::*;

            let agents = encoder.agents();
            let type_ids = encoder.type_ids();
            return (chunk.start..chunk.end)
                .into_par_iter()
                .map(|t| {
                    let mut data = Vec::with_capacity(frame_len(agents, t));
                    let n_records = traj_codec::write_frame(agents, type_ids, t, None, &mut data);
                    EncodedFrame { data, n_records }
                })
                .collect();
        }
    }

    (chunk.start..chunk.end).map(|t| encoder.encode_frame(t)).collect()
}

fn write_json_block(out: &mut Vec<u8>, kind: BlockKind, json: &[u8]) -> OutputResult<()> {
    let len = json_block_len(json.len());
    out.write_u32::<LittleEndian>(kind.code())?;
    out.write_u32::<LittleEndian>(to_u32(len, "block length")?)?;
    out.extend_from_slice(json);
    out.resize(out.len() + (len - BLOCK_HEADER_LEN - json.len()), 0);
    Ok(())
}

fn write_chunk(
    out: &mut Vec<u8>,
    info_json: &[u8],
    plot_json: &[u8],
    first_frame: usize,
    times: &[f32],
    frames: &[EncodedFrame],
) -> OutputResult<()> {
    let frame_lens: Vec<usize> = frames.iter().map(|f| frame_bytes(f.data.len())).collect();
    let blocks = [
        (BlockKind::TrajectoryInfoJson, json_block_len(info_json.len())),
        (BlockKind::SpatialDataBinary, spatial_prelude_len(frames.len()) + frame_lens.iter().sum::<usize>()),
        (BlockKind::PlotDataJson, json_block_len(plot_json.len())),
    ];

    // ── File header
    let header = header_len(blocks.len());
    out.extend_from_slice(FILE_IDENTIFIER);
    out.write_u32::<LittleEndian>(to_u32(header, "header length")?)?;
    out.write_u32::<LittleEndian>(VERSION)?;
    out.write_u32::<LittleEndian>(N_BLOCKS)?;
    let mut offset = header;
    for (kind, len) in blocks {
        out.write_u32::<LittleEndian>(to_u32(offset, "block offset")?)?;
        out.write_u32::<LittleEndian>(kind.code())?;
        out.write_u32::<LittleEndian>(to_u32(len, "block length")?)?;
        offset += len;
    }

    write_json_block(out, BlockKind::TrajectoryInfoJson, info_json)?;

    // ── Spatial block
    let (kind, spatial_len) = blocks[1];
    out.write_u32::<LittleEndian>(kind.code())?;
    out.write_u32::<LittleEndian>(to_u32(spatial_len, "block length")?)?;
    out.write_u32::<LittleEndian>(current_version::SPATIAL_DATA)?;
    out.write_u32::<LittleEndian>(to_u32(frames.len(), "frame count")?)?;
    let mut frame_offset = spatial_prelude_len(frames.len());
    for &len in &frame_lens {
        out.write_u32::<LittleEndian>(to_u32(frame_offset, "frame offset")?)?;
        out.write_u32::<LittleEndian>(to_u32(len, "frame length")?)?;
        frame_offset += len;
    }
    for (i, frame) in frames.iter().enumerate() {
        let index = first_frame + i;
        out.write_u32::<LittleEndian>(to_u32(index, "frame index")?)?;
        out.write_f32::<LittleEndian>(times[index])?;
        out.write_u32::<LittleEndian>(to_u32(frame.n_records, "record count")?)?;
        // Binary frames are single precision.
        for &v in &frame.data {
            out.write_f32::<LittleEndian>(v as f32)?;
        }
    }

    write_json_block(out, BlockKind::PlotDataJson, plot_json)?;
    Ok(())
}
