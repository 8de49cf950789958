//! Frame decoding.

use traj_core::constants::{MIN_VALUES_PER_AGENT, buffer_index as bi};
use traj_core::{DimensionData, TypeId, UniqueId, Vec3, VizType};

use crate::{CodecError, CodecResult};

/// One record read back from a frame buffer.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DecodedAgent {
    pub viz_type:  VizType,
    pub unique_id: UniqueId,
    pub type_id:   TypeId,
    pub position:  Vec3,
    pub rotation:  Vec3,
    pub radius:    f32,
    pub subpoints: Vec<f32>,
}

/// Length of the record starting at `offset`, checked against the buffer.
fn record_len(data: &[f64], offset: usize) -> CodecResult<usize> {
    let available = data.len() - offset;
    if available < MIN_VALUES_PER_AGENT {
        return Err(CodecError::Truncated { offset, needed: MIN_VALUES_PER_AGENT, available });
    }
    let value = data[offset + bi::NSP];
    if !(value >= 0.0 && value.fract() == 0.0) {
        return Err(CodecError::BadSubpointCount { offset, value });
    }
    let needed = MIN_VALUES_PER_AGENT + value as usize;
    if available < needed {
        return Err(CodecError::Truncated { offset, needed, available });
    }
    Ok(needed)
}

/// Walk the records of `data`, calling `f` with each one's offset and length.
///
/// A zero-filled tail is accepted and ignored, since older writers padded
/// their frames.
fn walk<F>(data: &[f64], mut f: F) -> CodecResult<()>
where
    F: FnMut(usize, usize) -> CodecResult<()>,
{
    let mut offset = 0;
    while offset < data.len() {
        if data[offset..].iter().all(|&v| v == 0.0) {
            log::debug!("ignoring {} padding values at end of frame", data.len() - offset);
            break;
        }
        let len = record_len(data, offset)?;
        f(offset, len)?;
        offset += len;
    }
    Ok(())
}

/// Decode every record in `data`.
pub fn decode_frame(data: &[f64]) -> CodecResult<Vec<DecodedAgent>> {
    let mut agents = Vec::new();
    walk(data, |offset, len| {
        let r = &data[offset..offset + len];
        agents.push(DecodedAgent {
            viz_type:  VizType::from_f64(r[bi::VIZ_TYPE])?,
            unique_id: UniqueId(r[bi::UID] as i64),
            type_id:   TypeId(r[bi::TID] as u32),
            position:  vec3_at(r, bi::POSX),
            rotation:  vec3_at(r, bi::ROTX),
            radius:    r[bi::R] as f32,
            subpoints: r[bi::SP..].iter().map(|&v| v as f32).collect(),
        });
        Ok(())
    })?;
    Ok(agents)
}

fn vec3_at(r: &[f64], i: usize) -> Vec3 {
    Vec3::new(r[i] as f32, r[i + 1] as f32, r[i + 2] as f32)
}

/// Number of records in `data` without materializing them.
pub fn count_records(data: &[f64]) -> CodecResult<usize> {
    let mut n = 0;
    walk(data, |_, _| {
        n += 1;
        Ok(())
    })?;
    Ok(n)
}

/// Capacity needed to hold `frames` in an `AgentData`: the frame count, the
/// largest record count, and the largest subpoint count.
pub fn buffer_dimensions<'a, I>(frames: I) -> CodecResult<DimensionData>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut dims = DimensionData::default();
    for data in frames {
        let mut n_agents = 0;
        walk(data, |_, len| {
            n_agents += 1;
            dims.max_subpoints = dims.max_subpoints.max(len - MIN_VALUES_PER_AGENT);
            Ok(())
        })?;
        dims.total_steps += 1;
        dims.max_agents = dims.max_agents.max(n_agents);
    }
    Ok(dims)
}
