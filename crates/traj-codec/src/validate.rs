//! Pre-write checks.

use traj_agent::{AgentData, HashSet, TypeIds};
use traj_core::constants::{MAX_AGENT_ID, MIN_VALUES_PER_AGENT, buffer_index as bi};
use traj_core::{DisplayType, TrajError};

use crate::{CodecError, CodecResult, FrameEncoder};

/// Width of the values a frame is stored with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FramePrecision {
    /// JSON frames: every ID in range is exact.
    Double,
    /// Binary frames: IDs above 2^24 may round onto each other.
    Single,
}

/// Every unique ID must fit in an `i32`, and no frame may repeat one.
pub fn validate_ids(agents: &AgentData) -> CodecResult<()> {
    for (t, a) in agents.occupied() {
        let id = agents.unique_id(t, a).0;
        if id.abs() > MAX_AGENT_ID {
            return Err(CodecError::IdOutOfRange { id, frame: t });
        }
    }
    check_unique_ids_per_frame(agents)
}

/// No two occupied slots of one frame share a unique ID.
pub fn check_unique_ids_per_frame(agents: &AgentData) -> CodecResult<()> {
    for t in 0..agents.total_steps() {
        let mut seen = HashSet::default();
        for a in 0..agents.n_agents(t) {
            let id = agents.unique_id(t, a);
            if !seen.insert(id) {
                return Err(CodecError::DuplicateId { id: id.0, frame: t, index: a });
            }
        }
    }
    Ok(())
}

/// The same check on an encoded frame, so synthesized marker IDs are
/// covered too.  `index` in the error is the record's value offset.
pub fn check_frame_ids_unique<V>(frame: usize, data: &[V]) -> CodecResult<()>
where
    V: Copy + Into<f64>,
{
    let mut seen = HashSet::default();
    let mut offset = 0;
    while offset + MIN_VALUES_PER_AGENT <= data.len() {
        let id: f64 = data[offset + bi::UID].into();
        let nsp: f64 = data[offset + bi::NSP].into();
        if !seen.insert(id as i64) {
            return Err(CodecError::DuplicateId { id: id as i64, frame, index: offset + bi::UID });
        }
        offset += MIN_VALUES_PER_AGENT + nsp as usize;
    }
    Ok(())
}

/// Encode every frame and check its unique IDs as `precision` will store
/// them.  Catches marker IDs that collide with agents, and IDs that only
/// collide once rounded to `f32`.
pub fn check_encoded_ids(agents: &AgentData, type_ids: &TypeIds, precision: FramePrecision) -> CodecResult<()> {
    let mut encoder = FrameEncoder::new(agents, type_ids);
    let mut buf = Vec::new();
    let mut narrow = Vec::new();
    for t in 0..agents.total_steps() {
        buf.clear();
        encoder.encode_frame_into(t, &mut buf);
        match precision {
            FramePrecision::Double => check_frame_ids_unique(t, &buf)?,
            FramePrecision::Single => {
                narrow.clear();
                narrow.extend(buf.iter().map(|&v| v as f32));
                check_frame_ids_unique(t, &narrow)?;
            }
        }
    }
    Ok(())
}

/// Agents carry subpoints exactly when they are FIBER viz or displayed as
/// a sphere group.  The first mismatch is reported.
pub fn check_types_match_subpoints(agents: &AgentData) -> CodecResult<()> {
    for (t, a) in agents.occupied() {
        let has_subpoints = agents.n_subpoints(t, a) > 0;
        let viz = agents.viz_type(t, a);
        let display = agents.display_type_of(t, a);
        let wants_subpoints = viz.is_fiber() || display == DisplayType::SphereGroup;
        if has_subpoints != wants_subpoints {
            return Err(TrajError::data(format!(
                "agent at time {t}, index {a}: type {:?} {} subpoints but viz type is {viz:?} \
                 and display type is {}",
                agents.type_name(t, a),
                if has_subpoints { "has" } else { "does not have" },
                display.as_str(),
            ))
            .into());
        }
    }
    Ok(())
}
