//! Frame encoding.
//!
//! [`FrameEncoder`] walks one `AgentData` frame at a time and appends the
//! flat records to a `Vec<f64>`.  When fiber points are enabled, a FIBER
//! agent's record is followed by one marker sphere per even-indexed XYZ
//! point.  Marker IDs are derived from the parent's ID and remembered for
//! the life of the encoder, so a marker keeps its ID in every frame.
//!
//! Values are `f64` so every unique ID in range is carried exactly.  The
//! binary writer narrows to `f32` when it writes.

use traj_agent::{AgentData, HashMap, HashSet, TypeIds};
use traj_core::constants::{FIBER_POINT_ID_STRIDE, FIBER_POINT_RADIUS};
use traj_core::{UniqueId, VizType};

use crate::layout::{fiber_marker_count, frame_len, frame_record_count};

// ── Marker IDs ────────────────────────────────────────────────────────────────

/// Unique-ID allocator for fiber-point markers.
///
/// A marker's raw ID is `100 * (parent + 1) + point`.  If that is taken it is
/// bumped by 100 until free.  The first choice for each raw ID sticks.
#[derive(Clone, Debug, Default)]
pub struct FiberPointIds {
    assigned: HashMap<i64, i64>,
    used:     HashSet<i64>,
}

impl FiberPointIds {
    /// An allocator that avoids every unique ID already present in `agents`.
    pub fn for_agents(agents: &AgentData) -> Self {
        Self {
            assigned: HashMap::default(),
            used:     agents.used_unique_ids().into_iter().map(|id| id.0).collect(),
        }
    }

    /// ID for the marker at `point` along fiber `parent`.
    pub fn id_for(&mut self, parent: UniqueId, point: usize) -> UniqueId {
        let raw = FIBER_POINT_ID_STRIDE * (parent.0 + 1) + point as i64;
        if let Some(&id) = self.assigned.get(&raw) {
            return UniqueId(id);
        }
        let mut id = raw;
        while self.used.contains(&id) {
            id += FIBER_POINT_ID_STRIDE;
        }
        self.assigned.insert(raw, id);
        self.used.insert(id);
        UniqueId(id)
    }

    /// Number of marker IDs handed out so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

// ── Encoding ──────────────────────────────────────────────────────────────────

/// One encoded frame.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedFrame {
    pub data:      Vec<f64>,
    /// Records in `data`, markers included.
    pub n_records: usize,
}

/// Append frame `t` of `agents` to `out` and return the number of records
/// written.
///
/// Without `markers` no fiber points are drawn, whatever
/// `agents.draw_fiber_points` says.
pub fn write_frame(
    agents: &AgentData,
    type_ids: &TypeIds,
    t: usize,
    mut markers: Option<&mut FiberPointIds>,
    out: &mut Vec<f64>,
) -> usize {
    let mut n_records = 0;
    for a in 0..agents.n_agents(t) {
        let type_id = type_ids.get(t, a);
        let position = agents.position(t, a);
        let rotation = agents.rotation(t, a);
        let subpoints = agents.subpoints(t, a);

        out.extend_from_slice(&[
            agents.viz_type(t, a).as_f64(),
            agents.unique_id(t, a).as_f64(),
            type_id.as_f64(),
            f64::from(position.x),
            f64::from(position.y),
            f64::from(position.z),
            f64::from(rotation.x),
            f64::from(rotation.y),
            f64::from(rotation.z),
            f64::from(agents.radius(t, a)),
            subpoints.len() as f64,
        ]);
        out.extend(subpoints.iter().map(|&v| f64::from(v)));
        n_records += 1;

        let Some(ids) = markers.as_deref_mut() else { continue };
        if fiber_marker_count(agents, t, a) == 0 {
            continue;
        }
        let parent = agents.unique_id(t, a);
        for (p, point) in subpoints.chunks_exact(3).enumerate().step_by(2) {
            out.extend_from_slice(&[
                VizType::Default.as_f64(),
                ids.id_for(parent, p).as_f64(),
                type_id.as_f64(),
                f64::from(point[0]),
                f64::from(point[1]),
                f64::from(point[2]),
                0.0,
                0.0,
                0.0,
                f64::from(FIBER_POINT_RADIUS),
                0.0,
            ]);
            n_records += 1;
        }
    }
    n_records
}

/// Stateful encoder over one trajectory.
pub struct FrameEncoder<'a> {
    agents:    &'a AgentData,
    type_ids:  &'a TypeIds,
    fiber_ids: Option<FiberPointIds>,
}

impl<'a> FrameEncoder<'a> {
    pub fn new(agents: &'a AgentData, type_ids: &'a TypeIds) -> Self {
        let fiber_ids = agents.draw_fiber_points.then(|| FiberPointIds::for_agents(agents));
        Self { agents, type_ids, fiber_ids }
    }

    #[inline]
    pub fn agents(&self) -> &'a AgentData {
        self.agents
    }

    #[inline]
    pub fn type_ids(&self) -> &'a TypeIds {
        self.type_ids
    }

    /// `true` when records depend on earlier frames through marker IDs.
    pub fn is_stateful(&self) -> bool {
        self.fiber_ids.is_some()
    }

    /// Exact encoded length of frame `t`.
    pub fn frame_len(&self, t: usize) -> usize {
        frame_len(self.agents, t)
    }

    /// Exact record count of frame `t`.
    pub fn record_count(&self, t: usize) -> usize {
        frame_record_count(self.agents, t)
    }

    /// Encode frame `t` into a buffer sized exactly.
    pub fn encode_frame(&mut self, t: usize) -> EncodedFrame {
        let mut data = Vec::with_capacity(self.frame_len(t));
        let n_records = self.encode_frame_into(t, &mut data);
        EncodedFrame { data, n_records }
    }

    /// Append frame `t` to `out`.  Returns the record count.
    pub fn encode_frame_into(&mut self, t: usize, out: &mut Vec<f64>) -> usize {
        let before = out.len();
        let n = write_frame(self.agents, self.type_ids, t, self.fiber_ids.as_mut(), out);
        debug_assert_eq!(out.len() - before, self.frame_len(t));
        n
    }

    /// Marker IDs handed out so far.
    pub fn fiber_ids(&self) -> Option<&FiberPointIds> {
        self.fiber_ids.as_ref()
    }
}
