//! CSV table loader.
//!
//! # CSV format
//!
//! One row per agent per timestep.  Rotation columns are optional.
//!
//! ```csv
//! time,unique_id,type,positionX,positionY,positionZ,radius
//! 0.0,0,A,1.0,2.0,3.0,0.5
//! 0.0,1,B,4.0,5.0,6.0,1.0
//! 0.1,0,A,1.5,2.0,3.0,0.5
//! ```
//!
//! Frames are created in the order their time value first appears; rows of
//! one frame need not be contiguous.  Every agent is a point agent.

use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use traj_core::{DimensionData, TrajError, TrajResult, Vec3};

use crate::{AgentData, AgentRecord};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct AgentRow {
    time:      f32,
    unique_id: i64,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(rename = "positionX")]
    x: f32,
    #[serde(rename = "positionY")]
    y: f32,
    #[serde(rename = "positionZ")]
    z: f32,
    radius: f32,
    #[serde(rename = "rotationX", default)]
    rx: Option<f32>,
    #[serde(rename = "rotationY", default)]
    ry: Option<f32>,
    #[serde(rename = "rotationZ", default)]
    rz: Option<f32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load point agents from a CSV file.
pub fn load_agents_csv(path: &Path) -> TrajResult<AgentData> {
    let file = std::fs::File::open(path)?;
    load_agents_reader(file)
}

/// Like [`load_agents_csv`] but accepts any `Read` source.
pub fn load_agents_reader<R: Read>(reader: R) -> TrajResult<AgentData> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    // Time bits → frame index, in first-seen order.
    let mut frames: IndexMap<u32, Vec<AgentRecord>> = IndexMap::new();
    for (line, result) in csv_reader.deserialize::<AgentRow>().enumerate() {
        let row = result.map_err(|e| TrajError::input(format!("agent table row {}: {e}", line + 1)))?;
        if !row.time.is_finite() {
            return Err(TrajError::input(format!("agent table row {}: time is not finite", line + 1)));
        }
        let rotation = Vec3::new(
            row.rx.unwrap_or(0.0),
            row.ry.unwrap_or(0.0),
            row.rz.unwrap_or(0.0),
        );
        frames
            .entry(row.time.to_bits())
            .or_default()
            .push(
                AgentRecord::new(row.unique_id, row.type_name, Vec3::new(row.x, row.y, row.z), row.radius)
                    .with_rotation(rotation),
            );
    }

    let max_agents = frames.values().map(Vec::len).max().unwrap_or(0);
    let mut data = AgentData::from_dimensions(DimensionData::new(frames.len(), max_agents, 0));
    for (t, (bits, records)) in frames.into_iter().enumerate() {
        data.set_time(t, f32::from_bits(bits));
        for record in records {
            data.push_agent(t, record);
        }
    }
    log::debug!("loaded {} frames from agent table", data.total_steps());
    Ok(data)
}
