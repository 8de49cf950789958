//! JSON `.simularium` writer.
//!
//! Two ways to fill `bundleData`:
//!
//! * **no subpoints**: one frame buffer of `11 * max_agents` values is
//!   allocated once and overwritten in place for every frame.  Only chosen
//!   when no occupied slot anywhere has subpoints.
//! * **subpoints**: each frame goes through the general
//!   [`FrameEncoder`](traj_codec::FrameEncoder), fiber markers included.
//!
//! [`JsonWriter::write`] streams the document frame by frame, so the full
//! `bundleData` is never held in memory.  Frame values are written as
//! `f64`, which keeps every unique ID exact.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use traj_agent::{AgentData, TrajectoryData, TypeIds};
use traj_codec::{FrameEncoder, FramePrecision};
use traj_core::Plot;
use traj_core::constants::{MIN_VALUES_PER_AGENT, SPATIAL_DATA_MSG_TYPE, current_version};

use crate::document::{FrameData, PlotDataBlock, SimulariumDocument, SpatialData};
use crate::writer::{Prepared, TrajectoryWriter, output_file};
use crate::OutputResult;

/// Writes the JSON flavor of `.simularium`.
#[derive(Copy, Clone, Debug, Default)]
pub struct JsonWriter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameRef<'a> {
    frame_number: usize,
    time:         f32,
    data:         &'a [f64],
}

impl JsonWriter {
    pub fn new() -> Self {
        Self
    }

    /// The whole document in memory.  IDs are not validated.
    pub fn format_trajectory_data(&self, data: &TrajectoryData) -> OutputResult<SimulariumDocument> {
        log::info!("Converting trajectory data to JSON");
        let prepared = Prepared::new(data, None)?;
        let total_steps = data.agent_data.total_steps();

        let mut bundle = Vec::with_capacity(total_steps);
        for_each_frame(&prepared, |frame_number, time, values| {
            bundle.push(FrameData { frame_number, time, data: values.to_vec() });
            Ok(())
        })?;

        Ok(SimulariumDocument {
            trajectory_info: prepared.trajectory_info(total_steps),
            spatial_data:    SpatialData::new(0, bundle),
            plot_data:       PlotDataBlock::new(data.plots.clone()),
        })
    }

    /// The document as a JSON string.
    pub fn to_json_string(&self, data: &TrajectoryData) -> OutputResult<String> {
        Ok(serde_json::to_string(&self.format_trajectory_data(data)?)?)
    }

    /// Stream the document to `out`.
    pub fn write<W: Write>(&self, data: &TrajectoryData, out: W, validate_ids: bool) -> OutputResult<()> {
        log::info!("Converting trajectory data to JSON");
        let prepared = Prepared::new(data, validate_ids.then_some(FramePrecision::Double))?;
        let total_steps = data.agent_data.total_steps();
        let mut out = out;

        out.write_all(b"{\"trajectoryInfo\":")?;
        serde_json::to_writer(&mut out, &prepared.trajectory_info(total_steps))?;
        write!(
            out,
            ",\"spatialData\":{{\"version\":{},\"msgType\":{},\"bundleStart\":0,\"bundleSize\":{},\"bundleData\":[",
            current_version::SPATIAL_DATA,
            SPATIAL_DATA_MSG_TYPE,
            total_steps,
        )?;
        for_each_frame(&prepared, |frame_number, time, values| {
            if frame_number > 0 {
                out.write_all(b",")?;
            }
            serde_json::to_writer(&mut out, &FrameRef { frame_number, time, data: values })?;
            Ok(())
        })?;
        out.write_all(b"]},\"plotData\":")?;
        serde_json::to_writer(&mut out, &PlotDataBlock::new(data.plots.clone()))?;
        out.write_all(b"}")?;
        out.flush()?;
        Ok(())
    }

    /// Write only the plots, to `{output_path}_plot-data.json`.
    pub fn save_plot_data(&self, plots: &[Plot], output_path: &Path) -> OutputResult<PathBuf> {
        let mut name = output_path.as_os_str().to_owned();
        name.push("_plot-data.json");
        let path = PathBuf::from(name);
        let file = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(file, &PlotDataBlock::new(plots.to_vec()))?;
        log::info!("saved plot data to {}", path.display());
        Ok(path)
    }
}

impl TrajectoryWriter for JsonWriter {
    fn save(&self, data: &TrajectoryData, output_path: &Path, validate_ids: bool) -> OutputResult<Vec<PathBuf>> {
        let path = output_file(output_path, "");
        let file = BufWriter::new(File::create(&path)?);
        log::info!("Writing JSON");
        self.write(data, file, validate_ids)?;
        log::info!("saved to {}", path.display());
        Ok(vec![path])
    }
}

// ── Frame generation ──────────────────────────────────────────────────────────

/// Call `f(frame_number, time, values)` for every frame, picking the path
/// by whether any agent has subpoints.
fn for_each_frame<F>(prepared: &Prepared<'_>, f: F) -> OutputResult<()>
where
    F: FnMut(usize, f32, &[f64]) -> OutputResult<()>,
{
    let agents = prepared.agents();
    if agents.has_subpoints() {
        frames_with_subpoints(agents, &prepared.type_ids, f)
    } else {
        frames_without_subpoints(agents, &prepared.type_ids, f)
    }
}

fn frames_with_subpoints<F>(agents: &AgentData, type_ids: &TypeIds, mut f: F) -> OutputResult<()>
where
    F: FnMut(usize, f32, &[f64]) -> OutputResult<()>,
{
    let mut encoder = FrameEncoder::new(agents, type_ids);
    let mut buf = Vec::new();
    for t in 0..agents.total_steps() {
        buf.clear();
        encoder.encode_frame_into(t, &mut buf);
        f(t, agents.time(t), &buf)?;
    }
    Ok(())
}

fn frames_without_subpoints<F>(agents: &AgentData, type_ids: &TypeIds, mut f: F) -> OutputResult<()>
where
    F: FnMut(usize, f32, &[f64]) -> OutputResult<()>,
{
    let mut buf = vec![0.0f64; MIN_VALUES_PER_AGENT * agents.max_n_agents()];
    for t in 0..agents.total_steps() {
        let n = agents.n_agents(t);
        let frame = &mut buf[..MIN_VALUES_PER_AGENT * n];
        for (a, record) in frame.chunks_exact_mut(MIN_VALUES_PER_AGENT).enumerate() {
            let p = agents.position(t, a);
            let r = agents.rotation(t, a);
            record.copy_from_slice(&[
                agents.viz_type(t, a).as_f64(),
                agents.unique_id(t, a).as_f64(),
                type_ids.get(t, a).as_f64(),
                f64::from(p.x),
                f64::from(p.y),
                f64::from(p.z),
                f64::from(r.x),
                f64::from(r.y),
                f64::from(r.z),
                f64::from(agents.radius(t, a)),
                0.0,
            ]);
        }
        f(t, agents.time(t), frame)?;
    }
    Ok(())
}
