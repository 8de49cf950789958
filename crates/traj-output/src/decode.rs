//! Turning a parsed document back into a [`TrajectoryData`].

use std::path::Path;

use traj_agent::{AgentData, AgentRecord, HashMap, TrajectoryData, get_type_ids_and_mapping};
use traj_codec::{buffer_dimensions, decode_frame};
use traj_core::{DisplayData, MetaData, TrajError, TypeId};

use crate::binary_reader::{is_binary, read_binary_document};
use crate::document::SimulariumDocument;
use crate::json_reader::read_json_document;
use crate::OutputResult;

/// Parse either flavor of `.simularium`, sniffing the binary identifier.
pub fn read_simularium(bytes: &[u8]) -> OutputResult<SimulariumDocument> {
    if is_binary(bytes) {
        read_binary_document(bytes)
    } else {
        read_json_document(bytes)
    }
}

/// Read and decode a `.simularium` file.
pub fn load_simularium(path: &Path) -> OutputResult<TrajectoryData> {
    let bytes = std::fs::read(path)?;
    from_document(&read_simularium(&bytes)?)
}

/// Rebuild the agent store, display data, units and plots of `doc`.
///
/// Fiber markers written by an earlier export come back as ordinary point
/// agents.  If first-seen numbering of the decoded names would not
/// reproduce the document's type IDs, the document's IDs are pinned.
pub fn from_document(doc: &SimulariumDocument) -> OutputResult<TrajectoryData> {
    let info = &doc.trajectory_info;

    let mut names: HashMap<TypeId, &str> = HashMap::default();
    for (key, entry) in &info.type_mapping {
        let id = key
            .parse::<u32>()
            .map_err(|_| TrajError::input(format!("type mapping key {key:?} is not a type ID")))?;
        names.insert(TypeId(id), entry.name.as_str());
    }

    let frames = &doc.spatial_data.bundle_data;
    let dims = buffer_dimensions(frames.iter().map(|f| f.data.as_slice()))?;
    let mut agents = AgentData::from_dimensions(dims);
    for (t, frame) in frames.iter().enumerate() {
        agents.set_time(t, frame.time);
        for decoded in decode_frame(&frame.data)? {
            let name = names.get(&decoded.type_id).ok_or_else(|| {
                TrajError::data(format!(
                    "type ID {} in frame {} is not in the type mapping",
                    decoded.type_id, frame.frame_number
                ))
            })?;
            agents.push_agent(t, AgentRecord {
                viz_type:  decoded.viz_type,
                unique_id: decoded.unique_id,
                type_name: (*name).to_owned(),
                position:  decoded.position,
                rotation:  decoded.rotation,
                radius:    decoded.radius,
                subpoints: decoded.subpoints,
            });
        }
    }

    for entry in info.type_mapping.values() {
        let geometry = &entry.geometry;
        let mut display = DisplayData::new(entry.name.clone()).with_display_type(geometry.display_type);
        if let Some(url) = geometry.url.as_deref().filter(|u| !u.is_empty()) {
            display = display.with_url(url);
        }
        if let Some(color) = geometry.color.as_deref().filter(|c| !c.is_empty()) {
            display = display.with_color(color)?;
        }
        agents.display_data.insert(entry.name.clone(), display);
    }

    let (_, first_seen) = get_type_ids_and_mapping(&agents)?;
    let same_ids = first_seen.len() == names.len()
        && first_seen.iter().all(|(id, name)| names.get(&id) == Some(&name));
    if !same_ids {
        log::debug!("pinning {} type IDs from the document", names.len());
        agents.type_id_overrides = names.iter().map(|(id, name)| ((*name).to_owned(), *id)).collect();
    }

    let meta_data = MetaData {
        box_size:         Some(info.size),
        camera_defaults:  info.camera_default.clone(),
        trajectory_title: info.trajectory_title.clone(),
        model_meta_data:  info.model_info.clone(),
        ..MetaData::default()
    };
    let mut data = TrajectoryData::new(agents)
        .with_meta_data(meta_data)
        .with_time_units(info.time_units.clone())
        .with_spatial_units(info.spatial_units.clone());
    data.plots = doc.plot_data.data.clone();
    log::info!("decoded {} frames", data.agent_data.total_steps());
    Ok(data)
}
