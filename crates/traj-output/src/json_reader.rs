//! JSON `.simularium` reader with trajectory-info version upgrades.
//!
//! | From | To | Change                                                       |
//! |------|----|--------------------------------------------------------------|
//! | v1   | v2 | `spatialUnitFactorMeters` becomes `spatialUnits`; `timeUnits` added as 1 s |
//! | v2   | v3 | only optional fields were added                              |
//!
//! Anything newer than the current version is refused.

use serde_json::{Map, Value, json};

use traj_core::constants::current_version;
use traj_core::{TrajError, UnitData};

use crate::document::{PlotDataBlock, SimulariumDocument, SpatialData, TrajectoryInfo};
use crate::{OutputError, OutputResult};

/// Parse a JSON `.simularium` document.
pub fn read_json_document(bytes: &[u8]) -> OutputResult<SimulariumDocument> {
    log::info!("Reading simularium JSON");
    let mut root: Map<String, Value> = serde_json::from_slice(bytes)?;
    let info = root
        .remove("trajectoryInfo")
        .ok_or_else(|| TrajError::MissingData("trajectoryInfo".into()))?;
    let spatial = root
        .remove("spatialData")
        .ok_or_else(|| TrajError::MissingData("spatialData".into()))?;
    Ok(SimulariumDocument {
        trajectory_info: parse_trajectory_info(info)?,
        spatial_data:    parse_spatial_data(spatial)?,
        plot_data:       root.remove("plotData").map(parse_plot_data).transpose()?.unwrap_or_default(),
    })
}

/// Upgrade a `trajectoryInfo` object to the current version and parse it.
pub fn parse_trajectory_info(mut value: Value) -> OutputResult<TrajectoryInfo> {
    let version = read_version(&value, "trajectoryInfo")?;
    if version > current_version::TRAJECTORY_INFO {
        return Err(TrajError::unsupported("trajectoryInfo version", version).into());
    }
    let obj = value
        .as_object_mut()
        .ok_or_else(|| TrajError::input("trajectoryInfo is not an object"))?;
    if version < 2 {
        upgrade_v1_to_v2(obj);
    }
    if version < 3 {
        obj.insert("version".into(), json!(3));
    }
    if version < current_version::TRAJECTORY_INFO {
        log::warn!(
            "updated trajectoryInfo v{version} -> v{}",
            current_version::TRAJECTORY_INFO
        );
    }
    Ok(serde_json::from_value(value)?)
}

fn upgrade_v1_to_v2(obj: &mut Map<String, Value>) {
    let factor = obj
        .remove("spatialUnitFactorMeters")
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let spatial = UnitData::new("m", factor);
    let time = UnitData::default_time();
    obj.insert("spatialUnits".into(), json!({ "magnitude": spatial.magnitude, "name": spatial.name }));
    obj.insert("timeUnits".into(), json!({ "magnitude": time.magnitude, "name": time.name }));
    obj.insert("version".into(), json!(2));
}

pub fn parse_spatial_data(value: Value) -> OutputResult<SpatialData> {
    let version = read_version(&value, "spatialData")?;
    if version > current_version::SPATIAL_DATA {
        return Err(TrajError::unsupported("spatialData version", version).into());
    }
    Ok(serde_json::from_value(value)?)
}

pub fn parse_plot_data(value: Value) -> OutputResult<PlotDataBlock> {
    let version = read_version(&value, "plotData")?;
    if version > current_version::PLOT_DATA {
        return Err(TrajError::unsupported("plotData version", version).into());
    }
    Ok(serde_json::from_value(value)?)
}

fn read_version(value: &Value, section: &str) -> OutputResult<u32> {
    value
        .get("version")
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| OutputError::Traj(TrajError::input(format!("{section} has no valid version"))))
}
