//! Unit tests for traj-convert.

use traj_agent::{AgentData, AgentDataBuilder, AgentRecord, TrajectoryData};
use traj_core::{DimensionData, DisplayData, DisplayType, MetaData, Vec3};

use crate::{ConvertError, TrajectoryConverter};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn s(v: &[&str]) -> Vec<String> {
    v.iter().map(|x| x.to_string()).collect()
}

/// Three frames of three sphere agents, half a second apart.
fn three_agents() -> TrajectoryData {
    let agents = AgentDataBuilder::new(vec![0.0, 0.5, 1.0])
        .types(vec![s(&["C", "U", "C"]), s(&["U", "L", "S"]), s(&["O", "Y", "W"])])
        .unique_ids(vec![vec![0, 1, 2], vec![0, 1, 2], vec![0, 1, 2]])
        .positions(vec![
            vec![Vec3::new(4.896, -29.815, 40.772), Vec3::new(43.43, 48.004, -36.028), Vec3::new(29.849, -38.027, 2.466)],
            vec![Vec3::new(-43.371, -13.411, -17.313), Vec3::new(9.621, 13.477, -20.308), Vec3::new(41.41, -45.855, 49.062)],
            vec![Vec3::new(-24.914, -44.793, 13.322), Vec3::new(4.108, 43.864, 21.936), Vec3::new(-7.167, -13.064, 44.97)],
        ])
        .radii(vec![vec![8.386, 6.185, 6.614], vec![5.263, 6.692, 9.88], vec![8.91, 9.013, 8.398]])
        .build()
        .unwrap();
    TrajectoryData::new(agents)
}

/// One frame: a fiber of three points and a sphere, in a box of 10.
fn fiber_and_sphere() -> TrajectoryData {
    let mut agents = AgentData::from_dimensions(DimensionData::new(1, 2, 9));
    agents.set_time(0, 0.0);
    agents.push_agent(0, AgentRecord::fiber(0, "actin", vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 0.5));
    agents.push_agent(0, AgentRecord::new(1, "ball", Vec3::new(1.0, 2.0, 3.0), 1.0));
    TrajectoryData::new(agents).with_meta_data(MetaData::default().with_box_size(Vec3::splat(10.0)))
}

const TABLE: &str = "\
time,unique_id,type,positionX,positionY,positionZ,radius
0.0,0,A,1.0,2.0,3.0,0.5
0.0,1,B,4.0,5.0,6.0,1.0
0.1,0,A,1.5,2.0,3.0,0.5
";

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use crate::{ConverterConfig, SaveOptions, ScaleMode};
    use traj_core::constants::binary::MAX_BYTES;

    use super::*;

    #[test]
    fn parses_every_field() {
        let c = ConverterConfig::from_json(r#"{ "scale": { "fixed": 0.1 }, "center": true, "draw_fiber_points": false }"#)
            .unwrap();
        assert_eq!(c.scale, ScaleMode::Fixed(0.1));
        assert!(c.center);
        assert_eq!(c.draw_fiber_points, Some(false));
    }

    #[test]
    fn missing_fields_default() {
        assert_eq!(ConverterConfig::from_json("{}").unwrap(), ConverterConfig::default());
        let c = ConverterConfig::from_json(r#"{ "scale": "auto" }"#).unwrap();
        assert_eq!(c.scale, ScaleMode::Auto);
        assert!(!c.center);
    }

    #[test]
    fn bad_fixed_scale_is_refused() {
        for text in [r#"{ "scale": { "fixed": -1.0 } }"#, r#"{ "scale": { "fixed": 0.0 } }"#, "not json"] {
            assert!(matches!(ConverterConfig::from_json(text), Err(ConvertError::Config(_))), "{text}");
        }
    }

    #[test]
    fn save_options() {
        let o = SaveOptions::from_json(r#"{ "binary": false }"#).unwrap();
        assert!(!o.binary);
        assert!(o.validate_ids);
        assert_eq!(o.max_binary_bytes, MAX_BYTES);
        assert_eq!(SaveOptions::json().with_validate_ids(false), SaveOptions {
            binary: false,
            validate_ids: false,
            max_binary_bytes: MAX_BYTES,
        });
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("converter.json");
        std::fs::write(&path, r#"{ "center": true }"#).unwrap();
        assert!(ConverterConfig::load(&path).unwrap().center);
        assert!(matches!(ConverterConfig::load(&dir.path().join("missing.json")), Err(ConvertError::Config(_))));
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use approx::assert_relative_eq;
    use traj_agent::spatial_bounds;

    use crate::ScaleMode;

    use super::*;

    #[test]
    fn defaults_leave_data_unscaled() {
        let converter = TrajectoryConverter::new(three_agents()).unwrap();
        assert_eq!(converter.data(), &three_agents());
        assert_eq!(converter.data().meta_data.scale_factor, 1.0);
    }

    #[test]
    fn fixed_scale_updates_units_and_box() {
        let mut data = three_agents();
        data.meta_data.box_size = Some(Vec3::splat(10.0));
        let converter = TrajectoryConverter::builder(data).scale(ScaleMode::Fixed(0.5)).build().unwrap();
        let out = converter.data();
        assert_eq!(out.agent_data.position(0, 0), three_agents().agent_data.position(0, 0) * 0.5);
        assert_eq!(out.agent_data.radius(1, 2), 9.88 * 0.5);
        assert_eq!(out.spatial_units.name, "m");
        assert_eq!(out.spatial_units.magnitude, 2.0);
        assert_eq!(out.meta_data.scale_factor, 0.5);
        assert_eq!(out.meta_data.box_size, Some(Vec3::splat(5.0)));
    }

    #[test]
    fn auto_scale_fits_viewer_range() {
        let converter = TrajectoryConverter::builder(three_agents()).scale(ScaleMode::Auto).build().unwrap();
        let out = converter.data();
        let span = spatial_bounds(&out.agent_data).max_span();
        assert_relative_eq!(span, 250.0, epsilon = 1e-2);
        assert!(out.meta_data.scale_factor > 1.0);
        assert_eq!(out.meta_data.box_size, Some(Vec3::splat(100.0)));
    }

    #[test]
    fn centering_without_scale() {
        let converter = TrajectoryConverter::builder(three_agents()).center(true).build().unwrap();
        let bounds = spatial_bounds(&converter.data().agent_data);
        let c = bounds.center();
        assert_relative_eq!(c.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(c.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(c.z, 0.0, epsilon = 1e-4);
        assert_eq!(converter.data().meta_data.scale_factor, 1.0);
    }

    #[test]
    fn fiber_display_type_is_corrected() {
        let mut data = fiber_and_sphere();
        data.agent_data
            .display_data
            .insert("actin".into(), DisplayData::new("actin").with_display_type(DisplayType::Sphere));
        data.agent_data
            .display_data
            .insert("ball".into(), DisplayData::new("ball").with_display_type(DisplayType::Cube));
        let converter = TrajectoryConverter::new(data).unwrap();
        let display = &converter.data().agent_data.display_data;
        assert_eq!(display["actin"].display_type, Some(DisplayType::Fiber));
        assert_eq!(display["ball"].display_type, Some(DisplayType::Cube));
    }

    #[test]
    fn draw_fiber_points_override() {
        let converter = TrajectoryConverter::builder(fiber_and_sphere()).draw_fiber_points(true).build().unwrap();
        assert!(converter.data().agent_data.draw_fiber_points);
        assert!(converter.config().draw_fiber_points.unwrap());
    }

    #[test]
    fn invalid_config_fails_build() {
        let result = TrajectoryConverter::builder(three_agents()).scale(ScaleMode::Fixed(f32::NAN)).build();
        assert!(matches!(result, Err(ConvertError::Config(_))));
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod output {
    use traj_output::{SimulariumDocument, load_simularium};

    use crate::SaveOptions;

    use super::*;

    #[test]
    fn save_json() {
        let dir = tempfile::tempdir().unwrap();
        let converter = TrajectoryConverter::new(three_agents()).unwrap();
        let paths = converter.save(&dir.path().join("run"), &SaveOptions::json()).unwrap();
        assert_eq!(paths, vec![dir.path().join("run.simularium")]);
        let text = std::fs::read_to_string(&paths[0]).unwrap();
        assert!(text.starts_with('{'));
        assert_eq!(load_simularium(&paths[0]).unwrap().agent_data.n_agents_per_frame(), &[3, 3, 3]);
    }

    #[test]
    fn save_binary() {
        let dir = tempfile::tempdir().unwrap();
        let converter = TrajectoryConverter::new(fiber_and_sphere()).unwrap();
        let paths = converter.save(&dir.path().join("run"), &SaveOptions::binary()).unwrap();
        assert_eq!(paths, vec![dir.path().join("run.simularium")]);
        let bytes = std::fs::read(&paths[0]).unwrap();
        assert!(traj_output::is_binary(&bytes));
        let loaded = load_simularium(&paths[0]).unwrap();
        assert_eq!(loaded.agent_data.subpoints(0, 0), fiber_and_sphere().agent_data.subpoints(0, 0));
    }

    #[test]
    fn duplicate_ids_block_the_save() {
        let mut data = three_agents();
        data.agent_data.set_unique_id(2, 1, traj_core::UniqueId(0));
        let converter = TrajectoryConverter::new(data).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("bad");
        assert!(matches!(converter.save(&base, &SaveOptions::json()), Err(ConvertError::Output(_))));
        let unchecked = SaveOptions::json().with_validate_ids(false);
        assert_eq!(converter.save(&base, &unchecked).unwrap().len(), 1);
    }

    #[test]
    fn to_json_is_a_document() {
        let converter = TrajectoryConverter::new(three_agents()).unwrap();
        let doc: SimulariumDocument = serde_json::from_str(&converter.to_json().unwrap()).unwrap();
        assert_eq!(doc.trajectory_info.total_steps, 3);
        assert_eq!(doc.trajectory_info.time_step_size, 0.5);
        assert_eq!(doc.trajectory_info.type_mapping.len(), 7);
    }

    #[test]
    fn plot_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut converter = TrajectoryConverter::new(three_agents()).unwrap();
        converter.add_number_of_agents_plot().unwrap();
        let path = converter.save_plot_data(&dir.path().join("run")).unwrap();
        assert_eq!(path, dir.path().join("run_plot-data.json"));
        assert!(path.exists());
    }
}

// ── Plots ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod plots {
    use traj_core::{HistogramPlotData, PlotData, PlotTrace, ScatterPlotData};

    use crate::plots::NUMBER_OF_AGENTS_TITLE;

    use super::*;

    #[test]
    fn scatter_length_mismatch_is_refused() {
        let mut converter = TrajectoryConverter::new(three_agents()).unwrap();
        let bad = ScatterPlotData::new("t", "x", "y", vec![0.0, 1.0], vec![("a".into(), vec![1.0])]);
        assert!(matches!(converter.add_plot(&PlotData::Scatter(bad)), Err(ConvertError::Traj(_))));
        assert!(converter.data().plots.is_empty());

        let hist = HistogramPlotData::new("sizes", "r", vec![("r".into(), vec![1.0, 2.0, 2.5])]);
        converter.add_plot(&PlotData::Histogram(hist)).unwrap();
        assert_eq!(converter.data().plots.len(), 1);
    }

    #[test]
    fn number_of_agents_strips_suffixes() {
        let agents = AgentDataBuilder::new(vec![0.0, 2.0])
            .types(vec![s(&["actin#barbed", "actin#pointed", "B"]), s(&["actin#barbed"])])
            .unique_ids(vec![vec![0, 1, 2], vec![0]])
            .build()
            .unwrap();
        let mut converter = TrajectoryConverter::new(TrajectoryData::new(agents)).unwrap();
        converter.add_number_of_agents_plot().unwrap();

        let plot = &converter.data().plots[0];
        assert_eq!(plot.layout.title, NUMBER_OF_AGENTS_TITLE);
        assert_eq!(plot.layout.xaxis.title, "Time (s)");
        let traces: Vec<_> = plot
            .data
            .iter()
            .map(|trace| match trace {
                PlotTrace::Scatter { name, x, y, mode } => {
                    assert_eq!(x, &[0.0, 2.0]);
                    assert_eq!(mode, "lines");
                    (name.as_str(), y.clone())
                }
                PlotTrace::Histogram { .. } => panic!("expected a scatter trace"),
            })
            .collect();
        assert_eq!(traces, vec![("actin", vec![2.0, 1.0]), ("B", vec![1.0, 0.0])]);
    }
}

// ── Filters ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod filters {
    use std::collections::BTreeMap;

    use traj_agent::get_type_ids_and_mapping;
    use traj_core::{TrajError, TypeId, UniqueId};

    use crate::{
        AddAgents, AxisMapping, EveryNthAgent, EveryNthSubpoint, EveryNthTimestep, Filter, MultiplySpace, MultiplyTime,
        ReorderAgents, TransformSpatialAxes, Translate,
    };

    use super::*;

    fn apply(filter: &dyn Filter, data: TrajectoryData) -> TrajectoryData {
        TrajectoryConverter::new(data).unwrap().filter_data(&[filter]).unwrap()
    }

    #[test]
    fn every_nth_agent_per_type() {
        let agents = AgentDataBuilder::new(vec![0.0])
            .types(vec![s(&["A", "A", "B", "A", "B", "C"])])
            .build()
            .unwrap();
        let out = apply(&EveryNthAgent::new(2).with_type("C", 0), TrajectoryData::new(agents));
        let kept: Vec<_> = (0..out.agent_data.n_agents(0))
            .map(|a| (out.agent_data.type_name(0, a).to_owned(), out.agent_data.unique_id(0, a).0))
            .collect();
        assert_eq!(kept, vec![("A".to_owned(), 0), ("B".to_owned(), 2), ("A".to_owned(), 3)]);
    }

    #[test]
    fn every_nth_timestep() {
        let out = apply(&EveryNthTimestep::new(2), three_agents());
        assert_eq!(out.agent_data.times(), &[0.0, 1.0]);
        assert_eq!(out.agent_data.type_name(1, 0), "O");

        let converter = TrajectoryConverter::new(three_agents()).unwrap();
        let err = converter.filter_data(&[&EveryNthTimestep::new(1)]).unwrap_err();
        assert!(matches!(err, ConvertError::Traj(TrajError::Data(_))));
    }

    #[test]
    fn every_nth_subpoint_keeps_whole_points() {
        let out = apply(&EveryNthSubpoint::new(2), fiber_and_sphere());
        assert_eq!(out.agent_data.subpoints(0, 0), &[0.0, 0.0, 0.0, 4.0, 5.0, 6.0]);
        assert_eq!(out.agent_data.n_subpoints(0, 1), 0);

        let untouched = apply(&EveryNthSubpoint::new(1), fiber_and_sphere());
        assert_eq!(untouched.agent_data.n_subpoints(0, 0), 9);
    }

    #[test]
    fn translate_per_type() {
        let offset = Vec3::new(1.0, 0.0, -1.0);
        let out = apply(&Translate::new(Vec3::ZERO).with_type("actin", offset), fiber_and_sphere());
        assert_eq!(out.agent_data.subpoints(0, 0)[..3], [1.0, 0.0, -1.0]);
        assert_eq!(out.agent_data.position(0, 1), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn multiply_space() {
        let out = apply(&MultiplySpace::new(2.0), fiber_and_sphere());
        assert_eq!(out.agent_data.position(0, 1), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(out.agent_data.radius(0, 1), 2.0);
        assert_eq!(out.agent_data.subpoints(0, 0)[8], 12.0);
        assert_eq!(out.spatial_units.name, "mm");
        assert_eq!(out.spatial_units.magnitude, 500.0);

        let converter = TrajectoryConverter::new(three_agents()).unwrap();
        assert!(converter.filter_data(&[&MultiplySpace::new(0.0)]).is_err());
    }

    #[test]
    fn multiply_time_keeps_units() {
        let out = apply(&MultiplyTime::new(2.0), three_agents());
        assert_eq!(out.agent_data.times(), &[0.0, 1.0, 2.0]);
        assert_eq!(out.time_units, three_agents().time_units);
    }

    #[test]
    fn transform_spatial_axes() {
        let mut data = fiber_and_sphere();
        data.meta_data.box_size = Some(Vec3::new(1.0, 2.0, 3.0));
        let out = apply(&TransformSpatialAxes::parse(["+X", "-Z", "+Y"]).unwrap(), data);
        assert_eq!(out.agent_data.position(0, 1), Vec3::new(1.0, -3.0, 2.0));
        assert_eq!(out.agent_data.subpoints(0, 0)[3..6], [1.0, -3.0, 2.0]);
        assert_eq!(out.meta_data.box_size, Some(Vec3::new(1.0, 3.0, 2.0)));
    }

    #[test]
    fn axis_mapping_must_be_a_permutation() {
        assert!(TransformSpatialAxes::parse(["x", "x", "y"]).is_err());
        assert!(TransformSpatialAxes::parse(["x", "y", "w"]).is_err());
        assert!(TransformSpatialAxes::parse(["-y", "+z", "x"]).is_ok());
    }

    #[test]
    fn axis_source_out_of_range_is_refused() {
        let x = AxisMapping { source: 0, negate: false };
        let bad = AxisMapping { source: 3, negate: true };
        let err = TransformSpatialAxes::new([x, bad, AxisMapping { source: 1, negate: false }]);
        assert!(matches!(err, Err(ConvertError::Traj(TrajError::Data(_)))));
        assert!(TransformSpatialAxes::new([bad; 3]).is_err());
    }

    #[test]
    fn reorder_agents_pins_new_ids() {
        let out = apply(&ReorderAgents::new(BTreeMap::from([(0, 10)])), three_agents());
        let (ids, mapping) = get_type_ids_and_mapping(&out.agent_data).unwrap();
        assert_eq!(mapping.id_of("C"), Some(TypeId(10)));
        assert_eq!(mapping.id_of("U"), Some(TypeId(1)));
        assert_eq!(ids.get(0, 2), TypeId(10));

        let converter = TrajectoryConverter::new(three_agents()).unwrap();
        let collision = ReorderAgents::new(BTreeMap::from([(0, 1)]));
        assert!(converter.filter_data(&[&collision]).is_err());
    }

    #[test]
    fn add_agents_remaps_colliding_ids() {
        let extra = AgentDataBuilder::new(vec![0.0, 0.5, 1.0])
            .types(vec![s(&["Z"]), s(&["Z"]), s(&["Z"])])
            .unique_ids(vec![vec![0], vec![0], vec![0]])
            .build()
            .unwrap();
        let out = apply(&AddAgents::new(extra), three_agents());
        assert_eq!(out.agent_data.n_agents_per_frame(), &[4, 4, 4]);
        for t in 0..3 {
            assert_eq!(out.agent_data.type_name(t, 3), "Z");
            assert_eq!(out.agent_data.unique_id(t, 3), UniqueId(3));
        }
    }

    #[test]
    fn filter_data_leaves_the_converter_alone() {
        let _ = env_logger::builder().is_test(true).try_init();
        let converter = TrajectoryConverter::new(three_agents()).unwrap();
        let out = converter
            .filter_data(&[&EveryNthTimestep::new(2), &MultiplySpace::new(3.0), &MultiplyTime::new(10.0)])
            .unwrap();
        assert_eq!(out.agent_data.times(), &[0.0, 10.0]);
        assert_eq!(converter.data(), &three_agents());
    }
}

// ── Progress ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod progress {
    use std::time::Duration;

    use crate::{ConvertResult, ProgressObserver, RateLimitedProgress, SimulariumFileReader, TrajectoryReader};

    use super::*;

    fn reports(interval: Duration, fractions: &[f32]) -> Vec<f32> {
        let mut seen = Vec::new();
        {
            let mut progress = RateLimitedProgress::new(
                |f: f32| -> ConvertResult<()> {
                    seen.push(f);
                    Ok(())
                },
                interval,
            );
            for &f in fractions {
                progress.on_progress(f).unwrap();
            }
        }
        seen
    }

    #[test]
    fn zero_interval_forwards_monotonic_fractions() {
        let seen = reports(Duration::ZERO, &[0.0, 0.2, 0.1, f32::NAN, 0.5, 1.0, 1.0]);
        assert_eq!(seen, vec![0.2, 0.2, 0.5, 1.0]);
    }

    #[test]
    fn long_interval_forwards_only_the_end() {
        let seen = reports(Duration::from_secs(3600), &[0.2, 0.5, 0.9, 1.0, 1.0]);
        assert_eq!(seen, vec![1.0]);
    }

    #[test]
    fn observer_error_aborts_the_read() {
        let bytes = TrajectoryConverter::new(three_agents()).unwrap().to_json().unwrap().into_bytes();
        let mut cancel = |f: f32| -> ConvertResult<()> {
            if f >= 0.5 { Err(ConvertError::Cancelled("user stopped".into())) } else { Ok(()) }
        };
        let err = SimulariumFileReader.read(bytes, &mut cancel).unwrap_err();
        assert!(matches!(err, ConvertError::Cancelled(ref m) if m == "user stopped"));
    }
}

// ── Readers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod readers {
    use traj_core::{TrajError, UniqueId};

    use crate::{
        ConverterConfig, NoopProgress, ScaleMode, SimulariumFileReader, SourceEngine, TableInput, TableReader,
        TrajectoryReader,
    };

    use super::*;

    #[test]
    fn simularium_bytes_round_trip() {
        let source = three_agents();
        let bytes = TrajectoryConverter::new(source.clone()).unwrap().to_json().unwrap().into_bytes();
        let mut fractions = Vec::new();
        let mut record = |f: f32| -> crate::ConvertResult<()> {
            fractions.push(f);
            Ok(())
        };
        let data = SimulariumFileReader.read(bytes, &mut record).unwrap();
        assert_eq!(fractions, vec![0.5, 1.0]);
        assert_eq!(data.agent_data.times(), source.agent_data.times());
        assert_eq!(data.agent_data.position(2, 1), source.agent_data.position(2, 1));
        assert_eq!(data.agent_data.type_name(1, 2), "S");
    }

    #[test]
    fn table_reader_applies_display_radii() {
        let input = TableInput::new(TABLE).with_display_data(DisplayData::new("B").with_radius(3.0));
        let data = TableReader.read(input, &mut NoopProgress).unwrap();
        let agents = &data.agent_data;
        assert_eq!(agents.n_agents_per_frame(), &[2, 1]);
        assert_eq!(agents.times(), &[0.0, 0.1]);
        assert_eq!(agents.radius(0, 0), 0.5);
        assert_eq!(agents.radius(0, 1), 3.0);
        assert_eq!(agents.unique_id(1, 0), UniqueId(0));
        assert!(agents.display_data.contains_key("B"));
    }

    #[test]
    fn bad_table_is_input_error() {
        let input = TableInput::new("time,unique_id,type\n0.0,zero,A\n");
        let err = TableReader.read(input, &mut NoopProgress).unwrap_err();
        assert!(matches!(err, ConvertError::Traj(TrajError::InputData(_))));
    }

    #[test]
    fn from_reader_normalizes() {
        let config = ConverterConfig { scale: ScaleMode::Fixed(2.0), ..ConverterConfig::default() };
        let converter =
            TrajectoryConverter::from_reader(&TableReader, TableInput::new(TABLE), config, &mut NoopProgress).unwrap();
        assert_eq!(converter.data().agent_data.position(0, 1), Vec3::new(8.0, 10.0, 12.0));
        assert_eq!(converter.data().spatial_units.magnitude, 500.0);
        assert_eq!(converter.data().spatial_units.name, "mm");
    }

    #[test]
    fn engine_names() {
        assert_eq!("ReaDDy".parse::<SourceEngine>().unwrap(), SourceEngine::Readdy);
        assert_eq!(" table ".parse::<SourceEngine>().unwrap(), SourceEngine::Table);
        for engine in SourceEngine::ALL {
            assert_eq!(engine.as_str().parse::<SourceEngine>().unwrap(), engine);
        }
        assert!(SourceEngine::Simularium.has_reader());
        assert!(!SourceEngine::Cytosim.has_reader());
        let err = "gromacs".parse::<SourceEngine>().unwrap_err();
        assert!(matches!(err, TrajError::Unsupported { what: "source engine", ref name } if name == "gromacs"));
    }
}
