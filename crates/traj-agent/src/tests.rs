//! Unit tests for traj-agent.

use traj_core::{DisplayData, DisplayType, Vec3, VizType};

use crate::{AgentData, AgentDataBuilder, AgentRecord};

// ── Fixtures ──────────────────────────────────────────────────────────────────

/// Three point agents over three frames, no display data.
pub(crate) fn three_default_agents() -> AgentData {
    let s = |v: [&str; 3]| v.iter().map(|x| x.to_string()).collect::<Vec<_>>();
    AgentDataBuilder::new(vec![0.0, 0.5, 1.0])
        .types(vec![s(["C", "U", "C"]), s(["U", "L", "S"]), s(["O", "Y", "W"])])
        .unique_ids(vec![vec![0, 1, 2], vec![0, 1, 2], vec![0, 1, 2]])
        .positions(vec![
            vec![
                Vec3::new(4.89610492, -29.81564851, 40.77254057),
                Vec3::new(43.43048197, 48.00424379, -36.02881338),
                Vec3::new(29.84924588, -38.02769707, 2.46644825),
            ],
            vec![
                Vec3::new(-43.37181102, -13.41127423, -17.31316927),
                Vec3::new(9.62132397, 13.4774314, -20.30846039),
                Vec3::new(41.41039848, -45.85543786, 49.06208485),
            ],
            vec![
                Vec3::new(-24.91450698, -44.79360525, 13.32273796),
                Vec3::new(4.10861266, 43.86451151, 21.93697483),
                Vec3::new(-7.16740679, -13.06491594, 44.97026158),
            ],
        ])
        .radii(vec![
            vec![8.38656327, 6.18568039, 6.61459206],
            vec![5.26366739, 6.69209780, 9.88033853],
            vec![8.91022619, 9.01379396, 8.39880154],
        ])
        .build()
        .expect("fixture builds")
}

#[cfg(test)]
mod store {
    use super::*;
    use traj_core::{BufferAxis, DimensionData, UniqueId};

    #[test]
    fn push_agent_grows_from_empty() {
        let mut data = AgentData::from_dimensions(DimensionData::default());
        let a = data.push_agent(2, AgentRecord::new(7, "A", Vec3::splat(1.0), 2.0));
        assert_eq!(a, 0);
        assert!(data.total_steps() >= 3);
        assert_eq!(data.n_agents(2), 1);
        assert_eq!(data.unique_id(2, 0), UniqueId(7));
        assert_eq!(data.type_name(2, 0), "A");
        assert_eq!(data.n_agents(0), 0);
    }

    #[test]
    fn types_track_agent_count() {
        let mut data = AgentData::from_dimensions(DimensionData::new(1, 4, 0));
        data.push_agent(0, AgentRecord::new(0, "A", Vec3::ZERO, 1.0));
        data.push_agent(0, AgentRecord::new(1, "B", Vec3::ZERO, 1.0));
        assert_eq!(data.types().frame_len(0), 2);
        data.set_n_agents(0, 1).unwrap();
        assert_eq!(data.frame_types(0).collect::<Vec<_>>(), ["A"]);
        data.set_n_agents(0, 3).unwrap();
        assert_eq!(data.types().frame_len(0), 3);
        assert_eq!(data.type_name(0, 2), "");
        assert!(data.set_n_agents(0, 5).is_err());
    }

    #[test]
    fn subpoints_grow_and_clear() {
        let mut data = AgentData::from_dimensions(DimensionData::new(1, 1, 3));
        data.push_agent(0, AgentRecord::fiber(0, "F", vec![1.0; 9], 0.5));
        assert!(data.get_dimensions().max_subpoints >= 9);
        assert_eq!(data.subpoints(0, 0), &[1.0; 9]);
        data.set_subpoints(0, 0, &[2.0, 2.0, 2.0]);
        assert_eq!(data.n_subpoints(0, 0), 3);
        data.check_increase_buffer_size(0, BufferAxis::Subpoints);
        let start = data.sp_offset(0, 0);
        assert!(data.subpoints[start + 3..start + 9].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn equality_ignores_capacity() {
        let a = three_default_agents();
        let mut b = a.clone();
        b.check_increase_buffer_size(5000, BufferAxis::Agents);
        assert_ne!(a.get_dimensions(), b.get_dimensions());
        assert_eq!(a, b);
        b.set_radius(0, 0, 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn display_type_defaults() {
        let mut data = AgentData::from_dimensions(DimensionData::new(1, 2, 0));
        data.push_agent(0, AgentRecord::new(0, "A", Vec3::ZERO, 1.0));
        data.push_agent(0, AgentRecord::fiber(1, "F", vec![0.0; 6], 1.0));
        assert_eq!(data.display_type_of(0, 0), DisplayType::Sphere);
        assert_eq!(data.display_type_of(0, 1), DisplayType::Fiber);
        data.display_data.insert("A".into(), DisplayData::new("A").with_display_type(DisplayType::Pdb));
        assert_eq!(data.display_type_of(0, 0), DisplayType::Pdb);
    }
}

#[cfg(test)]
mod buffer {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use traj_core::{BufferAxis, DimensionData, UniqueId};

    #[test]
    fn from_dimensions_is_zero_filled() {
        let data = AgentData::from_dimensions(DimensionData::new(2, 3, 6));
        assert_eq!(data.get_dimensions(), DimensionData::new(2, 3, 6));
        assert_eq!(data.times(), &[0.0, 0.0]);
        assert_eq!(data.position(1, 2), Vec3::ZERO);
        assert_eq!(data.viz_type(1, 2), VizType::Default);
        assert_eq!(data.n_agents(1), 0);
    }

    #[test]
    fn truncate_steps_keeps_leading_frames() {
        let mut data = three_default_agents();
        data.check_increase_buffer_size(3, BufferAxis::Time);
        assert_eq!(data.get_dimensions().total_steps, 1003);
        assert_eq!(data.total_steps(), 3);
        data.truncate_steps(3);
        assert_eq!(data.get_dimensions().total_steps, 3);
        assert_eq!(data, three_default_agents());
        data.truncate_steps(10);
        assert_eq!(data.total_steps(), 3);
        data.truncate_steps(1);
        assert_eq!(data.times(), &[0.0]);
        assert_eq!(data.n_agents_per_frame(), &[3]);
    }

    #[test]
    fn time_growth_is_capacity_not_frames() {
        let mut data = AgentData::from_dimensions(DimensionData::default());
        for t in 0..3 {
            data.set_time(t, t as f32 * 0.5);
            data.push_agent(t, AgentRecord::new(0, "A", Vec3::ZERO, 1.0));
        }
        assert_eq!(data.get_dimensions().total_steps, 1000);
        assert_eq!(data.total_steps(), 3);
        assert_eq!(data.times(), &[0.0, 0.5, 1.0]);
        assert_eq!(data.n_agents_per_frame(), &[1, 1, 1]);
        assert_eq!(data.occupied().count(), 3);

        data.shrink_to_fit();
        assert_eq!(data.get_dimensions(), DimensionData::new(3, 1, 0));
    }

    #[test]
    fn frames_in_use_follow_the_last_write() {
        let mut data = AgentData::from_dimensions(DimensionData::new(2, 2, 0));
        assert_eq!(data.total_steps(), 2);
        data.set_n_agents(1, 0).unwrap();
        assert_eq!(data.total_steps(), 2);
        data.push_agent(4, AgentRecord::new(1, "B", Vec3::ZERO, 1.0));
        assert_eq!(data.total_steps(), 5);

        data.set_total_steps(2);
        assert_eq!(data.total_steps(), 2);
        assert_eq!(data.occupied().count(), 0);
        data.set_total_steps(1500);
        assert_eq!(data.get_dimensions().total_steps, 2002);
        assert_eq!(data.n_agents(4), 1);
    }

    #[test]
    fn grows_in_fixed_steps_until_in_range() {
        let mut data = AgentData::from_dimensions(DimensionData::new(1, 5, 0));
        data.check_increase_buffer_size(2500, BufferAxis::Agents);
        assert_eq!(data.get_dimensions().max_agents, 3005);

        data.check_increase_buffer_size(3004, BufferAxis::Agents);
        assert_eq!(data.get_dimensions().max_agents, 3005);

        data.check_increase_buffer_size(0, BufferAxis::Subpoints);
        assert_eq!(data.get_dimensions().max_subpoints, 30);

        let mut steps = AgentData::from_dimensions(DimensionData::new(1, 1, 0));
        steps.check_increase_buffer_size(1, BufferAxis::Time);
        assert_eq!(steps.get_dimensions().total_steps, 1001);
    }

    #[test]
    fn custom_increment() {
        let mut data = AgentData::from_dimensions(DimensionData::new(1, 1, 0));
        data.check_increase_buffer_size_by(10, BufferAxis::Agents, DimensionData::new(0, 4, 0));
        assert_eq!(data.get_dimensions().max_agents, 13);
    }

    #[test]
    fn growth_preserves_written_values() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut data = AgentData::from_dimensions(DimensionData::new(3, 4, 6));
        let mut written = Vec::new();
        for t in 0..3 {
            for a in 0..(rng.gen_range(1..=4)) {
                let sp: Vec<f32> = (0..3 * rng.gen_range(0..=2)).map(|_| rng.r#gen()).collect();
                let rec = AgentRecord::new(rng.gen_range(0..1000), format!("T{}", rng.gen_range(0..3)), Vec3::splat(rng.r#gen()), rng.r#gen())
                    .with_rotation(Vec3::splat(rng.r#gen()))
                    .with_subpoints(sp);
                assert_eq!(data.push_agent(t, rec.clone()), a);
                written.push((t, a, rec));
            }
        }

        let axes = [BufferAxis::Agents, BufferAxis::Subpoints, BufferAxis::Time];
        for _ in 0..6 {
            let axis = axes[rng.gen_range(0..3)];
            let next = data.get_dimensions().along(axis) + rng.gen_range(0..10);
            data.check_increase_buffer_size_by(next, axis, DimensionData::new(7, 7, 7));

            for (t, a, rec) in &written {
                assert_eq!(&data.agent(*t, *a), rec);
            }
        }

        let dims = data.get_dimensions();
        for t in 0..dims.total_steps {
            for a in data.n_agents(t)..dims.max_agents {
                assert_eq!(data.unique_id(t, a), UniqueId(0));
                assert_eq!(data.position(t, a), Vec3::ZERO);
                assert_eq!(data.n_subpoints(t, a), 0);
            }
        }
    }

    #[test]
    fn time_growth_keeps_type_lists() {
        let mut data = three_default_agents();
        data.check_increase_buffer_size(3, BufferAxis::Time);
        assert_eq!(data.frame_types(1).collect::<Vec<_>>(), ["U", "L", "S"]);
        assert_eq!(data.types().frame_len(3), 0);
    }

    #[test]
    fn shrink_to_fit_drops_spare_capacity() {
        let mut data = three_default_agents();
        data.check_increase_buffer_size(100, BufferAxis::Agents);
        let before = data.clone();
        data.shrink_to_fit();
        assert_eq!(data.get_dimensions(), DimensionData::new(3, 3, 0));
        assert_eq!(data, before);
    }
}

#[cfg(test)]
mod append {
    use super::*;
    use traj_core::UniqueId;

    fn extra_agents(ids: [i64; 2]) -> AgentData {
        AgentDataBuilder::new(vec![0.0, 0.5, 1.0])
            .types(vec![vec!["N".into(), "M".into()], vec!["N".into()], vec![]])
            .unique_ids(vec![ids.to_vec(), vec![ids[0]], vec![]])
            .display_data(DisplayData::new("N").with_display_type(DisplayType::Obj))
            .build()
            .unwrap()
    }

    #[test]
    fn remaps_colliding_ids_to_next_free() {
        let base = three_default_agents();
        let out = base.append_agents(&extra_agents([1, 10])).unwrap();
        assert_eq!(out.n_agents(0), 5);
        assert_eq!(out.unique_id(0, 3), UniqueId(3));
        assert_eq!(out.unique_id(0, 4), UniqueId(10));
        // Same source ID keeps the same new ID in later frames.
        assert_eq!(out.unique_id(1, 3), UniqueId(3));
        assert_eq!(out.frame_types(0).collect::<Vec<_>>(), ["C", "U", "C", "N", "M"]);
        assert_eq!(out.n_agents(2), 3);
    }

    #[test]
    fn keeps_original_agents_and_merges_display_data() {
        let base = three_default_agents();
        let out = base.append_agents(&extra_agents([50, 51])).unwrap();
        for (t, a) in base.occupied() {
            assert_eq!(out.agent(t, a), base.agent(t, a));
        }
        assert_eq!(out.display_data["N"].display_type, Some(DisplayType::Obj));
        assert_eq!(out.unique_id(0, 3), UniqueId(50));
    }

    #[test]
    fn mismatched_steps_is_error() {
        let other = AgentDataBuilder::new(vec![0.0]).n_agents(vec![1]).build().unwrap();
        assert!(three_default_agents().append_agents(&other).is_err());
    }
}

#[cfg(test)]
mod type_ids {
    use super::*;
    use traj_core::{TypeId, TrajError};

    use crate::{TypeIds, TypeMapping, get_type_ids_and_mapping, get_type_names};

    #[test]
    fn first_seen_order() {
        let (ids, mapping) = get_type_ids_and_mapping(&three_default_agents()).unwrap();
        assert_eq!(mapping.len(), 7);
        let names: Vec<_> = mapping.iter().map(|(_, n)| n).collect();
        assert_eq!(names, ["C", "U", "L", "S", "O", "Y", "W"]);
        assert_eq!(ids.frame(0), &[TypeId(0), TypeId(1), TypeId(0)]);
        assert_eq!(ids.frame(2), &[TypeId(4), TypeId(5), TypeId(6)]);
    }

    #[test]
    fn assignment_is_idempotent() {
        let data = three_default_agents();
        let first = get_type_ids_and_mapping(&data).unwrap();
        let second = get_type_ids_and_mapping(&data).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_names_are_skipped() {
        let data = AgentDataBuilder::new(vec![0.0])
            .types(vec![vec!["".into(), "A".into(), "".into(), "B".into()]])
            .build()
            .unwrap();
        let (ids, mapping) = get_type_ids_and_mapping(&data).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(ids.frame(0), &[TypeId(0), TypeId(0), TypeId(0), TypeId(1)]);
    }

    #[test]
    fn pinned_ids_are_respected() {
        let mut data = three_default_agents();
        data.type_id_overrides.insert("W".into(), TypeId(0));
        data.type_id_overrides.insert("C".into(), TypeId(2));
        let (ids, mapping) = get_type_ids_and_mapping(&data).unwrap();
        assert_eq!(mapping.id_of("W"), Some(TypeId(0)));
        assert_eq!(mapping.id_of("C"), Some(TypeId(2)));
        assert_eq!(mapping.id_of("U"), Some(TypeId(1)));
        assert_eq!(mapping.id_of("L"), Some(TypeId(3)));
        assert_eq!(ids.get(0, 0), TypeId(2));
    }

    #[test]
    fn names_round_trip() {
        let data = three_default_agents();
        let (ids, mapping) = get_type_ids_and_mapping(&data).unwrap();
        let names = get_type_names(&ids, &mapping).unwrap();
        assert_eq!(names, data.types().to_nested());
    }

    #[test]
    fn unknown_id_is_error() {
        let ids = TypeIds::from_frames(&[vec![TypeId(0), TypeId(9)]]);
        let mut mapping = TypeMapping::new();
        mapping.insert(TypeId(0), "A").unwrap();
        assert!(matches!(get_type_names(&ids, &mapping), Err(TrajError::Data(_))));
    }

    #[test]
    fn mapping_rejects_conflicts() {
        let mut mapping = TypeMapping::new();
        mapping.insert(TypeId(0), "A").unwrap();
        mapping.insert(TypeId(0), "A").unwrap();
        assert!(mapping.insert(TypeId(0), "B").is_err());
        assert!(mapping.insert(TypeId(1), "A").is_err());
    }
}

#[cfg(test)]
mod scale {
    use approx::assert_relative_eq;

    use super::*;
    use traj_core::DimensionData;
    use traj_core::constants::viewer_dimension_range::{MAX, MIN};

    use crate::{get_scale_factor, scale_agent_data, spatial_bounds};

    fn span(data: &AgentData) -> f32 {
        spatial_bounds(data).max_span()
    }

    fn small() -> AgentData {
        AgentData::from_dimensions(DimensionData::new(1, 2, 8))
    }

    fn two_points(distance: f32, radius: f32) -> AgentData {
        let mut data = small();
        data.push_agent(0, AgentRecord::new(0, "A", Vec3::ZERO, radius));
        data.push_agent(0, AgentRecord::new(1, "A", Vec3::new(distance, 0.0, 0.0), radius));
        data
    }

    #[test]
    fn bounds_include_radius() {
        let b = spatial_bounds(&two_points(10.0, 1.0));
        assert_eq!(b.min, Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(b.max, Vec3::new(11.0, 1.0, 1.0));
    }

    #[test]
    fn large_scene_is_shrunk_into_range() {
        let mut data = two_points(1.0e5, 10.0);
        let before = span(&data);
        let out = scale_agent_data(&mut data, None, false);
        assert_relative_eq!(out.scale_factor, MAX / before);
        let after = span(&data);
        assert!(after <= MAX * 1.0001 && after >= MIN);
        assert_relative_eq!(data.radius(0, 0), 10.0 * out.scale_factor);
    }

    #[test]
    fn small_scene_is_grown_into_range() {
        let mut data = two_points(0.01, 0.001);
        let out = scale_agent_data(&mut data, None, false);
        assert!(out.scale_factor > 1.0);
        assert_relative_eq!(span(&data), MIN, max_relative = 1e-4);
    }

    #[test]
    fn in_range_and_degenerate_scenes_are_not_scaled() {
        assert_eq!(get_scale_factor(&two_points(400.0, 1.0)), 1.0);
        assert_eq!(get_scale_factor(&two_points(0.0, 0.0)), 1.0);
    }

    #[test]
    fn fixed_factor_multiplies_span() {
        let mut data = two_points(10.0, 1.0);
        let before = span(&data);
        let out = scale_agent_data(&mut data, Some(3.0), false);
        assert_eq!(out.scale_factor, 3.0);
        assert_eq!(out.translation, None);
        assert_relative_eq!(span(&data), before * 3.0);
    }

    #[test]
    fn rotations_and_ids_are_not_scaled() {
        let mut data = small();
        data.push_agent(0, AgentRecord::new(5, "A", Vec3::splat(2.0), 1.0).with_rotation(Vec3::splat(45.0)));
        scale_agent_data(&mut data, Some(10.0), false);
        assert_eq!(data.rotation(0, 0), Vec3::splat(45.0));
        assert_eq!(data.unique_id(0, 0).0, 5);
        assert_eq!(data.time(0), 0.0);
        assert_eq!(data.position(0, 0), Vec3::splat(20.0));
    }

    #[test]
    fn centering_moves_fiber_subpoints() {
        let mut data = small();
        data.push_agent(0, AgentRecord::fiber(0, "F", vec![100.0, 0.0, 0.0, 110.0, 0.0, 0.0], 0.0));
        data.set_position(0, 0, Vec3::new(105.0, 0.0, 0.0));
        let out = scale_agent_data(&mut data, Some(1.0), true);
        assert_eq!(out.translation, Some(Vec3::new(-105.0, 0.0, 0.0)));
        assert_eq!(data.position(0, 0), Vec3::ZERO);
        assert_eq!(data.subpoints(0, 0), &[-5.0, 0.0, 0.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn centering_leaves_sphere_group_members_relative() {
        let mut data = small();
        data.push_agent(0, AgentRecord::new(0, "G", Vec3::new(50.0, 50.0, 50.0), 1.0)
            .with_subpoints(vec![1.0, 0.0, 0.0, 2.0, -1.0, 0.0, 0.0, 2.0]));
        data.display_data.insert("G".into(), DisplayData::new("G").with_display_type(DisplayType::SphereGroup));

        let b = spatial_bounds(&data);
        assert_eq!(b.min, Vec3::new(47.0, 48.0, 48.0));
        assert_eq!(b.max, Vec3::new(53.0, 52.0, 52.0));

        scale_agent_data(&mut data, Some(1.0), true);
        assert_eq!(data.position(0, 0), Vec3::ZERO);
        assert_eq!(data.subpoints(0, 0), &[1.0, 0.0, 0.0, 2.0, -1.0, 0.0, 0.0, 2.0]);
    }

    #[test]
    fn centering_happens_before_scaling() {
        let mut data = two_points(2000.0, 0.0);
        let out = scale_agent_data(&mut data, None, true);
        assert_eq!(out.translation, Some(Vec3::new(-1000.0, 0.0, 0.0)));
        assert_relative_eq!(data.position(0, 0).x, -1000.0 * out.scale_factor);
        assert_relative_eq!(data.position(0, 1).x, 1000.0 * out.scale_factor);
    }
}

#[cfg(test)]
mod trajectory {
    use super::*;
    use crate::TrajectoryData;

    #[test]
    fn time_step_size() {
        let data = TrajectoryData::new(three_default_agents());
        assert_eq!(data.time_step_size(), 0.5);
        let single = TrajectoryData::new(AgentDataBuilder::new(vec![3.0]).n_agents(vec![0]).build().unwrap());
        assert_eq!(single.time_step_size(), 0.0);
    }

    #[test]
    fn default_units() {
        let data = TrajectoryData::new(three_default_agents());
        assert_eq!(data.time_units.name, "s");
        assert_eq!(data.spatial_units.name, "m");
        assert!(data.plots.is_empty());
    }

    #[test]
    fn clone_is_independent() {
        let original = TrajectoryData::new(three_default_agents());
        let mut copy = original.clone();
        copy.agent_data.set_radius(0, 0, 99.0);
        assert_ne!(original.agent_data.radius(0, 0), 99.0);
    }
}

#[cfg(test)]
mod builder {
    use super::*;
    use traj_core::TrajError;

    #[test]
    fn frame_count_mismatch_errors() {
        let err = AgentDataBuilder::new(vec![0.0, 1.0])
            .types(vec![vec!["A".into()]])
            .build()
            .unwrap_err();
        assert!(matches!(err, TrajError::Data(_)));
    }

    #[test]
    fn short_frame_errors() {
        let err = AgentDataBuilder::new(vec![0.0])
            .n_agents(vec![2])
            .positions(vec![vec![Vec3::ZERO]])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("positions"));
    }

    #[test]
    fn sized_exactly() {
        let data = AgentDataBuilder::new(vec![0.0, 1.0])
            .n_agents(vec![1, 2])
            .viz_types(vec![vec![VizType::Fiber], vec![VizType::Default, VizType::Fiber]])
            .subpoints(vec![vec![vec![0.0; 6]], vec![vec![], vec![1.0; 9]]])
            .build()
            .unwrap();
        assert_eq!(data.get_dimensions(), traj_core::DimensionData::new(2, 2, 9));
        assert_eq!(data.radius(1, 0), crate::builder::DEFAULT_RADIUS);
        assert_eq!(data.n_subpoints(1, 1), 9);
    }

    #[test]
    fn missing_counts_errors() {
        assert!(matches!(AgentDataBuilder::new(vec![0.0]).build(), Err(TrajError::MissingData(_))));
    }
}

#[cfg(test)]
mod table {
    use std::io::Cursor;

    use super::*;
    use traj_core::TrajError;

    use crate::load_agents_reader;

    #[test]
    fn groups_rows_by_time() {
        let csv = "time,unique_id,type,positionX,positionY,positionZ,radius\n\
                   0.0,0,A,1.0,2.0,3.0,0.5\n\
                   0.1,0,A,1.5,2.0,3.0,0.5\n\
                   0.0,1,B,4.0,5.0,6.0,1.0\n";
        let data = load_agents_reader(Cursor::new(csv)).unwrap();
        assert_eq!(data.total_steps(), 2);
        assert_eq!(data.times(), &[0.0, 0.1]);
        assert_eq!(data.n_agents(0), 2);
        assert_eq!(data.frame_types(0).collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(data.position(0, 1), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(data.position(1, 0), Vec3::new(1.5, 2.0, 3.0));
    }

    #[test]
    fn reads_optional_rotations() {
        let csv = "time,unique_id,type,positionX,positionY,positionZ,radius,rotationX,rotationY,rotationZ\n\
                   0,3,A,0,0,0,1,10,20,30\n";
        let data = load_agents_reader(Cursor::new(csv)).unwrap();
        assert_eq!(data.rotation(0, 0), Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn malformed_row_is_input_error() {
        let csv = "time,unique_id,type,positionX,positionY,positionZ,radius\n0,x,A,0,0,0,1\n";
        assert!(matches!(load_agents_reader(Cursor::new(csv)), Err(TrajError::InputData(_))));
    }
}
