#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use itertools::Itertools;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use cutlayout::accounting;
    use cutlayout::collision_detection::overlaps;
    use cutlayout::entities::{
        BaseConfig, BasePlate, CutPiece, CutSpec, DEFAULT_SHAFT_HEIGHT, Layout, LayoutViolation,
        ShapeType, WorkshopSnapshot,
    };
    use cutlayout::error::WorkshopError;
    use cutlayout::geometry::PixelScale;
    use cutlayout::geometry::geo_traits::AlmostEncloses;
    use cutlayout::geometry::primitives::{Point, Rect};
    use cutlayout::io::export::export_snapshot;
    use cutlayout::io::ext_repr::ExtWorkshopSnapshot;
    use cutlayout::io::import::import_snapshot;
    use cutlayout::io::svg::{SvgDrawOptions, SvgLayoutTheme, layout_to_svg};
    use cutlayout::placement::find_slot;
    use cutlayout::util::ScanConfig;

    fn base(shape_type: ShapeType, width: f64, height: f64, weight: f64) -> BasePlate {
        let config = BaseConfig {
            width,
            height: Some(height),
            weight,
            color: None,
        };
        BasePlate::try_new(shape_type, &config).unwrap()
    }

    fn place(layout: &mut Layout, spec: CutSpec) -> Result<Point, WorkshopError> {
        let mut probes = 0;
        layout
            .place_cut(
                &spec,
                &PixelScale::default(),
                &ScanConfig::default(),
                &mut probes,
            )
            .map(|cut| cut.top_left())
    }

    #[test]
    fn plate_first_cut_lands_in_top_left_corner() {
        let mut layout = Layout::new(ShapeType::TwoD, base(ShapeType::TwoD, 300.0, 150.0, 50.0));

        assert_eq!(place(&mut layout, CutSpec::new(20.0, 30.0)), Ok(Point(10.0, 10.0)));

        let remaining = layout.remaining_weight();
        assert!(approx_eq!(
            f64,
            remaining,
            50.0 - (20.0 * 30.0) / (300.0 * 150.0) * 50.0
        ));
        assert!((remaining - 49.333).abs() < 1e-3);
    }

    #[test]
    fn plate_second_cut_is_placed_next_to_the_first() {
        let mut layout = Layout::new(ShapeType::TwoD, base(ShapeType::TwoD, 300.0, 150.0, 50.0));
        place(&mut layout, CutSpec::new(20.0, 30.0)).unwrap();

        //touching the right edge of the first cut is allowed
        assert_eq!(place(&mut layout, CutSpec::new(20.0, 30.0)), Ok(Point(110.0, 10.0)));
        assert!(layout.is_feasible(&PixelScale::default()));
    }

    #[test]
    fn full_size_cut_exhausts_the_plate() {
        let mut layout = Layout::new(ShapeType::TwoD, base(ShapeType::TwoD, 300.0, 150.0, 50.0));

        assert_eq!(place(&mut layout, CutSpec::new(300.0, 150.0)), Ok(Point(10.0, 10.0)));
        assert_eq!(layout.remaining_weight(), 0.0);

        let second = place(&mut layout, CutSpec::new(300.0, 150.0));
        assert_eq!(
            second,
            Err(WorkshopError::NoSpace {
                width: 300.0,
                height: 150.0
            })
        );
        assert_eq!(layout.n_cuts(), 1);
    }

    #[test]
    fn shaft_accounting_is_proportional_to_length() {
        let mut layout = Layout::new(ShapeType::OneD, base(ShapeType::OneD, 100.0, 10.0, 20.0));

        assert_eq!(place(&mut layout, CutSpec::length(25.0)), Ok(Point(10.0, 10.0)));
        assert_eq!(layout.remaining_weight(), 15.0);
    }

    #[test]
    fn shaft_fills_up_along_its_length() {
        let mut layout = Layout::new(ShapeType::OneD, base(ShapeType::OneD, 100.0, 10.0, 20.0));

        let positions = (0..4)
            .map(|_| place(&mut layout, CutSpec::length(25.0)).unwrap())
            .collect_vec();
        assert_eq!(
            positions,
            vec![
                Point(10.0, 10.0),
                Point(135.0, 10.0),
                Point(260.0, 10.0),
                Point(385.0, 10.0)
            ]
        );
        assert_eq!(layout.remaining_weight(), 0.0);

        assert!(matches!(
            place(&mut layout, CutSpec::length(1.0)),
            Err(WorkshopError::NoSpace { .. })
        ));
        assert_eq!(layout.n_cuts(), 4);
    }

    #[test]
    fn shaft_cuts_take_the_cross_dimension_of_the_base() {
        let shaft = BasePlate::try_new(
            ShapeType::OneD,
            &BaseConfig {
                width: 100.0,
                height: None,
                weight: 20.0,
                color: None,
            },
        )
        .unwrap();
        assert_eq!(shaft.height, DEFAULT_SHAFT_HEIGHT);

        let mut layout = Layout::new(ShapeType::OneD, shaft);
        place(&mut layout, CutSpec::new(25.0, 99.0)).unwrap();
        assert_eq!(layout.cuts[0].height, DEFAULT_SHAFT_HEIGHT);
    }

    #[test]
    fn cuts_are_never_rotated() {
        //a 10 x 20 cut would fit on a 30 x 10 plate if rotated, the scanner does not try that
        let mut layout = Layout::new(ShapeType::TwoD, base(ShapeType::TwoD, 30.0, 10.0, 5.0));

        assert!(matches!(
            place(&mut layout, CutSpec::new(10.0, 20.0)),
            Err(WorkshopError::NoSpace { .. })
        ));
        assert_eq!(place(&mut layout, CutSpec::new(20.0, 10.0)), Ok(Point(10.0, 10.0)));
    }

    #[test]
    fn first_fit_can_strand_free_space() {
        //with the full-height cut against the left edge, a 15 x 5 strip would remain free below the small cut.
        //first-fit does not rearrange earlier placements
        let mut layout = Layout::new(ShapeType::TwoD, base(ShapeType::TwoD, 20.0, 10.0, 10.0));

        assert_eq!(place(&mut layout, CutSpec::new(5.0, 5.0)), Ok(Point(10.0, 10.0)));
        assert_eq!(place(&mut layout, CutSpec::new(5.0, 10.0)), Ok(Point(35.0, 10.0)));
        assert!(matches!(
            place(&mut layout, CutSpec::new(15.0, 5.0)),
            Err(WorkshopError::NoSpace { .. })
        ));
        assert_eq!(layout.n_cuts(), 2);
    }

    #[test]
    fn find_slot_is_deterministic() {
        let plate = base(ShapeType::TwoD, 120.0, 80.0, 30.0);
        let mut layout = Layout::new(ShapeType::TwoD, plate.clone());
        for spec in [
            CutSpec::new(33.0, 12.0),
            CutSpec::new(7.5, 40.0),
            CutSpec::new(50.0, 50.0),
        ] {
            place(&mut layout, spec).unwrap();
        }

        let scale = PixelScale::default();
        let config = ScanConfig::default();
        let (mut probes_a, mut probes_b) = (0, 0);
        let a = find_slot(
            21.0,
            17.0,
            &plate,
            ShapeType::TwoD,
            &layout.cuts,
            &scale,
            &config,
            &mut probes_a,
        );
        let b = find_slot(
            21.0,
            17.0,
            &plate,
            ShapeType::TwoD,
            &layout.cuts,
            &scale,
            &config,
            &mut probes_b,
        );
        assert!(a.is_some());
        assert_eq!(a, b);
        assert_eq!(probes_a, probes_b);
    }

    #[test]
    fn find_slot_rejects_cuts_larger_than_the_base() {
        let plate = base(ShapeType::TwoD, 50.0, 50.0, 1.0);
        let mut probes = 0;
        let slot = find_slot(
            50.5,
            10.0,
            &plate,
            ShapeType::TwoD,
            &[],
            &PixelScale::default(),
            &ScanConfig::default(),
            &mut probes,
        );
        assert_eq!(slot, None);
        assert_eq!(probes, 0);
    }

    #[test]
    fn find_slot_honours_scan_step() {
        let plate = base(ShapeType::TwoD, 40.0, 10.0, 1.0);
        let occupied = vec![CutPiece {
            width: 3.0,
            height: 10.0,
            color: "red".into(),
            x: 10.0,
            y: 10.0,
        }];
        let scale = PixelScale::default();
        let mut probes = 0;

        let coarse = find_slot(
            5.0,
            10.0,
            &plate,
            ShapeType::TwoD,
            &occupied,
            &scale,
            &ScanConfig { step_px: 20.0 },
            &mut probes,
        );
        let fine = find_slot(
            5.0,
            10.0,
            &plate,
            ShapeType::TwoD,
            &occupied,
            &scale,
            &ScanConfig { step_px: 1.0 },
            &mut probes,
        );
        assert_eq!(coarse, Some(Point(30.0, 10.0)));
        assert_eq!(fine, Some(Point(25.0, 10.0)));
    }

    #[test_case(ShapeType::TwoD, 0; "plate seed 0")]
    #[test_case(ShapeType::TwoD, 1; "plate seed 1")]
    #[test_case(ShapeType::TwoD, 2; "plate seed 2")]
    #[test_case(ShapeType::OneD, 0; "shaft seed 0")]
    #[test_case(ShapeType::OneD, 1; "shaft seed 1")]
    fn random_cut_sequences_keep_invariants(shape_type: ShapeType, seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let scale = PixelScale::default();
        let config = ScanConfig::default();

        let plate = base(
            shape_type,
            rng.random_range(40.0..200.0),
            rng.random_range(10.0..100.0),
            rng.random_range(0.0..100.0),
        );
        let mut layout = Layout::new(shape_type, plate);
        let mut remaining = layout.remaining_weight();
        let mut probes = 0;

        for _ in 0..40 {
            let spec = CutSpec::new(rng.random_range(1.0..60.0), rng.random_range(1.0..40.0));
            let n_cuts = layout.n_cuts();
            match layout.place_cut(&spec, &scale, &config, &mut probes) {
                Ok(_) => assert_eq!(layout.n_cuts(), n_cuts + 1),
                Err(WorkshopError::NoSpace { .. }) => assert_eq!(layout.n_cuts(), n_cuts),
                Err(e) => panic!("unexpected error: {e}"),
            }
            let updated = layout.remaining_weight();
            assert!(updated <= remaining);
            assert!(updated >= 0.0);
            remaining = updated;
        }

        assert!(layout.n_cuts() > 0);
        let base_bbox = layout.bbox(&scale);
        let bboxes = layout.cut_bboxes(&scale).collect_vec();
        for (i, bbox) in bboxes.iter().enumerate() {
            assert!(base_bbox.almost_encloses(bbox));
            let others = bboxes.iter().enumerate().filter(|(j, _)| *j != i).map(|(_, b)| b);
            assert!(!overlaps(bbox, others));
        }
        assert!(layout.violations(&scale).is_empty());
    }

    #[test_case(110.0, 10.0, 210.0, 160.0, false; "touching right edge")]
    #[test_case(-90.0, 10.0, 10.0, 160.0, false; "touching left edge")]
    #[test_case(10.0, 160.0, 110.0, 200.0, false; "touching bottom edge")]
    #[test_case(110.0, 160.0, 120.0, 170.0, false; "touching corner")]
    #[test_case(109.0, 10.0, 200.0, 160.0, true; "one pixel into the right edge")]
    #[test_case(50.0, 50.0, 60.0, 60.0, true; "enclosed")]
    #[test_case(0.0, 0.0, 500.0, 500.0, true; "surrounding")]
    fn overlap_predicate(x_min: f64, y_min: f64, x_max: f64, y_max: f64, expected: bool) {
        let existing = [Rect::try_new(10.0, 10.0, 110.0, 160.0).unwrap()];
        let candidate = Rect::try_new(x_min, y_min, x_max, y_max).unwrap();
        assert_eq!(overlaps(&candidate, &existing), expected);
    }

    #[test_case(0.0, Some(10.0), 1.0; "zero width")]
    #[test_case(-5.0, Some(10.0), 1.0; "negative width")]
    #[test_case(10.0, Some(0.0), 1.0; "zero height")]
    #[test_case(10.0, None, 1.0; "plate without height")]
    #[test_case(10.0, Some(10.0), -1.0; "negative weight")]
    #[test_case(f64::NAN, Some(10.0), 1.0; "nan width")]
    fn invalid_plates_are_rejected(width: f64, height: Option<f64>, weight: f64) {
        let config = BaseConfig {
            width,
            height,
            weight,
            color: None,
        };
        assert!(matches!(
            BasePlate::try_new(ShapeType::TwoD, &config),
            Err(WorkshopError::Validation { .. })
        ));
    }

    #[test]
    fn invalid_cuts_leave_the_layout_untouched() {
        let mut layout = Layout::new(ShapeType::TwoD, base(ShapeType::TwoD, 100.0, 100.0, 10.0));

        for spec in [
            CutSpec::new(0.0, 10.0),
            CutSpec::new(10.0, -1.0),
            CutSpec::length(10.0),
            CutSpec::new(10.0, 10.0).with_color("  "),
        ] {
            assert!(matches!(
                place(&mut layout, spec),
                Err(WorkshopError::Validation { .. })
            ));
        }
        assert!(layout.is_empty());
        assert_eq!(layout.remaining_weight(), 10.0);
    }

    #[test]
    fn weightless_base_has_no_remaining_weight() {
        let plate = base(ShapeType::TwoD, 100.0, 100.0, 0.0);
        assert_eq!(accounting::remaining_weight(&plate, ShapeType::TwoD, &[]), 0.0);
    }

    #[test]
    fn remaining_weight_is_floored_at_zero() {
        let plate = base(ShapeType::TwoD, 10.0, 10.0, 8.0);
        let cut = CutPiece {
            width: 10.0,
            height: 10.0,
            color: "red".into(),
            x: 10.0,
            y: 10.0,
        };
        let cuts = vec![cut.clone(), cut];
        assert_eq!(accounting::remaining_weight(&plate, ShapeType::TwoD, &cuts), 0.0);
        assert_eq!(accounting::consumed_fraction(&plate, ShapeType::TwoD, &cuts), 2.0);
    }

    #[test]
    fn violations_are_reported_per_cut() {
        let plate = base(ShapeType::TwoD, 20.0, 20.0, 8.0);
        let cut = |x: f64, y: f64| CutPiece {
            width: 10.0,
            height: 10.0,
            color: "red".into(),
            x,
            y,
        };
        let layout = Layout {
            shape_type: ShapeType::TwoD,
            base: plate,
            cuts: vec![cut(10.0, 10.0), cut(30.0, 30.0), cut(100.0, 10.0)],
        };

        assert_eq!(
            layout.violations(&PixelScale::default()),
            vec![
                LayoutViolation::OutOfBounds { index: 2 },
                LayoutViolation::Overlap { first: 0, second: 1 },
            ]
        );
    }

    #[test]
    fn snapshot_survives_json_round_trip() {
        let mut layout = Layout::new(ShapeType::TwoD, base(ShapeType::TwoD, 300.0, 150.0, 50.0));
        for spec in [CutSpec::new(20.0, 30.0), CutSpec::new(17.3, 9.1).with_color("#AA3300")] {
            place(&mut layout, spec).unwrap();
        }
        let snapshot = WorkshopSnapshot::from_layout(&layout);

        let json = serde_json::to_string(&export_snapshot(&snapshot)).unwrap();
        let ext: ExtWorkshopSnapshot = serde_json::from_str(&json).unwrap();
        let restored = import_snapshot(&ext).unwrap();

        assert_eq!(restored, snapshot);
        assert_eq!(restored.to_layout().unwrap(), Some(layout));
    }

    #[test]
    fn snapshot_blob_uses_camel_case_keys() {
        let snapshot = WorkshopSnapshot::without_base(ShapeType::OneD);
        let json = serde_json::to_value(export_snapshot(&snapshot)).unwrap();

        assert_eq!(json["shapeType"], "1D");
        assert!(json["baseConfig"].is_null());
        assert_eq!(json["cuts"].as_array().map(|c| c.len()), Some(0));
        assert_eq!(json["remainingWeight"], 0.0);
    }

    #[test]
    fn structurally_broken_snapshots_are_corrupt() {
        let orphan_cuts = WorkshopSnapshot {
            cuts: vec![CutPiece {
                width: 1.0,
                height: 1.0,
                color: "red".into(),
                x: 10.0,
                y: 10.0,
            }],
            ..WorkshopSnapshot::empty()
        };
        assert!(matches!(
            orphan_cuts.to_layout(),
            Err(WorkshopError::SnapshotCorrupt { .. })
        ));

        let shapeless_base = WorkshopSnapshot {
            base: Some(base(ShapeType::TwoD, 10.0, 10.0, 1.0)),
            ..WorkshopSnapshot::empty()
        };
        assert!(matches!(
            shapeless_base.to_layout(),
            Err(WorkshopError::SnapshotCorrupt { .. })
        ));

        assert_eq!(WorkshopSnapshot::empty().to_layout(), Ok(None));
    }

    #[test]
    fn non_positive_dimensions_in_a_snapshot_are_corrupt() {
        let json = r#"{
            "shapeType": "2D",
            "baseConfig": {"width": 100, "height": 50, "weight": 10, "color": "silver"},
            "cuts": [{"width": -3, "height": 5, "color": "red", "x": 10, "y": 10}],
            "remainingWeight": 9
        }"#;
        let ext: ExtWorkshopSnapshot = serde_json::from_str(json).unwrap();
        assert!(matches!(
            import_snapshot(&ext),
            Err(WorkshopError::SnapshotCorrupt { .. })
        ));
    }

    #[test]
    fn svg_draws_base_and_cuts() {
        let mut layout = Layout::new(ShapeType::TwoD, base(ShapeType::TwoD, 300.0, 150.0, 50.0));
        for _ in 0..3 {
            place(&mut layout, CutSpec::new(20.0, 30.0).with_color("#FF0000")).unwrap();
        }
        let svg = layout_to_svg(
            Some(&layout),
            &PixelScale::default(),
            SvgDrawOptions::default(),
            "test",
        )
        .to_string();

        assert!(svg.contains("cut_0") && svg.contains("cut_1") && svg.contains("cut_2"));
        assert!(!svg.contains("cut_3"));
        assert!(svg.contains("#FF0000"));
        assert!(svg.contains("cuts: 3"));
    }

    #[test]
    fn svg_theme_is_configurable() {
        let options: SvgDrawOptions = serde_json::from_str(
            r##"{"theme": {"stroke_width_multiplier": 2.5, "canvas_fill": "#D3D3D3", "outline": "#000000", "placeholder_stroke": "#636363", "violation_highlight_color": "#00FF00"}}"##,
        )
        .unwrap();
        assert_eq!(options.theme, SvgLayoutTheme::GRAY);
        assert!(options.label && options.highlight_violations);

        let svg = layout_to_svg(None, &PixelScale::default(), options, "").to_string();
        assert!(svg.contains("#D3D3D3"));
        assert!(!svg.contains("#FFFFFF"));
    }

    #[test]
    fn svg_without_base_draws_placeholder() {
        let svg = layout_to_svg(None, &PixelScale::default(), SvgDrawOptions::default(), "")
            .to_string();

        assert!(svg.contains("stroke-dasharray"));
        assert!(svg.contains("no base created"));
    }
}
