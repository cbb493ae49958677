//! Unit tests for wf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn out_of_range_index_rejected() {
        assert!(NodeId::try_from(usize::MAX).is_err());
        assert!(EdgeId::try_from(u32::MAX as usize + 1).is_err());
        assert_eq!(EdgeId::try_from(u32::MAX as usize).unwrap(), EdgeId::INVALID);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::Coordinate;

    fn random_coordinate(rng: &mut SmallRng) -> Coordinate {
        Coordinate::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0))
    }

    #[test]
    fn zero_distance() {
        let p = Coordinate::new(25.6690, -100.2480);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn zero_distance_everywhere() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let p = random_coordinate(&mut rng);
            assert_eq!(p.distance_m(p), 0.0, "at {p}");
        }
    }

    #[test]
    fn symmetric() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let p = random_coordinate(&mut rng);
            let q = random_coordinate(&mut rng);
            let (pq, qp) = (p.distance_m(q), q.distance_m(p));
            assert!((pq - qp).abs() < 1e-6, "{p} ↔ {q}: {pq} vs {qp}");
        }
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = Coordinate::new(25.0, -100.0);
        let b = Coordinate::new(26.0, -100.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn antipodal_is_half_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = a.distance_m(b);
        assert!(!d.is_nan());
        assert!((d - std::f64::consts::PI * crate::geo::EARTH_RADIUS_M).abs() < 1.0);

        let pole_n = Coordinate::new(90.0, 0.0);
        let pole_s = Coordinate::new(-90.0, 0.0);
        assert!(!pole_n.distance_m(pole_s).is_nan());
    }

    #[test]
    fn monotonic_with_separation() {
        let origin = Coordinate::new(25.669, -100.248);
        let mut last = 0.0;
        for step in 1..=50 {
            let p = Coordinate::new(origin.lat + step as f64 * 0.0005, origin.lon);
            let d = origin.distance_m(p);
            assert!(d > last, "step {step}: {d} <= {last}");
            last = d;
        }
    }

    #[test]
    fn venue_scale_segment() {
        // n1 → n2 in the bundled venue is roughly 120 m.
        let n1 = Coordinate::new(25.67, -100.25);
        let n2 = Coordinate::new(25.6705, -100.249);
        let d = n1.distance_m(n2);
        assert!((100.0..130.0).contains(&d), "got {d}");
    }
}

#[cfg(test)]
mod projection {
    use crate::{
        CanvasSize, Coordinate, DisplayConfig, DisplayPoint, GeoProjector, MapBounds, WfError,
    };

    fn projector() -> GeoProjector {
        GeoProjector::new(DisplayConfig::default()).unwrap()
    }

    #[test]
    fn corners_map_to_canvas_corners() {
        let p = projector();
        let b = p.bounds();
        let CanvasSize { width, height } = p.canvas();

        assert_eq!(p.project(Coordinate::new(b.max_lat, b.min_lon)), DisplayPoint::new(0.0, 0.0));
        assert_eq!(p.project(Coordinate::new(b.max_lat, b.max_lon)), DisplayPoint::new(width, 0.0));
        assert_eq!(p.project(Coordinate::new(b.min_lat, b.min_lon)), DisplayPoint::new(0.0, height));
        assert_eq!(p.project(Coordinate::new(b.min_lat, b.max_lon)), DisplayPoint::new(width, height));
    }

    #[test]
    fn outside_box_is_not_clamped() {
        let p = projector();
        let b = p.bounds();
        let above = p.project(Coordinate::new(b.max_lat + 0.001, b.min_lon - 0.001));
        assert!(above.x < 0.0);
        assert!(above.y < 0.0);
    }

    #[test]
    fn unproject_inverts_project() {
        let p = projector();
        let c = Coordinate::new(25.669, -100.248);
        let back = p.unproject(p.project(c));
        assert!((back.lat - c.lat).abs() < 1e-9);
        assert!((back.lon - c.lon).abs() < 1e-9);
    }

    #[test]
    fn degenerate_bounds_rejected() {
        let config = DisplayConfig {
            bounds: MapBounds { min_lat: 1.0, max_lat: 1.0, min_lon: 0.0, max_lon: 1.0 },
            canvas: CanvasSize::default(),
        };
        assert!(matches!(GeoProjector::new(config), Err(WfError::Config(_))));
    }

    #[test]
    fn zero_canvas_rejected() {
        let config = DisplayConfig {
            bounds: MapBounds::default(),
            canvas: CanvasSize { width: 0.0, height: 100.0 },
        };
        assert!(GeoProjector::new(config).is_err());
    }
}

#[cfg(test)]
mod config {
    use crate::{WalkingSpeed, WayfindingConfig};

    #[test]
    fn default_is_valid() {
        WayfindingConfig::default().validate().unwrap();
    }

    #[test]
    fn walk_minutes_round_up() {
        let speed = WalkingSpeed::default(); // 4 km/h ≈ 66.7 m/min
        assert_eq!(speed.minutes_for(0.0), 0);
        assert_eq!(speed.minutes_for(1.0), 1);
        assert_eq!(speed.minutes_for(200.0), 3);
        assert_eq!(speed.minutes_for(201.0), 4);
    }

    #[test]
    fn non_positive_speed_rejected() {
        assert!(WalkingSpeed::new(0.0).is_err());
        assert!(WalkingSpeed::new(f64::NAN).is_err());
        assert!(WalkingSpeed::new(5.0).is_ok());
    }
}

#[cfg(test)]
mod access {
    use crate::AccessMode;

    #[test]
    fn permits() {
        assert!(AccessMode::Any.permits(false));
        assert!(AccessMode::Any.permits(true));
        assert!(!AccessMode::StepFree.permits(false));
        assert!(AccessMode::StepFree.permits(true));
    }

    #[test]
    fn from_toggle() {
        assert_eq!(AccessMode::from(true), AccessMode::StepFree);
        assert_eq!(AccessMode::from(false), AccessMode::Any);
        assert_eq!(AccessMode::StepFree.to_string(), "step-free");
    }
}

#[cfg(test)]
mod poi {
    use crate::{Language, PoiKind};

    #[test]
    fn tags_round_trip_through_table() {
        for kind in PoiKind::known() {
            assert_eq!(PoiKind::from_tag(kind.tag()), kind);
            assert!(kind.is_known());
        }
    }

    #[test]
    fn iso_aliases() {
        assert_eq!(PoiKind::from_tag("iso7001_restroom"), PoiKind::Restroom);
        assert_eq!(PoiKind::from_tag("iso7001_exit"), PoiKind::Exit);
        assert_eq!(PoiKind::from_tag("iso7001_firstaid"), PoiKind::FirstAid);
        // Aliases normalize to the venue code.
        assert_eq!(PoiKind::from_tag("iso7001_exit").tag(), "salida");
        assert_eq!(PoiKind::from_tag("iso7001_firstaid").tag(), "enfermeria");
        // Pictograms without a venue kind stay unknown.
        assert_eq!(PoiKind::from_tag("iso7001_info"), PoiKind::Unknown("iso7001_info".into()));
    }

    #[test]
    fn unknown_tag_falls_back() {
        let kind = PoiKind::from_tag("tirolesa");
        assert_eq!(kind, PoiKind::Unknown("tirolesa".into()));
        assert_eq!(kind.tag(), "tirolesa");
        assert_eq!(kind.attrs().icon, "info");
        assert!(!kind.attrs().critical);
    }

    #[test]
    fn labels() {
        let attrs = PoiKind::FirstAid.attrs();
        assert_eq!(attrs.label(Language::En), "1st Aid");
        assert_eq!(attrs.label(Language::Es), "1ros Aux");
        assert!(attrs.critical);
        assert!(!PoiKind::Water.attrs().critical);
    }
}
