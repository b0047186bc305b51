//! Unit tests for gap-core primitives.

#[cfg(test)]
mod ids {
    use crate::FacilityId;

    #[test]
    fn index_roundtrip() {
        let id = FacilityId(42);
        assert_eq!(id.index(), 42);
        assert!(FacilityId(3) < id);
    }

    #[test]
    fn display() {
        assert_eq!(FacilityId(7).to_string(), "FacilityId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Coordinate, CoreError};

    #[test]
    fn valid_range_accepted() {
        assert!(Coordinate::try_new(42.87, 74.59).is_ok());
        assert!(Coordinate::try_new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(
            Coordinate::try_new(91.0, 0.0),
            Err(CoreError::InvalidCoordinate { .. })
        ));
        assert!(Coordinate::try_new(0.0, -180.5).is_err());
        assert!(Coordinate::try_new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn lon_degree_shrinks_with_latitude() {
        let equator = Coordinate::new(0.0, 0.0).meters_per_deg_lon();
        let bishkek = Coordinate::new(42.87, 74.59).meters_per_deg_lon();
        assert!((equator - 111_320.0).abs() < 1e-6);
        assert!(bishkek < equator * 0.75, "got {bishkek}");
    }
}

#[cfg(test)]
mod region {
    use crate::{Coordinate, CoreError, Region};

    #[test]
    fn inverted_bounds_rejected() {
        let r = Region::new(42.89, 42.80, 74.55, 74.75);
        assert!(matches!(r, Err(CoreError::InvalidRegion(_))));
        assert!(Region::new(42.80, 42.89, 74.75, 74.55).is_err());
    }

    #[test]
    fn invalid_corner_rejected() {
        assert!(Region::new(42.0, 95.0, 74.0, 75.0).is_err());
    }

    #[test]
    fn contains_is_inclusive() {
        let r = Region::new(42.80, 42.89, 74.55, 74.75).unwrap();
        assert!(r.contains(Coordinate::new(42.80, 74.55)));
        assert!(r.contains(Coordinate::new(42.89, 74.75)));
        assert!(!r.contains(Coordinate::new(42.891, 74.60)));
    }

    #[test]
    fn center_of_box() {
        let r = Region::new(42.80, 42.90, 74.50, 74.70).unwrap();
        let c = r.center();
        assert!((c.lat - 42.85).abs() < 1e-12);
        assert!((c.lon - 74.60).abs() < 1e-12);
    }
}

#[cfg(test)]
mod config {
    use crate::{AnalysisConfig, CoreError, ReductionPolicy};

    #[test]
    fn default_is_valid() {
        let cfg = AnalysisConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.reduction_policy, ReductionPolicy::IterativeCovering);
    }

    #[test]
    fn non_positive_values_rejected() {
        for cfg in [
            AnalysisConfig::new(0.0, 300.0, 1_000.0),
            AnalysisConfig::new(800.0, -1.0, 1_000.0),
            AnalysisConfig::new(800.0, 300.0, 0.0),
            AnalysisConfig::new(f64::INFINITY, 300.0, 1_000.0),
            AnalysisConfig::new(800.0, f64::NAN, 1_000.0),
        ] {
            assert!(
                matches!(cfg.validate(), Err(CoreError::InvalidConfiguration(_))),
                "{cfg:?} should be rejected"
            );
        }
    }

    #[test]
    fn error_names_the_field() {
        let err = AnalysisConfig::new(800.0, 0.0, 1_000.0).validate().unwrap_err();
        assert!(err.to_string().contains("grid_step_m"), "got {err}");
    }
}

#[cfg(test)]
mod transport {
    use crate::TravelMode;

    #[test]
    fn walking_time() {
        // 2 700 m at 90 m/min → 30 min
        assert!((TravelMode::Walk.travel_time_min(2_700.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn faster_modes_take_less_time() {
        let d = 3_000.0;
        assert!(TravelMode::Bike.travel_time_min(d) < TravelMode::Walk.travel_time_min(d));
        assert!(TravelMode::Car.travel_time_min(d) < TravelMode::Bike.travel_time_min(d));
    }
}

#[cfg(test)]
mod facility {
    use crate::FacilityCategory;

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!("School".parse::<FacilityCategory>().unwrap(), FacilityCategory::School);
        assert_eq!(" CLINIC ".parse::<FacilityCategory>().unwrap(), FacilityCategory::Clinic);
        assert_eq!(
            "Kindergarten".parse::<FacilityCategory>().unwrap(),
            FacilityCategory::Other("kindergarten".into())
        );
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{load_facilities_reader, CoreError, FacilityCategory};

    const CSV: &str = "\
district,category,name,lat,lon\n\
Oktyabrsky,school,School No. 5,42.8401,74.6102\n\
Leninsky,school,School No. 12,42.8620,74.5530\n\
Oktyabrsky,clinic,,42.8355,74.6251\n\
";

    #[test]
    fn groups_by_district() {
        let map = load_facilities_reader(Cursor::new(CSV)).unwrap();
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, ["Leninsky", "Oktyabrsky"]);
        assert_eq!(map["Oktyabrsky"].len(), 2);
        assert_eq!(map["Leninsky"].len(), 1);
    }

    #[test]
    fn empty_name_becomes_none() {
        let map = load_facilities_reader(Cursor::new(CSV)).unwrap();
        let okt = &map["Oktyabrsky"];
        assert_eq!(okt[0].name.as_deref(), Some("School No. 5"));
        assert_eq!(okt[1].name, None);
        assert_eq!(okt[1].category, FacilityCategory::Clinic);
    }

    #[test]
    fn out_of_range_coordinate_is_parse_error() {
        let bad = "district,category,name,lat,lon\nX,school,a,142.0,74.0\n";
        let err = load_facilities_reader(Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
        assert!(err.to_string().contains("record 2"), "got {err}");
    }

    #[test]
    fn malformed_number_is_parse_error() {
        let bad = "district,category,name,lat,lon\nX,school,a,north,74.0\n";
        assert!(matches!(load_facilities_reader(Cursor::new(bad)), Err(CoreError::Parse(_))));
    }
}
