//! Unit tests for tl-core primitives.

#[cfg(test)]
mod ids {
    use crate::JunctionId;

    #[test]
    fn index_roundtrip() {
        let id = JunctionId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(JunctionId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(JunctionId(0) < JunctionId(1));
    }

    #[test]
    fn out_of_range_index_rejected() {
        assert!(JunctionId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display_is_bare_index() {
        assert_eq!(JunctionId(7).to_string(), "7");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(28.6139, 77.2090);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        let a = GeoPoint::new(20.0, 78.0);
        let b = GeoPoint::new(21.0, 78.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 100.0, "got {d}");
    }

    #[test]
    fn display_six_decimals() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }

    #[test]
    fn non_finite_detected() {
        assert!(GeoPoint::ORIGIN.is_finite());
        assert!(!GeoPoint::new(f64::NAN, 5.0).is_finite());
        assert!(!GeoPoint::new(1.0, f64::NEG_INFINITY).is_finite());
    }
}

#[cfg(test)]
mod signal {
    use crate::{waiting_time, CoreError, SignalPhase};

    #[test]
    fn red_arrival_waits_for_next_cycle() {
        // cycle 15, green window [0, 5); arriving at 12 waits 3.
        let phase = SignalPhase { red: 10, green: 5, yellow: 0 };
        let wait = waiting_time(phase, 12);
        assert_eq!(wait, 3);
        assert_eq!(12 + wait, 15);
    }

    #[test]
    fn green_window_is_free() {
        let phase = SignalPhase { red: 10, green: 5, yellow: 2 };
        for t in 0..5 {
            assert_eq!(waiting_time(phase, t), 0, "t = {t}");
        }
    }

    #[test]
    fn yellow_blocks_like_red() {
        let phase = SignalPhase { red: 10, green: 5, yellow: 2 };
        // offset 5 and 6 are yellow → wait until 17.
        assert_eq!(waiting_time(phase, 5), 12);
        assert_eq!(waiting_time(phase, 6), 11);
    }

    #[test]
    fn zero_cycle_never_waits() {
        let phase = SignalPhase { red: 0, green: 0, yellow: 0 };
        assert_eq!(phase.cycle(), 0);
        for t in [0, 1, 17, u64::MAX] {
            assert_eq!(waiting_time(phase, t), 0);
        }
    }

    #[test]
    fn zero_green_always_waits_to_cycle_end() {
        let phase = SignalPhase { red: 4, green: 0, yellow: 0 };
        assert_eq!(waiting_time(phase, 0), 4);
        assert_eq!(waiting_time(phase, 3), 1);
    }

    #[test]
    fn periodic_in_cycle() {
        let phases = [
            SignalPhase { red: 10, green: 5, yellow: 2 },
            SignalPhase { red: 1, green: 1, yellow: 1 },
            SignalPhase { red: 30, green: 45, yellow: 5 },
            SignalPhase { red: 7, green: 0, yellow: 0 },
        ];
        for phase in phases {
            let cycle = phase.cycle();
            for t in 0..(3 * cycle) {
                assert_eq!(
                    waiting_time(phase, t),
                    waiting_time(phase, t + cycle),
                    "{phase} at t = {t}"
                );
            }
        }
    }

    #[test]
    fn always_bounded_by_cycle() {
        let phase = SignalPhase { red: 10, green: 5, yellow: 2 };
        for t in 0..200 {
            assert!(waiting_time(phase, t) < phase.cycle());
        }
    }

    #[test]
    fn always_green_never_waits() {
        let phase = SignalPhase::always_green(100);
        assert_eq!(phase.green as u64, phase.cycle());
        for t in 0..500 {
            assert_eq!(phase.waiting_time(t), 0);
        }
    }

    #[test]
    fn new_rejects_negative() {
        let err = SignalPhase::new(10, -1, 2).unwrap_err();
        assert!(matches!(err, CoreError::NegativeDuration { field: "green", value: -1 }));
    }

    #[test]
    fn new_rejects_overflow() {
        let err = SignalPhase::new(i64::from(u32::MAX) + 1, 0, 0).unwrap_err();
        assert!(matches!(err, CoreError::DurationOverflow { field: "red", .. }));
    }

    #[test]
    fn display_matches_dot_label() {
        let phase = SignalPhase { red: 10, green: 5, yellow: 2 };
        assert_eq!(phase.to_string(), "R:10 G:5 Y:2");
    }
}

#[cfg(test)]
mod config {
    use crate::config::DEFAULT_CAPACITY;
    use crate::CityConfig;

    #[test]
    fn default_is_valid() {
        let config = CityConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        let config = CityConfig { capacity: 0, ..CityConfig::default() };
        assert!(config.validate().is_err());
    }
}
