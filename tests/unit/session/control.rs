//! Tests for session gating, generation counting and board replacement

#[cfg(test)]
mod tests {
    use lifegrid::LifeError;
    use lifegrid::engine::presets::CoordinatePolicy;
    use lifegrid::io::configuration::SimulationConfig;
    use lifegrid::session::control::Session;

    #[test]
    fn test_new_session_is_stopped_and_empty() {
        let session = Session::new(25).unwrap();
        assert!(!session.is_running());
        assert_eq!(session.generation(), 0);
        assert_eq!(session.engine().size(), 25);
        assert_eq!(session.engine().population(), 0);
        assert_eq!(session.policy(), CoordinatePolicy::Skip);
    }

    #[test]
    fn test_new_session_rejects_zero_size() {
        assert!(matches!(
            Session::new(0),
            Err(LifeError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_from_config_uses_policy() {
        let config = SimulationConfig {
            size: 8,
            policy: CoordinatePolicy::Strict,
            ..SimulationConfig::default()
        };
        let mut session = Session::from_config(&config).unwrap();

        assert_eq!(session.engine().size(), 8);
        assert!(matches!(
            session.apply_preset("pulsar"),
            Err(LifeError::InvalidPresetCoordinate { .. })
        ));
        assert_eq!(session.engine().population(), 0);
    }

    #[test]
    fn test_start_and_stop_are_idempotent() {
        let mut session = Session::new(5).unwrap();
        session.start();
        session.start();
        assert!(session.is_running());
        session.stop();
        session.stop();
        assert!(!session.is_running());
    }

    // Tests toggles are ignored while running
    // Verified by forwarding toggles regardless of the running flag
    #[test]
    fn test_toggle_ignored_while_running() {
        let mut session = Session::new(5).unwrap();

        assert!(session.toggle(2, 2).unwrap());
        assert!(session.engine().is_alive(2, 2).unwrap());

        session.start();
        assert!(!session.toggle(2, 2).unwrap());
        assert!(session.engine().is_alive(2, 2).unwrap());

        assert!(matches!(
            session.toggle(5, 0),
            Err(LifeError::OutOfBounds { .. })
        ));
    }

    // Tests board replacement is refused while running
    // Verified by removing the running check from apply_preset
    #[test]
    fn test_board_replacement_rejected_while_running() {
        let mut session = Session::new(25).unwrap();
        session.apply_preset("blinker").unwrap();
        session.start();

        assert!(matches!(
            session.apply_preset("glider"),
            Err(LifeError::SimulationRunning { .. })
        ));
        assert!(session.apply_coordinates(&[[0, 0]]).is_err());
        assert!(session.randomize(0.5, 1).is_err());
        assert!(session.clear().is_err());
        assert_eq!(session.engine().population(), 3);
    }

    #[test]
    fn test_generation_counter_resets_on_replacement() {
        let mut session = Session::new(25).unwrap();
        session.apply_preset("glider").unwrap();

        session.advance();
        session.advance();
        assert_eq!(session.generation(), 2);

        session.apply_preset("blinker").unwrap();
        assert_eq!(session.generation(), 0);

        session.advance();
        session.clear().unwrap();
        assert_eq!(session.generation(), 0);
        assert_eq!(session.engine().population(), 0);
    }

    #[test]
    fn test_apply_coordinates_reports_skipped_cells() {
        let mut session = Session::new(4).unwrap();
        let report = session.apply_coordinates(&[[1, 1], [9, 9]]).unwrap();

        assert_eq!(report.applied, 1);
        assert_eq!(report.skipped, vec![[9, 9]]);
        assert!(session.engine().is_alive(1, 1).unwrap());
    }

    #[test]
    fn test_randomize_is_seeded() {
        let mut first = Session::new(16).unwrap();
        let mut second = Session::new(16).unwrap();
        first.randomize(0.3, 42).unwrap();
        second.randomize(0.3, 42).unwrap();

        assert_eq!(first.engine(), second.engine());
        assert!(first.randomize(-0.1, 42).is_err());
    }
}
