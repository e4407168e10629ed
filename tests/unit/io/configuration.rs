//! Tests for configuration constants and defaults

#[cfg(test)]
mod tests {
    use lifegrid::engine::presets::{CoordinatePolicy, find_preset};
    use lifegrid::io::configuration::{
        ALIVE_COLOR, DEAD_COLOR, DEFAULT_CELL_SIZE_PX, DEFAULT_GRID_SIZE, DEFAULT_PRESET,
        DEFAULT_STEP_INTERVAL_MS, MAX_CELL_SIZE_PX, MAX_GRID_DIMENSION, SimulationConfig,
    };
    use std::time::Duration;

    #[test]
    fn test_default_config_matches_constants() {
        let config = SimulationConfig::default();

        assert_eq!(config.size, DEFAULT_GRID_SIZE);
        assert_eq!(config.policy, CoordinatePolicy::Skip);
        assert_eq!(
            config.step_interval,
            Duration::from_millis(DEFAULT_STEP_INTERVAL_MS)
        );
        assert!(config.generation_limit.is_none());
    }

    // Tests defaults are mutually consistent
    // Verified by naming a default preset that is not registered
    #[test]
    fn test_defaults_are_consistent() {
        const {
            assert!(DEFAULT_GRID_SIZE > 0 && DEFAULT_GRID_SIZE <= MAX_GRID_DIMENSION);
            assert!(DEFAULT_CELL_SIZE_PX > 0 && DEFAULT_CELL_SIZE_PX <= MAX_CELL_SIZE_PX);
        }
        assert!(find_preset(DEFAULT_PRESET).is_ok());
        assert_ne!(ALIVE_COLOR, DEAD_COLOR);
    }
}
