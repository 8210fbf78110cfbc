/// Tag stored in every completion snapshot. Bump whenever the e1RM or the
/// normalized load formula changes shape.
pub const FORMULA_VERSION: &str = "2024.2-epley-rir";

pub const ACUTE_WINDOW_DAYS: u32 = 7;
pub const CHRONIC_WINDOW_DAYS: u32 = 28;
pub const HARD_SET_RPE: f32 = 8.0;
/// Scales minute-based load onto the numeric range of tonnage-based load.
pub const TIME_LOAD_FACTOR: f32 = 215.0;
pub const OVERREACHING_CAUTION_RATIO: f32 = 1.3;
pub const OVERREACHING_HIGH_RISK_RATIO: f32 = 1.5;
pub const UNDERTRAINING_RATIO: f32 = 0.8;
pub const E1RM_MAX_REPS: u32 = 12;
/// Longest acute or chronic window accepted.
pub const MAX_WINDOW_DAYS: u32 = 366;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub acute_window_days: u32,
    pub chronic_window_days: u32,
    pub hard_set_rpe: f32,
    pub time_load_factor: f32,
    pub overreaching_caution_ratio: f32,
    pub overreaching_high_risk_ratio: f32,
    pub undertraining_ratio: f32,
    pub e1rm_max_reps: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            acute_window_days: ACUTE_WINDOW_DAYS,
            chronic_window_days: CHRONIC_WINDOW_DAYS,
            hard_set_rpe: HARD_SET_RPE,
            time_load_factor: TIME_LOAD_FACTOR,
            overreaching_caution_ratio: OVERREACHING_CAUTION_RATIO,
            overreaching_high_risk_ratio: OVERREACHING_HIGH_RISK_RATIO,
            undertraining_ratio: UNDERTRAINING_RATIO,
            e1rm_max_reps: E1RM_MAX_REPS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.acute_window_days == 0 || self.chronic_window_days == 0 {
            return Err(ConfigError::EmptyWindow);
        }

        if self.chronic_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::WindowTooLong(MAX_WINDOW_DAYS));
        }

        if self.acute_window_days > self.chronic_window_days {
            return Err(ConfigError::AcuteWindowTooLong);
        }

        if !(self.time_load_factor.is_finite() && self.time_load_factor > 0.0) {
            return Err(ConfigError::NonPositive("time_load_factor"));
        }

        if !(0.0..=10.0).contains(&self.hard_set_rpe) {
            return Err(ConfigError::OutOfRange("hard_set_rpe"));
        }

        if !(self.undertraining_ratio > 0.0
            && self.undertraining_ratio < self.overreaching_caution_ratio
            && self.overreaching_caution_ratio <= self.overreaching_high_risk_ratio)
        {
            return Err(ConfigError::UnorderedRatios);
        }

        if self.e1rm_max_reps == 0 {
            return Err(ConfigError::NonPositive("e1rm_max_reps"));
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Load windows must span at least one day")]
    EmptyWindow,
    #[error("Load windows must not span more than {0} days")]
    WindowTooLong(u32),
    #[error("Acute window must not be longer than the chronic window")]
    AcuteWindowTooLong,
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    #[error("{0} is out of range")]
    OutOfRange(&'static str),
    #[error("Ratios must satisfy undertraining < caution <= high risk")]
    UnorderedRatios,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_engine_config_default() {
        let config = EngineConfig::default();

        assert_eq!(config.acute_window_days, 7);
        assert_eq!(config.chronic_window_days, 28);
        assert_eq!(config.time_load_factor, 215.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[rstest]
    #[case::empty_window(
        EngineConfig { acute_window_days: 0, ..EngineConfig::default() },
        ConfigError::EmptyWindow
    )]
    #[case::chronic_too_long(
        EngineConfig { chronic_window_days: 400_000_000, ..EngineConfig::default() },
        ConfigError::WindowTooLong(366)
    )]
    #[case::acute_too_long_for_any_window(
        EngineConfig { acute_window_days: 367, ..EngineConfig::default() },
        ConfigError::AcuteWindowTooLong
    )]
    #[case::acute_too_long(
        EngineConfig { acute_window_days: 30, ..EngineConfig::default() },
        ConfigError::AcuteWindowTooLong
    )]
    #[case::time_load_factor(
        EngineConfig { time_load_factor: 0.0, ..EngineConfig::default() },
        ConfigError::NonPositive("time_load_factor")
    )]
    #[case::hard_set_rpe(
        EngineConfig { hard_set_rpe: 11.0, ..EngineConfig::default() },
        ConfigError::OutOfRange("hard_set_rpe")
    )]
    #[case::caution_above_high_risk(
        EngineConfig { overreaching_caution_ratio: 1.6, ..EngineConfig::default() },
        ConfigError::UnorderedRatios
    )]
    #[case::e1rm_max_reps(
        EngineConfig { e1rm_max_reps: 0, ..EngineConfig::default() },
        ConfigError::NonPositive("e1rm_max_reps")
    )]
    fn test_engine_config_validate(#[case] config: EngineConfig, #[case] expected: ConfigError) {
        assert_eq!(config.validate(), Err(expected));
    }

    #[test]
    fn test_engine_config_validate_longest_window() {
        let config = EngineConfig {
            acute_window_days: MAX_WINDOW_DAYS,
            chronic_window_days: MAX_WINDOW_DAYS,
            ..EngineConfig::default()
        };

        assert_eq!(config.validate(), Ok(()));
    }
}
