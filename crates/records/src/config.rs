use trainload_domain as domain;

use crate::RecordError;

/// Engine settings as read from a JSON document. Absent fields keep their
/// default.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EngineConfigRecord {
    pub acute_window_days: u32,
    pub chronic_window_days: u32,
    pub hard_set_rpe: f32,
    pub time_load_factor: f32,
    pub overreaching_caution_ratio: f32,
    pub overreaching_high_risk_ratio: f32,
    pub undertraining_ratio: f32,
    pub e1rm_max_reps: u32,
}

impl Default for EngineConfigRecord {
    fn default() -> Self {
        Self::from(&domain::EngineConfig::default())
    }
}

impl From<&domain::EngineConfig> for EngineConfigRecord {
    fn from(value: &domain::EngineConfig) -> Self {
        Self {
            acute_window_days: value.acute_window_days,
            chronic_window_days: value.chronic_window_days,
            hard_set_rpe: value.hard_set_rpe,
            time_load_factor: value.time_load_factor,
            overreaching_caution_ratio: value.overreaching_caution_ratio,
            overreaching_high_risk_ratio: value.overreaching_high_risk_ratio,
            undertraining_ratio: value.undertraining_ratio,
            e1rm_max_reps: value.e1rm_max_reps,
        }
    }
}

impl TryFrom<EngineConfigRecord> for domain::EngineConfig {
    type Error = RecordError;

    fn try_from(value: EngineConfigRecord) -> Result<Self, Self::Error> {
        let config = Self {
            acute_window_days: value.acute_window_days,
            chronic_window_days: value.chronic_window_days,
            hard_set_rpe: value.hard_set_rpe,
            time_load_factor: value.time_load_factor,
            overreaching_caution_ratio: value.overreaching_caution_ratio,
            overreaching_high_risk_ratio: value.overreaching_high_risk_ratio,
            undertraining_ratio: value.undertraining_ratio,
            e1rm_max_reps: value.e1rm_max_reps,
        };
        config.validate()?;
        Ok(config)
    }
}

pub fn config_from_json(json: &str) -> Result<domain::EngineConfig, RecordError> {
    domain::EngineConfig::try_from(serde_json::from_str::<EngineConfigRecord>(json)?)
}
