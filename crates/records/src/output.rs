use chrono::NaiveDate;
use trainload_domain as domain;

use crate::{PreferencesRecord, RecordError};

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct SessionMetricsRecord {
    pub total_sets: u32,
    pub total_reps: u32,
    pub tonnage: f32,
    pub workload: f32,
    pub hard_sets: u32,
    pub avg_effort: Option<f32>,
    pub avg_intensity: Option<f32>,
    pub avg_rest_seconds: Option<f32>,
    pub density: Option<f32>,
    pub s_rpe_load: Option<f32>,
    pub duration_minutes: Option<u32>,
}

impl From<&domain::SessionMetrics> for SessionMetricsRecord {
    fn from(value: &domain::SessionMetrics) -> Self {
        Self {
            total_sets: value.total_sets,
            total_reps: value.total_reps,
            tonnage: value.tonnage,
            workload: value.workload,
            hard_sets: value.hard_sets,
            avg_effort: value.avg_effort,
            avg_intensity: value.avg_intensity,
            avg_rest_seconds: value.avg_rest_seconds,
            density: value.density,
            s_rpe_load: value.s_rpe_load,
            duration_minutes: value.duration_minutes,
        }
    }
}

impl From<SessionMetricsRecord> for domain::SessionMetrics {
    fn from(value: SessionMetricsRecord) -> Self {
        Self {
            total_sets: value.total_sets,
            total_reps: value.total_reps,
            tonnage: value.tonnage,
            workload: value.workload,
            hard_sets: value.hard_sets,
            avg_effort: value.avg_effort,
            avg_intensity: value.avg_intensity,
            avg_rest_seconds: value.avg_rest_seconds,
            density: value.density,
            s_rpe_load: value.s_rpe_load,
            duration_minutes: value.duration_minutes,
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct SessionMetricsViewRecord {
    pub source: String,
    #[serde(flatten)]
    pub metrics: SessionMetricsRecord,
}

impl From<&domain::SessionMetricsView> for SessionMetricsViewRecord {
    fn from(value: &domain::SessionMetricsView) -> Self {
        Self {
            source: value.source.to_string(),
            metrics: SessionMetricsRecord::from(&value.metrics),
        }
    }
}

/// Frozen completion metrics, stored next to the session.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct CompletionSnapshotRecord {
    pub body_weight_kg: Option<f32>,
    pub preferences: PreferencesRecord,
    pub formula_version: String,
    pub metrics: SessionMetricsRecord,
    pub best_e1rm_kg: Option<f32>,
    pub best_e1rm_exercise: Option<String>,
}

impl From<&domain::CompletionSnapshot> for CompletionSnapshotRecord {
    fn from(value: &domain::CompletionSnapshot) -> Self {
        Self {
            body_weight_kg: value.body_weight_kg,
            preferences: PreferencesRecord::from(&value.preferences),
            formula_version: value.formula_version.clone(),
            metrics: SessionMetricsRecord::from(&value.metrics),
            best_e1rm_kg: value.best_e1rm.as_ref().map(|b| b.value_kg),
            best_e1rm_exercise: value.best_e1rm.as_ref().map(|b| b.exercise.to_string()),
        }
    }
}

impl TryFrom<CompletionSnapshotRecord> for domain::CompletionSnapshot {
    type Error = RecordError;

    fn try_from(value: CompletionSnapshotRecord) -> Result<Self, Self::Error> {
        let best_e1rm = match (value.best_e1rm_kg, value.best_e1rm_exercise) {
            (Some(value_kg), Some(exercise)) => Some(domain::BestE1rm {
                value_kg,
                exercise: domain::Name::new(&exercise)?,
            }),
            (None, None) => None,
            (Some(_), None) => return Err(RecordError::MissingField("best e1RM exercise")),
            (None, Some(_)) => return Err(RecordError::MissingField("best e1RM")),
        };
        Ok(Self {
            body_weight_kg: value.body_weight_kg,
            preferences: value.preferences.into(),
            formula_version: value.formula_version,
            metrics: value.metrics.into(),
            best_e1rm,
        })
    }
}

#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq)]
pub struct WeeklyLoadRecord {
    pub week_start: NaiveDate,
    pub load: f32,
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct TrainingLoadSummaryRecord {
    pub acute_load: f32,
    pub chronic_load: f32,
    pub chronic_weekly_avg: f32,
    pub load_ratio: f32,
    pub status: String,
    pub high_risk: bool,
    pub days_since_last: Option<i64>,
    pub insufficient_data: bool,
    pub is_initial_phase: bool,
    pub weekly_trend: Vec<WeeklyLoadRecord>,
}

impl From<&domain::TrainingLoadSummary> for TrainingLoadSummaryRecord {
    fn from(value: &domain::TrainingLoadSummary) -> Self {
        Self {
            acute_load: value.acute_load,
            chronic_load: value.chronic_load,
            chronic_weekly_avg: value.chronic_weekly_avg,
            load_ratio: value.load_ratio,
            status: value.status.to_string(),
            high_risk: value.high_risk,
            days_since_last: value.days_since_last,
            insufficient_data: value.insufficient_data,
            is_initial_phase: value.is_initial_phase,
            weekly_trend: value
                .weekly_trend
                .iter()
                .map(|w| WeeklyLoadRecord {
                    week_start: w.week_start,
                    load: w.load,
                })
                .collect(),
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct SubstitutionRecord {
    pub name: String,
    pub score: f32,
}

impl From<&domain::Substitute<'_>> for SubstitutionRecord {
    fn from(value: &domain::Substitute<'_>) -> Self {
        Self {
            name: value.exercise.name.to_string(),
            score: value.score,
        }
    }
}
