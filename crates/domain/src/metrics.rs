use chrono::{DateTime, Utc};

use crate::{EngineConfig, LoggedSet, mean};

/// Session-level totals derived from completed sets.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SessionMetrics {
    pub total_sets: u32,
    pub total_reps: u32,
    /// Kilograms.
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

/// Elapsed whole minutes, rounded. Unknown if either bound is missing or the
/// session ended before it started.
#[must_use]
pub fn session_duration_minutes(
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
) -> Option<u32> {
    let elapsed = ended_at? - started_at?;
    let seconds = elapsed.num_seconds();

    if seconds < 0 {
        return None;
    }

    u32::try_from((seconds + 30) / 60).ok()
}

/// Fold the completed sets of a session into its metrics.
///
/// Incomplete sets are skipped, so callers may pass the raw set list.
#[must_use]
pub fn aggregate_sets<'a>(
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    sets: impl IntoIterator<Item = &'a LoggedSet>,
    config: &EngineConfig,
) -> SessionMetrics {
    let sets = sets.into_iter().filter(|s| s.completed).collect::<Vec<_>>();

    if sets.is_empty() {
        return SessionMetrics {
            duration_minutes: session_duration_minutes(started_at, ended_at),
            ..SessionMetrics::default()
        };
    }

    let duration_minutes = session_duration_minutes(started_at, ended_at);
    let tonnage = sets.iter().map(|s| s.tonnage()).sum::<f32>();
    let workload = sets.iter().map(|s| s.normalized_load(config)).sum::<f32>();
    let avg_effort = mean(sets.iter().filter_map(|s| s.effort()).map(f32::from));
    let avg_intensity = mean(sets.iter().map(|s| s.intensity_factor()));
    #[allow(clippy::cast_precision_loss)]
    let avg_rest_seconds = mean(sets.iter().filter_map(|s| s.rest_seconds).map(|r| r as f32));

    #[allow(clippy::cast_precision_loss)]
    let density = duration_minutes
        .filter(|minutes| *minutes > 0)
        .map(|minutes| workload / minutes as f32);
    #[allow(clippy::cast_precision_loss)]
    let s_rpe_load = duration_minutes
        .zip(avg_effort)
        .map(|(minutes, effort)| minutes as f32 * effort);

    SessionMetrics {
        total_sets: u32::try_from(sets.len()).unwrap_or(u32::MAX),
        total_reps: sets.iter().filter_map(|s| s.rep_count()).sum(),
        tonnage,
        workload,
        hard_sets: u32::try_from(sets.iter().filter(|s| s.is_hard_set(config)).count())
            .unwrap_or(u32::MAX),
        avg_effort,
        avg_intensity,
        avg_rest_seconds,
        density,
        s_rpe_load,
        duration_minutes,
    }
}
