use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc};
use strum::{AsRefStr, Display};

use crate::{EngineConfig, MAX_WINDOW_DAYS, Session};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TrainingStatus {
    #[default]
    Balanced,
    Undertraining,
    Overreaching,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyLoad {
    /// Monday of the week.
    pub week_start: NaiveDate,
    pub load: f32,
}

/// Acute and chronic training load of a user.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TrainingLoadSummary {
    pub acute_load: f32,
    pub chronic_load: f32,
    pub chronic_weekly_avg: f32,
    /// Zero if there is no chronic baseline.
    pub load_ratio: f32,
    pub status: TrainingStatus,
    pub high_risk: bool,
    pub days_since_last: Option<i64>,
    pub insufficient_data: bool,
    pub is_initial_phase: bool,
    pub weekly_trend: Vec<WeeklyLoad>,
}

impl TrainingLoadSummary {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            insufficient_data: true,
            ..Self::default()
        }
    }
}

/// Summarize the training load of the given sessions relative to `now`.
///
/// Sessions without a date or dated after `now` are ignored. Completed
/// sessions contribute the workload of their completion snapshot. Windows
/// longer than [`MAX_WINDOW_DAYS`] are shortened to that length.
#[must_use]
pub fn summarize_training_load<'a>(
    sessions: impl IntoIterator<Item = &'a Session>,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> TrainingLoadSummary {
    let today = now.date_naive();
    let dated = sessions
        .into_iter()
        .filter_map(|s| s.date().map(|d| (d, s)))
        .filter(|(d, _)| *d <= today)
        .collect::<Vec<_>>();

    let (Some(first), Some(last)) = (
        dated.iter().map(|(d, _)| *d).min(),
        dated.iter().map(|(d, _)| *d).max(),
    ) else {
        return TrainingLoadSummary::empty();
    };

    let chronic_window_days = config.chronic_window_days.clamp(1, MAX_WINDOW_DAYS);
    let chronic_window = i64::from(chronic_window_days);
    let acute_window = i64::from(config.acute_window_days.clamp(1, chronic_window_days));
    let chronic_start = today
        .checked_sub_days(Days::new(u64::from(chronic_window_days - 1)))
        .unwrap_or(NaiveDate::MIN);

    let mut daily_load: BTreeMap<NaiveDate, f32> = BTreeMap::new();
    let mut day = chronic_start;
    while day <= today {
        daily_load.insert(day, 0.0);
        let Some(next) = day.succ_opt() else {
            break;
        };
        day = next;
    }

    for (date, session) in &dated {
        if let Some(load) = daily_load.get_mut(date) {
            *load += session.metrics(config).metrics.workload;
        }
    }

    let acute_load = daily_load
        .iter()
        .filter(|(d, _)| (today - **d).num_days() < acute_window)
        .map(|(_, l)| l)
        .sum::<f32>();
    let chronic_load = daily_load.values().sum::<f32>();

    let days_of_data = ((today - first).num_days() + 1).min(chronic_window);
    let is_initial_phase = days_of_data < chronic_window;
    #[allow(clippy::cast_precision_loss)]
    let chronic_weekly_avg = chronic_load / days_of_data as f32 * 7.0;

    let insufficient_data = chronic_weekly_avg <= 0.0;
    let load_ratio = if insufficient_data {
        0.0
    } else {
        acute_load / chronic_weekly_avg
    };

    let (status, high_risk) = classify(load_ratio, insufficient_data, is_initial_phase, config);

    TrainingLoadSummary {
        acute_load,
        chronic_load,
        chronic_weekly_avg,
        load_ratio,
        status,
        high_risk,
        days_since_last: Some((today - last).num_days()),
        insufficient_data,
        is_initial_phase,
        weekly_trend: weekly_trend(&daily_load),
    }
}

fn classify(
    load_ratio: f32,
    insufficient_data: bool,
    is_initial_phase: bool,
    config: &EngineConfig,
) -> (TrainingStatus, bool) {
    if insufficient_data {
        return (TrainingStatus::Balanced, false);
    }

    if load_ratio >= config.overreaching_high_risk_ratio {
        (TrainingStatus::Overreaching, true)
    } else if load_ratio >= config.overreaching_caution_ratio {
        (TrainingStatus::Overreaching, false)
    } else if load_ratio < config.undertraining_ratio && !is_initial_phase {
        (TrainingStatus::Undertraining, false)
    } else {
        (TrainingStatus::Balanced, false)
    }
}

fn weekly_trend(daily_load: &BTreeMap<NaiveDate, f32>) -> Vec<WeeklyLoad> {
    let mut weeks: BTreeMap<NaiveDate, f32> = BTreeMap::new();

    for (date, load) in daily_load {
        let week_start = date
            .checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
            .unwrap_or(*date);
        *weeks.entry(week_start).or_insert(0.0) += load;
    }

    weeks
        .into_iter()
        .map(|(week_start, load)| WeeklyLoad { week_start, load })
        .collect()
}
