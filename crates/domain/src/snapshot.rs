use log::debug;
use strum::{AsRefStr, Display, EnumString};

use crate::{
    EngineConfig, FORMULA_VERSION, LoggedSet, Name, Session, SessionExercise, SessionMetrics,
    WeightUnit, aggregate_sets, round_to,
};

/// Scale in which the user enters and reads effort.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EffortScale {
    #[default]
    Rpe,
    Rir,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub weight_unit: WeightUnit,
    pub effort_scale: EffortScale,
}

impl Preferences {
    /// Convert a kilogram value into the preferred unit, rounded to one decimal.
    #[must_use]
    pub fn display_weight(&self, kg: f32) -> f32 {
        round_to(self.weight_unit.from_kg(kg), 1)
    }

    #[must_use]
    pub fn display_effort(&self, rpe: f32) -> f32 {
        match self.effort_scale {
            EffortScale::Rpe => rpe,
            EffortScale::Rir => 10.0 - rpe,
        }
    }
}

/// Everything that may change globally between two completions.
///
/// Read once by the caller and passed in, so a completion never observes a
/// half-updated setting.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionContext {
    pub formula_version: String,
    pub preferences: Preferences,
    pub config: EngineConfig,
}

impl CompletionContext {
    #[must_use]
    pub fn new(preferences: Preferences) -> Self {
        Self {
            formula_version: FORMULA_VERSION.to_string(),
            preferences,
            config: EngineConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BestE1rm {
    pub value_kg: f32,
    pub exercise: Name,
}

/// Metrics frozen when a session is completed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSnapshot {
    pub body_weight_kg: Option<f32>,
    pub preferences: Preferences,
    pub formula_version: String,
    pub metrics: SessionMetrics,
    pub best_e1rm: Option<BestE1rm>,
}

/// Whether a set is kept once its session is completed.
#[must_use]
pub fn qualifies_for_snapshot(set: &LoggedSet) -> bool {
    if !set.completed {
        return false;
    }

    if set.profile.is_time_based() && set.duration_minutes().is_some() {
        return true;
    }

    set.reps.is_some() && set.weight.is_some()
}

/// Remove all sets that do not qualify for the snapshot. Returns the number of
/// removed sets.
pub fn purge_sets(exercises: &mut [SessionExercise]) -> usize {
    exercises
        .iter_mut()
        .map(|exercise| {
            let before = exercise.sets.len();
            exercise.sets.retain(qualifies_for_snapshot);
            before - exercise.sets.len()
        })
        .sum()
}

/// Build the snapshot of a session as if it was completed with the given
/// context.
///
/// Non-qualifying sets are ignored, the session itself is not modified.
#[must_use]
pub fn build_completion_snapshot(
    session: &Session,
    context: &CompletionContext,
) -> CompletionSnapshot {
    let config = &context.config;
    let qualifying = session
        .exercises
        .iter()
        .flat_map(|e| e.sets.iter().map(move |s| (e, s)))
        .filter(|(_, s)| qualifies_for_snapshot(s))
        .collect::<Vec<_>>();

    let dropped = session
        .exercises
        .iter()
        .map(|e| e.sets.len())
        .sum::<usize>()
        - qualifying.len();
    if dropped > 0 {
        debug!(
            "{dropped} set(s) of session {} do not qualify for the snapshot",
            *session.id
        );
    }

    let metrics = aggregate_sets(
        session.started_at,
        session.ended_at,
        qualifying.iter().map(|(_, s)| *s),
        config,
    );

    let mut best_e1rm: Option<BestE1rm> = None;
    for (exercise, set) in &qualifying {
        let Some(value_kg) =
            set.estimated_one_rep_max(session.goal, exercise.e1rm_eligible, config)
        else {
            continue;
        };
        if best_e1rm.as_ref().is_none_or(|best| value_kg > best.value_kg) {
            best_e1rm = Some(BestE1rm {
                value_kg,
                exercise: exercise.name.clone(),
            });
        }
    }

    CompletionSnapshot {
        body_weight_kg: session.body_weight_kg,
        preferences: context.preferences,
        formula_version: context.formula_version.clone(),
        metrics,
        best_e1rm,
    }
}
