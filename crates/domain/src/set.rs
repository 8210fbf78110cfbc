use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use derive_more::{Display, Into};
use strum::{AsRefStr, EnumString};

use crate::{EngineConfig, Goal, MetricProfile, RIR, RPE, Weight, WeightUnit, clamp};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..10_000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }

    fn as_f32(self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let reps = self.0 as f32;
        reps
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 9999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Number of implements loaded with the logged weight.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ImplementCount {
    #[default]
    One = 1,
    Two = 2,
}

impl TryFrom<u32> for ImplementCount {
    type Error = ImplementCountError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ImplementCount::One),
            2 => Ok(ImplementCount::Two),
            _ => Err(ImplementCountError::OutOfRange(value)),
        }
    }
}

impl From<ImplementCount> for f32 {
    fn from(value: ImplementCount) -> Self {
        match value {
            ImplementCount::One => 1.0,
            ImplementCount::Two => 2.0,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImplementCountError {
    #[error("Implement count must be 1 or 2 ({0})")]
    OutOfRange(u32),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LoadType {
    #[default]
    Total,
    #[strum(to_string = "per_implement", serialize = "per-implement", serialize = "each")]
    PerImplement,
}

/// One performed working unit.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoggedSet {
    pub profile: MetricProfile,
    pub reps: Option<Reps>,
    pub weight: Option<Weight>,
    pub implement_count: ImplementCount,
    pub load_type: LoadType,
    pub unit: WeightUnit,
    pub rpe: Option<RPE>,
    pub rir: Option<RIR>,
    pub completed: bool,
    pub performed_at: Option<DateTime<Utc>>,
    pub duration_seconds: Option<u32>,
    pub rest_seconds: Option<u32>,
    pub extras: BTreeMap<String, String>,
}

impl LoggedSet {
    #[must_use]
    pub fn effort(&self) -> Option<RPE> {
        RPE::resolve(self.rpe, self.rir)
    }

    /// Weight moved per rep in kilograms, including every loaded implement.
    #[must_use]
    pub fn effective_weight_kg(&self) -> Option<f32> {
        let multiplier = match self.load_type {
            LoadType::PerImplement => f32::from(self.implement_count),
            LoadType::Total => 1.0,
        };
        self.weight.map(|w| w.in_kg(self.unit) * multiplier)
    }

    /// Reps that count as repetitions.
    ///
    /// Legacy time-based sets without a duration store seconds in `reps`, so
    /// those are not counted.
    #[must_use]
    pub fn rep_count(&self) -> Option<u32> {
        self.counted_reps().map(u32::from)
    }

    fn counted_reps(&self) -> Option<Reps> {
        if self.profile.is_time_based() && self.duration_seconds.is_none() {
            return None;
        }
        self.reps
    }

    #[must_use]
    pub fn duration_minutes(&self) -> Option<f32> {
        match (self.duration_seconds, self.reps) {
            (Some(seconds), _) => Some(crate::seconds_to_minutes(seconds)),
            (None, Some(reps)) if self.profile.is_time_based() => {
                Some(crate::seconds_to_minutes(u32::from(reps)))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn tonnage(&self) -> f32 {
        if !self.profile.is_strength_like() {
            return 0.0;
        }
        match (self.effective_weight_kg(), self.counted_reps()) {
            (Some(weight), Some(reps)) => weight * reps.as_f32(),
            _ => 0.0,
        }
    }

    #[must_use]
    pub fn intensity_factor(&self) -> f32 {
        intensity_factor(self.effort())
    }

    #[must_use]
    pub fn normalized_load(&self, config: &EngineConfig) -> f32 {
        let tonnage = self.tonnage();
        match self.profile {
            MetricProfile::WeightReps => tonnage * self.intensity_factor(),
            MetricProfile::Timed if tonnage > 0.0 => tonnage * self.intensity_factor(),
            MetricProfile::Timed | MetricProfile::Cardio | MetricProfile::Mobility => self
                .duration_minutes()
                .map_or(0.0, |minutes| {
                    minutes * self.intensity_factor() * config.time_load_factor
                }),
        }
    }

    /// Estimated one-rep max in kilograms.
    ///
    /// Reps are extended by the reps left in reserve before applying the Epley
    /// extrapolation. Without a logged effort the reserve is assumed from the
    /// training goal.
    #[must_use]
    pub fn estimated_one_rep_max(
        &self,
        goal: Option<Goal>,
        eligible: bool,
        config: &EngineConfig,
    ) -> Option<f32> {
        if !eligible || self.profile != MetricProfile::WeightReps {
            return None;
        }

        let reps = u32::from(self.reps?);

        if reps == 0 || reps > config.e1rm_max_reps {
            return None;
        }

        let weight = self.effective_weight_kg()?;

        if weight <= 0.0 {
            return None;
        }

        let reps_in_reserve = match self.effort() {
            Some(rpe) => 10.0 - f32::from(rpe),
            None => goal.map_or(0.0, Goal::assumed_reps_in_reserve),
        };
        #[allow(clippy::cast_precision_loss)]
        let reps_to_failure = reps as f32 + reps_in_reserve;

        if reps_to_failure <= 1.0 {
            return Some(weight);
        }

        Some(weight * (1.0 + reps_to_failure / 30.0))
    }

    #[must_use]
    pub fn is_hard_set(&self, config: &EngineConfig) -> bool {
        self.completed
            && self.profile.is_strength_like()
            && self
                .effort()
                .is_some_and(|rpe| f32::from(rpe) >= config.hard_set_rpe)
    }
}

/// Map an effort onto `0..=1`.
///
/// A missing effort counts as moderate (0.5).
#[must_use]
pub fn intensity_factor(rpe: Option<RPE>) -> f32 {
    match rpe {
        None => 0.5,
        Some(rpe) => {
            let value = f32::from(rpe);
            if value < 4.0 {
                0.1
            } else {
                clamp((value - 3.0) / 7.0, 0.0, 1.0)
            }
        }
    }
}
