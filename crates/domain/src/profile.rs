use log::debug;
use strum::{AsRefStr, Display};

/// The calculation path of a set.
///
/// Every formula matches on this closed set of profiles. Stored spellings are
/// folded into it by [`MetricProfile::normalize`] before any calculation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum MetricProfile {
    #[default]
    WeightReps,
    Timed,
    Cardio,
    Mobility,
}

impl MetricProfile {
    #[must_use]
    pub fn normalize(label: &str) -> Option<MetricProfile> {
        let folded = label
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| match c {
                '-' | ' ' | '+' | '/' | '&' => '_',
                _ => c,
            })
            .collect::<String>();
        let key = folded
            .split('_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_");

        match key.as_str() {
            "weight_reps" | "weightreps" | "weight_and_reps" | "reps_weight" | "weight"
            | "strength" | "reps" | "bodyweight_reps" | "reps_only" => {
                Some(MetricProfile::WeightReps)
            }
            "timed" | "time" | "duration" | "isometric" | "hold" | "timed_strength"
            | "time_based" => Some(MetricProfile::Timed),
            "cardio" | "distance" | "distance_time" | "time_distance" | "conditioning" => {
                Some(MetricProfile::Cardio)
            }
            "mobility" | "stretch" | "stretching" | "flexibility" | "yoga" => {
                Some(MetricProfile::Mobility)
            }
            _ => None,
        }
    }

    /// Resolve an optional stored label, falling back to the default profile.
    #[must_use]
    pub fn from_label(label: Option<&str>) -> MetricProfile {
        match label {
            Some(label) if !label.trim().is_empty() => {
                MetricProfile::normalize(label).unwrap_or_else(|| {
                    debug!("unknown metric profile {label:?}, using default");
                    MetricProfile::default()
                })
            }
            _ => MetricProfile::default(),
        }
    }

    #[must_use]
    pub fn is_strength_like(self) -> bool {
        matches!(self, MetricProfile::WeightReps | MetricProfile::Timed)
    }

    #[must_use]
    pub fn is_time_based(self) -> bool {
        matches!(
            self,
            MetricProfile::Timed | MetricProfile::Cardio | MetricProfile::Mobility
        )
    }
}
