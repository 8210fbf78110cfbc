use derive_more::{Display, Into};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

pub const KG_PER_LB: f32 = 0.453_592_37;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, StrumDisplay, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum WeightUnit {
    #[default]
    #[strum(to_string = "kg", serialize = "kgs", serialize = "kilogram", serialize = "kilograms")]
    Kg,
    #[strum(to_string = "lb", serialize = "lbs", serialize = "pound", serialize = "pounds")]
    Lb,
}

impl WeightUnit {
    #[must_use]
    pub fn to_kg(self, value: f32) -> f32 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lb => value * KG_PER_LB,
        }
    }

    #[must_use]
    pub fn from_kg(self, value: f32) -> f32 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lb => value / KG_PER_LB,
        }
    }
}

#[must_use]
pub fn convert_weight(value: f32, from: WeightUnit, to: WeightUnit) -> f32 {
    if from == to {
        value
    } else {
        to.from_kg(from.to_kg(value))
    }
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !value.is_finite() {
            return Err(WeightError::NotFinite);
        }

        if value < 0.0 {
            return Err(WeightError::Negative);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn in_kg(self, unit: WeightUnit) -> f32 {
        unit.to_kg(self.0)
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must not be negative")]
    Negative,
    #[error("Weight must be a finite number")]
    NotFinite,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// Round to the given number of decimal places.
#[must_use]
pub fn round_to(value: f32, decimals: u8) -> f32 {
    let factor = 10_f32.powi(i32::from(decimals));
    (value * factor).round() / factor
}

/// Clamp into `[min, max]`, mapping NaN to `min`.
#[must_use]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[must_use]
pub fn seconds_to_minutes(seconds: u32) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let seconds = seconds as f32;
    seconds / 60.0
}

/// Average of `(value, weight)` pairs.
///
/// Pairs with a non-finite value or a non-positive weight are ignored. `None` is
/// returned if no pair remains.
#[must_use]
pub fn weighted_average(pairs: impl IntoIterator<Item = (f32, f32)>) -> Option<f32> {
    let (sum, total_weight) = pairs
        .into_iter()
        .filter(|(value, weight)| value.is_finite() && weight.is_finite() && *weight > 0.0)
        .fold((0.0, 0.0), |(sum, total), (value, weight)| {
            (sum + value * weight, total + weight)
        });

    if total_weight > 0.0 {
        Some(sum / total_weight)
    } else {
        None
    }
}

#[must_use]
pub fn mean(values: impl IntoIterator<Item = f32>) -> Option<f32> {
    weighted_average(values.into_iter().map(|v| (v, 1.0)))
}
