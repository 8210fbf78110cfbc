use std::collections::BTreeSet;

use strum::{AsRefStr, Display, EnumString};

use crate::{
    AdditionalEquipmentMode, EquipmentKind, EquipmentMode, EquipmentOption, EquipmentRequirement,
    Label, MetricProfile, Name, OrGroup,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Goal {
    #[strum(to_string = "strength", serialize = "power")]
    Strength,
    #[strum(to_string = "hypertrophy", serialize = "muscle", serialize = "size")]
    Hypertrophy,
    #[strum(to_string = "endurance", serialize = "conditioning")]
    Endurance,
}

impl Goal {
    /// Goal implied by an average rep target.
    #[must_use]
    pub fn from_rep_average(average: f32) -> Goal {
        if average <= 6.0 {
            Goal::Strength
        } else if average <= 12.0 {
            Goal::Hypertrophy
        } else {
            Goal::Endurance
        }
    }

    /// Reps in reserve assumed for sets logged without an effort.
    #[must_use]
    pub fn assumed_reps_in_reserve(self) -> f32 {
        match self {
            Goal::Strength => 1.0,
            Goal::Hypertrophy => 2.0,
            Goal::Endurance => 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Numbers of a free-form rep target such as "8-12", "5x5" or "10".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepTarget(Vec<u32>);

impl RepTarget {
    #[must_use]
    pub fn parse(target: &str) -> Option<RepTarget> {
        let numbers = target
            .split(|c: char| !c.is_ascii_digit())
            .filter(|part| !part.is_empty())
            .filter_map(|part| part.parse::<u32>().ok())
            .collect::<Vec<_>>();

        if numbers.is_empty() {
            None
        } else {
            Some(RepTarget(numbers))
        }
    }

    #[must_use]
    pub fn average(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let average = self.0.iter().sum::<u32>() as f32 / self.0.len() as f32;
        average
    }
}

/// Catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: Name,
    pub category: Option<Label>,
    pub focus: Option<Label>,
    pub movement_pattern: Option<Label>,
    pub profile: MetricProfile,
    pub primary_muscles: Vec<Label>,
    pub secondary_muscles: Vec<Label>,
    pub body_parts: Vec<Label>,
    pub equipment: Vec<EquipmentOption>,
    pub equipment_mode: EquipmentMode,
    pub additional_equipment_mode: AdditionalEquipmentMode,
    pub or_group: Option<OrGroup>,
    pub difficulty: Option<Difficulty>,
    pub goal: Option<Goal>,
    pub rep_target: Option<RepTarget>,
    pub duration_target_seconds: Option<u32>,
    pub e1rm_eligible: bool,
}

impl Exercise {
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self {
            name,
            category: None,
            focus: None,
            movement_pattern: None,
            profile: MetricProfile::default(),
            primary_muscles: vec![],
            secondary_muscles: vec![],
            body_parts: vec![],
            equipment: vec![],
            equipment_mode: EquipmentMode::default(),
            additional_equipment_mode: AdditionalEquipmentMode::default(),
            or_group: None,
            difficulty: None,
            goal: None,
            rep_target: None,
            duration_target_seconds: None,
            e1rm_eligible: false,
        }
    }

    /// Primary, secondary and body-part labels.
    #[must_use]
    pub fn muscles(&self) -> BTreeSet<&Label> {
        self.primary_muscles
            .iter()
            .chain(&self.secondary_muscles)
            .chain(&self.body_parts)
            .collect()
    }

    #[must_use]
    pub fn equipment_kinds(&self) -> BTreeSet<EquipmentKind> {
        self.equipment.iter().map(|o| o.kind).collect()
    }

    #[must_use]
    pub fn inferred_goal(&self) -> Option<Goal> {
        self.goal.or_else(|| {
            self.rep_target
                .as_ref()
                .map(|target| Goal::from_rep_average(target.average()))
        })
    }

    /// Compile the equipment declaration into a requirement tree.
    ///
    /// A legacy OR-group replaces every other declaration. Otherwise the options
    /// are split into free-weight, additional and other buckets, each of which
    /// has to be satisfied.
    #[must_use]
    pub fn equipment_requirement(&self) -> EquipmentRequirement {
        if let Some(group) = self.or_group {
            return EquipmentRequirement::Any(
                group
                    .members()
                    .into_iter()
                    .map(EquipmentRequirement::Available)
                    .collect(),
            );
        }

        let mut free_weights = vec![];
        let mut additional = vec![];
        let mut other = vec![];

        for option in &self.equipment {
            let leaf = EquipmentRequirement::Available(option.clone());
            if option.kind.is_free_weight() {
                free_weights.push(leaf);
            } else if option.kind.is_additional() {
                additional.push(leaf);
            } else {
                other.push(leaf);
            }
        }

        EquipmentRequirement::All(vec![
            match self.equipment_mode {
                _ if free_weights.is_empty() => EquipmentRequirement::All(vec![]),
                EquipmentMode::Or => EquipmentRequirement::Any(free_weights),
                EquipmentMode::And => EquipmentRequirement::All(free_weights),
            },
            match self.additional_equipment_mode {
                AdditionalEquipmentMode::Required => EquipmentRequirement::All(additional),
                AdditionalEquipmentMode::Optional => {
                    EquipmentRequirement::Optional(Box::new(EquipmentRequirement::All(additional)))
                }
            },
            if other.is_empty() {
                EquipmentRequirement::All(vec![])
            } else {
                EquipmentRequirement::Any(other)
            },
        ])
    }
}
