use std::collections::BTreeMap;

use strum::{AsRefStr, Display, EnumString};

use crate::{Label, Weight};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, Display, EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipmentKind {
    #[strum(to_string = "bodyweight", serialize = "body_weight", serialize = "none")]
    Bodyweight,
    #[strum(to_string = "dumbbell", serialize = "dumbbells")]
    Dumbbell,
    #[strum(to_string = "kettlebell", serialize = "kettlebells")]
    Kettlebell,
    #[strum(to_string = "band", serialize = "bands", serialize = "resistance_band")]
    Band,
    Barbell,
    #[strum(to_string = "plates", serialize = "plate")]
    Plates,
    Bench,
    #[strum(to_string = "machine", serialize = "cable")]
    Machine,
    #[strum(to_string = "prop", serialize = "other")]
    Prop,
}

impl EquipmentKind {
    #[must_use]
    pub fn is_free_weight(self) -> bool {
        matches!(
            self,
            EquipmentKind::Bodyweight
                | EquipmentKind::Dumbbell
                | EquipmentKind::Kettlebell
                | EquipmentKind::Band
                | EquipmentKind::Barbell
        )
    }

    #[must_use]
    pub fn is_additional(self) -> bool {
        matches!(self, EquipmentKind::Bench | EquipmentKind::Machine)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipmentMode {
    #[default]
    Or,
    And,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AdditionalEquipmentMode {
    #[default]
    Required,
    Optional,
}

/// Named set of mutually substitutable equipment kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OrGroup {
    FreeWeights,
    DumbbellOrKettlebell,
    BandOrCable,
    BodyweightOrBand,
    BenchOrFloor,
}

impl OrGroup {
    #[must_use]
    pub fn members(self) -> Vec<EquipmentOption> {
        match self {
            OrGroup::FreeWeights => vec![
                EquipmentOption::new(EquipmentKind::Dumbbell),
                EquipmentOption::new(EquipmentKind::Kettlebell),
                EquipmentOption::new(EquipmentKind::Barbell),
            ],
            OrGroup::DumbbellOrKettlebell => vec![
                EquipmentOption::new(EquipmentKind::Dumbbell),
                EquipmentOption::new(EquipmentKind::Kettlebell),
            ],
            OrGroup::BandOrCable => vec![
                EquipmentOption::new(EquipmentKind::Band),
                EquipmentOption::named(EquipmentKind::Machine, "cable"),
            ],
            OrGroup::BodyweightOrBand => vec![
                EquipmentOption::new(EquipmentKind::Bodyweight),
                EquipmentOption::new(EquipmentKind::Band),
            ],
            OrGroup::BenchOrFloor => vec![
                EquipmentOption::new(EquipmentKind::Bench),
                EquipmentOption::new(EquipmentKind::Bodyweight),
            ],
        }
    }
}

/// One way of equipping an exercise.
///
/// `name` narrows the kind (machine type, band level, prop). Every entry in
/// `requires` has to be available on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentOption {
    pub kind: EquipmentKind,
    pub name: Option<Label>,
    pub requires: Vec<EquipmentOption>,
}

impl EquipmentOption {
    #[must_use]
    pub fn new(kind: EquipmentKind) -> Self {
        Self {
            kind,
            name: None,
            requires: vec![],
        }
    }

    #[must_use]
    pub fn named(kind: EquipmentKind, name: &str) -> Self {
        Self {
            kind,
            name: Label::new(name),
            requires: vec![],
        }
    }

    #[must_use]
    pub fn requiring(mut self, requirement: EquipmentOption) -> Self {
        self.requires.push(requirement);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentInventory {
    pub bodyweight: bool,
    pub dumbbells: Vec<Weight>,
    pub kettlebells: Vec<Weight>,
    pub bands: Vec<Label>,
    pub barbell: bool,
    pub plates: Vec<Weight>,
    pub bench: bool,
    /// Machines by type. Benches and props are kept apart so that they never
    /// count as a machine.
    pub machines: BTreeMap<Label, bool>,
    pub props: Vec<Label>,
}

impl Default for EquipmentInventory {
    fn default() -> Self {
        Self {
            bodyweight: true,
            dumbbells: vec![],
            kettlebells: vec![],
            bands: vec![],
            barbell: false,
            plates: vec![],
            bench: false,
            machines: BTreeMap::new(),
            props: vec![],
        }
    }
}

impl EquipmentInventory {
    fn has_machine(&self, name: &Label) -> bool {
        self.machines.get(name).copied().unwrap_or(false)
    }

    fn has_kind(&self, kind: EquipmentKind, name: Option<&Label>) -> bool {
        match kind {
            EquipmentKind::Bodyweight => self.bodyweight,
            EquipmentKind::Dumbbell => !self.dumbbells.is_empty(),
            EquipmentKind::Kettlebell => !self.kettlebells.is_empty(),
            EquipmentKind::Band => match name {
                Some(level) => self.bands.contains(level),
                None => !self.bands.is_empty(),
            },
            EquipmentKind::Barbell => self.barbell,
            EquipmentKind::Plates => !self.plates.is_empty(),
            EquipmentKind::Bench => self.bench,
            EquipmentKind::Machine => match name {
                Some(name) => self.has_machine(name),
                None => self.machines.values().any(|available| *available),
            },
            EquipmentKind::Prop => name.is_some_and(|name| self.props.contains(name)),
        }
    }

    #[must_use]
    pub fn is_available(&self, option: &EquipmentOption) -> bool {
        self.has_kind(option.kind, option.name.as_ref())
            && option.requires.iter().all(|r| self.is_available(r))
    }
}

/// Equipment needed by an exercise, as a tree of capability checks.
#[derive(Debug, Clone, PartialEq)]
pub enum EquipmentRequirement {
    Available(EquipmentOption),
    /// Satisfied if every child is satisfied; trivially satisfied when empty.
    All(Vec<EquipmentRequirement>),
    /// Satisfied if at least one child is satisfied.
    Any(Vec<EquipmentRequirement>),
    Optional(Box<EquipmentRequirement>),
}

impl EquipmentRequirement {
    #[must_use]
    pub fn is_satisfied_by(&self, inventory: &EquipmentInventory) -> bool {
        match self {
            EquipmentRequirement::Available(option) => inventory.is_available(option),
            EquipmentRequirement::All(children) => {
                children.iter().all(|c| c.is_satisfied_by(inventory))
            }
            EquipmentRequirement::Any(children) => {
                children.iter().any(|c| c.is_satisfied_by(inventory))
            }
            EquipmentRequirement::Optional(_) => true,
        }
    }
}
