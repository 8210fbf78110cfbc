use std::{collections::BTreeMap, str::FromStr};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde_json::Value;
use trainload_domain as domain;
use uuid::Uuid;

use crate::{CompletionSnapshotRecord, RecordError, lenient};

/// A logged set as stored by the persistence layer.
#[derive(serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct SetRecord {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub metric_profile: Option<String>,
    #[serde(deserialize_with = "lenient::optional_u32")]
    pub reps: Option<u32>,
    #[serde(deserialize_with = "lenient::optional_f32")]
    pub weight: Option<f32>,
    #[serde(deserialize_with = "lenient::optional_u32")]
    pub implement_count: Option<u32>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub load_type: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub weight_unit: Option<String>,
    #[serde(deserialize_with = "lenient::optional_f32")]
    pub rpe: Option<f32>,
    #[serde(deserialize_with = "lenient::optional_f32")]
    pub rir: Option<f32>,
    #[serde(deserialize_with = "lenient::optional_bool")]
    pub completed: Option<bool>,
    #[serde(deserialize_with = "lenient::optional_datetime")]
    pub performed_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::optional_u32")]
    pub duration_seconds: Option<u32>,
    #[serde(
        alias = "rest_seconds_actual",
        deserialize_with = "lenient::optional_u32"
    )]
    pub rest_seconds: Option<u32>,
    pub extras: BTreeMap<String, Value>,
}

impl SetRecord {
    /// Convert into a domain set. Sets without an own profile inherit the
    /// profile of their exercise.
    #[must_use]
    pub fn into_logged_set(self, exercise_profile: domain::MetricProfile) -> domain::LoggedSet {
        let profile = match self.metric_profile.as_deref() {
            Some(label) => domain::MetricProfile::normalize(label).unwrap_or_else(|| {
                debug!("unknown metric profile {label:?}, using {exercise_profile}");
                exercise_profile
            }),
            None => exercise_profile,
        };

        domain::LoggedSet {
            profile,
            reps: self.reps.and_then(|r| valid("reps", r, domain::Reps::new)),
            weight: self
                .weight
                .and_then(|w| valid("weight", w, domain::Weight::new)),
            implement_count: self
                .implement_count
                .and_then(|c| valid("implement count", c, domain::ImplementCount::try_from))
                .unwrap_or_default(),
            load_type: parse_label("load type", self.load_type.as_deref()).unwrap_or_default(),
            unit: parse_label("weight unit", self.weight_unit.as_deref()).unwrap_or_default(),
            rpe: self.rpe.and_then(|v| valid("RPE", v, domain::RPE::new)),
            rir: self.rir.and_then(|v| valid("RIR", v, domain::RIR::new)),
            completed: self.completed.unwrap_or(false),
            performed_at: self.performed_at,
            duration_seconds: self.duration_seconds,
            rest_seconds: self.rest_seconds,
            extras: self
                .extras
                .into_iter()
                .map(|(key, value)| match value {
                    Value::String(s) => (key, s),
                    other => (key, other.to_string()),
                })
                .collect(),
        }
    }
}

#[derive(serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct SessionExerciseRecord {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub name: Option<String>,
    pub primary_muscles: Vec<String>,
    pub secondary_muscles: Vec<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub metric_profile: Option<String>,
    #[serde(deserialize_with = "lenient::optional_bool")]
    pub e1rm_eligible: Option<bool>,
    #[serde(alias = "order_index", deserialize_with = "lenient::optional_u32")]
    pub order: Option<u32>,
    pub sets: Vec<SetRecord>,
}

impl TryFrom<SessionExerciseRecord> for domain::SessionExercise {
    type Error = RecordError;

    fn try_from(value: SessionExerciseRecord) -> Result<Self, Self::Error> {
        let name = value.name.ok_or(RecordError::MissingField("exercise name"))?;
        let profile = domain::MetricProfile::from_label(value.metric_profile.as_deref());
        Ok(Self {
            name: domain::Name::new(&name)?,
            primary_muscles: labels(&value.primary_muscles),
            secondary_muscles: labels(&value.secondary_muscles),
            profile,
            e1rm_eligible: value.e1rm_eligible.unwrap_or(false),
            order: value.order.unwrap_or_default(),
            sets: value
                .sets
                .into_iter()
                .map(|s| s.into_logged_set(profile))
                .collect(),
        })
    }
}

#[derive(serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct SessionRecord {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub user_id: Option<String>,
    pub focus: Vec<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub goal: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub intensity: Option<String>,
    #[serde(deserialize_with = "lenient::optional_datetime")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::optional_datetime")]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::optional_f32")]
    pub body_weight: Option<f32>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub body_weight_unit: Option<String>,
    pub exercises: Vec<SessionExerciseRecord>,
    pub snapshot: Option<CompletionSnapshotRecord>,
}

impl TryFrom<SessionRecord> for domain::Session {
    type Error = RecordError;

    fn try_from(value: SessionRecord) -> Result<Self, Self::Error> {
        let id = parse_id("session id", value.id.as_deref())?;
        let user_id = parse_id("session owner", value.user_id.as_deref())?;
        let body_weight_unit: domain::WeightUnit =
            parse_label("weight unit", value.body_weight_unit.as_deref()).unwrap_or_default();

        let mut exercises = value
            .exercises
            .into_iter()
            .map(domain::SessionExercise::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        exercises.sort_by_key(|e| e.order);

        let session = Self {
            id: id.into(),
            user_id: user_id.into(),
            focus: labels(&value.focus),
            goal: parse_label("goal", value.goal.as_deref()),
            intensity: value.intensity.as_deref().and_then(domain::Label::new),
            started_at: value.started_at,
            ended_at: value.ended_at,
            status: parse_label("session status", value.status.as_deref()).unwrap_or_default(),
            body_weight_kg: value
                .body_weight
                .and_then(|w| valid("body weight", w, domain::Weight::new))
                .map(|w| w.in_kg(body_weight_unit)),
            exercises,
            snapshot: value
                .snapshot
                .map(domain::CompletionSnapshot::try_from)
                .transpose()?,
        };
        session.validate()?;

        Ok(session)
    }
}

pub fn sessions_from_json(json: &str) -> Result<Vec<domain::Session>, RecordError> {
    serde_json::from_str::<Vec<SessionRecord>>(json)?
        .into_iter()
        .map(domain::Session::try_from)
        .collect()
}

/// An equipment option, either just the kind or a structured entry.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum EquipmentOptionRecord {
    Kind(String),
    Option {
        kind: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        requires: Vec<EquipmentOptionRecord>,
    },
}

impl EquipmentOptionRecord {
    fn into_option(self) -> Option<domain::EquipmentOption> {
        match self {
            EquipmentOptionRecord::Kind(kind) => {
                parse_label("equipment kind", Some(&kind)).map(domain::EquipmentOption::new)
            }
            EquipmentOptionRecord::Option {
                kind,
                name,
                requires,
            } => Some(domain::EquipmentOption {
                kind: parse_label("equipment kind", Some(&kind))?,
                name: name.as_deref().and_then(domain::Label::new),
                requires: requires
                    .into_iter()
                    .filter_map(EquipmentOptionRecord::into_option)
                    .collect(),
            }),
        }
    }
}

/// A catalog entry.
#[derive(serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct ExerciseRecord {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub focus: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub movement_pattern: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub metric_profile: Option<String>,
    pub primary_muscles: Vec<String>,
    pub secondary_muscles: Vec<String>,
    pub body_parts: Vec<String>,
    pub equipment: Vec<EquipmentOptionRecord>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub equipment_mode: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub additional_equipment_mode: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub or_group: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub difficulty: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub goal: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub rep_target: Option<String>,
    #[serde(deserialize_with = "lenient::optional_u32")]
    pub duration_target_seconds: Option<u32>,
    #[serde(deserialize_with = "lenient::optional_bool")]
    pub e1rm_eligible: Option<bool>,
}

impl TryFrom<ExerciseRecord> for domain::Exercise {
    type Error = RecordError;

    fn try_from(value: ExerciseRecord) -> Result<Self, Self::Error> {
        let name = value.name.ok_or(RecordError::MissingField("exercise name"))?;
        Ok(Self {
            name: domain::Name::new(&name)?,
            category: value.category.as_deref().and_then(domain::Label::new),
            focus: value.focus.as_deref().and_then(domain::Label::new),
            movement_pattern: value.movement_pattern.as_deref().and_then(domain::Label::new),
            profile: domain::MetricProfile::from_label(value.metric_profile.as_deref()),
            primary_muscles: labels(&value.primary_muscles),
            secondary_muscles: labels(&value.secondary_muscles),
            body_parts: labels(&value.body_parts),
            equipment: value
                .equipment
                .into_iter()
                .filter_map(EquipmentOptionRecord::into_option)
                .collect(),
            equipment_mode: parse_label("equipment mode", value.equipment_mode.as_deref())
                .unwrap_or_default(),
            additional_equipment_mode: parse_label(
                "additional equipment mode",
                value.additional_equipment_mode.as_deref(),
            )
            .unwrap_or_default(),
            or_group: parse_label("OR-group", value.or_group.as_deref()),
            difficulty: parse_label("difficulty", value.difficulty.as_deref()),
            goal: parse_label("goal", value.goal.as_deref()),
            rep_target: value.rep_target.as_deref().and_then(domain::RepTarget::parse),
            duration_target_seconds: value.duration_target_seconds,
            e1rm_eligible: value.e1rm_eligible.unwrap_or(false),
        })
    }
}

pub fn catalog_from_json(json: &str) -> Result<Vec<domain::Exercise>, RecordError> {
    serde_json::from_str::<Vec<ExerciseRecord>>(json)?
        .into_iter()
        .map(domain::Exercise::try_from)
        .collect()
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EquipmentInventoryRecord {
    #[serde(deserialize_with = "lenient::optional_bool")]
    pub bodyweight: Option<bool>,
    #[serde(deserialize_with = "lenient::f32_list")]
    pub dumbbells: Vec<f32>,
    #[serde(deserialize_with = "lenient::f32_list")]
    pub kettlebells: Vec<f32>,
    pub bands: Vec<String>,
    #[serde(deserialize_with = "lenient::optional_bool")]
    pub barbell: Option<bool>,
    #[serde(deserialize_with = "lenient::f32_list")]
    pub plates: Vec<f32>,
    #[serde(deserialize_with = "lenient::optional_bool")]
    pub bench: Option<bool>,
    /// Machine types. A `bench` entry is read as the bench flag.
    pub machines: BTreeMap<String, bool>,
    pub props: Vec<String>,
}

impl Default for EquipmentInventoryRecord {
    fn default() -> Self {
        Self {
            bodyweight: Some(true),
            dumbbells: vec![],
            kettlebells: vec![],
            bands: vec![],
            barbell: Some(false),
            plates: vec![],
            bench: None,
            machines: BTreeMap::new(),
            props: vec![],
        }
    }
}

impl From<EquipmentInventoryRecord> for domain::EquipmentInventory {
    fn from(value: EquipmentInventoryRecord) -> Self {
        let weights = |loads: Vec<f32>| {
            loads
                .into_iter()
                .filter_map(|w| valid("equipment load", w, domain::Weight::new))
                .collect::<Vec<_>>()
        };
        let mut machines = value
            .machines
            .into_iter()
            .filter_map(|(name, available)| {
                domain::Label::new(&name).map(|label| (label, available))
            })
            .collect::<BTreeMap<_, _>>();
        let listed_bench = domain::Label::new("bench").and_then(|l| machines.remove(&l));
        Self {
            bodyweight: value.bodyweight.unwrap_or(true),
            dumbbells: weights(value.dumbbells),
            kettlebells: weights(value.kettlebells),
            bands: labels(&value.bands),
            barbell: value.barbell.unwrap_or(false),
            plates: weights(value.plates),
            bench: value.bench.or(listed_bench).unwrap_or(false),
            machines,
            props: labels(&value.props),
        }
    }
}

pub fn inventory_from_json(json: &str) -> Result<domain::EquipmentInventory, RecordError> {
    Ok(serde_json::from_str::<EquipmentInventoryRecord>(json)?.into())
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PreferencesRecord {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub weight_unit: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub effort_scale: Option<String>,
}

impl From<PreferencesRecord> for domain::Preferences {
    fn from(value: PreferencesRecord) -> Self {
        Self {
            weight_unit: parse_label("weight unit", value.weight_unit.as_deref())
                .unwrap_or_default(),
            effort_scale: parse_label("effort scale", value.effort_scale.as_deref())
                .unwrap_or_default(),
        }
    }
}

impl From<&domain::Preferences> for PreferencesRecord {
    fn from(value: &domain::Preferences) -> Self {
        Self {
            weight_unit: Some(value.weight_unit.to_string()),
            effort_scale: Some(value.effort_scale.to_string()),
        }
    }
}

fn parse_label<T: FromStr>(field: &'static str, value: Option<&str>) -> Option<T> {
    let value = value?;
    match value.trim().parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("ignoring unknown {field} {value:?}");
            None
        }
    }
}

fn valid<T, U, E: std::fmt::Display>(
    field: &'static str,
    value: T,
    new: impl FnOnce(T) -> Result<U, E>,
) -> Option<U> {
    match new(value) {
        Ok(v) => Some(v),
        Err(err) => {
            warn!("ignoring invalid {field}: {err}");
            None
        }
    }
}

fn labels(values: &[String]) -> Vec<domain::Label> {
    values.iter().filter_map(|v| domain::Label::new(v)).collect()
}

fn parse_id(field: &'static str, value: Option<&str>) -> Result<Uuid, RecordError> {
    Ok(Uuid::parse_str(value.ok_or(RecordError::MissingField(field))?)?)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::tests::data::{CATALOG_JSON, INVENTORY_JSON, SESSION_ID, SESSIONS_JSON, USER_ID};

    #[test]
    fn test_set_record_lenient_fields() {
        let record: SetRecord = serde_json::from_value(json!({
            "metric_profile": "weight-reps",
            "reps": "10",
            "weight": "",
            "rpe": "hard",
            "rir": 2,
            "completed": 1,
            "rest_seconds_actual": "90",
            "extras": {"tempo": "3-1-1", "side": 1}
        }))
        .unwrap();

        let set = record.into_logged_set(domain::MetricProfile::Cardio);

        assert_eq!(set.profile, domain::MetricProfile::WeightReps);
        assert_eq!(set.reps, Some(domain::Reps::new(10).unwrap()));
        assert_eq!(set.weight, None);
        assert_eq!(set.rpe, None);
        assert_eq!(set.rir, Some(domain::RIR::new(2.0).unwrap()));
        assert!(set.completed);
        assert_eq!(set.rest_seconds, Some(90));
        assert_eq!(set.extras.get("tempo").map(String::as_str), Some("3-1-1"));
        assert_eq!(set.extras.get("side").map(String::as_str), Some("1"));
    }

    #[rstest]
    #[case::rpe(json!({"rpe": 7.2}), 7.2)]
    #[case::rpe_string(json!({"rpe": "7.2"}), 7.2)]
    #[case::rir(json!({"rir": 1.5}), 8.5)]
    #[case::rir_fraction(json!({"rir": "2.3"}), 7.7)]
    fn test_set_record_fractional_effort(#[case] effort: Value, #[case] expected: f32) {
        let mut record = json!({"reps": 10, "weight": 100, "completed": true});
        record
            .as_object_mut()
            .unwrap()
            .extend(effort.as_object().unwrap().clone());
        let set = serde_json::from_value::<SetRecord>(record)
            .unwrap()
            .into_logged_set(domain::MetricProfile::WeightReps);

        assert_approx_eq!(f32::from(set.effort().unwrap()), expected);
        assert_approx_eq!(set.intensity_factor(), (expected - 3.0) / 7.0);
    }

    #[rstest]
    #[case::inherited(json!({}), domain::MetricProfile::Cardio)]
    #[case::unknown(json!({"metric_profile": "juggling"}), domain::MetricProfile::Cardio)]
    #[case::own(json!({"metric_profile": "Timed"}), domain::MetricProfile::Timed)]
    fn test_set_record_profile(#[case] record: Value, #[case] expected: domain::MetricProfile) {
        let record: SetRecord = serde_json::from_value(record).unwrap();
        assert_eq!(
            record
                .into_logged_set(domain::MetricProfile::Cardio)
                .profile,
            expected
        );
    }

    #[rstest]
    #[case::negative_weight(json!({"weight": -5}))]
    #[case::rpe_out_of_range(json!({"rpe": 11}))]
    #[case::three_implements(json!({"implement_count": 3}))]
    #[case::unknown_unit(json!({"weight_unit": "stone"}))]
    fn test_set_record_invalid_values_fall_back(#[case] record: Value) {
        let record: SetRecord = serde_json::from_value(record).unwrap();
        assert_eq!(
            record.into_logged_set(domain::MetricProfile::WeightReps),
            domain::LoggedSet::default()
        );
    }

    #[test]
    fn test_sessions_from_json() {
        let sessions = sessions_from_json(SESSIONS_JSON).unwrap();

        assert_eq!(sessions.len(), 1);
        let session = &sessions[0];
        assert_eq!(*session.id, SESSION_ID);
        assert_eq!(*session.user_id, USER_ID);
        assert_eq!(session.status, domain::SessionStatus::InProgress);
        assert_eq!(session.goal, Some(domain::Goal::Strength));
        assert_approx_eq!(session.body_weight_kg.unwrap(), 176.0 * 0.453_592_37, 1e-3);
        assert_eq!(
            session
                .exercises
                .iter()
                .map(|e| e.name.to_string())
                .collect::<Vec<_>>(),
            vec!["Bench Press", "Treadmill"]
        );
        assert_eq!(session.exercises[1].sets[0].profile, domain::MetricProfile::Cardio);
        assert_eq!(session.exercises[0].sets.len(), 2);
    }

    #[rstest]
    #[case::missing_id(json!([{"user_id": USER_ID.to_string()}]))]
    #[case::empty_id(json!([{"id": "", "user_id": USER_ID.to_string()}]))]
    #[case::missing_exercise_name(json!([{
        "id": SESSION_ID.to_string(),
        "user_id": USER_ID.to_string(),
        "exercises": [{"name": "  "}]
    }]))]
    fn test_sessions_from_json_missing_field(#[case] json: Value) {
        assert!(matches!(
            sessions_from_json(&json.to_string()),
            Err(RecordError::MissingField(_))
        ));
    }

    #[test]
    fn test_sessions_from_json_nil_id() {
        let json = json!([{"id": Uuid::nil().to_string(), "user_id": USER_ID.to_string()}]);
        assert!(matches!(
            sessions_from_json(&json.to_string()),
            Err(RecordError::InvalidSession(domain::SessionError::MissingId))
        ));
    }

    #[test]
    fn test_sessions_from_json_invalid_id() {
        let json = json!([{"id": "42", "user_id": USER_ID.to_string()}]);
        assert!(matches!(
            sessions_from_json(&json.to_string()),
            Err(RecordError::InvalidId(_))
        ));
    }

    #[test]
    fn test_sessions_from_json_sets_not_a_collection() {
        let json = json!([{
            "id": SESSION_ID.to_string(),
            "user_id": USER_ID.to_string(),
            "exercises": [{"name": "Bench Press", "sets": "3x10"}]
        }]);
        assert!(matches!(
            sessions_from_json(&json.to_string()),
            Err(RecordError::Json(_))
        ));
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog = catalog_from_json(CATALOG_JSON).unwrap();

        assert_eq!(catalog.len(), 3);
        let squat = &catalog[0];
        assert_eq!(squat.profile, domain::MetricProfile::WeightReps);
        assert_eq!(squat.movement_pattern, domain::Label::new("squat"));
        assert_eq!(
            squat.equipment,
            vec![
                domain::EquipmentOption::new(domain::EquipmentKind::Barbell)
                    .requiring(domain::EquipmentOption::new(domain::EquipmentKind::Plates)),
            ]
        );
        assert_eq!(squat.equipment_mode, domain::EquipmentMode::Or);
        assert!(squat.e1rm_eligible);
        assert_eq!(squat.inferred_goal(), Some(domain::Goal::Strength));

        let swing = &catalog[1];
        assert_eq!(swing.or_group, Some(domain::OrGroup::DumbbellOrKettlebell));
        assert_eq!(
            swing.equipment,
            vec![domain::EquipmentOption::new(domain::EquipmentKind::Kettlebell)]
        );

        let row = &catalog[2];
        assert_eq!(row.profile, domain::MetricProfile::Cardio);
        assert_eq!(row.duration_target_seconds, Some(1200));
        assert_eq!(row.or_group, None);
    }

    #[test]
    fn test_inventory_from_json() {
        let inventory = inventory_from_json(INVENTORY_JSON).unwrap();

        assert!(inventory.bodyweight);
        assert_eq!(
            inventory.dumbbells,
            vec![
                domain::Weight::new(10.0).unwrap(),
                domain::Weight::new(12.5).unwrap()
            ]
        );
        assert_eq!(inventory.bands, vec![domain::Label::new("light").unwrap()]);
        assert!(!inventory.barbell);
        assert_eq!(
            inventory.machines.get(&domain::Label::new("cable").unwrap()),
            Some(&true)
        );
        assert!(inventory.bench);
        assert_eq!(inventory.props, vec![domain::Label::new("pull up bar").unwrap()]);
    }

    #[rstest]
    #[case::bench_entry(json!({"machines": {"Bench": true}}), true, false)]
    #[case::bench_flag(json!({"bench": "yes", "machines": {"Smith Machine": true}}), true, true)]
    #[case::flag_wins(json!({"bench": false, "machines": {"bench": true}}), false, false)]
    #[case::nothing(json!({}), false, false)]
    fn test_inventory_bench_is_not_a_machine(
        #[case] json: Value,
        #[case] bench: bool,
        #[case] machine: bool,
    ) {
        let inventory = inventory_from_json(&json.to_string()).unwrap();

        assert_eq!(
            inventory.is_available(&domain::EquipmentOption::new(domain::EquipmentKind::Bench)),
            bench
        );
        assert_eq!(
            inventory.is_available(&domain::EquipmentOption::new(domain::EquipmentKind::Machine)),
            machine
        );
    }

    #[test]
    fn test_preferences_record() {
        let record: PreferencesRecord =
            serde_json::from_value(json!({"weight_unit": "lbs", "effort_scale": "RIR"})).unwrap();
        let preferences = domain::Preferences::from(record);

        assert_eq!(
            preferences,
            domain::Preferences {
                weight_unit: domain::WeightUnit::Lb,
                effort_scale: domain::EffortScale::Rir,
            }
        );
        assert_eq!(
            PreferencesRecord::from(&preferences),
            PreferencesRecord {
                weight_unit: Some("lb".to_string()),
                effort_scale: Some("rir".to_string()),
            }
        );
    }
}
