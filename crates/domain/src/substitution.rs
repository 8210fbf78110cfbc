use std::collections::BTreeSet;

use log::debug;

use crate::{EquipmentInventory, Exercise, Label, SessionExercise};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Substitute<'a> {
    pub exercise: &'a Exercise,
    pub score: f32,
}

/// Similarity of a candidate to the exercise it would replace.
///
/// Higher is more similar. Only a differing movement pattern reduces the
/// score.
#[must_use]
pub fn score_substitute(current: &Exercise, candidate: &Exercise) -> f32 {
    let mut score = 0.0;

    if let (Some(a), Some(b)) = (current.primary_muscles.first(), candidate.primary_muscles.first())
        && a == b
    {
        score += 4.0;
    }

    match (&current.movement_pattern, &candidate.movement_pattern) {
        (Some(a), Some(b)) if a == b => score += 3.0,
        (Some(_), Some(_)) => score -= 2.0,
        _ => {}
    }

    if current.focus.is_some() && current.focus == candidate.focus {
        score += 2.0;
    }

    if !current
        .equipment_kinds()
        .is_disjoint(&candidate.equipment_kinds())
    {
        score += 2.0;
    }

    if current.difficulty.is_some() && current.difficulty == candidate.difficulty {
        score += 1.0;
    }

    if let Some(goal) = current.inferred_goal()
        && candidate.inferred_goal() == Some(goal)
    {
        score += 1.0;
    }

    if let (Some(a), Some(b)) = (&current.rep_target, &candidate.rep_target) {
        score += (2.0 - (a.average() - b.average()).abs() / 4.0).max(0.0);
    }

    if let (Some(a), Some(b)) = (
        current.duration_target_seconds,
        candidate.duration_target_seconds,
    ) {
        let delta_minutes = (crate::seconds_to_minutes(a) - crate::seconds_to_minutes(b)).abs();
        score += (2.0 - delta_minutes / 5.0).max(0.0);
    }

    score
}

/// Rank catalog exercises that could replace `current` in a session.
///
/// Candidates must share a muscle with the current exercise (or, if it
/// declares none, with the rest of the session). Candidates the inventory can
/// equip are preferred, but if none of them can be equipped the muscle
/// matches are ranked anyway. Equal scores keep the catalog order.
#[must_use]
pub fn rank_substitutes<'a>(
    current: &Exercise,
    session: &[SessionExercise],
    inventory: &EquipmentInventory,
    catalog: &'a [Exercise],
    limit: usize,
) -> Vec<Substitute<'a>> {
    let excluded = session
        .iter()
        .map(|e| e.name.key())
        .chain([current.name.key()])
        .collect::<BTreeSet<_>>();

    let mut allowed_muscles = current.muscles();
    if allowed_muscles.is_empty() {
        allowed_muscles = session
            .iter()
            .flat_map(|e| e.primary_muscles.iter().chain(&e.secondary_muscles))
            .collect::<BTreeSet<&Label>>();
        debug!(
            "{} declares no muscles, using {} muscle(s) of the session",
            current.name,
            allowed_muscles.len()
        );
    }

    let muscle_matches = catalog
        .iter()
        .filter(|c| !excluded.contains(&c.name.key()))
        .filter(|c| {
            allowed_muscles.is_empty() || !c.muscles().is_disjoint(&allowed_muscles)
        })
        .collect::<Vec<_>>();

    let equipped = muscle_matches
        .iter()
        .copied()
        .filter(|c| c.equipment_requirement().is_satisfied_by(inventory))
        .collect::<Vec<_>>();

    let candidates = if equipped.is_empty() {
        if !muscle_matches.is_empty() {
            debug!(
                "no equipable substitute for {}, ranking {} muscle match(es)",
                current.name,
                muscle_matches.len()
            );
        }
        muscle_matches
    } else {
        equipped
    };

    let mut substitutes = candidates
        .into_iter()
        .map(|exercise| Substitute {
            exercise,
            score: score_substitute(current, exercise),
        })
        .collect::<Vec<_>>();
    substitutes.sort_by(|a, b| b.score.total_cmp(&a.score));
    substitutes.truncate(limit);
    substitutes
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        Difficulty, EquipmentKind, EquipmentOption, Goal, Name, RepTarget, Weight,
    };

    fn exercise(name: &str, primary: &str, pattern: Option<&str>, kind: EquipmentKind) -> Exercise {
        Exercise {
            primary_muscles: Label::new(primary).into_iter().collect(),
            movement_pattern: pattern.and_then(Label::new),
            equipment: vec![EquipmentOption::new(kind)],
            ..Exercise::new(Name::new(name).unwrap())
        }
    }

    static BACK_SQUAT: LazyLock<Exercise> = LazyLock::new(|| Exercise {
        secondary_muscles: vec![Label::new("glutes").unwrap()],
        ..exercise("Back Squat", "quads", Some("squat"), EquipmentKind::Barbell)
    });

    static CATALOG: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
        vec![
            exercise("Back Squat", "quads", Some("squat"), EquipmentKind::Barbell),
            exercise("Leg Press", "quads", Some("squat"), EquipmentKind::Machine),
            exercise("Goblet Squat", "quads", Some("squat"), EquipmentKind::Dumbbell),
            exercise("Hip Thrust", "glutes", Some("hinge"), EquipmentKind::Barbell),
            exercise("Bicep Curl", "biceps", Some("curl"), EquipmentKind::Dumbbell),
            exercise("Split Squat", "quads", Some("lunge"), EquipmentKind::Bodyweight),
        ]
    });

    static DUMBBELLS: LazyLock<EquipmentInventory> = LazyLock::new(|| EquipmentInventory {
        dumbbells: vec![Weight::new(12.5).unwrap()],
        ..EquipmentInventory::default()
    });

    fn names(substitutes: &[Substitute]) -> Vec<String> {
        substitutes
            .iter()
            .map(|s| s.exercise.name.to_string())
            .collect()
    }

    #[test]
    fn test_score_substitute_movement_pattern_penalty() {
        let front_squat = exercise("Front Squat", "quads", Some("squat"), EquipmentKind::Kettlebell);
        let bicep_curl = exercise("Bicep Curl", "biceps", Some("curl"), EquipmentKind::Kettlebell);

        let matching = score_substitute(&BACK_SQUAT, &front_squat);
        let penalized = score_substitute(&BACK_SQUAT, &bicep_curl);

        assert_approx_eq!(matching, 7.0);
        assert_approx_eq!(penalized, -2.0);
        assert!(matching - penalized >= 5.0);
    }

    #[rstest]
    #[case::primary_muscle(
        Exercise { primary_muscles: vec![Label::new("Quads").unwrap()], ..Exercise::new(Name::new("A").unwrap()) },
        Exercise { primary_muscles: vec![Label::new("quads").unwrap()], ..Exercise::new(Name::new("B").unwrap()) },
        4.0
    )]
    #[case::only_first_primary_muscle(
        Exercise { primary_muscles: vec![Label::new("quads").unwrap(), Label::new("glutes").unwrap()], ..Exercise::new(Name::new("A").unwrap()) },
        Exercise { primary_muscles: vec![Label::new("glutes").unwrap()], ..Exercise::new(Name::new("B").unwrap()) },
        0.0
    )]
    #[case::pattern_on_one_side(
        Exercise { movement_pattern: Label::new("squat"), ..Exercise::new(Name::new("A").unwrap()) },
        Exercise::new(Name::new("B").unwrap()),
        0.0
    )]
    #[case::focus(
        Exercise { focus: Label::new("Lower Body"), ..Exercise::new(Name::new("A").unwrap()) },
        Exercise { focus: Label::new("lower-body"), ..Exercise::new(Name::new("B").unwrap()) },
        2.0
    )]
    #[case::equipment_overlap(
        Exercise { equipment: vec![EquipmentOption::new(EquipmentKind::Dumbbell), EquipmentOption::new(EquipmentKind::Bench)], ..Exercise::new(Name::new("A").unwrap()) },
        Exercise { equipment: vec![EquipmentOption::new(EquipmentKind::Bench)], ..Exercise::new(Name::new("B").unwrap()) },
        2.0
    )]
    #[case::difficulty(
        Exercise { difficulty: Some(Difficulty::Beginner), ..Exercise::new(Name::new("A").unwrap()) },
        Exercise { difficulty: Some(Difficulty::Beginner), ..Exercise::new(Name::new("B").unwrap()) },
        1.0
    )]
    #[case::explicit_and_inferred_goal(
        Exercise { goal: Some(Goal::Strength), ..Exercise::new(Name::new("A").unwrap()) },
        Exercise { rep_target: RepTarget::parse("3-5"), ..Exercise::new(Name::new("B").unwrap()) },
        1.0
    )]
    #[case::rep_target(
        Exercise { rep_target: RepTarget::parse("8-12"), ..Exercise::new(Name::new("A").unwrap()) },
        Exercise { rep_target: RepTarget::parse("12-16"), ..Exercise::new(Name::new("B").unwrap()) },
        1.0
    )]
    #[case::rep_target_far(
        Exercise { rep_target: RepTarget::parse("3"), ..Exercise::new(Name::new("A").unwrap()) },
        Exercise { rep_target: RepTarget::parse("20"), ..Exercise::new(Name::new("B").unwrap()) },
        0.0
    )]
    #[case::duration_target(
        Exercise { duration_target_seconds: Some(600), ..Exercise::new(Name::new("A").unwrap()) },
        Exercise { duration_target_seconds: Some(900), ..Exercise::new(Name::new("B").unwrap()) },
        1.0
    )]
    fn test_score_substitute_terms(
        #[case] current: Exercise,
        #[case] candidate: Exercise,
        #[case] expected: f32,
    ) {
        assert_approx_eq!(score_substitute(&current, &candidate), expected);
    }

    #[test]
    fn test_rank_substitutes() {
        let substitutes = rank_substitutes(&BACK_SQUAT, &[], &DUMBBELLS, &CATALOG, 10);

        assert_eq!(names(&substitutes), vec!["Goblet Squat", "Split Squat"]);
        assert_approx_eq!(substitutes[0].score, 7.0);
        assert_approx_eq!(substitutes[1].score, 2.0);
    }

    #[test]
    fn test_rank_substitutes_excludes_session_exercises() {
        let session = vec![SessionExercise::new(Name::new("goblet squat").unwrap())];
        let substitutes = rank_substitutes(&BACK_SQUAT, &session, &DUMBBELLS, &CATALOG, 10);

        assert_eq!(names(&substitutes), vec!["Split Squat"]);
    }

    #[test]
    fn test_rank_substitutes_equipment_fallback() {
        let inventory = EquipmentInventory {
            bodyweight: false,
            ..EquipmentInventory::default()
        };
        let substitutes = rank_substitutes(&BACK_SQUAT, &[], &inventory, &CATALOG, 10);

        assert_eq!(
            names(&substitutes),
            vec!["Leg Press", "Goblet Squat", "Split Squat", "Hip Thrust"]
        );
    }

    #[test]
    fn test_rank_substitutes_stable_ties_and_limit() {
        let inventory = EquipmentInventory {
            barbell: true,
            machines: [(Label::new("leg press").unwrap(), true)].into(),
            ..DUMBBELLS.clone()
        };
        let substitutes = rank_substitutes(&BACK_SQUAT, &[], &inventory, &CATALOG, 2);

        assert_eq!(names(&substitutes), vec!["Leg Press", "Goblet Squat"]);
        assert_eq!(substitutes[0].score, substitutes[1].score);
    }

    #[test]
    fn test_rank_substitutes_session_muscles_fallback() {
        let current = Exercise::new(Name::new("Mystery Move").unwrap());
        let session = vec![SessionExercise {
            primary_muscles: vec![Label::new("biceps").unwrap()],
            ..SessionExercise::new(Name::new("Hammer Curl").unwrap())
        }];
        let substitutes = rank_substitutes(&current, &session, &DUMBBELLS, &CATALOG, 10);

        assert_eq!(names(&substitutes), vec!["Bicep Curl"]);
    }

    #[test]
    fn test_rank_substitutes_without_any_muscles() {
        let current = Exercise::new(Name::new("Mystery Move").unwrap());
        let substitutes = rank_substitutes(&current, &[], &DUMBBELLS, &CATALOG, 10);

        assert_eq!(
            names(&substitutes),
            vec!["Goblet Squat", "Bicep Curl", "Split Squat"]
        );
    }

    #[test]
    fn test_rank_substitutes_no_muscle_match() {
        let current = exercise("Plank", "core", None, EquipmentKind::Bodyweight);

        assert_eq!(
            rank_substitutes(&current, &[], &DUMBBELLS, &CATALOG, 10),
            vec![]
        );
    }
}
