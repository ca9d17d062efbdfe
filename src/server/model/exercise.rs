//! Exercise catalog and workout plan validation.

use std::collections::BTreeMap;

use crate::{
    model::{
        api::ExerciseViolationDto,
        gym::Weekday,
        member::{Exercise, ExerciseCategoryDto, ExerciseInputDto, WorkoutDay, WorkoutDayInputDto},
    },
    server::util::parse::coerce_number,
};

pub const DEFAULT_REST_BETWEEN_SETS: f64 = 60.0;

/// Muscle group → allowed exercise names. Some names appear under several groups.
pub const EXERCISE_CATALOG: &[(&str, &[&str])] = &[
    (
        "CHEST",
        &[
            "Bench Press",
            "Incline Bench Press",
            "Decline Bench Press",
            "Dumbbell Press",
            "Push-Ups",
            "Dumbbell Flyes",
            "Cable Flyes",
            "Chest Dips",
        ],
    ),
    (
        "BACK",
        &[
            "Pull-Ups",
            "Lat Pulldowns",
            "Barbell Rows",
            "Dumbbell Rows",
            "T-Bar Rows",
            "Face Pulls",
            "Deadlifts",
            "Back Extensions",
        ],
    ),
    (
        "SHOULDERS",
        &[
            "Overhead Press",
            "Dumbbell Press",
            "Lateral Raises",
            "Front Raises",
            "Rear Delt Flyes",
            "Face Pulls",
            "Shrugs",
            "Upright Rows",
            "Arnold Press",
        ],
    ),
    (
        "BICEPS",
        &[
            "Barbell Curls",
            "Dumbbell Curls",
            "Preacher Curls",
            "Hammer Curls",
            "Concentration Curls",
            "Cable Curls",
            "Reverse Curls",
        ],
    ),
    (
        "TRICEPS",
        &[
            "Skull Crushers",
            "Tricep Dips",
            "Tricep Pushdowns",
            "Close-Grip Bench Press",
            "Overhead Tricep Extension",
            "Tricep Kickbacks",
            "Diamond Push-Ups",
            "Rope Pushdowns",
        ],
    ),
    (
        "LEGS",
        &[
            "Squats",
            "Leg Press",
            "Lunges",
            "Deadlifts",
            "Leg Curls",
            "Leg Extensions",
            "Calf Raises",
            "Glute Bridges",
            "Hip Thrusts",
        ],
    ),
    (
        "ABS",
        &[
            "Crunches",
            "Leg Raises",
            "Russian Twists",
            "Planks",
            "Mountain Climbers",
            "Bicycle Crunches",
            "Hanging Leg Raises",
            "Ab Rollouts",
            "Reverse Crunches",
        ],
    ),
    (
        "CARDIO",
        &[
            "Running",
            "Cycling",
            "Swimming",
            "Jump Rope",
            "Rowing",
            "Stair Climbing",
            "HIIT",
            "Elliptical",
            "Dancing",
        ],
    ),
];

/// Whether `name` is an allowed exercise for `muscle_group`.
pub fn is_in_catalog(muscle_group: &str, name: &str) -> bool {
    EXERCISE_CATALOG
        .iter()
        .any(|(group, names)| *group == muscle_group && names.contains(&name))
}

/// First muscle group listing `name`, used when the client omits the group.
pub fn group_of(name: &str) -> Option<&'static str> {
    EXERCISE_CATALOG
        .iter()
        .find(|(_, names)| names.contains(&name))
        .map(|(group, _)| *group)
}

pub fn catalog_dto() -> Vec<ExerciseCategoryDto> {
    EXERCISE_CATALOG
        .iter()
        .map(|(group, names)| ExerciseCategoryDto {
            muscle_group: group.to_string(),
            exercises: names.iter().map(|name| name.to_string()).collect(),
        })
        .collect()
}

/// Validates and normalizes a weekday-keyed workout plan.
///
/// Every exercise is checked; all failures are collected so the caller can report
/// each offending exercise at once.
///
/// # Returns
/// - `Ok(plan)` - Every exercise is in the catalog and its numbers are in range
/// - `Err(violations)` - One entry per rejected exercise
pub fn validate_workout_plan(
    input: BTreeMap<Weekday, WorkoutDayInputDto>,
) -> Result<BTreeMap<Weekday, WorkoutDay>, Vec<ExerciseViolationDto>> {
    let mut plan = BTreeMap::new();
    let mut violations = Vec::new();

    for (day, workout) in input {
        let mut exercises = Vec::with_capacity(workout.exercises.len());

        for (index, exercise) in workout.exercises.into_iter().enumerate() {
            let name = exercise.name.clone();
            let muscle_group = exercise.muscle_group.clone();

            match validate_exercise(exercise) {
                Ok(valid) => exercises.push(valid),
                Err(reason) => violations.push(ExerciseViolationDto {
                    day: day.to_string(),
                    index: Some(index),
                    name,
                    muscle_group,
                    reason,
                }),
            }
        }

        let duration = match day_duration(coerce_number(workout.duration.as_ref())) {
            Ok(duration) => duration,
            Err(reason) => {
                violations.push(ExerciseViolationDto {
                    day: day.to_string(),
                    index: None,
                    name: "duration".to_string(),
                    muscle_group: None,
                    reason,
                });
                None
            }
        };

        plan.insert(
            day,
            WorkoutDay {
                exercises,
                notes: workout.notes,
                duration,
            },
        );
    }

    if violations.is_empty() {
        Ok(plan)
    } else {
        Err(violations)
    }
}

fn validate_exercise(input: ExerciseInputDto) -> Result<Exercise, String> {
    let name = input.name.trim().to_string();

    let muscle_group = match input.muscle_group.as_deref().map(str::trim) {
        Some(group) if !group.is_empty() => group.to_string(),
        _ => group_of(&name)
            .ok_or_else(|| format!("'{}' is not a known exercise", name))?
            .to_string(),
    };

    if !is_in_catalog(&muscle_group, &name) {
        return Err(format!(
            "Invalid exercise '{}' for muscle group '{}'",
            name, muscle_group
        ));
    }

    let sets = required_count("sets", coerce_number(input.sets.as_ref()))?;
    let reps = required_count("reps", coerce_number(input.reps.as_ref()))?;
    let weight = non_negative("weight", coerce_number(input.weight.as_ref()), 0.0)?;
    let duration = non_negative("duration", coerce_number(input.duration.as_ref()), 0.0)?;
    let rest_between_sets = non_negative(
        "restBetweenSets",
        coerce_number(input.rest_between_sets.as_ref()),
        DEFAULT_REST_BETWEEN_SETS,
    )?;

    Ok(Exercise {
        name,
        muscle_group,
        sets,
        reps,
        weight,
        duration,
        rest_between_sets,
        notes: input.notes,
    })
}

fn required_count(field: &str, value: Result<Option<f64>, String>) -> Result<u32, String> {
    let value = value
        .map_err(|e| format!("{}: {}", field, e))?
        .ok_or_else(|| format!("{} is required", field))?;

    if value < 1.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(format!("{} must be a whole number of at least 1", field));
    }

    Ok(value as u32)
}

fn non_negative(
    field: &str,
    value: Result<Option<f64>, String>,
    default: f64,
) -> Result<f64, String> {
    let value = value
        .map_err(|e| format!("{}: {}", field, e))?
        .unwrap_or(default);

    if value < 0.0 {
        return Err(format!("{} cannot be negative", field));
    }

    Ok(value)
}

/// A day's duration is optional but must be a non-negative number when given.
fn day_duration(value: Result<Option<f64>, String>) -> Result<Option<f64>, String> {
    let value = value.map_err(|e| format!("duration: {}", e))?;

    if value.is_some_and(|d| d < 0.0) {
        return Err("duration cannot be negative".to_string());
    }

    Ok(value)
}
