//! Plan normalization: repair a parsed response into a well-typed plan.
//!
//! Repair follows a two-tier policy. Enumeration fields (`level`, `goal`)
//! are coerced to safe defaults with a warning, and missing positional
//! fields are filled in. Structurally essential pieces (an exercise name,
//! a non-empty exercise list, the top-level plan fields) are hard errors:
//! a plan missing its exercises is unusable, a mistyped level is not.
use anyhow::Result;
use serde_json::{Map, Value};

use crate::error::GeneratorError;
use crate::plan::{Exercise, GeneratedPlan, Goal, Level, Workout};

const REQUIRED_PLAN_FIELDS: [&str; 5] = ["name", "duration", "level", "goal", "workouts"];

const DEFAULT_SETS: i64 = 3;
const DEFAULT_REPS: &str = "10";
const DEFAULT_REST_SECONDS: i64 = 60;

/// Normalize a parsed plan against the originally requested workout count.
///
/// The count is advisory: a mismatch is logged, never corrected.
pub fn normalize_plan(value: &Value, expected_workouts: usize) -> Result<GeneratedPlan> {
    let plan = value
        .as_object()
        .ok_or_else(|| structure("the generated plan must be a JSON object"))?;

    for field in REQUIRED_PLAN_FIELDS {
        if !plan.contains_key(field) {
            return Err(structure(&format!(
                "generated plan is missing required field '{field}'"
            ))
            .into());
        }
    }

    let name = coerce_string(&plan["name"], "plan name")?;
    let description = optional_string(plan.get("description"));
    let duration = coerce_int(&plan["duration"], "plan duration")?;
    let level = normalize_level(&plan["level"]);
    let goal = normalize_goal(&plan["goal"]);

    let raw_workouts = plan["workouts"]
        .as_array()
        .ok_or_else(|| structure("'workouts' must be an array"))?;
    if raw_workouts.len() != expected_workouts {
        tracing::warn!(
            expected = expected_workouts,
            actual = raw_workouts.len(),
            "workout count differs from the requested training days"
        );
    }

    let mut workouts = Vec::with_capacity(raw_workouts.len());
    for (index, raw) in raw_workouts.iter().enumerate() {
        workouts.push(normalize_workout(raw, index)?);
    }

    Ok(GeneratedPlan {
        name,
        description,
        duration,
        level,
        goal,
        workouts,
    })
}

fn normalize_workout(value: &Value, index: usize) -> Result<Workout> {
    let position = index + 1;
    let workout = value
        .as_object()
        .ok_or_else(|| structure(&format!("workout {position} must be a JSON object")))?;

    let day_number = match workout.get("dayNumber") {
        Some(raw) => coerce_int(raw, "workout dayNumber")?,
        None => position as i64,
    };
    let name = match workout.get("name") {
        Some(raw) => coerce_string(raw, "workout name")?,
        None => format!("Giorno {position}"),
    };
    let description = optional_string(workout.get("description"));

    let raw_exercises = match workout.get("exercises").and_then(Value::as_array) {
        Some(list) if !list.is_empty() => list,
        _ => return Err(structure(&format!("workout '{name}' has no exercises")).into()),
    };

    let mut exercises = Vec::with_capacity(raw_exercises.len());
    for (exercise_index, raw) in raw_exercises.iter().enumerate() {
        exercises.push(normalize_exercise(raw, exercise_index, &name)?);
    }

    Ok(Workout {
        day_number,
        name,
        description,
        exercises,
    })
}

fn normalize_exercise(value: &Value, index: usize, workout_name: &str) -> Result<Exercise> {
    let position = (index + 1) as i64;
    let exercise: &Map<String, Value> = value.as_object().ok_or_else(|| {
        structure(&format!(
            "exercise {position} in workout '{workout_name}' must be a JSON object"
        ))
    })?;

    let name = match exercise.get("name") {
        Some(raw) => coerce_string(raw, "exercise name")?,
        None => {
            return Err(
                structure(&format!("exercise without a name in workout '{workout_name}'")).into(),
            )
        }
    };

    let sets = match exercise.get("sets") {
        Some(raw) => coerce_int(raw, "exercise sets")?,
        None => DEFAULT_SETS,
    };
    let reps = match exercise.get("reps") {
        Some(raw) => coerce_string(raw, "exercise reps")?,
        None => DEFAULT_REPS.to_string(),
    };
    let rest_seconds = match exercise.get("restSeconds") {
        Some(raw) => coerce_int(raw, "exercise restSeconds")?,
        None => DEFAULT_REST_SECONDS,
    };
    let order = match exercise.get("order") {
        Some(raw) => coerce_int(raw, "exercise order")?,
        None => position,
    };
    let notes = optional_string(exercise.get("notes"));

    Ok(Exercise {
        name,
        sets,
        reps,
        rest_seconds,
        notes,
        order,
    })
}

fn normalize_level(value: &Value) -> Level {
    match value.as_str().and_then(Level::parse) {
        Some(level) => level,
        None => {
            tracing::warn!(supplied = %value, "unrecognized level, defaulting to intermediate");
            Level::Intermediate
        }
    }
}

fn normalize_goal(value: &Value) -> Goal {
    match value.as_str().and_then(Goal::parse) {
        Some(goal) => goal,
        None => {
            tracing::warn!(supplied = %value, "unrecognized goal, defaulting to hypertrophy");
            Goal::Hypertrophy
        }
    }
}

/// Coerce a supplied value to an integer. JSON numbers pass through and
/// numeric strings parse; anything else is a fatal coercion error, never a
/// silent default.
fn coerce_int(value: &Value, field: &str) -> Result<i64, GeneratorError> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64))
            .ok_or_else(|| coercion(field, value)),
        Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| coercion(field, value)),
        _ => Err(coercion(field, value)),
    }
}

/// Coerce a supplied value to a string; numbers are stringified.
fn coerce_string(value: &Value, field: &str) -> Result<String, GeneratorError> {
    match value {
        Value::String(raw) => Ok(raw.clone()),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(coercion(field, value)),
    }
}

fn optional_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

fn structure(message: &str) -> GeneratorError {
    GeneratorError::Structure(message.to_string())
}

fn coercion(field: &str, value: &Value) -> GeneratorError {
    GeneratorError::Coercion(format!(
        "cannot coerce {field} value {value} to the required type"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_plan(workout_count: usize, exercises_per_workout: usize) -> Value {
        let workouts: Vec<Value> = (1..=workout_count)
            .map(|day| {
                let exercises: Vec<Value> = (1..=exercises_per_workout)
                    .map(|order| {
                        json!({
                            "name": format!("Esercizio {order}"),
                            "sets": 4,
                            "reps": "8-10",
                            "restSeconds": 90,
                            "order": order,
                        })
                    })
                    .collect();
                json!({
                    "dayNumber": day,
                    "name": format!("Giorno {day}"),
                    "description": "focus del giorno",
                    "exercises": exercises,
                })
            })
            .collect();
        json!({
            "name": "Piano Completo",
            "description": "programma di prova",
            "duration": 4,
            "level": "intermediate",
            "goal": "hypertrophy",
            "workouts": workouts,
        })
    }

    #[test]
    fn test_normalizes_complete_plan() {
        let plan = normalize_plan(&sample_plan(3, 5), 3).expect("normalize");
        assert_eq!(plan.workouts.len(), 3);
        let total: usize = plan.workouts.iter().map(|w| w.exercises.len()).sum();
        assert_eq!(total, 15);
        assert_eq!(plan.level, Level::Intermediate);
        assert_eq!(plan.goal, Goal::Hypertrophy);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let first = normalize_plan(&sample_plan(2, 3), 2).expect("normalize");
        let reserialized = serde_json::to_value(&first).expect("serialize");
        let second = normalize_plan(&reserialized, 2).expect("re-normalize");
        assert_eq!(first, second);
    }

    #[test]
    fn test_defaults_positional_workout_fields() {
        let value = json!({
            "name": "Piano",
            "duration": 4,
            "level": "beginner",
            "goal": "strength",
            "workouts": [
                {"dayNumber": 1, "name": "Spinta", "exercises": [{"name": "Panca piana"}]},
                {"exercises": [{"name": "Stacco"}]},
            ],
        });
        let plan = normalize_plan(&value, 2).expect("normalize");
        assert_eq!(plan.workouts[1].day_number, 2);
        assert_eq!(plan.workouts[1].name, "Giorno 2");
    }

    #[test]
    fn test_defaults_exercise_fields_by_position() {
        let value = json!({
            "name": "Piano",
            "duration": 4,
            "level": "beginner",
            "goal": "strength",
            "workouts": [{
                "exercises": [
                    {"name": "Panca piana", "sets": 5, "reps": "5", "restSeconds": 180, "order": 1},
                    {"name": "Rematore", "sets": 4, "reps": "8", "restSeconds": 120, "order": 2},
                    {"name": "Curl"},
                ],
            }],
        });
        let plan = normalize_plan(&value, 1).expect("normalize");
        let third = &plan.workouts[0].exercises[2];
        assert_eq!(third.sets, 3);
        assert_eq!(third.reps, "10");
        assert_eq!(third.rest_seconds, 60);
        assert_eq!(third.order, 3);
        assert!(third.notes.is_none());
    }

    #[test]
    fn test_missing_top_level_field_is_fatal() {
        let mut value = sample_plan(1, 1);
        value.as_object_mut().unwrap().remove("goal");
        let err = normalize_plan(&value, 1).expect_err("must fail");
        match err.downcast_ref::<GeneratorError>() {
            Some(GeneratorError::Structure(message)) => assert!(message.contains("'goal'")),
            other => panic!("expected structure error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_level_and_goal_fall_back() {
        let mut value = sample_plan(1, 1);
        value["level"] = json!("pro");
        value["goal"] = json!("cardio");
        let plan = normalize_plan(&value, 1).expect("normalize");
        assert_eq!(plan.level, Level::Intermediate);
        assert_eq!(plan.goal, Goal::Hypertrophy);
    }

    #[test]
    fn test_empty_exercise_list_is_fatal() {
        let mut value = sample_plan(1, 1);
        value["workouts"][0]["exercises"] = json!([]);
        let err = normalize_plan(&value, 1).expect_err("must fail");
        match err.downcast_ref::<GeneratorError>() {
            Some(GeneratorError::Structure(message)) => {
                assert!(message.contains("Giorno 1"));
                assert!(message.contains("no exercises"));
            }
            other => panic!("expected structure error, got {other:?}"),
        }
    }

    #[test]
    fn test_exercise_without_name_is_fatal() {
        let mut value = sample_plan(1, 1);
        value["workouts"][0]["exercises"] = json!([{"sets": 3, "reps": "10"}]);
        let err = normalize_plan(&value, 1).expect_err("must fail");
        match err.downcast_ref::<GeneratorError>() {
            Some(GeneratorError::Structure(message)) => {
                assert!(message.contains("without a name"));
                assert!(message.contains("Giorno 1"));
            }
            other => panic!("expected structure error, got {other:?}"),
        }
    }

    #[test]
    fn test_numeric_strings_coerce() {
        let mut value = sample_plan(1, 1);
        value["workouts"][0]["exercises"][0]["sets"] = json!("4");
        value["workouts"][0]["exercises"][0]["restSeconds"] = json!("90");
        value["workouts"][0]["exercises"][0]["reps"] = json!(12);
        let plan = normalize_plan(&value, 1).expect("normalize");
        let exercise = &plan.workouts[0].exercises[0];
        assert_eq!(exercise.sets, 4);
        assert_eq!(exercise.rest_seconds, 90);
        assert_eq!(exercise.reps, "12");
    }

    #[test]
    fn test_non_numeric_string_is_fatal() {
        let mut value = sample_plan(1, 1);
        value["workouts"][0]["exercises"][0]["sets"] = json!("molti");
        let err = normalize_plan(&value, 1).expect_err("must fail");
        match err.downcast_ref::<GeneratorError>() {
            Some(GeneratorError::Coercion(message)) => {
                assert!(message.contains("sets"));
                assert!(message.contains("molti"));
            }
            other => panic!("expected coercion error, got {other:?}"),
        }
    }

    #[test]
    fn test_workout_count_mismatch_is_not_fatal() {
        let plan = normalize_plan(&sample_plan(2, 3), 3).expect("normalize");
        assert_eq!(plan.workouts.len(), 2);
    }
}
