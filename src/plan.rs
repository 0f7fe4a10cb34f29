//! Generated plan data model.
//!
//! These records mirror the JSON contract consumed by the app importer:
//! camelCase keys, lowercase enum values, optional fields omitted from the
//! output when absent.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty levels the model may assign to a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Parse a model-supplied level, if it is one of the accepted values.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "beginner" => Some(Level::Beginner),
            "intermediate" => Some(Level::Intermediate),
            "advanced" => Some(Level::Advanced),
            _ => None,
        }
    }

    /// Identifier used in the JSON contract.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training goals recognized by the plan importer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Strength,
    Hypertrophy,
    Endurance,
    Powerlifting,
    General,
}

impl Goal {
    /// Parse a model-supplied goal, if it is one of the accepted values.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "strength" => Some(Goal::Strength),
            "hypertrophy" => Some(Goal::Hypertrophy),
            "endurance" => Some(Goal::Endurance),
            "powerlifting" => Some(Goal::Powerlifting),
            "general" => Some(Goal::General),
            _ => None,
        }
    }

    /// Map a request-side training type onto the stored goal.
    ///
    /// Unknown training types fall back to hypertrophy.
    pub fn from_training_type(training_type: &str) -> Self {
        match training_type {
            "ipertrofia" => Goal::Hypertrophy,
            "forza" => Goal::Strength,
            "resistenza" => Goal::Endurance,
            _ => Goal::Hypertrophy,
        }
    }

    /// Identifier used in the JSON contract and the prompt template.
    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Strength => "strength",
            Goal::Hypertrophy => "hypertrophy",
            Goal::Endurance => "endurance",
            Goal::Powerlifting => "powerlifting",
            Goal::General => "general",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized workout plan ready for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Program length in weeks.
    pub duration: i64,
    pub level: Level,
    pub goal: Goal,
    pub workouts: Vec<Workout>,
}

/// A single training day within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub day_number: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub exercises: Vec<Exercise>,
}

/// One exercise entry within a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    pub sets: i64,
    /// Rep prescription, kept as text so ranges like "8-10" survive.
    pub reps: String,
    pub rest_seconds: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub order: i64,
}
