//! Form request loading and validation.
//!
//! The app form exports a JSON file whose top-level `planData` key holds the
//! request payload. Every payload field is serde-defaulted so an incomplete
//! export still deserializes; the validator reports what is missing instead
//! of failing at parse time.
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::GeneratorError;

/// Training types accepted by the request form.
pub const VALID_TRAINING_TYPES: [&str; 3] = ["ipertrofia", "forza", "resistenza"];

/// A plan request exported by the app form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanRequest {
    pub name: String,
    pub description: String,
    pub training_type: String,
    pub equipment: Vec<String>,
    pub days_per_week: i64,
    pub weeks: i64,
    pub notes: Option<String>,
}

/// Load a plan request from a form export file.
///
/// A missing file and a missing `planData` key are classified errors; any
/// other read or decode failure propagates with context.
pub fn load_plan_request(path: &Path) -> Result<PlanRequest> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(GeneratorError::InputNotFound(path.to_path_buf()).into());
        }
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };

    let value: Value =
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
    let payload = value.get("planData").cloned().ok_or_else(|| {
        GeneratorError::Structure("the input file must contain a 'planData' field".to_string())
    })?;
    let request: PlanRequest = serde_json::from_value(payload)
        .with_context(|| format!("decode planData in {}", path.display()))?;
    Ok(request)
}

/// Check a request against the form contract.
///
/// All rules are evaluated, never short-circuited, so the caller receives
/// every violation at once. Missing numeric fields behave as zero and still
/// trip the range checks.
pub fn validate(request: &PlanRequest) -> (bool, Vec<String>) {
    let mut errors = Vec::new();

    let required = [
        ("name", request.name.trim().is_empty()),
        ("trainingType", request.training_type.trim().is_empty()),
        ("daysPerWeek", request.days_per_week == 0),
        ("weeks", request.weeks == 0),
    ];
    for (field, missing) in required {
        if missing {
            errors.push(format!("missing required field: {field}"));
        }
    }

    if !VALID_TRAINING_TYPES.contains(&request.training_type.as_str()) {
        errors.push(format!(
            "invalid training type: '{}' (accepted values: {})",
            request.training_type,
            VALID_TRAINING_TYPES.join(", ")
        ));
    }

    if !(1..=7).contains(&request.days_per_week) {
        errors.push(format!(
            "days per week must be between 1 and 7, got: {}",
            request.days_per_week
        ));
    }

    if request.weeks < 1 {
        errors.push(format!("weeks must be at least 1, got: {}", request.weeks));
    }

    (errors.is_empty(), errors)
}

/// Render a human-readable summary of a loaded request.
pub fn request_summary(request: &PlanRequest) -> String {
    let equipment = if request.equipment.is_empty() {
        "none".to_string()
    } else {
        request.equipment.join(", ")
    };
    let notes = request
        .notes
        .as_deref()
        .filter(|notes| !notes.is_empty())
        .unwrap_or("none");

    format!(
        "  Name:          {}\n  Description:   {}\n  Training type: {}\n  Equipment:     {}\n  Frequency:     {} day(s)/week\n  Duration:      {} week(s)\n  Notes:         {}\n",
        request.name,
        request.description,
        request.training_type,
        equipment,
        request.days_per_week,
        request.weeks,
        notes
    )
}
