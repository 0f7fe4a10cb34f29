//! Prompt assembly for the completion request.
//!
//! The system instruction and the user template live under `prompts/` and
//! are embedded at compile time. The user template is filled with plain
//! `{placeholder}` substitution so it stays readable next to the JSON
//! example it contains.
use crate::plan::Goal;
use crate::request::PlanRequest;

/// System instruction carrying the domain rules and the format contract.
pub const SYSTEM_PROMPT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/prompts/system.md"));

const USER_TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/prompts/user.md"));

/// Literal used when the form provides no equipment.
const BODYWEIGHT_ONLY: &str = "Solo corpo libero";

/// Render the user instruction for a plan request.
///
/// Absent fields substitute fixed defaults so the template never renders an
/// empty slot.
pub fn build_user_prompt(request: &PlanRequest) -> String {
    let name = non_empty_or(&request.name, "Piano Allenamento");
    let training_type = non_empty_or(&request.training_type, "ipertrofia");
    let equipment = if request.equipment.is_empty() {
        BODYWEIGHT_ONLY.to_string()
    } else {
        request.equipment.join(", ")
    };
    let days_per_week = if request.days_per_week == 0 {
        3
    } else {
        request.days_per_week
    };
    let weeks = if request.weeks == 0 { 4 } else { request.weeks };
    let notes = request.notes.as_deref().unwrap_or("Nessuna nota specifica");
    let goal = Goal::from_training_type(training_type);

    USER_TEMPLATE
        .replace("{name}", name)
        .replace("{description}", &request.description)
        .replace("{training_type}", training_type)
        .replace("{equipment}", &equipment)
        .replace("{days_per_week}", &days_per_week.to_string())
        .replace("{weeks}", &weeks.to_string())
        .replace("{notes}", notes)
        .replace("{goal}", goal.as_str())
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}
