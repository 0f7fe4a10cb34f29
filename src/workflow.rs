//! End-to-end generation workflow behind the CLI commands.
//!
//! The generate path is strictly sequential: resolve credentials, load the
//! request, render the prompt, call the completion service once, parse,
//! normalize, export. Console lines are advisory; warnings and structured
//! progress go through `tracing`.
use anyhow::Result;
use std::path::Path;

use crate::cli::{GenerateArgs, ValidateArgs};
use crate::client::{AnthropicClient, Completion};
use crate::error::GeneratorError;
use crate::export::export_plan;
use crate::normalize::normalize_plan;
use crate::parse::parse_response;
use crate::plan::GeneratedPlan;
use crate::prompt::{build_user_prompt, SYSTEM_PROMPT};
use crate::request::{load_plan_request, request_summary, validate, PlanRequest};

const RULER: &str = "============================================================";

/// Run the full pipeline: load → prompt → complete → parse → normalize → export.
pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    // Credential resolution comes first: a missing key must fail before any
    // file I/O is attempted.
    let client = AnthropicClient::from_env(&args.model)?;
    generate_with_client(&client, &args.input, &args.output, &args.model)
}

fn generate_with_client(
    client: &dyn Completion,
    input: &Path,
    output: &Path,
    model: &str,
) -> Result<()> {
    println!("Loading request from: {}", input.display());
    let request = load_plan_request(input)?;

    println!("{RULER}");
    println!("REQUEST LOADED FROM FORM:");
    println!("{RULER}");
    print!("{}", request_summary(&request));
    println!("{RULER}");

    let user_prompt = build_user_prompt(&request);
    println!("Model: {model}");
    println!("Sending request to the completion service...");
    tracing::info!(model, prompt_bytes = user_prompt.len(), "completion request");
    let response = client.complete(SYSTEM_PROMPT, &user_prompt)?;

    println!("Parsing response...");
    let parsed = parse_response(&response)?;

    println!("Normalizing plan structure...");
    let plan = normalize_plan(&parsed, expected_workouts(&request))?;

    report_plan(&plan);

    export_plan(&plan, output)?;
    println!("Plan exported to: {}", output.display());
    Ok(())
}

/// Workout count the model was asked for; mirrors the prompt default when
/// the form left the cadence unset.
fn expected_workouts(request: &PlanRequest) -> usize {
    if request.days_per_week > 0 {
        request.days_per_week as usize
    } else {
        3
    }
}

fn report_plan(plan: &GeneratedPlan) {
    let total_exercises: usize = plan
        .workouts
        .iter()
        .map(|workout| workout.exercises.len())
        .sum();
    println!("Plan generated successfully!");
    println!("  - Workouts:        {}", plan.workouts.len());
    println!("  - Total exercises: {total_exercises}");
    println!("  - Level:           {}", plan.level);
    println!("  - Goal:            {}", plan.goal);
}

/// Load a request and report validation results without generating.
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    let request = load_plan_request(&args.input)?;

    println!("{RULER}");
    println!("PLAN REQUEST SUMMARY");
    println!("{RULER}");
    print!("{}", request_summary(&request));
    println!("{RULER}");

    let (is_valid, errors) = validate(&request);
    if is_valid {
        println!("Request is valid.");
        return Ok(());
    }

    println!("Request is invalid:");
    for error in &errors {
        println!("  - {error}");
    }
    Err(GeneratorError::Structure(format!(
        "request failed validation with {} error(s)",
        errors.len()
    ))
    .into())
}
