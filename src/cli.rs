//! CLI argument parsing for the plan generation workflow.
//!
//! The CLI is intentionally thin: it wires file paths and the model id into
//! the workflow without embedding any generation policy.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::client::DEFAULT_MODEL;

/// Default location of the form export consumed by `generate`.
pub const DEFAULT_INPUT: &str = "data/exports/plan_export.json";
/// Default destination for the generated plan.
pub const DEFAULT_OUTPUT: &str = "data/exports/generated_plan.json";

/// Root CLI entrypoint for the generation workflow.
#[derive(Parser, Debug)]
#[command(
    name = "wogen",
    version,
    about = "LM-driven workout plan generator",
    after_help = "Commands:\n  generate   Load a form export, generate a plan, write it to disk\n  validate   Check a form export against the request contract\n\nExamples:\n  wogen validate --input data/exports/plan_export.json\n  wogen generate\n  wogen generate --input request.json --output plan.json --model claude-sonnet-4-5-20250514",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level workflow commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Generate(GenerateArgs),
    Validate(ValidateArgs),
}

/// Generate command inputs for the load → generate → export pipeline.
#[derive(Parser, Debug)]
#[command(about = "Generate a workout plan from an exported form request")]
pub struct GenerateArgs {
    /// Form export JSON containing the planData payload
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Destination path for the generated plan JSON
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Completion model identifier
    #[arg(long, value_name = "MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
}

/// Validate command inputs for checking a form export without generating.
#[derive(Parser, Debug)]
#[command(about = "Validate an exported form request")]
pub struct ValidateArgs {
    /// Form export JSON containing the planData payload
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
}
