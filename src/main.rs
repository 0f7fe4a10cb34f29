use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod client;
mod error;
mod export;
mod normalize;
mod parse;
mod plan;
mod prompt;
mod request;
mod workflow;

use crate::cli::{Command, RootArgs};
use crate::error::GeneratorError;

fn main() -> Result<()> {
    init_tracing();
    let args = RootArgs::parse();

    let outcome = match args.command {
        Command::Generate(args) => workflow::run_generate(&args),
        Command::Validate(args) => workflow::run_validate(&args),
    };

    match outcome {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<GeneratorError>() {
            Some(classified) => {
                eprintln!("error: {classified}");
                std::process::exit(1);
            }
            None => {
                // Unclassified failures propagate so the exit status and
                // full context chain stay visible to the caller.
                tracing::error!("unexpected error: {err:#}");
                Err(err)
            }
        },
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
