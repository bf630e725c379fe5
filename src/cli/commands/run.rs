//! Run command - drive the agent loop against bd

use crate::agent::bd::DEFAULT_BINARY;
use crate::agent::workflow::DEFAULT_MAX_ITERATIONS;
use crate::agent::{Agent, AgentError, AgentEvent, BdTracker};
use crate::cli::output;
use crate::cli::{OutputFormat, RunOutcome};
use clap::builder::TypedValueParser;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the bd binary
    #[arg(long, env = "BD_BIN", default_value = DEFAULT_BINARY)]
    pub bd: PathBuf,

    /// Maximum number of work cycles
    #[arg(
        long,
        short = 'n',
        default_value_t = DEFAULT_MAX_ITERATIONS,
        value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize)
    )]
    pub max_iterations: usize,
}

/// Execute the run command
///
/// The loop runs on a blocking thread; Ctrl-C ends the command
/// without waiting for the current tracker call.
pub async fn execute(
    args: RunArgs,
    format: OutputFormat,
) -> Result<RunOutcome, Box<dyn std::error::Error>> {
    let agent = Agent::new(BdTracker::new(args.bd));
    let max_iterations = args.max_iterations;

    let task = tokio::task::spawn_blocking(move || {
        let mut emit = |event: AgentEvent| output::print_event(&event, format);
        agent.run(max_iterations, &mut emit)
    });

    tokio::select! {
        joined = task => {
            let summary = joined.map_err(|e| AgentError::Join(e.to_string()))??;
            if format == OutputFormat::Json {
                output::print_output(&summary, format);
            }
            Ok(RunOutcome::Completed)
        }
        _ = tokio::signal::ctrl_c() => {
            output::print_interrupted(format);
            Ok(RunOutcome::Interrupted)
        }
    }
}
