//! Beads agent - demo work loop over the bd issue tracker
//!
//! # Examples
//!
//! ```bash
//! # Work through up to 10 ready issues
//! beads-agent run
//!
//! # Use a specific bd binary, emit JSON events
//! beads-agent --format json run --bd ~/go/bin/bd --max-iterations 3
//! ```

use clap::Parser;
use mcp_http_bridge::agent::AgentError;
use mcp_http_bridge::cli::{output, run, Cli, RunOutcome};

const INSTALL_HINT: &str =
    "Make sure bd is installed: go install github.com/steveyegge/beads/cmd/bd@latest";

fn init_logging() {
    // Progress goes to stdout; keep diagnostics on stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcp_http_bridge=warn".into()),
        )
        .with_ansi(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(RunOutcome::Completed) => {}
        // A tracker call may still be blocking; do not wait for it
        Ok(RunOutcome::Interrupted) => std::process::exit(0),
        Err(e) => {
            output::print_error(&e.to_string());
            if e
                .downcast_ref::<AgentError>()
                .is_some_and(AgentError::is_tracker_failure)
            {
                output::print_warning(INSTALL_HINT);
            }
            std::process::exit(1);
        }
    }
}
