//! Output formatting for CLI commands
//!
//! Human output is colored (respects NO_COLOR); JSON output is one
//! object per line so it can be piped into `jq`.

use crate::agent::AgentEvent;
use crate::cli::OutputFormat;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for issue IDs
    pub fn issue_id(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

const RULE_WIDTH: usize = 60;

/// Render an agent event for humans
pub fn format_event(event: &AgentEvent) -> String {
    match event {
        AgentEvent::Started { max_iterations } => format!(
            "{} (up to {} iterations)",
            colors::label("Beads agent starting"),
            colors::number(&max_iterations.to_string())
        ),
        AgentEvent::Iteration {
            current,
            max_iterations,
        } => {
            let rule = "=".repeat(RULE_WIDTH);
            format!(
                "\n{}\n{}\n{}",
                colors::dim(&rule),
                colors::label(&format!("Iteration {current}/{max_iterations}")),
                colors::dim(&rule)
            )
        }
        AgentEvent::NoReadyWork => colors::dim("No ready work found.").to_string(),
        AgentEvent::Claiming { id } => format!("Claiming task: {}", colors::issue_id(id)),
        AgentEvent::Working { issue } => {
            let priority = issue
                .priority
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            let kind = issue.issue_type.as_deref().unwrap_or("-");
            format!(
                "\nWorking on: {} ({})\n   Priority: {}, Type: {}",
                colors::label(&issue.title),
                colors::issue_id(&issue.id),
                colors::number(&priority),
                kind
            )
        }
        AgentEvent::Discovered { title } => {
            format!("\n{} {}", colors::warning("Discovered:"), title)
        }
        AgentEvent::Creating { title } => format!("Creating issue: {title}"),
        AgentEvent::Linking { discovered, parent } => format!(
            "Linking {} <- discovered-from <- {}",
            colors::issue_id(discovered),
            colors::issue_id(parent)
        ),
        AgentEvent::Completing { id, reason } => format!(
            "{} {} - {}",
            colors::success("Completing task:"),
            colors::issue_id(id),
            reason
        ),
        AgentEvent::MoreWorkQueued => {
            "\nNew work discovered and linked. Running another cycle...".to_string()
        }
        AgentEvent::Finished { iterations } => format!(
            "\n{} after {} iteration(s)",
            colors::success("Agent finished"),
            colors::number(&iterations.to_string())
        ),
    }
}

/// Print an agent event in the requested format
pub fn print_event(event: &AgentEvent, format: OutputFormat) {
    match format {
        OutputFormat::Human => println!("{}", format_event(event)),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string(event) {
                println!("{json}");
            }
        }
    }
}

/// Print output based on format
pub fn print_output<T: serde::Serialize>(data: &T, format: OutputFormat) {
    let rendered = match format {
        OutputFormat::Human => serde_json::to_string_pretty(data),
        OutputFormat::Json => serde_json::to_string(data),
    };
    if let Ok(json) = rendered {
        println!("{json}");
    }
}

/// Print the Ctrl-C notice
pub fn print_interrupted(format: OutputFormat) {
    match format {
        OutputFormat::Human => println!("\n\n{}", colors::warning("Agent interrupted by user")),
        OutputFormat::Json => println!(r#"{{"event":"interrupted"}}"#),
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}
