//! Agent error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AgentError>;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}: {}", exit_label(.code), .stderr.trim())]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Unexpected output from `{command}`: {source}")]
    Json {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Agent task failed: {0}")]
    Join(String),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "a signal".to_string(),
    }
}

impl AgentError {
    /// Whether the tracker binary itself is likely missing or broken
    pub fn is_tracker_failure(&self) -> bool {
        matches!(
            self,
            AgentError::Spawn { .. } | AgentError::CommandFailed { .. }
        )
    }
}
