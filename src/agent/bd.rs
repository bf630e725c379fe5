//! `bd` command-line tracker
//!
//! Every call is one blocking subprocess. Output is parsed as JSON;
//! a non-zero exit is an error.

use crate::agent::error::{AgentError, Result};
use crate::agent::tracker::{Issue, NewIssue, Tracker};
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

pub const DEFAULT_BINARY: &str = "bd";

pub struct BdTracker {
    binary: PathBuf,
}

impl BdTracker {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn render(&self, args: &[&str]) -> String {
        let mut command = self.binary.display().to_string();
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        command
    }

    /// Run the binary and return its stdout
    fn exec(&self, args: &[&str]) -> Result<String> {
        let command = self.render(args);
        debug!("Running {}", command);

        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|source| AgentError::Spawn {
                binary: self.binary.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(AgentError::CommandFailed {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run with `--json` appended; empty output parses as `{}`
    fn run_json(&self, args: &[&str]) -> Result<Value> {
        let mut full: Vec<&str> = args.to_vec();
        full.push("--json");

        let stdout = self.exec(&full)?;
        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        serde_json::from_str(trimmed).map_err(|source| AgentError::Json {
            command: self.render(&full),
            source,
        })
    }
}

impl Default for BdTracker {
    fn default() -> Self {
        Self::new(DEFAULT_BINARY)
    }
}

impl Tracker for BdTracker {
    fn ready(&self, limit: usize) -> Result<Vec<Issue>> {
        let limit = limit.to_string();
        let args = ["ready", "--limit", limit.as_str()];
        match self.run_json(&args)? {
            Value::Array(items) => serde_json::from_value(Value::Array(items)).map_err(|source| {
                AgentError::Json {
                    command: self.render(&args),
                    source,
                }
            }),
            _ => Ok(Vec::new()),
        }
    }

    fn claim(&self, id: &str) -> Result<Value> {
        self.run_json(&["update", id, "--status", "in_progress"])
    }

    fn create(&self, issue: &NewIssue) -> Result<Issue> {
        let priority = issue.priority.to_string();
        let mut args = vec![
            "create",
            issue.title.as_str(),
            "-p",
            priority.as_str(),
            "-t",
            issue.issue_type.as_str(),
        ];
        if !issue.description.is_empty() {
            args.push("-d");
            args.push(issue.description.as_str());
        }

        let value = self.run_json(&args)?;
        serde_json::from_value(value).map_err(|source| AgentError::Json {
            command: self.render(&args),
            source,
        })
    }

    fn link_discovery(&self, discovered: &str, parent: &str) -> Result<()> {
        self.exec(&["dep", "add", discovered, parent, "--type", "discovered-from"])?;
        Ok(())
    }

    fn close(&self, id: &str, reason: &str) -> Result<Value> {
        self.run_json(&["close", id, "--reason", reason])
    }
}
