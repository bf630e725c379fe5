//! Issue tracker seam
//!
//! The agent only needs five operations from a tracker. `BdTracker`
//! implements them by shelling out to `bd`; tests substitute a
//! scripted tracker.

use crate::agent::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tracker issue as returned by `bd ... --json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub issue_type: Option<String>,
    /// Remaining fields, kept for JSON output
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields for `bd create`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub priority: u8,
    pub issue_type: String,
}

impl NewIssue {
    pub fn task(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: 2,
            issue_type: "task".to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }
}

/// Blocking tracker operations used by the agent loop
pub trait Tracker {
    /// Ready issues, highest priority first, at most `limit`
    fn ready(&self, limit: usize) -> Result<Vec<Issue>>;

    /// Mark an issue as in progress
    fn claim(&self, id: &str) -> Result<Value>;

    fn create(&self, issue: &NewIssue) -> Result<Issue>;

    /// Record that `discovered` was found while working on `parent`
    fn link_discovery(&self, discovered: &str, parent: &str) -> Result<()>;

    fn close(&self, id: &str, reason: &str) -> Result<Value>;
}
