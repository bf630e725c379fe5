//! Agent work loop
//!
//! Find ready work, claim it, do the (simulated) work, close it.
//! Work on anything that looks like a feature discovers a follow-up
//! test task which is created and linked back to its parent.

use crate::agent::error::Result;
use crate::agent::tracker::{Issue, NewIssue, Tracker};
use serde::Serialize;
use tracing::info;

pub const DEFAULT_MAX_ITERATIONS: usize = 10;
pub const COMPLETION_REASON: &str = "Implemented successfully";

/// Progress reported while the agent runs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AgentEvent {
    Started {
        max_iterations: usize,
    },
    Iteration {
        current: usize,
        max_iterations: usize,
    },
    NoReadyWork,
    Claiming {
        id: String,
    },
    Working {
        issue: Issue,
    },
    Discovered {
        title: String,
    },
    Creating {
        title: String,
    },
    Linking {
        discovered: String,
        parent: String,
    },
    Completing {
        id: String,
        reason: String,
    },
    MoreWorkQueued,
    Finished {
        iterations: usize,
    },
}

/// What a full run did
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub iterations: usize,
    pub completed: Vec<String>,
    pub discovered: Vec<String>,
}

/// Whether working on an issue turns up missing test coverage
pub fn needs_follow_up(title: &str) -> bool {
    let title = title.to_lowercase();
    title.contains("implement") || title.contains("add")
}

pub struct Agent<T: Tracker> {
    tracker: T,
}

impl<T: Tracker> Agent<T> {
    pub fn new(tracker: T) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Highest-priority ready issue, if any
    pub fn find_ready_work(&self) -> Result<Option<Issue>> {
        Ok(self.tracker.ready(1)?.into_iter().next())
    }

    /// Simulated work; returns the id of a discovered issue
    fn simulate_work(
        &self,
        issue: &Issue,
        emit: &mut dyn FnMut(AgentEvent),
    ) -> Result<Option<String>> {
        emit(AgentEvent::Working {
            issue: issue.clone(),
        });

        if !needs_follow_up(&issue.title) {
            return Ok(None);
        }

        let title = format!("Add tests for {}", issue.title);
        emit(AgentEvent::Discovered {
            title: "Missing test coverage for this feature".to_string(),
        });
        emit(AgentEvent::Creating {
            title: title.clone(),
        });

        let new_issue = NewIssue::task(title)
            .with_description(format!(
                "While implementing {}, noticed missing tests",
                issue.id
            ))
            .with_priority(1);
        let created = self.tracker.create(&new_issue)?;

        emit(AgentEvent::Linking {
            discovered: created.id.clone(),
            parent: issue.id.clone(),
        });
        self.tracker.link_discovery(&created.id, &issue.id)?;

        Ok(Some(created.id))
    }

    /// One work cycle; `false` when no work was found
    pub fn run_once(
        &self,
        summary: &mut RunSummary,
        emit: &mut dyn FnMut(AgentEvent),
    ) -> Result<bool> {
        let Some(issue) = self.find_ready_work()? else {
            emit(AgentEvent::NoReadyWork);
            return Ok(false);
        };

        emit(AgentEvent::Claiming {
            id: issue.id.clone(),
        });
        self.tracker.claim(&issue.id)?;

        let discovered = self.simulate_work(&issue, emit)?;

        emit(AgentEvent::Completing {
            id: issue.id.clone(),
            reason: COMPLETION_REASON.to_string(),
        });
        self.tracker.close(&issue.id, COMPLETION_REASON)?;
        info!(issue = %issue.id, "Issue closed");

        summary.completed.push(issue.id);
        if let Some(id) = discovered {
            summary.discovered.push(id);
            emit(AgentEvent::MoreWorkQueued);
        }

        Ok(true)
    }

    /// Run until no work remains or `max_iterations` cycles have run
    pub fn run(
        &self,
        max_iterations: usize,
        emit: &mut dyn FnMut(AgentEvent),
    ) -> Result<RunSummary> {
        emit(AgentEvent::Started { max_iterations });

        let mut summary = RunSummary::default();
        for i in 0..max_iterations {
            emit(AgentEvent::Iteration {
                current: i + 1,
                max_iterations,
            });
            summary.iterations = i + 1;

            if !self.run_once(&mut summary, emit)? {
                break;
            }
        }

        emit(AgentEvent::Finished {
            iterations: summary.iterations,
        });
        Ok(summary)
    }
}
