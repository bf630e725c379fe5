//! Demonstration agent driving the `bd` issue tracker
//!
//! Strictly sequential: each tracker call blocks until the subprocess
//! exits, and the loop never runs two calls at once.

pub mod bd;
pub mod error;
pub mod tracker;
pub mod workflow;

pub use bd::BdTracker;
pub use error::AgentError;
pub use tracker::{Issue, NewIssue, Tracker};
pub use workflow::{Agent, AgentEvent, RunSummary};
