//! Agent loop against the in-memory tracker

use mcp_http_bridge::agent::workflow::{COMPLETION_REASON, DEFAULT_MAX_ITERATIONS};
use mcp_http_bridge::agent::{Agent, AgentError, AgentEvent, RunSummary};

use crate::common::{issue, FakeTracker};

fn collect(
    agent: &Agent<FakeTracker>,
    max_iterations: usize,
) -> (Vec<AgentEvent>, Result<RunSummary, AgentError>) {
    let mut events = Vec::new();
    let result = agent.run(max_iterations, &mut |event| events.push(event));
    (events, result)
}

#[test]
fn test_stops_when_nothing_is_ready() {
    let agent = Agent::new(FakeTracker::default());

    let (events, result) = collect(&agent, DEFAULT_MAX_ITERATIONS);
    let summary = result.unwrap();

    assert_eq!(summary.iterations, 1);
    assert!(summary.completed.is_empty());
    assert_eq!(agent.tracker().log(), vec!["ready --limit 1"]);
    assert!(events.contains(&AgentEvent::NoReadyWork));
    assert_eq!(events.last(), Some(&AgentEvent::Finished { iterations: 1 }));
}

#[test]
fn test_plain_issue_is_claimed_and_closed() {
    let agent = Agent::new(FakeTracker::with_ready([issue("bd-1", "Fix flaky test")]));

    let (events, result) = collect(&agent, DEFAULT_MAX_ITERATIONS);
    let summary = result.unwrap();

    assert_eq!(summary.completed, vec!["bd-1"]);
    assert!(summary.discovered.is_empty());
    assert_eq!(summary.iterations, 2);
    assert_eq!(
        agent.tracker().log(),
        vec![
            "ready --limit 1",
            "update bd-1",
            "close bd-1",
            "ready --limit 1",
        ]
    );
    assert!(events.contains(&AgentEvent::Completing {
        id: "bd-1".to_string(),
        reason: COMPLETION_REASON.to_string(),
    }));
    assert!(!events.contains(&AgentEvent::MoreWorkQueued));
}

#[test]
fn test_implement_title_creates_and_links_follow_up() {
    let agent = Agent::new(FakeTracker::with_ready([issue("bd-1", "Implement login")]));

    let mut summary = RunSummary::default();
    let mut events = Vec::new();
    let worked = agent
        .run_once(&mut summary, &mut |event| events.push(event))
        .unwrap();

    assert!(worked);
    assert_eq!(summary.completed, vec!["bd-1"]);
    assert_eq!(summary.discovered, vec!["bd-100"]);

    let created = agent.tracker().created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].title, "Add tests for Implement login");
    assert_eq!(
        created[0].description,
        "While implementing bd-1, noticed missing tests"
    );
    assert_eq!(created[0].priority, 1);
    assert_eq!(created[0].issue_type, "task");

    assert_eq!(
        agent.tracker().log(),
        vec![
            "ready --limit 1",
            "update bd-1",
            "create Add tests for Implement login",
            "dep add bd-100 bd-1",
            "close bd-1",
        ]
    );
    assert!(events.contains(&AgentEvent::Linking {
        discovered: "bd-100".to_string(),
        parent: "bd-1".to_string(),
    }));
    assert_eq!(events.last(), Some(&AgentEvent::MoreWorkQueued));
}

#[test]
fn test_discovered_work_is_picked_up_next() {
    let agent = Agent::new(FakeTracker::with_ready([issue("bd-1", "Add retry flag")]));

    let (_, result) = collect(&agent, DEFAULT_MAX_ITERATIONS);
    let summary = result.unwrap();

    // The follow-up title itself starts with "Add", so each one spawns
    // another until the iteration cap is hit
    assert_eq!(summary.iterations, DEFAULT_MAX_ITERATIONS);
    assert_eq!(summary.completed.len(), DEFAULT_MAX_ITERATIONS);
    assert_eq!(summary.completed[0], "bd-1");
    assert_eq!(summary.completed[1], "bd-100");
    assert_eq!(agent.tracker().remaining(), 1);
}

#[test]
fn test_respects_max_iterations() {
    let issues = (1..=5).map(|n| issue(&format!("bd-{n}"), &format!("Fix bug {n}")));
    let agent = Agent::new(FakeTracker::with_ready(issues));

    let (events, result) = collect(&agent, 3);
    let summary = result.unwrap();

    assert_eq!(summary.iterations, 3);
    assert_eq!(summary.completed, vec!["bd-1", "bd-2", "bd-3"]);
    assert_eq!(agent.tracker().remaining(), 2);
    assert_eq!(events.first(), Some(&AgentEvent::Started { max_iterations: 3 }));
    assert!(events.contains(&AgentEvent::Iteration {
        current: 3,
        max_iterations: 3,
    }));
    assert!(!events.contains(&AgentEvent::Iteration {
        current: 4,
        max_iterations: 3,
    }));
}

#[test]
fn test_tracker_failure_stops_the_run() {
    let agent = Agent::new(
        FakeTracker::with_ready([issue("bd-1", "Fix bug"), issue("bd-2", "Fix other bug")])
            .failing_close(),
    );

    let (events, result) = collect(&agent, DEFAULT_MAX_ITERATIONS);
    let err = result.unwrap_err();

    assert!(matches!(err, AgentError::CommandFailed { code: Some(1), .. }));
    assert!(err.is_tracker_failure());
    assert!(err.to_string().contains("database is locked"));
    assert_eq!(agent.tracker().log().last().map(String::as_str), Some("close bd-1"));
    assert!(!events.iter().any(|e| matches!(e, AgentEvent::Finished { .. })));
}
