// Common test utilities and fixtures


// Re-export commonly used items
// Note: Each test binary uses a different subset of these
#[allow(unused_imports)]
pub use fixtures::{issue, FakeTracker};
#[allow(unused_imports)]
pub use helpers::{
    bridge_app, get, post_rpc, spawn_downstream, test_config, FailingBackend, MockDownstream,
    RecordedCall, RecordingBackend,
};
