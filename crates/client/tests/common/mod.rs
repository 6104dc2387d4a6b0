//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

// Re-export test utilities from tours-client
#[allow(unused_imports)]
pub use tours_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use tours_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mocked tours endpoint is served under.
#[allow(dead_code)]
pub const TOURS_PATH: &str = "/react-tours-project";

/// Full endpoint URL on the given mock server.
#[allow(dead_code)]
pub fn tours_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), TOURS_PATH)
}
