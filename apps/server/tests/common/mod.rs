//! Common test utilities and fixtures for integration tests.
//!
//! Each test builds its own in-memory state, so tests are independent
//! and need no external services.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use focusaurus_server::{app_router, AppState};

/// Test context holding the application router over fresh state.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    pub fn new() -> Self {
        let app = app_router(AppState::new());
        Self { app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Spin up a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("test server")
    }
}
