//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the router over the built-in library
//! - Request body helpers in `fixtures`

#![allow(dead_code)]

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use recital_backend::config::Config;
use recital_backend::services::library::Library;
use recital_backend::{router, AppState};

/// Test context holding the application router.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a test context with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a test context with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(config, Library::builtin());
        Self { app: router(state) }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
