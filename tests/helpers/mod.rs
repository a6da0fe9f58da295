// ABOUTME: Test helper module organization
// ABOUTME: HTTP test utilities for driving axum routers without a server

/// Axum HTTP testing utilities
pub mod axum_test;
