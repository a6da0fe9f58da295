// ABOUTME: HTTP middleware module organization
// ABOUTME: CORS configuration for cross-origin web client access
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP middleware

/// CORS middleware configuration
pub mod cors;

pub use cors::setup_cors;
