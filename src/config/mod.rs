// ABOUTME: Configuration module organization for the NutriTrack server
// ABOUTME: Environment-driven runtime configuration lives in environment.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration management

/// Environment-based configuration for deployment-specific settings
pub mod environment;

pub use environment::ServerConfig;
