//! Shared test utilities

pub mod github;

pub use github::{MockGitHub, version_days_from_now};
