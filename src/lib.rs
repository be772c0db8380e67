//! Checks whether a build is behind the latest tag of its GitHub repository
//! and renders the result as a human-readable report.

pub mod build_info;
pub mod config;
pub mod logging;
pub mod version;
