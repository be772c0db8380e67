//! Version checking against a repository's latest tag
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ VersionSource│────▶│   Checker   │────▶│  Presenter  │
//! │   (fetch)    │     │  (one cycle)│     │  (report)   │
//! └──────────────┘     └─────────────┘     └─────────────┘
//!        │                    │
//!        ▼                    ▼
//! ┌──────────────┐     ┌─────────────┐
//! │ Repositories │     │ VersionInfo │
//! │   (GitHub)   │     │  (semver)   │
//! └──────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Runs a fetch/compare cycle
//! - [`error`]: Error types for parsing and fetching
//! - [`presenter`]: Formats version reports and release links
//! - [`raw_commit`]: Commit payload used to recover the committer date
//! - [`repository`]: Trait for fetching the latest version of a repository
//! - [`repositories`]: Concrete repository hosts (GitHub)
//! - [`semver`]: Semantic version parsing that keeps the original string
//! - [`types`]: The `VersionInfo` record

pub mod checker;
pub mod error;
pub mod presenter;
pub mod raw_commit;
pub mod repositories;
pub mod repository;
pub mod semver;
pub mod types;
