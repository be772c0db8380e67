//! Repository host implementations

pub mod github;

pub use github::GitHubRepository;
