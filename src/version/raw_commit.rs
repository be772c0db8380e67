//! Commit payload returned by `GET /repos/{owner}/{repo}/commits/{sha}`
//!
//! The tag listing only carries the commit SHA and URL, so the commit is
//! fetched separately to recover the committer date.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCommit {
    pub sha: String,
    #[serde(default)]
    pub node_id: String,
    pub commit: CommitData,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub comments_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitData {
    pub author: Option<CommitIdentity>,
    pub committer: CommitIdentity,
    #[serde(default)]
    pub message: String,
    pub tree: Option<Tree>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub comment_count: u64,
    pub verification: Option<Verification>,
}

/// Author or committer; `date` is RFC 3339 on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitIdentity {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub sha: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub verified: bool,
    pub reason: String,
    pub signature: Option<String>,
    pub payload: Option<String>,
}

impl RawCommit {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn committed_at(&self) -> DateTime<Utc> {
        self.commit.committer.date
    }
}
