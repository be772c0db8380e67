//! Mock GitHub API built on mockito

use chrono::{Duration, Utc};
use mockito::{Mock, Server, ServerGuard};

use github_version_checker::version::repositories::GitHubRepository;
use github_version_checker::version::types::VersionInfo;

pub const OWNER: &str = "octocat";
pub const REPO: &str = "hello";

/// A mock API serving the tags and commits of `octocat/hello`
pub struct MockGitHub {
    pub server: ServerGuard,
}

impl MockGitHub {
    pub async fn start() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    pub fn repository(&self) -> GitHubRepository {
        GitHubRepository::new(reqwest::Client::new(), &self.server.url(), OWNER, REPO)
    }

    /// Serves the tag listing; each tag points at its commit on this server
    pub async fn with_tags(&mut self, tags: &[(&str, &str)]) -> Mock {
        let url = self.server.url();
        let entries: Vec<serde_json::Value> = tags
            .iter()
            .map(|(name, sha)| {
                serde_json::json!({
                    "name": name,
                    "zipball_url": format!("{}/zipball/{}", url, name),
                    "commit": {
                        "sha": sha,
                        "url": format!("{}/repos/{}/{}/commits/{}", url, OWNER, REPO, sha),
                    },
                    "node_id": "MDM6UmVmcmVmcy90YWdzL3YwLjE=",
                })
            })
            .collect();

        self.server
            .mock("GET", format!("/repos/{}/{}/tags", OWNER, REPO).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::Value::Array(entries).to_string())
            .create_async()
            .await
    }

    /// Serves a commit whose committer date is `date` (RFC 3339)
    pub async fn with_commit(&mut self, sha: &str, date: &str) -> Mock {
        let body = serde_json::json!({
            "sha": sha,
            "node_id": "C_kwDOA",
            "commit": {
                "author": {"name": "Octo Cat", "email": "octo@example.com", "date": date},
                "committer": {"name": "GitHub", "email": "noreply@github.com", "date": date},
                "message": "Release",
                "tree": {"sha": "0000", "url": "https://example.invalid/tree"},
                "url": format!("https://example.invalid/git/commits/{}", sha),
                "comment_count": 0,
                "verification": {
                    "verified": true,
                    "reason": "valid",
                    "signature": "sig",
                    "payload": "payload"
                }
            },
            "url": format!("https://example.invalid/commits/{}", sha),
            "html_url": format!("https://github.com/{}/{}/commit/{}", OWNER, REPO, sha),
            "comments_url": format!("https://example.invalid/commits/{}/comments", sha),
        });

        self.server
            .mock(
                "GET",
                format!("/repos/{}/{}/commits/{}", OWNER, REPO, sha).as_str(),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }
}

/// A version built `days` from now
pub fn version_days_from_now(name: &str, days: i64) -> VersionInfo {
    let date = Utc::now() + Duration::days(days);
    VersionInfo::new(name, "9fceb02d0ae598e95dc970b74767f19372d61af8", date).unwrap()
}
