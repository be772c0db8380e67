//! GitHub tags API implementation

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::CheckerConfig;
use crate::version::error::{CheckError, VersionError};
use crate::version::raw_commit::RawCommit;
use crate::version::repository::{ListOptions, VersionSource};
use crate::version::semver::SemanticVersion;
use crate::version::types::VersionInfo;

const LIST_TAGS: &str = "list tags";
const FETCH_COMMIT: &str = "fetch commit";

/// Entry of `GET /repos/{owner}/{repo}/tags`
#[derive(Debug, Deserialize)]
struct Tag {
    name: String,
    commit: TagCommit,
}

#[derive(Debug, Deserialize)]
struct TagCommit {
    sha: String,
    url: String,
}

/// Client for the tags of a single GitHub repository
pub struct GitHubRepository {
    client: reqwest::Client,
    base_url: String,
    owner: String,
    repo: String,
}

impl GitHubRepository {
    /// Creates a client using the given transport and API base URL
    pub fn new(client: reqwest::Client, base_url: &str, owner: &str, repo: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    pub fn from_config(config: &CheckerConfig) -> Result<Self, CheckError> {
        let client = config.http_client().map_err(|source| CheckError::Network {
            context: "build client",
            source,
        })?;
        Ok(Self::new(
            client,
            &config.api_base_url,
            &config.owner,
            &config.repo,
        ))
    }

    fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    async fn list_tags(&self, options: &ListOptions) -> Result<Vec<Tag>, CheckError> {
        let mut url = format!("{}/repos/{}/tags", self.base_url, self.full_name());
        let query: Vec<String> = options
            .query()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }

        debug!("Listing tags: {}", url);
        let response = self.get(&url, LIST_TAGS).await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CheckError::RepositoryNotFound(self.full_name()));
        }
        let response = check_status(response, LIST_TAGS)?;

        let body = response
            .text()
            .await
            .map_err(|source| CheckError::Network {
                context: LIST_TAGS,
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| {
            warn!("Failed to decode GitHub tags response: {}", source);
            CheckError::Decode {
                context: LIST_TAGS,
                source,
            }
        })
    }

    async fn fetch_commit(&self, commit: &TagCommit) -> Result<RawCommit, CheckError> {
        debug!("Fetching commit {}: {}", commit.sha, commit.url);
        let response = self.get(&commit.url, FETCH_COMMIT).await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CheckError::CommitNotFound(commit.sha.clone()));
        }
        let response = check_status(response, FETCH_COMMIT)?;

        let body = response
            .text()
            .await
            .map_err(|source| CheckError::Network {
                context: FETCH_COMMIT,
                source,
            })?;

        RawCommit::from_json(&body).map_err(|source| {
            warn!("Failed to decode commit {}: {}", commit.sha, source);
            CheckError::Decode {
                context: FETCH_COMMIT,
                source,
            }
        })
    }

    async fn get(
        &self,
        url: &str,
        context: &'static str,
    ) -> Result<reqwest::Response, CheckError> {
        self.client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|source| CheckError::Network { context, source })
    }
}

#[async_trait::async_trait]
impl VersionSource for GitHubRepository {
    async fn get_latest_version(&self, options: &ListOptions) -> Result<VersionInfo, CheckError> {
        let tags = self.list_tags(options).await?;
        let latest = select_latest(tags)?;
        let raw_commit = self.fetch_commit(&latest.commit).await?;

        let version = VersionInfo::new(
            &latest.name,
            &latest.commit.sha,
            raw_commit.committed_at(),
        )?;
        debug!(
            "Latest version of {} is {}",
            self.full_name(),
            version.semantic_version()
        );
        Ok(version)
    }
}

/// Maps rate limiting and other unsuccessful statuses to errors
fn check_status(
    response: reqwest::Response,
    context: &'static str,
) -> Result<reqwest::Response, CheckError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let headers = response.headers();
    let rate_limited = status == reqwest::StatusCode::TOO_MANY_REQUESTS
        || (status == reqwest::StatusCode::FORBIDDEN
            && headers
                .get("x-ratelimit-remaining")
                .is_some_and(|v| v.as_bytes() == b"0"));
    if rate_limited {
        let retry_after = headers
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        return Err(CheckError::RateLimited {
            retry_after_secs: retry_after,
        });
    }

    warn!("GitHub API returned status {}: {}", status, response.url());
    Err(CheckError::InvalidResponse {
        context,
        message: format!("Unexpected status: {}", status),
    })
}

/// Picks the tag with the highest semantic version.
///
/// GitHub lists tags newest-first, but only by ref order, so the page is
/// ranked by parsed version instead. Ties keep the earlier tag. Tags that
/// don't parse are skipped; if none parse, the first parse error is returned.
fn select_latest(tags: Vec<Tag>) -> Result<Tag, CheckError> {
    let mut latest: Option<(Tag, SemanticVersion)> = None;
    let mut first_error: Option<VersionError> = None;

    for tag in tags {
        match SemanticVersion::parse(&tag.name) {
            Ok(version) => {
                if latest.as_ref().is_none_or(|(_, best)| version > *best) {
                    latest = Some((tag, version));
                }
            }
            Err(e) => {
                debug!("Skipping tag {}: {}", tag.name, e);
                first_error.get_or_insert(e);
            }
        }
    }

    match (latest, first_error) {
        (Some((tag, _)), _) => Ok(tag),
        (None, Some(e)) => Err(e.into()),
        (None, None) => Err(CheckError::NoTags),
    }
}
