use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Repository host constants
// =============================================================================

/// Web host used to build repository and release URLs
pub const DEFAULT_HOST: &str = "github.com";

/// Default base URL for the GitHub REST API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// User agent sent with every request (GitHub rejects requests without one)
pub const DEFAULT_USER_AGENT: &str = "github-version-checker";

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

// =============================================================================
// Version constants
// =============================================================================

/// Placeholder version used when no valid version was embedded at build time
pub const DEFAULT_VERSION: &str = "v0.0.1";

/// Date format used in reports and accepted for injected build times,
/// e.g. `Mon Jan  2 15:04:05 UTC 2006`
pub const BUILD_TIME_FORMAT: &str = "%a %b %e %H:%M:%S UTC %Y";

/// Environment variables consulted for an API token, in order
const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Configuration of the repository being checked
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    pub owner: String,
    pub repo: String,
    /// Web host for repository URLs
    pub host: String,
    pub api_base_url: String,
    pub user_agent: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Optional bearer token for the API
    pub token: Option<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repo: String::new(),
            host: DEFAULT_HOST.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
            token: None,
        }
    }
}

impl CheckerConfig {
    pub fn new(owner: &str, repo: &str) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Builds the HTTP transport for this configuration.
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = &self.token {
            // Tokens with characters that can't go in a header are ignored
            if let Ok(mut value) =
                reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token))
            {
                value.set_sensitive(true);
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
        }

        reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .timeout(self.timeout())
            .default_headers(headers)
            .build()
    }
}

/// Returns the API token from the explicit value or the environment.
/// Checks GITHUB_TOKEN, then GH_TOKEN.
pub fn token(explicit: Option<String>) -> Option<String> {
    token_with_env(explicit, |key| std::env::var(key).ok())
}

fn token_with_env(
    explicit: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    explicit
        .or_else(|| TOKEN_ENV_VARS.iter().find_map(|key| lookup(*key)))
        .filter(|token| !token.trim().is_empty())
}

/// Returns the path to the data directory for github-version-checker.
/// Uses $XDG_DATA_HOME/github-version-checker if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/github-version-checker,
/// or ./github-version-checker if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("github-version-checker.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("github-version-checker")
}
