use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use github_version_checker::build_info;
use github_version_checker::config::{self, CheckerConfig};
use github_version_checker::logging;
use github_version_checker::version::checker::check_for_update;
use github_version_checker::version::presenter::Presenter;
use github_version_checker::version::repositories::GitHubRepository;
use github_version_checker::version::repository::ListOptions;

#[derive(Parser)]
#[command(name = "github-version-checker")]
#[command(version, about = "Check this build against the latest tag on GitHub")]
struct Cli {
    /// Repository owner (user or organization)
    #[arg(long)]
    owner: String,

    /// Repository name
    #[arg(long)]
    repo: String,

    /// Web host used for repository and release links
    #[arg(long, default_value = config::DEFAULT_HOST)]
    host: String,

    #[arg(long, default_value = config::DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// API token; falls back to GITHUB_TOKEN or GH_TOKEN
    #[arg(long)]
    token: Option<String>,

    #[arg(long, default_value_t = config::FETCH_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Write logs to the data directory instead of stderr
    #[arg(long)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the version this binary was built as
    Current,
    /// Compare this build with the latest tag; exits with 1 when outdated
    Check {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
    },
}

impl Cli {
    fn checker_config(&self) -> CheckerConfig {
        CheckerConfig {
            host: self.host.clone(),
            api_base_url: self.api_base_url.clone(),
            timeout_ms: self.timeout_ms,
            token: config::token(self.token.clone()),
            ..CheckerConfig::new(&self.owner, &self.repo)
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let log_path = config::log_path();
    let _guard = logging::init(cli.log_file.then_some(log_path.as_path()))?;

    let config = cli.checker_config();
    let presenter = Presenter::from_config(&config);
    let current = build_info::current_version();

    match cli.command {
        Command::Current => {
            print!("{}", presenter.present_current(&current));
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { page, per_page } => {
            let repository = GitHubRepository::from_config(&config)?;
            let options = ListOptions { page, per_page };

            let (outdated, report) = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(check_for_update(
                    &repository,
                    &presenter,
                    &current,
                    &options,
                ))
                .with_context(|| {
                    format!("failed to check {}/{} for updates", config.owner, config.repo)
                })?;

            print!("{}", report);
            if outdated {
                println!("You can find more here:\n{}", report.update_url);
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
