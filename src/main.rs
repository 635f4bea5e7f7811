mod cli;
mod config;
mod logging;
mod models;
mod titles;
mod tracker;

use std::path::Path;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cli::{Cli, Provider};
use config::Config;
use tracker::GhCli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_error(err),
    };

    logging::init(cli.verbose);

    match (cli.list_models, cli.config.as_deref()) {
        (Some(Provider::OpenRouter), _) => {
            if let Err(err) = models::list_models(&cli.models_url, cli.api_key.as_deref()).await {
                tracing::debug!(error = ?err, "model listing failed");
                eprintln!("{err:#}");
            }
            ExitCode::SUCCESS
        }
        (None, Some(path)) => create_issues(&cli, path).await,
        (None, None) => usage_error(Cli::command().error(
            ErrorKind::MissingRequiredArgument,
            "a config file or --list-models is required",
        )),
    }
}

/// clap reports --help and --version as errors too; those exit 0.
fn usage_error(err: clap::Error) -> ExitCode {
    let code = if err.use_stderr() { 1 } else { 0 };
    let _ = err.print();
    ExitCode::from(code)
}

async fn create_issues(cli: &Cli, path: &Path) -> ExitCode {
    let config = match Config::load(path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {err}");
            return ExitCode::FAILURE;
        }
    };

    if cli.dry_run {
        for title in titles::plan(&config) {
            println!("Would create issue in {}: {title}", config.repo);
        }
        return ExitCode::SUCCESS;
    }

    let gh = GhCli::new(&cli.gh_program, &cli.template);
    tracker::create_issues(&gh, &config).await;
    ExitCode::SUCCESS
}
