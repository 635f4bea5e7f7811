use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::models::DEFAULT_MODELS_URL;
use crate::tracker::{DEFAULT_GH_PROGRAM, DEFAULT_TEMPLATE};

/// issue-creator - File CRUD issues for every keyword in a config file
#[derive(Parser, Debug)]
#[command(name = "issue-creator")]
#[command(about = "Create GitHub issues for keywords listed in a JSON config file")]
#[command(version)]
#[command(group(ArgGroup::new("mode").required(true).args(["config", "list_models"])))]
pub struct Cli {
    /// JSON config with `repo` and `keywords`
    pub config: Option<PathBuf>,

    /// List the models offered by a provider instead of creating issues
    #[arg(long, value_enum, value_name = "PROVIDER")]
    pub list_models: Option<Provider>,

    /// Print the issue titles without invoking the issue tracker
    #[arg(long)]
    pub dry_run: bool,

    /// Issue-tracker executable
    #[arg(long = "gh", env = "ISSUE_CREATOR_GH", default_value = DEFAULT_GH_PROGRAM)]
    pub gh_program: PathBuf,

    /// Body template passed to the issue tracker
    #[arg(long, env = "ISSUE_CREATOR_TEMPLATE", default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// Models-listing endpoint
    #[arg(long, env = "OPENROUTER_MODELS_URL", default_value = DEFAULT_MODELS_URL)]
    pub models_url: String,

    /// Bearer token for the models-listing endpoint
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    #[value(name = "openrouter/", alias = "openrouter")]
    OpenRouter,
}
