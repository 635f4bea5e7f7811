use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;
use tokio::process::Command;

use crate::config::Config;
use crate::titles;

pub const DEFAULT_GH_PROGRAM: &str = "gh";
pub const DEFAULT_TEMPLATE: &str = ".github/ISSUE_TEMPLATE/issue-template.md";

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("failed to run {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("{status}")]
    Failed { status: ExitStatus, output: String },
}

impl TrackerError {
    /// Captured stdout and stderr of a failed invocation.
    pub fn output(&self) -> Option<&str> {
        match self {
            TrackerError::Failed { output, .. } => Some(output),
            TrackerError::Spawn { .. } => None,
        }
    }
}

pub trait IssueTracker {
    async fn create_issue(&self, repo: &str, title: &str) -> Result<(), TrackerError>;
}

/// Files issues through the GitHub CLI.
#[derive(Debug, Clone)]
pub struct GhCli {
    program: PathBuf,
    template: PathBuf,
}

impl GhCli {
    pub fn new(program: impl Into<PathBuf>, template: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            template: template.into(),
        }
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new(DEFAULT_GH_PROGRAM, DEFAULT_TEMPLATE)
    }
}

impl IssueTracker for GhCli {
    async fn create_issue(&self, repo: &str, title: &str) -> Result<(), TrackerError> {
        tracing::debug!(program = %self.program.display(), repo, title, "spawning issue tracker");

        let output = Command::new(&self.program)
            .args(["issue", "create", "--repo", repo, "--title", title, "-F"])
            .arg(&self.template)
            .output()
            .await
            .map_err(|source| TrackerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(TrackerError::Failed {
                status: output.status,
                output: combined,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub created: usize,
    pub failed: usize,
}

/// Files every planned title in order. A failed title is reported and
/// skipped; it never stops the run.
pub async fn create_issues<T: IssueTracker>(tracker: &T, config: &Config) -> RunSummary {
    let mut summary = RunSummary::default();

    for title in titles::plan(config) {
        match tracker.create_issue(&config.repo, &title).await {
            Ok(()) => {
                summary.created += 1;
                println!("Successfully created issue: {title}");
            }
            Err(err) => {
                summary.failed += 1;
                tracing::debug!(title = %title, error = ?err, "issue creation failed");
                eprintln!("Error creating issue '{title}': {err}");
                if let Some(output) = err.output() {
                    eprintln!("Output: {output}");
                }
            }
        }
    }

    tracing::info!(
        repo = %config.repo,
        created = summary.created,
        failed = summary.failed,
        "issue run finished"
    );
    summary
}
