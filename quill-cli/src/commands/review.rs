//! Pull request review command
//!
//! Resolution runs before any network call: the target pull request
//! and the review decision are both pinned down locally, and only then
//! does the submitter look up the full PR identity and create the
//! review.

use anyhow::Context;
use clap::Args;
use quill_core::git::{parse_remote_url, GitRepo};
use quill_core::review::flags::{FlagSelection, FlagValue};
use quill_core::review::target::parse_pr_arg;
use quill_core::review::wizard::{ReviewWizard, WizardOutcome};
use quill_core::review::{PrSelector, ReviewInput, ReviewTarget};
use quill_core::Config;
use quill_github::GitHubClient;
use tracing::debug;

use crate::terminal::{EditorSession, StdinPrompter, TerminalMarkdown};

/// Review a pull request
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Pull request number, #number, or URL (defaults to the current branch)
    pub selector: Option<String>,

    /// Approve the pull request, with an optional body
    #[arg(short = 'a', long, num_args = 0..=1, value_name = "BODY")]
    pub approve: Option<Option<String>>,

    /// Request changes on the pull request, with an optional body
    #[arg(short = 'r', long, num_args = 0..=1, value_name = "BODY")]
    pub request_changes: Option<Option<String>>,

    /// Comment on the pull request
    #[arg(short = 'c', long, num_args = 0..=1, value_name = "BODY")]
    pub comment: Option<Option<String>>,

    /// Repository to target (owner/name, overrides the git remote)
    #[arg(long, value_name = "OWNER/NAME")]
    pub repo: Option<String>,
}

impl ReviewArgs {
    /// Execute the review command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let target = self
            .resolve_target()
            .context("could not determine which pull request to review")?;

        debug!(repo = %target.repo, selector = ?target.selector, "Resolved review target");

        let input = FlagSelection {
            approve: FlagValue::from_arg(self.approve.clone()),
            request_changes: FlagValue::from_arg(self.request_changes.clone()),
            comment: FlagValue::from_arg(self.comment.clone()),
        }
        .resolve()
        .context("did not understand desired review action")?;

        let input = match input {
            Some(input) => input,
            None => {
                let mut prompter = StdinPrompter::new();
                let mut editor = EditorSession::new(config.editor_command());
                let mut renderer = TerminalMarkdown::stdout();

                match ReviewWizard::new(&mut prompter, &mut editor, &mut renderer).run()? {
                    WizardOutcome::Submit(input) => input,
                    WizardOutcome::Cancelled => {
                        // Backing out of the wizard is a clean exit,
                        // not an error.
                        debug!("Review cancelled");
                        return Ok(());
                    }
                }
            }
        };

        submit(&target, &input, verbose).await
    }

    /// Resolve which pull request is being reviewed
    ///
    /// Pure parsing plus local git reads; a URL argument overrides the
    /// `--repo` flag, which overrides the default remote.
    fn resolve_target(&self) -> quill_core::Result<ReviewTarget> {
        let flag_repo = self
            .repo
            .as_deref()
            .map(parse_remote_url)
            .transpose()?;

        if let Some(arg) = self.selector.as_deref() {
            let (url_repo, number) = parse_pr_arg(arg)?;
            let repo = match url_repo.or(flag_repo) {
                Some(repo) => repo,
                None => GitRepo::discover(".")?.base_repo()?,
            };
            return Ok(ReviewTarget {
                repo,
                selector: PrSelector::Number(number),
            });
        }

        let git = GitRepo::discover(".")?;
        let repo = match flag_repo {
            Some(repo) => repo,
            None => git.base_repo()?,
        };
        let selector = git.pr_selector_for_current_branch(&repo)?;

        Ok(ReviewTarget { repo, selector })
    }
}

/// Resolve the full pull request identity and submit the decision
async fn submit(target: &ReviewTarget, input: &ReviewInput, verbose: bool) -> anyhow::Result<()> {
    let client = GitHubClient::from_repo_id(&target.repo)?;

    let pr = match &target.selector {
        PrSelector::Number(number) => client.pr_by_number(*number).await,
        PrSelector::Branch(branch) => client.pr_for_branch(branch).await,
    }
    .context("could not find pull request")?;

    if verbose {
        println!("Reviewing #{}: {}", pr.number, pr.title);
    }

    client
        .add_review(&pr, input)
        .await
        .context("failed to create review")?;

    Ok(())
}
