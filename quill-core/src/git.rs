//! Local git context for target resolution
//!
//! Quill only reads from the repository: the default remote gives the
//! ambient repository identity, and the checked-out branch gives the
//! pull request selector when no positional argument was passed.

use std::path::Path;

use git2::Repository;
use tracing::debug;

use crate::review::{PrSelector, RepoId};
use crate::{Error, Result};

/// A git repository wrapper providing the local context quill needs
pub struct GitRepo {
    repo: Repository,
}

impl std::fmt::Debug for GitRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepo")
            .field("workdir", &self.repo.workdir())
            .finish_non_exhaustive()
    }
}

impl GitRepo {
    /// Open the repository containing the given path
    ///
    /// Searches upward from the given path to find the repository root.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let repo = Repository::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                Error::Git(format!(
                    "not a git repository: {}. Use --repo owner/name or run inside a clone.",
                    path.display()
                ))
            } else {
                Error::Git(e.message().to_string())
            }
        })?;

        Ok(Self { repo })
    }

    /// URL of the default remote ("origin", else the first remote)
    pub fn default_remote_url(&self) -> Result<String> {
        if let Ok(remote) = self.repo.find_remote("origin") {
            if let Some(url) = remote.url() {
                return Ok(url.to_string());
            }
        }

        let remotes = self
            .repo
            .remotes()
            .map_err(|e| Error::Git(format!("failed to list remotes: {}", e)))?;

        for remote_name in remotes.iter().flatten() {
            if let Ok(remote) = self.repo.find_remote(remote_name) {
                if let Some(url) = remote.url() {
                    return Ok(url.to_string());
                }
            }
        }

        Err(Error::Git(
            "no remotes configured. Add one with 'git remote add origin <url>'".to_string(),
        ))
    }

    /// Repository identity parsed from the default remote
    pub fn base_repo(&self) -> Result<RepoId> {
        let url = self.default_remote_url()?;
        parse_remote_url(&url)
    }

    /// Name of the currently checked out branch
    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head().map_err(|e| match e.code() {
            git2::ErrorCode::UnbornBranch => {
                Error::NotFound("the current branch has no commits yet".to_string())
            }
            _ => Error::Git(format!("failed to read HEAD: {}", e)),
        })?;

        if !head.is_branch() {
            return Err(Error::NotFound(
                "not on a branch (detached HEAD)".to_string(),
            ));
        }

        head.shorthand()
            .map(|s| s.to_string())
            .ok_or_else(|| Error::Git("branch name is not valid UTF-8".to_string()))
    }

    /// Selector for the pull request tied to the current branch
    ///
    /// A branch checked out from a pull request ref has
    /// `branch.<name>.merge` pointing at `refs/pull/<n>/head`, which
    /// pins the number directly. Otherwise the selector is the branch
    /// name, qualified with the push remote's owner when that owner
    /// differs from the base repository's.
    pub fn pr_selector_for_current_branch(&self, base: &RepoId) -> Result<PrSelector> {
        let branch = self.current_branch()?;
        let config = self
            .repo
            .config()
            .map_err(|e| Error::Git(format!("failed to read git config: {}", e)))?;

        if let Ok(merge_ref) = config.get_string(&format!("branch.{}.merge", branch)) {
            if let Some(number) = pr_number_from_merge_ref(&merge_ref) {
                debug!(branch = %branch, number, "Branch is checked out from a pull request ref");
                return Ok(PrSelector::Number(number));
            }
        }

        if let Ok(remote_name) = config.get_string(&format!("branch.{}.remote", branch)) {
            if let Ok(remote) = self.repo.find_remote(&remote_name) {
                if let Some(url) = remote.url() {
                    if let Ok(push_repo) = parse_remote_url(url) {
                        if push_repo.owner != base.owner {
                            debug!(
                                branch = %branch,
                                owner = %push_repo.owner,
                                "Branch pushes to a fork"
                            );
                            return Ok(PrSelector::Branch(format!(
                                "{}:{}",
                                push_repo.owner, branch
                            )));
                        }
                    }
                }
            }
        }

        Ok(PrSelector::Branch(branch))
    }
}

/// Extract a pull request number from a ref like `refs/pull/123/head`
fn pr_number_from_merge_ref(merge_ref: &str) -> Option<u64> {
    let rest = merge_ref.strip_prefix("refs/pull/")?;
    let (number, _) = rest.split_once('/')?;
    number.parse().ok()
}

/// Parse a repository shorthand or git remote URL into an identity
///
/// Supports the forms quill encounters in the wild:
/// - `owner/name`
/// - `https://github.com/owner/name[.git]`
/// - `git@github.com:owner/name[.git]`
pub fn parse_remote_url(url: &str) -> Result<RepoId> {
    if !url.contains("://") && !url.contains('@') {
        let parts: Vec<&str> = url.split('/').collect();
        if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            return Ok(RepoId::new(parts[0], parts[1].trim_end_matches(".git")));
        }
        return Err(Error::InvalidArgument(format!(
            "invalid repository format: {}. Expected owner/name",
            url
        )));
    }

    if url.starts_with("https://") || url.starts_with("http://") {
        let parsed = url::Url::parse(url)
            .map_err(|e| Error::InvalidArgument(format!("invalid remote URL {}: {}", url, e)))?;
        let path = parsed.path().trim_start_matches('/').trim_end_matches(".git");
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() >= 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            return Ok(RepoId::new(parts[0], parts[1]));
        }
        return Err(Error::InvalidArgument(format!(
            "invalid remote URL path: {}",
            path
        )));
    }

    if let Some(path) = url.strip_prefix("git@").and_then(|rest| rest.split(':').nth(1)) {
        let path = path.trim_end_matches(".git");
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() >= 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            return Ok(RepoId::new(parts[0], parts[1]));
        }
        return Err(Error::InvalidArgument(format!("invalid SSH URL: {}", url)));
    }

    Err(Error::InvalidArgument(format!(
        "unrecognized remote URL: {}",
        url
    )))
}
