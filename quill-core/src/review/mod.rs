//! Review domain model and input resolution
//!
//! The types here describe a review decision and the pull request it
//! applies to. Resolution happens in three places: [`target`] parses
//! the positional argument, [`flags`] maps the mutually-exclusive
//! review flags onto a decision, and [`wizard`] runs the interactive
//! fallback when no flag was given.

pub mod flags;
pub mod target;
pub mod wizard;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Verdict attached to a pull request review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    Approve,
    RequestChanges,
    Comment,
}

impl ReviewState {
    /// GraphQL `PullRequestReviewEvent` value for this state
    pub fn event(self) -> &'static str {
        match self {
            ReviewState::Approve => "APPROVE",
            ReviewState::RequestChanges => "REQUEST_CHANGES",
            ReviewState::Comment => "COMMENT",
        }
    }
}

/// A fully resolved review decision
///
/// Built exactly once per invocation and consumed exactly once by the
/// submitter. Invariant: a [`ReviewState::Comment`] decision carries a
/// non-blank body; both resolution paths enforce this before an input
/// is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewInput {
    /// Free-form review body, possibly empty for approvals
    pub body: String,
    /// The verdict to attach
    pub state: ReviewState,
}

/// Repository identity in `owner/name` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    /// Repository owner login
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// How the target pull request is identified
///
/// Exactly one resolution path is active per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrSelector {
    /// An explicit pull request number
    Number(u64),
    /// A head branch name, qualified as `owner:branch` for forks
    Branch(String),
}

/// The pull request a review decision applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewTarget {
    /// Repository the pull request belongs to
    pub repo: RepoId,
    /// How to find the pull request within that repository
    pub selector: PrSelector,
}
