//! Quill GitHub - remote collaborators for review submission
//!
//! This crate provides the narrow network surface quill needs: pull
//! request lookup by number (REST), pull request lookup by head branch
//! (GraphQL), and review creation (GraphQL, which carries the review
//! mutation the REST surface lacks).

mod client;
mod error;
mod graphql;
mod pr;
mod review;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use pr::PullRequest;
pub use review::Review;
