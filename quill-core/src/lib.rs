//! Quill Core - review resolution logic for the quill CLI
//!
//! This crate owns the review domain model and the decision logic that
//! turns ambiguous command-line input into exactly one review decision
//! and exactly one target pull request, before any network call is
//! made. Network collaborators live in `quill-github`; terminal
//! collaborators live in the CLI crate and are injected here through
//! the capability traits in [`review::wizard`].

pub mod config;
pub mod error;
pub mod git;
pub mod review;
pub mod secrets;

pub use config::Config;
pub use error::{Error, Result};
pub use secrets::Secrets;
