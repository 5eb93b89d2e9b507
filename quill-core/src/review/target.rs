//! Positional-argument target parsing

use super::RepoId;
use crate::{Error, Result};

/// Parse the positional pull request argument
///
/// Recognizes full pull request URLs, `#`-prefixed numbers, and bare
/// numbers. A URL carries its own repository, which overrides the
/// ambient one; anything that is not a recognizable pull request URL
/// falls through to number parsing.
pub fn parse_pr_arg(arg: &str) -> Result<(Option<RepoId>, u64)> {
    if let Some((repo, number)) = pr_from_url(arg) {
        return Ok((Some(repo), number));
    }

    let trimmed = arg.strip_prefix('#').unwrap_or(arg);
    let number: u64 = trimmed.parse().map_err(|_| {
        Error::InvalidArgument(format!(
            "could not parse pull request number from {:?}",
            arg
        ))
    })?;

    if number == 0 {
        return Err(Error::InvalidArgument(
            "pull request numbers start at 1".to_string(),
        ));
    }

    Ok((None, number))
}

/// Extract repository and number from a pull request URL
///
/// Accepts `https://github.com/OWNER/REPO/pull/N`, ignoring any
/// trailing path segments (e.g. `/files`). Returns `None` for anything
/// else so the caller can fall through to number parsing.
fn pr_from_url(arg: &str) -> Option<(RepoId, u64)> {
    if !arg.starts_with("https://") && !arg.starts_with("http://") {
        return None;
    }

    let url = url::Url::parse(arg).ok()?;
    if url.host_str() != Some("github.com") {
        return None;
    }

    let mut segments = url.path_segments()?;
    let owner = segments.next()?;
    let name = segments.next()?;
    let marker = segments.next()?;
    let number: u64 = segments.next()?.parse().ok()?;

    if marker != "pull" || owner.is_empty() || name.is_empty() || number == 0 {
        return None;
    }

    Some((RepoId::new(owner, name), number))
}
