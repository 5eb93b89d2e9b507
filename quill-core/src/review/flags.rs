//! Flag-mode review resolution
//!
//! Maps the three mutually-exclusive review flags onto a single
//! decision without touching the network. A flag given without a value
//! is distinct from a flag not given at all, so each flag carries an
//! explicit tri-state instead of a sentinel string.

use super::{ReviewInput, ReviewState};
use crate::{Error, Result};

/// Value carried by a single review flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlagValue {
    /// The flag was not given
    #[default]
    Unset,
    /// The flag was given without a value
    SetEmpty,
    /// The flag was given with a value
    SetWith(String),
}

impl FlagValue {
    /// Build from clap's optional-value representation
    ///
    /// `None` means the flag was absent, `Some(None)` a bare flag, and
    /// `Some(Some(v))` a flag with a value.
    pub fn from_arg(arg: Option<Option<String>>) -> Self {
        match arg {
            None => FlagValue::Unset,
            Some(None) => FlagValue::SetEmpty,
            Some(Some(value)) => FlagValue::SetWith(value),
        }
    }

    fn is_set(&self) -> bool {
        !matches!(self, FlagValue::Unset)
    }

    fn into_body(self) -> String {
        match self {
            FlagValue::SetWith(value) => value,
            _ => String::new(),
        }
    }
}

/// The review flags as given on the command line
///
/// Transient: exists only long enough to be resolved into a decision.
#[derive(Debug, Clone, Default)]
pub struct FlagSelection {
    pub approve: FlagValue,
    pub request_changes: FlagValue,
    pub comment: FlagValue,
}

impl FlagSelection {
    /// Resolve the flags into a review decision
    ///
    /// Returns `Ok(None)` when no flag was given, which signals the
    /// caller to fall back to the interactive wizard. More than one
    /// flag, or a comment without a body, is an argument error.
    pub fn resolve(self) -> Result<Option<ReviewInput>> {
        let candidates = [
            (ReviewState::Approve, self.approve),
            (ReviewState::RequestChanges, self.request_changes),
            (ReviewState::Comment, self.comment),
        ];

        let mut set: Vec<(ReviewState, FlagValue)> = candidates
            .into_iter()
            .filter(|(_, value)| value.is_set())
            .collect();

        match set.len() {
            0 => Ok(None),
            1 => {
                let (state, value) = set.remove(0);
                let body = value.into_body();

                if state == ReviewState::Comment && body.trim().is_empty() {
                    return Err(Error::InvalidArgument(
                        "cannot leave blank comment".to_string(),
                    ));
                }

                Ok(Some(ReviewInput { body, state }))
            }
            _ => Err(Error::InvalidArgument(
                "need exactly one of --approve, --request-changes, or --comment".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(
        approve: FlagValue,
        request_changes: FlagValue,
        comment: FlagValue,
    ) -> FlagSelection {
        FlagSelection {
            approve,
            request_changes,
            comment,
        }
    }

    #[test]
    fn test_no_flags_signals_interactive_mode() {
        let resolved = FlagSelection::default().resolve().unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_bare_approve_resolves_to_empty_body() {
        let resolved = selection(FlagValue::SetEmpty, FlagValue::Unset, FlagValue::Unset)
            .resolve()
            .unwrap()
            .unwrap();

        assert_eq!(resolved.state, ReviewState::Approve);
        assert_eq!(resolved.body, "");
    }

    #[test]
    fn test_each_flag_maps_to_its_state() {
        let cases = [
            (
                selection(FlagValue::SetEmpty, FlagValue::Unset, FlagValue::Unset),
                ReviewState::Approve,
            ),
            (
                selection(FlagValue::Unset, FlagValue::SetEmpty, FlagValue::Unset),
                ReviewState::RequestChanges,
            ),
            (
                selection(
                    FlagValue::Unset,
                    FlagValue::Unset,
                    FlagValue::SetWith("needs work".to_string()),
                ),
                ReviewState::Comment,
            ),
        ];

        for (sel, expected) in cases {
            let resolved = sel.resolve().unwrap().unwrap();
            assert_eq!(resolved.state, expected);
        }
    }

    #[test]
    fn test_comment_with_body_keeps_body() {
        let resolved = selection(
            FlagValue::Unset,
            FlagValue::Unset,
            FlagValue::SetWith("interesting".to_string()),
        )
        .resolve()
        .unwrap()
        .unwrap();

        assert_eq!(resolved.body, "interesting");
        assert_eq!(resolved.state, ReviewState::Comment);
    }

    #[test]
    fn test_bare_comment_is_rejected() {
        let err = selection(FlagValue::Unset, FlagValue::Unset, FlagValue::SetEmpty)
            .resolve()
            .unwrap_err();
        assert!(err.to_string().contains("blank comment"));
    }

    #[test]
    fn test_whitespace_comment_is_rejected() {
        let err = selection(
            FlagValue::Unset,
            FlagValue::Unset,
            FlagValue::SetWith("   ".to_string()),
        )
        .resolve()
        .unwrap_err();
        assert!(err.to_string().contains("blank comment"));
    }

    #[test]
    fn test_two_flags_are_rejected() {
        let err = selection(FlagValue::SetEmpty, FlagValue::SetEmpty, FlagValue::Unset)
            .resolve()
            .unwrap_err();
        assert!(err.to_string().contains("exactly one"));
    }

    #[test]
    fn test_three_flags_are_rejected() {
        let err = selection(
            FlagValue::SetWith("a".to_string()),
            FlagValue::SetWith("b".to_string()),
            FlagValue::SetWith("c".to_string()),
        )
        .resolve()
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_from_arg_tri_state() {
        assert_eq!(FlagValue::from_arg(None), FlagValue::Unset);
        assert_eq!(FlagValue::from_arg(Some(None)), FlagValue::SetEmpty);
        assert_eq!(
            FlagValue::from_arg(Some(Some("ok".to_string()))),
            FlagValue::SetWith("ok".to_string())
        );
    }
}
