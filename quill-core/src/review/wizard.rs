//! Interactive review wizard
//!
//! A strictly sequential terminal dialogue that produces the same
//! decision shape as the review flags. The flow is an explicit state
//! machine with one handler per step, and every terminal capability is
//! injected as a trait so the flow can be exercised without a terminal
//! or an editor process.
//!
//! Cancellation is an in-band choice, never an interrupt: picking
//! "Cancel" at either prompt ends the session cleanly with no decision
//! and no error.

use std::io;

use tracing::debug;

use super::{ReviewInput, ReviewState};
use crate::{Error, Result};

/// Selection prompt capability
pub trait Prompter {
    /// Present `options` under `message` and return the chosen index
    fn select(&mut self, message: &str, options: &[&str]) -> io::Result<usize>;
}

/// Free-form text editing capability
pub trait BodyEditor {
    /// Open an edit session and return the resulting text
    fn edit(&mut self, message: &str) -> io::Result<String>;
}

/// Markdown preview capability
pub trait MarkdownRenderer {
    /// Render markdown back to the user
    fn render(&mut self, markdown: &str) -> io::Result<()>;
}

/// Steps of the wizard, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WizardStep {
    TypeSelection,
    BodyCapture,
    Preview,
    Confirm,
}

/// Where a step hands control next
enum Transition {
    Next(WizardStep),
    Done(WizardOutcome),
}

/// Terminal outcome of a wizard session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// The user confirmed the decision
    Submit(ReviewInput),
    /// The user backed out; not an error
    Cancelled,
}

const TYPE_OPTIONS: &[&str] = &["Comment", "Approve", "Request Changes", "Cancel"];
const CONFIRM_OPTIONS: &[&str] = &["Submit", "Cancel"];

/// One interactive review session
pub struct ReviewWizard<'a> {
    prompter: &'a mut dyn Prompter,
    editor: &'a mut dyn BodyEditor,
    renderer: &'a mut dyn MarkdownRenderer,
    state: Option<ReviewState>,
    body: String,
}

impl<'a> ReviewWizard<'a> {
    pub fn new(
        prompter: &'a mut dyn Prompter,
        editor: &'a mut dyn BodyEditor,
        renderer: &'a mut dyn MarkdownRenderer,
    ) -> Self {
        Self {
            prompter,
            editor,
            renderer,
            state: None,
            body: String::new(),
        }
    }

    /// Run the wizard to completion
    ///
    /// Blocks on each prompt until the user responds; a failed prompt
    /// or editor session aborts the whole session.
    pub fn run(mut self) -> Result<WizardOutcome> {
        let mut step = WizardStep::TypeSelection;

        loop {
            debug!(?step, "Wizard step");

            let transition = match step {
                WizardStep::TypeSelection => self.select_type()?,
                WizardStep::BodyCapture => self.capture_body()?,
                WizardStep::Preview => self.preview()?,
                WizardStep::Confirm => self.confirm()?,
            };

            match transition {
                Transition::Next(next) => step = next,
                Transition::Done(outcome) => return Ok(outcome),
            }
        }
    }

    fn select_type(&mut self) -> Result<Transition> {
        let choice = self
            .prompter
            .select("What kind of review do you want to create?", TYPE_OPTIONS)?;

        let state = match choice {
            0 => ReviewState::Comment,
            1 => ReviewState::Approve,
            2 => ReviewState::RequestChanges,
            _ => return Ok(Transition::Done(WizardOutcome::Cancelled)),
        };

        self.state = Some(state);
        Ok(Transition::Next(WizardStep::BodyCapture))
    }

    fn capture_body(&mut self) -> Result<Transition> {
        let body = self.editor.edit("Review body")?;

        if self.state == Some(ReviewState::Comment) && body.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "cannot leave blank comment".to_string(),
            ));
        }

        self.body = body;

        if self.body.trim().is_empty() {
            // Nothing to preview
            Ok(Transition::Next(WizardStep::Confirm))
        } else {
            Ok(Transition::Next(WizardStep::Preview))
        }
    }

    fn preview(&mut self) -> Result<Transition> {
        self.renderer.render(&self.body)?;
        Ok(Transition::Next(WizardStep::Confirm))
    }

    fn confirm(&mut self) -> Result<Transition> {
        let choice = self.prompter.select("What's next?", CONFIRM_OPTIONS)?;

        if choice == 0 {
            // A review type is always chosen before Confirm is reachable
            let state = self
                .state
                .ok_or_else(|| Error::Other("confirm reached without a review type".to_string()))?;

            Ok(Transition::Done(WizardOutcome::Submit(ReviewInput {
                body: std::mem::take(&mut self.body),
                state,
            })))
        } else {
            Ok(Transition::Done(WizardOutcome::Cancelled))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedPrompter {
        answers: Vec<usize>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[usize]) -> Self {
            Self {
                answers: answers.to_vec(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn select(&mut self, _message: &str, options: &[&str]) -> io::Result<usize> {
            if self.answers.is_empty() {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input stream closed",
                ));
            }
            let answer = self.answers.remove(0);
            assert!(answer < options.len(), "scripted answer out of range");
            Ok(answer)
        }
    }

    struct FixedEditor {
        body: String,
        calls: usize,
    }

    impl FixedEditor {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                calls: 0,
            }
        }
    }

    impl BodyEditor for FixedEditor {
        fn edit(&mut self, _message: &str) -> io::Result<String> {
            self.calls += 1;
            Ok(self.body.clone())
        }
    }

    struct RecordingRenderer {
        rendered: Vec<String>,
    }

    impl RecordingRenderer {
        fn new() -> Self {
            Self { rendered: Vec::new() }
        }
    }

    impl MarkdownRenderer for RecordingRenderer {
        fn render(&mut self, markdown: &str) -> io::Result<()> {
            self.rendered.push(markdown.to_string());
            Ok(())
        }
    }

    fn run_wizard(
        prompter: &mut ScriptedPrompter,
        editor: &mut FixedEditor,
        renderer: &mut RecordingRenderer,
    ) -> Result<WizardOutcome> {
        ReviewWizard::new(prompter, editor, renderer).run()
    }

    #[test]
    fn test_cancel_at_type_selection() {
        let mut prompter = ScriptedPrompter::new(&[3]);
        let mut editor = FixedEditor::new("never used");
        let mut renderer = RecordingRenderer::new();

        let outcome = run_wizard(&mut prompter, &mut editor, &mut renderer).unwrap();

        assert_eq!(outcome, WizardOutcome::Cancelled);
        assert_eq!(editor.calls, 0);
        assert!(renderer.rendered.is_empty());
    }

    #[test]
    fn test_cancel_at_confirmation() {
        // Approve, then Cancel at the confirmation prompt
        let mut prompter = ScriptedPrompter::new(&[1, 1]);
        let mut editor = FixedEditor::new("looks good");
        let mut renderer = RecordingRenderer::new();

        let outcome = run_wizard(&mut prompter, &mut editor, &mut renderer).unwrap();

        assert_eq!(outcome, WizardOutcome::Cancelled);
    }

    #[test]
    fn test_approve_with_body_submits() {
        let mut prompter = ScriptedPrompter::new(&[1, 0]);
        let mut editor = FixedEditor::new("ship it");
        let mut renderer = RecordingRenderer::new();

        let outcome = run_wizard(&mut prompter, &mut editor, &mut renderer).unwrap();

        assert_eq!(
            outcome,
            WizardOutcome::Submit(ReviewInput {
                body: "ship it".to_string(),
                state: ReviewState::Approve,
            })
        );
        assert_eq!(renderer.rendered, vec!["ship it".to_string()]);
    }

    #[test]
    fn test_empty_approval_skips_preview() {
        let mut prompter = ScriptedPrompter::new(&[1, 0]);
        let mut editor = FixedEditor::new("");
        let mut renderer = RecordingRenderer::new();

        let outcome = run_wizard(&mut prompter, &mut editor, &mut renderer).unwrap();

        assert_eq!(
            outcome,
            WizardOutcome::Submit(ReviewInput {
                body: String::new(),
                state: ReviewState::Approve,
            })
        );
        assert!(renderer.rendered.is_empty());
    }

    #[test]
    fn test_blank_comment_aborts_before_confirmation() {
        // Comment selected; editor produces only whitespace. The single
        // scripted answer proves the confirmation prompt is never shown.
        let mut prompter = ScriptedPrompter::new(&[0]);
        let mut editor = FixedEditor::new("  \n  ");
        let mut renderer = RecordingRenderer::new();

        let err = run_wizard(&mut prompter, &mut editor, &mut renderer).unwrap_err();

        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(renderer.rendered.is_empty());
    }

    #[test]
    fn test_comment_with_body_submits() {
        let mut prompter = ScriptedPrompter::new(&[0, 0]);
        let mut editor = FixedEditor::new("have you considered a worse approach?");
        let mut renderer = RecordingRenderer::new();

        let outcome = run_wizard(&mut prompter, &mut editor, &mut renderer).unwrap();

        match outcome {
            WizardOutcome::Submit(input) => {
                assert_eq!(input.state, ReviewState::Comment);
                assert!(!input.body.is_empty());
            }
            other => panic!("expected submission, got {:?}", other),
        }
        assert_eq!(renderer.rendered.len(), 1);
    }

    #[test]
    fn test_closed_input_stream_is_fatal() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let mut editor = FixedEditor::new("");
        let mut renderer = RecordingRenderer::new();

        let err = run_wizard(&mut prompter, &mut editor, &mut renderer).unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }
}
