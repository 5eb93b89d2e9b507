//! External editor sessions for review bodies

use std::fs;
use std::io;
use std::process::Command;

use quill_core::review::wizard::BodyEditor;
use tracing::debug;

/// Opens the configured editor on a temporary markdown file
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    pub fn new(command: String) -> Self {
        Self { command }
    }
}

impl BodyEditor for EditorSession {
    fn edit(&mut self, message: &str) -> io::Result<String> {
        let file = tempfile::Builder::new()
            .prefix("quill-review-")
            .suffix(".md")
            .tempfile()?;

        println!("{} (waiting for {})", message, self.command);
        debug!(command = %self.command, path = %file.path().display(), "Opening editor");

        // The configured command may carry arguments ("code --wait")
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "editor command is empty")
        })?;

        let status = Command::new(program)
            .args(parts)
            .arg(file.path())
            .status()?;

        if !status.success() {
            return Err(io::Error::other(format!(
                "editor exited with status {}",
                status
            )));
        }

        fs::read_to_string(file.path())
    }
}
