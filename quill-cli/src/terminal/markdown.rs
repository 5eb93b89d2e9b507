//! Minimal markdown styling for the preview step
//!
//! Review bodies are short; headings, bullets, and code are restyled
//! line by line, everything else passes through unchanged.

use std::io::{self, Write};

use crossterm::style::Stylize;
use quill_core::review::wizard::MarkdownRenderer;

/// Renders markdown with ANSI styling to a writer
pub struct TerminalMarkdown<W: Write> {
    out: W,
}

impl TerminalMarkdown<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalMarkdown<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> MarkdownRenderer for TerminalMarkdown<W> {
    fn render(&mut self, markdown: &str) -> io::Result<()> {
        let mut in_code_block = false;

        writeln!(self.out)?;
        for line in markdown.lines() {
            if line.trim_start().starts_with("```") {
                in_code_block = !in_code_block;
                continue;
            }

            if in_code_block {
                writeln!(self.out, "    {}", line.dark_grey())?;
            } else if let Some(text) = heading_text(line) {
                writeln!(self.out, "{}", text.bold())?;
            } else if let Some(item) = bullet_text(line) {
                writeln!(self.out, "  • {}", item)?;
            } else {
                writeln!(self.out, "{}", line)?;
            }
        }
        writeln!(self.out)?;

        self.out.flush()
    }
}

/// Strip `#` markers from a heading line
fn heading_text(line: &str) -> Option<&str> {
    let stripped = line.trim_start_matches('#');
    if stripped.len() == line.len() || !stripped.starts_with(' ') {
        return None;
    }
    Some(stripped.trim_start())
}

/// Strip the marker from a top-level bullet line
fn bullet_text(line: &str) -> Option<&str> {
    line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(markdown: &str) -> String {
        let mut renderer = TerminalMarkdown::new(Vec::new());
        renderer.render(markdown).unwrap();
        String::from_utf8(renderer.out).unwrap()
    }

    #[test]
    fn test_headings_are_stripped_of_markers() {
        let shown = render_to_string("## Summary\nplain text");
        assert!(shown.contains("Summary"));
        assert!(!shown.contains("##"));
        assert!(shown.contains("plain text"));
    }

    #[test]
    fn test_bullets_are_restyled() {
        let shown = render_to_string("- first\n* second");
        assert!(shown.contains("• first"));
        assert!(shown.contains("• second"));
    }

    #[test]
    fn test_code_fences_are_removed_and_code_indented() {
        let shown = render_to_string("```rust\nlet x = 1;\n```");
        assert!(!shown.contains("```"));
        assert!(shown.contains("let x = 1;"));
    }

    #[test]
    fn test_non_heading_hashes_pass_through() {
        let shown = render_to_string("#42 is the PR");
        assert!(shown.contains("#42 is the PR"));
    }
}
