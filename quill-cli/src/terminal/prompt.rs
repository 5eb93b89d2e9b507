//! Numbered selection prompt on stdin/stdout

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use quill_core::review::wizard::Prompter;

/// Selection prompt backed by stdin and stdout
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for StdinPrompter {
    fn select(&mut self, message: &str, options: &[&str]) -> io::Result<usize> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let stdout = io::stdout();
        let mut output = stdout.lock();
        select_from(&mut input, &mut output, message, options)
    }
}

/// Present numbered options and read a choice, re-asking on invalid
/// input. A closed input stream is an error, not a cancellation.
fn select_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    options: &[&str],
) -> io::Result<usize> {
    writeln!(output, "{}", message.bold())?;
    for (i, option) in options.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, option)?;
    }

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }

        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=options.len()).contains(&choice) => return Ok(choice - 1),
            _ => writeln!(
                output,
                "Please enter a number between 1 and {}",
                options.len()
            )?,
        }
    }
}
