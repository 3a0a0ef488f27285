//! Colored terminal output.
//!
//! Progress and results go to stdout and are suppressed in quiet mode.
//! Errors are printed by `main` regardless.

use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes progress and results to the terminal.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    quiet: bool,
    color_choice: ColorChoice,
}

impl OutputManager {
    pub fn new(quiet: bool) -> Self {
        // termcolor's Auto only looks at TERM/NO_COLOR, not at redirection.
        let color_choice = if io::stdout().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self { quiet, color_choice }
    }

    /// Print a progress line in cyan.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        self.colored(message, ColorSpec::new().set_fg(Some(Color::Cyan)))
    }

    /// Print a result line in bold green.
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.colored(
            message,
            ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true),
        )
    }

    /// Print an indented detail line without color.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.colored(&format!("     {message}"), &ColorSpec::new())
    }

    fn colored(&self, message: &str, spec: &ColorSpec) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(self.color_choice);
        stdout.set_color(spec)?;
        write!(stdout, "{message}")?;
        stdout.reset()?;
        writeln!(stdout)?;
        stdout.flush()
    }
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new(false)
    }
}
