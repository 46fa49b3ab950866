//! Output mode and writer.

use super::CheckTheme;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status line per check, then the summary.
    #[default]
    Normal,
    /// Summary only.
    Quiet,
    /// Nothing on stdout (used when another format owns it).
    Silent,
}

impl OutputMode {
    /// Check if this mode shows a line per finished check.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Check if this mode shows the final summary.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    no_color: bool,
    theme: CheckTheme,
}

impl Output {
    pub fn new(mode: OutputMode, no_color: bool) -> Self {
        Self {
            mode,
            no_color,
            theme: CheckTheme::detect(no_color),
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Whether colour was disabled on the command line.
    pub fn no_color(&self) -> bool {
        self.no_color
    }

    pub fn theme(&self) -> &CheckTheme {
        &self.theme
    }

    /// Write a line if the mode allows status messages.
    pub fn println(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_shows_progress() {
        assert!(OutputMode::Normal.shows_progress());
        assert!(!OutputMode::Quiet.shows_progress());
        assert!(!OutputMode::Silent.shows_progress());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Normal.shows_status());
        assert!(OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Silent.shows_status());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn output_new_and_mode() {
        let output = Output::new(OutputMode::Quiet, true);
        assert_eq!(output.mode(), OutputMode::Quiet);
        assert!(output.no_color());
    }
}
