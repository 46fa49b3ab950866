//! Visual theme and styling.

use console::Style;

/// Styles used for status lines and the summary.
#[derive(Debug, Clone)]
pub struct CheckTheme {
    /// Satisfied checks and "Success" (green).
    pub success: Style,
    /// Failed checks and "Failure" (red bold).
    pub error: Style,
    /// Checks that never ran: dependency failures, cycles (orange).
    pub skipped: Style,
    /// Detected versions (bold).
    pub version: Style,
    /// The `  |  ` gutter and secondary text (dim).
    pub dim: Style,
    /// Suggestion text (magenta dim).
    pub hint: Style,
    /// Suggested commands (dim italic).
    pub command: Style,
}

impl Default for CheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            skipped: Style::new().color256(208),
            version: Style::new().bold(),
            dim: Style::new().dim(),
            hint: Style::new().magenta().dim(),
            command: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            skipped: Style::new(),
            version: Style::new(),
            dim: Style::new(),
            hint: Style::new(),
            command: Style::new(),
        }
    }

    /// Pick the theme for the current terminal, unless colour is disabled.
    pub fn detect(no_color: bool) -> Self {
        if !no_color && should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
