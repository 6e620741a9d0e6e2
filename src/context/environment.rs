//! Environment struct (stdout and terminal capabilities)

use std::io::{self, Stdout};

use crate::output::Palette;

/// Execution environment
pub struct Environment {
    pub stdout: Stdout,
    pub colors: bool,
}

impl Environment {
    /// Initialize the environment from the current process
    pub fn init() -> Self {
        Self::default()
    }

    /// Palette matching this environment's color support
    pub fn palette(&self) -> Palette {
        Palette::new(self.colors)
    }
}

impl Default for Environment {
    fn default() -> Self {
        let stdout_isatty = atty::is(atty::Stream::Stdout);
        Self {
            stdout: io::stdout(),
            colors: detect_color_support(stdout_isatty, std::env::var_os("NO_COLOR").is_some()),
        }
    }
}

/// Colors only go to a terminal, and never when `NO_COLOR` is set
fn detect_color_support(stdout_isatty: bool, no_color: bool) -> bool {
    if !stdout_isatty || no_color {
        return false;
    }

    !matches!(std::env::var("TERM").as_deref(), Ok("dumb"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_colors_when_piped() {
        assert!(!detect_color_support(false, false));
    }

    #[test]
    fn test_no_color_wins() {
        assert!(!detect_color_support(true, true));
    }
}
