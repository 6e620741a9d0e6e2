//! ANSI styling for the report
//!
//! Every helper goes through a [`Palette`], which emits plain text when
//! colors are disabled (piped stdout, `NO_COLOR`).

pub mod colors {
    pub const GREY: u8 = 102;      // #7D7D7D - Punctuation, secondary
    pub const AQUA: u8 = 109;      // #7A9EB5 - Numbers, info
    pub const PURPLE: u8 = 134;    // #9E54D6 - Footer
    pub const ORANGE: u8 = 208;    // #F2913D - Warnings, PUT/PATCH
    pub const RED: u8 = 167;       // #E34F45 - Errors, DELETE
    pub const BLUE: u8 = 68;       // #426BD1 - Names, labels
    pub const PINK: u8 = 176;      // #DE85DE - Keys
    pub const GREEN: u8 = 71;      // #63C27A - Success, GET
    pub const YELLOW: u8 = 185;    // #CCCC3D - POST, defaults
}

/// ANSI escape code constants
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDERLINE: &str = "\x1b[4m";

/// Generate foreground color escape code
#[inline]
pub fn fg(color: u8) -> String {
    format!("\x1b[38;5;{}m", color)
}

/// Generate bold foreground color escape code
#[inline]
pub fn bold_fg(color: u8) -> String {
    format!("\x1b[1;38;5;{}m", color)
}

/// Color switch shared by everything that writes the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Palette that never emits escape codes
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn wrap(&self, prefix: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", prefix, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Colorize text with a foreground color
    pub fn colorize(&self, text: &str, color: u8) -> String {
        self.wrap(&fg(color), text)
    }

    /// Colorize text with bold foreground color
    pub fn bold(&self, text: &str, color: u8) -> String {
        self.wrap(&bold_fg(color), text)
    }

    pub fn underline(&self, text: &str) -> String {
        self.wrap(UNDERLINE, text)
    }

    pub fn italic(&self, text: &str, color: u8) -> String {
        self.wrap(&format!("{}{}", ITALIC, fg(color)), text)
    }

    /// Error message (red)
    pub fn error(&self, text: &str) -> String {
        self.bold(text, colors::RED)
    }

    /// Warning message (orange)
    pub fn warning(&self, text: &str) -> String {
        self.bold(text, colors::ORANGE)
    }

    /// Label/name (blue)
    pub fn label(&self, text: &str) -> String {
        self.colorize(text, colors::BLUE)
    }

    /// Key (pink)
    pub fn key(&self, text: &str) -> String {
        self.colorize(text, colors::PINK)
    }

    /// Value/string (green)
    pub fn value(&self, text: &str) -> String {
        self.colorize(text, colors::GREEN)
    }

    /// Number (aqua)
    pub fn number(&self, text: &str) -> String {
        self.colorize(text, colors::AQUA)
    }

    /// HTTP method, colored by verb
    pub fn http_method(&self, method: &str) -> String {
        let color = match method.to_uppercase().as_str() {
            "GET" | "HEAD" | "OPTIONS" => colors::GREEN,
            "POST" => colors::YELLOW,
            "PUT" | "PATCH" => colors::ORANGE,
            "DELETE" => colors::RED,
            _ => colors::GREY,
        };
        self.bold(method, color)
    }

    /// HTTP status code, colored by class
    pub fn http_status(&self, code: u16) -> String {
        let color = match code / 100 {
            1 => colors::AQUA,   // Informational
            2 => colors::GREEN,  // Success
            3 => colors::YELLOW, // Redirect
            4 => colors::ORANGE, // Client error
            5 => colors::RED,    // Server error
            _ => colors::GREY,
        };
        self.bold(&code.to_string(), color)
    }
}
