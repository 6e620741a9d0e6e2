//! Common test utilities for seaquest integration tests
//!
//! - CLI invocation helpers
//! - Output parsing and assertion helpers

#![allow(dead_code)]

use std::process::{Command, Output, Stdio};

/// Closing line printed once per invocation
pub const FOOTER: &str = "Thanks for choosing Seaquest ;)";

/// A local address nothing listens on
pub const REFUSED_URL: &str = "http://127.0.0.1:9/status";

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    /// Standard output, ANSI colors removed
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Raw exit code
    pub exit_code: i32,
}

impl CliResponse {
    /// Check if stdout contains a substring
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }

    /// Count occurrences of a substring in stdout
    pub fn count(&self, needle: &str) -> usize {
        self.stdout.matches(needle).count()
    }

    /// Stdout lines starting with `prefix`
    pub fn lines_starting_with(&self, prefix: &str) -> Vec<&str> {
        self.stdout.lines().filter(|l| l.starts_with(prefix)).collect()
    }
}

impl std::fmt::Display for CliResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stdout)
    }
}

/// Run the CLI with the given arguments (excluding the program name)
pub fn seaquest(args: &[&str]) -> CliResponse {
    let output = Command::new(env!("CARGO_BIN_EXE_seaquest"))
        .args(args)
        .env_remove("SEAQUEST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute command");

    parse_output(output)
}

fn parse_output(output: Output) -> CliResponse {
    let stdout = strip_colors(&String::from_utf8_lossy(&output.stdout));
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(1);

    CliResponse { stdout, stderr, exit_code }
}

/// Strip ANSI color codes from a string
pub fn strip_colors(s: &str) -> String {
    let re = regex::Regex::new(r"\x1b\[[\d;]*m").unwrap();
    re.replace_all(s, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_colors() {
        let colored = "\x1b[1;38;5;71mGreen\x1b[0m";
        assert_eq!(strip_colors(colored), "Green");
    }
}
