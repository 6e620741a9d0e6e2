//! CLI argument parsing and help output

pub mod args;
pub mod help;

// Re-exports
pub use args::Args;
pub use help::write_help;
