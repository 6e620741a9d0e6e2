//! Seaquest library interface
//!
//! Calls an HTTP endpoint one or more times and reports status, timing and
//! body on the console.
//!
//! # Module Organization
//!
//! - [`cli`] - Flag definitions and help text
//! - [`request`] - Builds the outbound request descriptor
//! - [`client`] - Transport seam and the reqwest transport
//! - [`runner`] - Sequential iteration loop
//! - [`output`] - The console report
//! - [`core`] - Main execution logic

pub mod cli;
pub mod client;
pub mod context;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod output;
pub mod request;
pub mod runner;
pub mod status;
