//! Request building module
//!
//! Assembles the outbound request descriptor from parsed options.

mod builder;

pub use builder::{append_arguments, RequestBody, RequestDescriptor, BODY_PART_NAME};
