//! Data types shared between the CLI layer and the request pipeline

pub mod options;

pub use options::Options;
