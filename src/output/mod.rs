//! Output handling (styling, body rendering, the run report)

pub mod body;
pub mod json;
pub mod reporter;
pub mod terminal;

pub use body::{BodySettings, BodyView, NO_CONTENT, TRUNCATION_MARKER};
pub use reporter::{write_banner, write_fatal, write_footer, ReportSettings, Reporter, FOOTER};
pub use terminal::{colors, Palette, RESET};
