//! Console report for a run
//!
//! A single-iteration run gets the full picture (timing, status, headers,
//! body). A multi-iteration run gets one summary line per iteration. Either
//! way the footer is written exactly once, after the last outcome.

use std::io::Write;

use tracing::debug;

use super::body::{BodySettings, BodyView, NO_CONTENT, TRUNCATION_MARKER};
use super::json::format_json;
use super::terminal::{colors, Palette};
use crate::client::HttpResponse;
use crate::errors::Result;
use crate::models::Options;
use crate::request::RequestDescriptor;
use crate::runner::Outcome;

/// Closing line of every invocation
pub const FOOTER: &str = "Thanks for choosing Seaquest ;)";

/// Write the footer: a blank line and the closing banner
pub fn write_footer<W: Write>(out: &mut W, palette: &Palette) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", palette.bold(FOOTER, colors::PURPLE))?;
    Ok(())
}

/// Write `<name> v<version> by <authors>` and the package description
pub fn write_banner<W: Write>(out: &mut W, palette: &Palette) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION").replace("-beta", &palette.colorize(" beta", colors::YELLOW));
    let authors = env!("CARGO_PKG_AUTHORS").replace(':', ", ");

    writeln!(out, "{} v{} by {}", env!("CARGO_PKG_NAME"), version, authors)?;
    writeln!(out, "{}", env!("CARGO_PKG_DESCRIPTION"))?;
    writeln!(out)?;
    Ok(())
}

/// Write a setup failure as one highlighted line
pub fn write_fatal<W: Write>(out: &mut W, palette: &Palette, message: &str) -> Result<()> {
    writeln!(out, "{}", palette.error(message))?;
    Ok(())
}

/// What the reporter needs to know about the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    pub total_iterations: u32,
    pub verbose: bool,
    pub body: BodySettings,
}

impl From<&Options> for ReportSettings {
    fn from(options: &Options) -> Self {
        Self {
            total_iterations: options.iterations.max(1),
            verbose: options.verbose,
            body: BodySettings {
                uncut: options.uncut_response,
                limit: options.response_limit,
                json: options.response_json,
            },
        }
    }
}

/// Renders outcomes to `out` as they arrive
pub struct Reporter<W: Write> {
    out: W,
    palette: Palette,
    settings: ReportSettings,
    completed: u32,
    footer_written: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, palette: Palette, settings: ReportSettings) -> Self {
        Self {
            out,
            palette,
            settings,
            completed: 0,
            footer_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Echo the request about to be sent; verbose adds its headers
    pub fn request(&mut self, descriptor: &RequestDescriptor) -> Result<()> {
        writeln!(
            self.out,
            "{} {}",
            self.palette.http_method(&descriptor.method),
            self.palette.underline(&descriptor.uri)
        )?;

        if self.settings.verbose {
            for header in &descriptor.headers {
                writeln!(self.out, "{} {}", self.palette.colorize("HEADER", colors::AQUA), header)?;
            }
        }

        Ok(())
    }

    /// Render one outcome, then the footer if it was the last one
    pub fn report(&mut self, outcome: &Outcome) -> Result<()> {
        self.completed += 1;

        if self.settings.total_iterations > 1 {
            self.report_condensed(outcome)?;
        } else {
            self.report_detailed(outcome)?;
        }

        if self.completed >= self.settings.total_iterations {
            self.finish()?;
        }

        self.out.flush()?;
        Ok(())
    }

    /// Write the footer unless it was already written
    pub fn finish(&mut self) -> Result<()> {
        if !self.footer_written {
            self.footer_written = true;
            write_footer(&mut self.out, &self.palette)?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn timelapse(&self, outcome: &Outcome) -> String {
        format!("{} {}ms", self.palette.label("TIMELAPSE"), outcome.elapsed_ms())
    }

    fn report_condensed(&mut self, outcome: &Outcome) -> Result<()> {
        match &outcome.result {
            Err(error) => {
                writeln!(self.out, "{}", self.palette.error(&error.to_string()))?;
            }
            Ok(response) => {
                let line = format!(
                    "#{} {} {} {}",
                    outcome.iteration,
                    self.palette.label("HTTP"),
                    self.palette.http_status(response.status),
                    self.timelapse(outcome)
                );
                writeln!(self.out, "{}", line)?;
            }
        }
        Ok(())
    }

    fn report_detailed(&mut self, outcome: &Outcome) -> Result<()> {
        let timelapse = self.timelapse(outcome);
        writeln!(self.out, "{}", timelapse)?;

        match &outcome.result {
            Err(error) => {
                writeln!(self.out, "{}", self.palette.error(&error.to_string()))?;
                Ok(())
            }
            Ok(response) => self.report_response(response),
        }
    }

    fn report_response(&mut self, response: &HttpResponse) -> Result<()> {
        writeln!(self.out, "{} {}", self.palette.label("HTTP"), self.palette.http_status(response.status))?;

        if self.settings.verbose {
            for (name, value) in &response.headers {
                writeln!(
                    self.out,
                    "{} {}: {}",
                    self.palette.colorize("HEADER", colors::AQUA),
                    name,
                    value
                )?;
            }
        }

        let view = match BodyView::from_body(&response.body, &self.settings.body) {
            Ok(view) => view,
            Err(error) => {
                debug!(error = %error, "Response body is not valid JSON");
                let message = format!("Invalid JSON body: {}", error);
                writeln!(self.out, "{}", self.palette.error(&message))?;
                return Ok(());
            }
        };

        match &view {
            BodyView::Empty => {
                writeln!(self.out, "{}", self.palette.italic(NO_CONTENT, colors::YELLOW))?;
            }
            BodyView::Json(value) => {
                writeln!(self.out, "{}", format_json(value, &self.palette))?;
            }
            BodyView::Text { text, truncated } => {
                let open = self.palette.colorize("[[", colors::AQUA);
                let close = self.palette.colorize("]]", colors::AQUA);
                let marker = if *truncated {
                    self.palette.colorize(TRUNCATION_MARKER, colors::AQUA)
                } else {
                    String::new()
                };
                writeln!(self.out, "{}{}{}{}", open, text, marker, close)?;
            }
        }

        if view.is_truncated() {
            let notice = format!("Response truncated at {}", self.settings.body.limit);
            writeln!(self.out, "{}", self.palette.warning(&notice))?;
        }

        Ok(())
    }
}
