//! CLI argument definitions using clap
//!
//! Long names keep their camelCase spelling (`--responseLimit`); kebab-case
//! aliases are accepted as well.

use clap::{ArgAction, Parser};

use crate::errors::{Result, SeaquestError};
use crate::models::options::{
    Options, DEFAULT_INTERVAL_MS, DEFAULT_ITERATIONS, DEFAULT_METHOD, DEFAULT_RESPONSE_LIMIT,
    DEFAULT_TIMEOUT_MS,
};

/// Seaquest - call an HTTP endpoint and see what comes back
#[derive(Parser, Debug, Clone)]
#[command(name = "seaquest", version, about, long_about = None)]
#[command(disable_help_flag = true)] // -h is --headers
pub struct Args {
    /// Show usage for every option instead of calling an endpoint
    #[arg(short = '?', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// The remote address for the calling endpoint
    #[arg(value_name = "ENDPOINT")]
    pub endpoint: Option<String>,

    /// The remote address, given as a flag
    #[arg(short = 'e', long = "endpoint", value_name = "ENDPOINT", conflicts_with = "endpoint")]
    pub endpoint_flag: Option<String>,

    /// Query arguments as pre-encoded key=value strings
    #[arg(
        short = 'a',
        long = "arguments",
        value_name = "KEY=VALUE",
        num_args = 1..,
        action = ArgAction::Append
    )]
    pub arguments: Vec<String>,

    /// HTTP method
    #[arg(short = 'm', long = "method", value_name = "METHOD", default_value = DEFAULT_METHOD)]
    pub method: String,

    /// Raw request headers ("Name: value")
    #[arg(
        short = 'h',
        long = "headers",
        value_name = "HEADER",
        num_args = 1..,
        action = ArgAction::Append
    )]
    pub headers: Vec<String>,

    /// Response timeout in milliseconds
    #[arg(short = 't', long = "timeout", value_name = "MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout: u64,

    /// Request body, sent as a single multipart field
    #[arg(short = 'b', long = "body", value_name = "BODY")]
    pub body: Option<String>,

    /// Number of times the request is made
    #[arg(
        short = 'i',
        long = "iterations",
        value_name = "COUNT",
        default_value_t = DEFAULT_ITERATIONS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub iterations: u32,

    /// Pause between iterations in milliseconds
    #[arg(
        short = 'r',
        long = "iterationsIntervalTime",
        visible_alias = "iterations-interval-time",
        value_name = "MS",
        default_value_t = DEFAULT_INTERVAL_MS
    )]
    pub iterations_interval_time: u64,

    /// Print the whole response body
    #[arg(
        short = 'u',
        long = "uncutResponse",
        visible_alias = "uncut-response",
        action = ArgAction::SetTrue
    )]
    pub uncut_response: bool,

    /// Maximum number of body characters to print
    #[arg(
        short = 'l',
        long = "responseLimit",
        visible_alias = "response-limit",
        value_name = "CHARS",
        default_value_t = DEFAULT_RESPONSE_LIMIT
    )]
    pub response_limit: usize,

    /// Print the response body as indented JSON
    #[arg(
        short = 'j',
        long = "responseJson",
        visible_aliases = ["json", "response-json"],
        action = ArgAction::SetTrue
    )]
    pub response_json: bool,

    /// Print request and response headers
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Args {
    /// Validate and convert into the options record the pipeline runs on
    pub fn into_options(self) -> Result<Options> {
        let endpoint = self
            .endpoint_flag
            .or(self.endpoint)
            .filter(|e| !e.trim().is_empty());

        if endpoint.is_none() && !self.help {
            return Err(SeaquestError::Config(
                "No endpoint given. Pass it as the first argument or with -e/--endpoint".to_string(),
            ));
        }

        Ok(Options {
            endpoint,
            method: self.method,
            arguments: self.arguments,
            headers: self.headers,
            timeout_ms: self.timeout,
            body: self.body,
            iterations: self.iterations,
            iterations_interval_ms: self.iterations_interval_time,
            uncut_response: self.uncut_response,
            response_limit: self.response_limit,
            response_json: self.response_json,
            verbose: self.verbose,
            help: self.help,
        })
    }
}
