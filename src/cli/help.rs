//! Usage text shown for `-?`/`--help`

use std::io::Write;

use crate::errors::Result;
use crate::output::{colors, write_footer, Palette};

/// Help entry for one command-line option
#[derive(Debug, Clone, Copy)]
pub struct OptionDoc {
    pub short: char,
    pub long: &'static str,
    pub description: &'static [&'static str],
    pub default: Option<&'static str>,
    pub example: &'static str,
}

/// Every recognized option, in display order
pub const OPTION_DOCS: &[OptionDoc] = &[
    OptionDoc {
        short: 'e',
        long: "endpoint",
        description: &[
            "The remote address for the calling endpoint.",
            "The argument name may be suppressed when its",
            "value is the first argument",
        ],
        default: None,
        example: "seaquest https://api.ipify.org",
    },
    OptionDoc {
        short: 'a',
        long: "arguments",
        description: &["The key and value strings for the arguments", "to be sent"],
        default: None,
        example: "-a apikey=297b81a2 t=seaquest",
    },
    OptionDoc {
        short: 'm',
        long: "method",
        description: &["The method to be used for calling the endpoint"],
        default: Some("GET"),
        example: "seaquest https://api.ipify.org -m GET",
    },
    OptionDoc {
        short: 'h',
        long: "headers",
        description: &["The key and value strings for the headers", "to be sent"],
        default: None,
        example: "-h \"X-User: 1a2b3c4d\" \"X-Client: Seaquest-CLI\"",
    },
    OptionDoc {
        short: 't',
        long: "timeout",
        description: &["The millisecond amount limit for receiving a", "response"],
        default: Some("30000"),
        example: "-t 10000",
    },
    OptionDoc {
        short: 'b',
        long: "body",
        description: &["The content to be sent as the request body,", "as a single multipart field"],
        default: None,
        example: "-b '{\"name\": \"seaquest\"}'",
    },
    OptionDoc {
        short: 'i',
        long: "iterations",
        description: &["The number of times the endpoint is called.", "More than one prints a line per call"],
        default: Some("1"),
        example: "-i 10",
    },
    OptionDoc {
        short: 'r',
        long: "iterationsIntervalTime",
        description: &["The millisecond amount to wait between", "iterations"],
        default: Some("1000"),
        example: "-r 500",
    },
    OptionDoc {
        short: 'l',
        long: "responseLimit",
        description: &["The maximum size of response body to output", "in the console"],
        default: Some("5120"),
        example: "-l 300",
    },
    OptionDoc {
        short: 'u',
        long: "uncutResponse",
        description: &["Indicates if the response should not be", "limited"],
        default: Some("false"),
        example: "-u",
    },
    OptionDoc {
        short: 'j',
        long: "responseJson",
        description: &["Indicates if the response should be displayed", "as JSON"],
        default: Some("false"),
        example: "-j",
    },
    OptionDoc {
        short: 'v',
        long: "verbose",
        description: &["Indicates if Seaquest should output all", "information about both request and response"],
        default: Some("false"),
        example: "-v",
    },
    OptionDoc {
        short: '?',
        long: "help",
        description: &["Indicates if help info should be shown", "instead of making any call to an endpoint"],
        default: Some("false"),
        example: "-?",
    },
];

/// Column where descriptions start
const DESCRIPTION_COLUMN: usize = 27;

/// Write the usage table followed by the footer
pub fn write_help<W: Write>(out: &mut W, palette: &Palette) -> Result<()> {
    let indent = " ".repeat(DESCRIPTION_COLUMN);

    for doc in OPTION_DOCS {
        let flags = format!("-{}, --{}", doc.short, doc.long);
        let padding = DESCRIPTION_COLUMN.saturating_sub(flags.len()).max(1);
        let styled = format!(
            "{}, {}",
            palette.label(&format!("-{}", doc.short)),
            palette.label(&format!("--{}", doc.long))
        );

        let mut lines = doc.description.iter();
        let first = lines.next().copied().unwrap_or_default();
        writeln!(out, "{}{}{}", styled, " ".repeat(padding), first)?;
        for line in lines {
            writeln!(out, "{}{}", indent, line)?;
        }

        if let Some(default) = doc.default {
            writeln!(out, "{}Default is {}", indent, palette.colorize(default, colors::YELLOW))?;
        }
        writeln!(out, "{}Ex.: {}", indent, palette.value(doc.example))?;
    }

    write_footer(out, palette)
}
