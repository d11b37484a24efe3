//! Output formatting for the toolchain-resolve CLI.

use serde::Serialize;
use toolchain_resolver::{Resolution, UnsupportedReason};

/// JSON shape of a resolution.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionOutput<'a> {
    Resolved {
        args: Vec<&'a str>,
    },
    Unsupported {
        reason: UnsupportedReason,
        message: String,
    },
}

impl<'a> ResolutionOutput<'a> {
    /// `source_file` goes after the resolved arguments.
    pub fn new(resolution: &'a Resolution, source_file: Option<&'a str>) -> Self {
        match resolution {
            Resolution::Resolved(args) => ResolutionOutput::Resolved {
                args: args
                    .iter()
                    .map(String::as_str)
                    .chain(source_file)
                    .collect(),
            },
            Resolution::Unsupported(reason) => ResolutionOutput::Unsupported {
                reason: *reason,
                message: unsupported_message(reason),
            },
        }
    }
}

pub fn unsupported_message(reason: &UnsupportedReason) -> String {
    format!("This compiler/library combination is not supported: {}", reason)
}

/// One argument per line; unsupported resolutions print nothing.
pub fn format_plain(resolution: &Resolution, source_file: Option<&str>) -> String {
    let mut out = String::new();
    if let ResolutionOutput::Resolved { args } = ResolutionOutput::new(resolution, source_file) {
        for arg in args {
            out.push_str(arg);
            out.push('\n');
        }
    }
    out
}

pub fn format_json(resolution: &Resolution, source_file: Option<&str>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ResolutionOutput::new(resolution, source_file))
}
