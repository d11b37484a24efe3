//! Toolchain Resolve
//!
//! Command-line front end for GCC toolchain resolution:
//!
//! - **Compiler lookup**: a JSON catalog (see [`catalog`]) or an inline description
//! - **Resolution**: delegated to [`toolchain_resolver`]
//! - **Toolchain override**: optionally repoint the result at another install
//! - **Output**: one argument per line or JSON (see [`output`])

pub mod args;
pub mod catalog;
pub mod output;

use anyhow::Result;
use toolchain_flags::replace_toolchain_path;
use toolchain_resolver::{ArgumentParts, Resolution, ToolchainResolver};

use crate::args::Args;

/// Log filter used when `RUST_LOG` is unset; names every crate that logs.
pub const DEFAULT_LOG_FILTER: &str =
    "toolchain_resolve=warn,toolchain_resolver=warn,toolchain_flags=warn";

/// Resolve the invocation described by `args`.
pub fn run(args: &Args) -> Result<Resolution> {
    let request = args.compilation_request()?;
    let parts = ArgumentParts {
        include_flags: &args.include_flag,
        library_options: &args.lib_option,
        caller_args: &args.args,
        source_file: args.source_file.as_deref(),
    };

    let resolution = ToolchainResolver::new().ordered_arguments(&request, &parts);
    Ok(match (resolution, &args.replace_toolchain) {
        (Resolution::Resolved(resolved), Some(toolchain)) => {
            tracing::debug!(%toolchain, "replacing resolved toolchain");
            Resolution::Resolved(replace_toolchain_path(&resolved, toolchain))
        }
        (resolution, _) => resolution,
    })
}
