//! Resolve the GCC toolchain arguments for a compiler invocation.
//!
//! **Usage**
//! - Catalog compiler: `toolchain-resolve --compilers compilers.json --compiler clang800 -- -O2`
//! - Inline compiler: `toolchain-resolve --exe /opt/gcc-8.0/bin/g++ --source-file example.cpp`
//!
//! Prints the resolved arguments one per line (or JSON with `--json`). An
//! unsupported configuration prints a message to stderr and exits with 2.
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toolchain_resolve::args::Args;
use toolchain_resolve::output::{format_json, format_plain, unsupported_message};
use toolchain_resolve::DEFAULT_LOG_FILTER;
use toolchain_resolver::Resolution;

const EXIT_UNSUPPORTED: i32 = 2;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let resolution = toolchain_resolve::run(&args)?;
    let source_file = args.source_file.as_deref();

    if args.json {
        println!("{}", format_json(&resolution, source_file)?);
    } else {
        print!("{}", format_plain(&resolution, source_file));
    }

    if let Resolution::Unsupported(reason) = &resolution {
        eprintln!("{}", unsupported_message(reason));
        std::process::exit(EXIT_UNSUPPORTED);
    }
    Ok(())
}
