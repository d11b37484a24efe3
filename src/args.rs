use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use toolchain_resolver::{CompilationRequest, CompilerDescriptor};

use crate::catalog::{catalog_path, CompilerCatalog, CATALOG_ENV_VAR};

#[derive(Debug, Parser)]
#[command(name = "toolchain-resolve", author, version, about)]
pub struct Args {
    /// Compiler catalog JSON (defaults to $TOOLCHAIN_RESOLVE_COMPILERS).
    #[arg(long, value_name = "PATH")]
    pub compilers: Option<PathBuf>,

    /// Compiler id to look up in the catalog.
    #[arg(long, value_name = "ID", conflicts_with = "exe")]
    pub compiler: Option<String>,

    /// Describe the compiler inline: path to its executable.
    #[arg(long, value_name = "PATH")]
    pub exe: Option<String>,

    /// Inline compiler: its default options, as one string.
    #[arg(long, value_name = "OPTIONS", allow_hyphen_values = true, requires = "exe")]
    pub options: Option<String>,

    /// Inline compiler: a bundled header directory. Can be provided multiple times.
    #[arg(long, value_name = "DIR", requires = "exe")]
    pub internal_include_path: Vec<String>,

    /// Include flag placed after the toolchain. Can be provided multiple times.
    #[arg(long, value_name = "FLAG", allow_hyphen_values = true)]
    pub include_flag: Vec<String>,

    /// Library option placed after the include flags. Can be provided multiple times.
    #[arg(long, value_name = "FLAG", allow_hyphen_values = true)]
    pub lib_option: Vec<String>,

    /// Source file, appended after the resolved arguments.
    #[arg(long, value_name = "FILE")]
    pub source_file: Option<String>,

    /// Point every toolchain flag in the result at this install root instead.
    #[arg(long, value_name = "PATH")]
    pub replace_toolchain: Option<String>,

    /// Emit JSON instead of one argument per line.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Caller arguments, after `--`.
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Args {
    /// Compiler description from the inline flags or the catalog.
    pub fn compiler_descriptor(&self) -> Result<CompilerDescriptor> {
        if let Some(exe) = &self.exe {
            let mut descriptor =
                CompilerDescriptor::new(exe.as_str(), self.options.clone().unwrap_or_default());
            if !self.internal_include_path.is_empty() {
                descriptor = descriptor.with_internal_include_paths(self.internal_include_path.clone());
            }
            return Ok(descriptor);
        }

        let Some(id) = &self.compiler else {
            bail!("Either --compiler <ID> or --exe <PATH> is required");
        };
        let Some(path) = catalog_path(self.compilers.as_deref()) else {
            bail!(
                "--compiler needs a catalog: pass --compilers <PATH> or set {}",
                CATALOG_ENV_VAR
            );
        };
        let catalog = CompilerCatalog::load(&path)?;
        Ok(catalog.get(id)?.clone())
    }

    pub fn compilation_request(&self) -> Result<CompilationRequest> {
        Ok(CompilationRequest::new(self.compiler_descriptor()?))
    }
}
