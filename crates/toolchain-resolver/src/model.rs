//! Data model shared by the rule table and the resolver.

use std::fmt;

use serde::{Deserialize, Serialize};
use toolchain_flags::split_arguments;

/// Static description of a compiler, as supplied by the metadata store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerDescriptor {
    /// Path to the compiler driver.
    #[serde(rename = "exe")]
    pub executable_path: String,
    /// Options always passed to this compiler, as one string.
    #[serde(rename = "options", default)]
    pub default_options: String,
    /// Header directories bundled with the compiler itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_include_paths: Option<Vec<String>>,
}

impl CompilerDescriptor {
    pub fn new(executable_path: impl Into<String>, default_options: impl Into<String>) -> Self {
        Self {
            executable_path: executable_path.into(),
            default_options: default_options.into(),
            internal_include_paths: None,
        }
    }

    pub fn with_internal_include_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.internal_include_paths = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    /// `default_options` split into individual arguments.
    pub fn default_option_args(&self) -> Vec<String> {
        split_arguments(&self.default_options)
    }

    /// True when the compiler ships its own headers.
    pub fn has_internal_include_paths(&self) -> bool {
        self.internal_include_paths
            .as_ref()
            .is_some_and(|paths| !paths.is_empty())
    }
}

/// Static configuration of one compile job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompilationRequest {
    pub compiler: CompilerDescriptor,
    /// The job's own compiler options. Not part of the resolved list.
    #[serde(default)]
    pub options: Vec<String>,
}

impl CompilationRequest {
    pub fn new(compiler: CompilerDescriptor) -> Self {
        Self {
            compiler,
            options: Vec::new(),
        }
    }
}

/// Argument groups placed after the toolchain flags, in output order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentParts<'a> {
    pub include_flags: &'a [String],
    pub library_options: &'a [String],
    pub caller_args: &'a [String],
    /// Source file the caller will append itself; filtered out of
    /// `caller_args`.
    pub source_file: Option<&'a str>,
}

/// Why a configuration is known not to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedReason {
    /// A Windows compiler running under emulation.
    WindowsEmulated,
    /// libc++ requested on top of the compiler's bundled headers.
    AlternateStdlib,
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedReason::WindowsEmulated => {
                write!(f, "emulated Windows compilers cannot use a GCC toolchain")
            }
            UnsupportedReason::AlternateStdlib => write!(
                f,
                "libc++ cannot be combined with this compiler's bundled headers"
            ),
        }
    }
}

/// Result of resolving a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Final argument list, possibly empty.
    Resolved(Vec<String>),
    /// Do not attempt this compilation.
    Unsupported(UnsupportedReason),
}

impl Resolution {
    pub fn is_supported(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn args(&self) -> Option<&[String]> {
        match self {
            Resolution::Resolved(args) => Some(args),
            Resolution::Unsupported(_) => None,
        }
    }

    pub fn into_args(self) -> Option<Vec<String>> {
        match self {
            Resolution::Resolved(args) => Some(args),
            Resolution::Unsupported(_) => None,
        }
    }
}
