//! Toolchain Flags
//!
//! Pure operations over ordered compiler argument lists that may carry a
//! GCC toolchain selector token.
//!
//! This crate provides:
//! - [`flags`]: Detect, extract, remove and replace the toolchain flag
//! - [`path`]: Lexical path normalization used for toolchain values
//! - [`split`]: Splitting of a compiler's configured option string
//!
//! # Toolchain flags
//!
//! Compilers that sit on top of a GCC installation name that installation in
//! one of two ways:
//! - `--gcc-toolchain=<root>` (clang): the value is the install root itself
//! - `--gxx-name=<root>/bin/g++` (icc): the value names the install's driver
//!
//! Both are matched as a single token by exact, case-sensitive prefix. A path
//! supplied as a separate token is not recognized.
//!
//! Every operation here leaves its input untouched and returns a fresh list or
//! a derived value.

pub mod flags;
pub mod path;
pub mod split;

pub use flags::{
    extract_toolchain_path, flag_prefix, has_toolchain_flag, remove_toolchain_flag,
    replace_toolchain_path, toolchain_path_from_options, ToolchainFlag, ToolchainFlagKind,
    GCC_TOOLCHAIN_PREFIX, GXX_NAME_PREFIX,
};
pub use path::{absolute_path, install_root_of, normalize_path, parent_dir, resolve_path};
pub use split::split_arguments;
