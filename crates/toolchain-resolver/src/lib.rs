//! Toolchain Resolver
//!
//! Decides whether a GCC toolchain has to be injected into a compiler
//! invocation and assembles the final argument list.
//!
//! This crate provides:
//! - [`model`]: Compiler descriptors, requests and the resolution outcome
//! - [`family`]: Classification of compiler executables by family
//! - [`rules`]: The ordered rule table driving resolution
//! - [`resolver`]: Argument assembly on top of the rule table
//!
//! # Resolution
//!
//! Rules are evaluated in order and the first one that applies decides:
//! 1. Windows binaries run under emulation are unsupported
//! 2. libc++ combined with the compiler's bundled headers is unsupported
//! 3. clang and icc reuse the toolchain named in their default options
//! 4. gcc (native or cross) uses its own install root
//!
//! When nothing applies, no toolchain flag is emitted. A resolved toolchain
//! always appears twice at the head of the list: the driver consumes one and
//! the linker sub-invocation the other.
//!
//! Resolution is a pure function of its inputs. Nothing is cached.

pub mod family;
pub mod model;
pub mod resolver;
pub mod rules;

pub use family::CompilerFamily;
pub use model::{
    ArgumentParts, CompilationRequest, CompilerDescriptor, Resolution, UnsupportedReason,
};
pub use resolver::{ordered_arguments, ToolchainResolver};
pub use rules::{default_rules, Rule, RuleOutcome, ALTERNATE_STDLIB_FLAG};
