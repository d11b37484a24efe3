//! The ordered rule table driving toolchain resolution.
//!
//! Each [`Rule`] pairs a predicate over the compiler descriptor with the
//! strategy producing its outcome. Rules are tried in order and the first
//! predicate that holds decides, so support for another compiler family is
//! added by inserting a rule at the right position.

use toolchain_flags::{extract_toolchain_path, install_root_of};

use crate::family::CompilerFamily;
use crate::model::{CompilerDescriptor, UnsupportedReason};

/// Option selecting LLVM's C++ standard library.
pub const ALTERNATE_STDLIB_FLAG: &str = "-stdlib=libc++";

/// What a matching rule decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Unsupported(UnsupportedReason),
    /// Toolchain install root to inject, or `None` for no toolchain flag.
    Toolchain(Option<String>),
}

/// One entry of the rule table.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&CompilerDescriptor) -> bool,
    pub resolve: fn(&CompilerDescriptor) -> RuleOutcome,
}

impl Rule {
    pub const fn new(
        name: &'static str,
        applies: fn(&CompilerDescriptor) -> bool,
        resolve: fn(&CompilerDescriptor) -> RuleOutcome,
    ) -> Self {
        Self {
            name,
            applies,
            resolve,
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Rules in precedence order.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new("windows-emulated", is_windows_emulated, |_| {
            RuleOutcome::Unsupported(UnsupportedReason::WindowsEmulated)
        }),
        Rule::new("alternate-stdlib", requests_alternate_stdlib, |_| {
            RuleOutcome::Unsupported(UnsupportedReason::AlternateStdlib)
        }),
        Rule::new(
            "clang",
            |compiler| family_of(compiler) == CompilerFamily::Clang,
            toolchain_from_default_options,
        ),
        Rule::new(
            "icc",
            |compiler| family_of(compiler) == CompilerFamily::Icc,
            toolchain_from_default_options,
        ),
        Rule::new(
            "gcc",
            |compiler| family_of(compiler) == CompilerFamily::Gcc,
            toolchain_from_install_root,
        ),
    ]
}

fn family_of(compiler: &CompilerDescriptor) -> CompilerFamily {
    CompilerFamily::classify(&compiler.executable_path)
}

fn is_windows_emulated(compiler: &CompilerDescriptor) -> bool {
    family_of(compiler) == CompilerFamily::WindowsEmulated
}

fn requests_alternate_stdlib(compiler: &CompilerDescriptor) -> bool {
    compiler.has_internal_include_paths()
        && compiler
            .default_option_args()
            .iter()
            .any(|opt| opt == ALTERNATE_STDLIB_FLAG)
}

/// clang and icc name their toolchain in their own default options.
fn toolchain_from_default_options(compiler: &CompilerDescriptor) -> RuleOutcome {
    let options = compiler.default_option_args();
    RuleOutcome::Toolchain(non_empty(extract_toolchain_path(
        &compiler.executable_path,
        &options,
    )))
}

/// gcc is its own toolchain: `<root>/bin/<name>`.
fn toolchain_from_install_root(compiler: &CompilerDescriptor) -> RuleOutcome {
    RuleOutcome::Toolchain(non_empty(Some(install_root_of(&compiler.executable_path))))
}

fn non_empty(path: Option<String>) -> Option<String> {
    path.filter(|p| !p.is_empty())
}
