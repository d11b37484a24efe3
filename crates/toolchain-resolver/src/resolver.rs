//! Argument assembly on top of the rule table.

use toolchain_flags::GCC_TOOLCHAIN_PREFIX;
use tracing::{debug, trace};

use crate::model::{ArgumentParts, CompilationRequest, CompilerDescriptor, Resolution};
use crate::rules::{default_rules, Rule, RuleOutcome};

/// Resolver over an ordered rule table.
///
/// Stateless apart from the rules themselves; share one instance freely.
#[derive(Debug, Clone)]
pub struct ToolchainResolver {
    rules: Vec<Rule>,
}

impl Default for ToolchainResolver {
    fn default() -> Self {
        Self::with_rules(default_rules())
    }
}

impl ToolchainResolver {
    /// Resolver using [`default_rules`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver using a custom rule table, tried in the given order.
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Decide the toolchain for a compiler without assembling arguments.
    pub fn resolve_toolchain(&self, compiler: &CompilerDescriptor) -> RuleOutcome {
        for rule in &self.rules {
            if (rule.applies)(compiler) {
                let outcome = (rule.resolve)(compiler);
                debug!(
                    rule = rule.name,
                    exe = %compiler.executable_path,
                    ?outcome,
                    "toolchain rule matched"
                );
                return outcome;
            }
        }

        trace!(exe = %compiler.executable_path, "no toolchain rule matched");
        RuleOutcome::Toolchain(None)
    }

    /// Build the final argument list for `request`.
    ///
    /// Layout: toolchain flag (twice, if any), include flags, library
    /// options, then caller arguments with the source file filtered out. The
    /// source file is never emitted; the caller places it.
    pub fn ordered_arguments(
        &self,
        request: &CompilationRequest,
        parts: &ArgumentParts<'_>,
    ) -> Resolution {
        let toolchain = match self.resolve_toolchain(&request.compiler) {
            RuleOutcome::Unsupported(reason) => {
                debug!(exe = %request.compiler.executable_path, %reason, "unsupported configuration");
                return Resolution::Unsupported(reason);
            }
            RuleOutcome::Toolchain(toolchain) => toolchain,
        };

        let caller_args = parts
            .caller_args
            .iter()
            .filter(|arg| Some(arg.as_str()) != parts.source_file);

        let mut args = Vec::with_capacity(
            2 + parts.include_flags.len() + parts.library_options.len() + parts.caller_args.len(),
        );
        if let Some(path) = toolchain {
            let flag = format!("{}{}", GCC_TOOLCHAIN_PREFIX, path);
            // Once for the driver, once for the linker sub-invocation
            args.push(flag.clone());
            args.push(flag);
        }
        args.extend(parts.include_flags.iter().cloned());
        args.extend(parts.library_options.iter().cloned());
        args.extend(caller_args.cloned());

        Resolution::Resolved(args)
    }
}

/// [`ToolchainResolver::ordered_arguments`] with the default rules.
pub fn ordered_arguments(request: &CompilationRequest, parts: &ArgumentParts<'_>) -> Resolution {
    ToolchainResolver::default().ordered_arguments(request, parts)
}
