//! Detection, extraction, removal and replacement of the toolchain flag.
//!
//! A toolchain flag is one argument token of the form `<prefix><value>`. It
//! is never stored on its own; every operation here derives it from the
//! argument list on demand.

use crate::path::{absolute_path, install_root_of, parent_dir, resolve_path};
use crate::split::split_arguments;

/// Clang-style selector naming the toolchain install root.
pub const GCC_TOOLCHAIN_PREFIX: &str = "--gcc-toolchain=";

/// icc-style selector naming the toolchain's `bin/<driver>`, usually `g++`.
pub const GXX_NAME_PREFIX: &str = "--gxx-name=";

/// The spellings a toolchain flag can take, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolchainFlagKind {
    /// `--gcc-toolchain=<root>`
    GccToolchain,
    /// `--gxx-name=<root>/bin/<driver>`
    GxxName,
}

impl ToolchainFlagKind {
    pub const ALL: [ToolchainFlagKind; 2] =
        [ToolchainFlagKind::GccToolchain, ToolchainFlagKind::GxxName];

    pub fn prefix(&self) -> &'static str {
        match self {
            ToolchainFlagKind::GccToolchain => GCC_TOOLCHAIN_PREFIX,
            ToolchainFlagKind::GxxName => GXX_NAME_PREFIX,
        }
    }
}

/// A toolchain flag found in an argument token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolchainFlag<'a> {
    pub kind: ToolchainFlagKind,
    /// Raw value after the prefix, exactly as written.
    pub value: &'a str,
}

impl<'a> ToolchainFlag<'a> {
    /// Parse a single argument token, returning `None` if it is not a
    /// toolchain flag.
    pub fn parse(arg: &'a str) -> Option<Self> {
        ToolchainFlagKind::ALL.iter().find_map(|kind| {
            arg.strip_prefix(kind.prefix())
                .map(|value| ToolchainFlag { kind: *kind, value })
        })
    }

    /// First toolchain flag in `args`.
    pub fn find<S: AsRef<str>>(args: &'a [S]) -> Option<Self> {
        args.iter().find_map(|arg| Self::parse(arg.as_ref()))
    }

    /// Install root this flag designates, resolved against `base_dir` when
    /// the value is relative. Always absolute.
    pub fn install_root(&self, base_dir: &str) -> String {
        let resolved = absolute_path(base_dir, self.value);
        match self.kind {
            ToolchainFlagKind::GccToolchain => resolved,
            ToolchainFlagKind::GxxName => install_root_of(&resolved),
        }
    }

    /// Token naming `root` instead, in this flag's spelling.
    ///
    /// A `--gxx-name=` flag keeps its driver's file name, so cross drivers
    /// such as `riscv64-unknown-linux-gnu-g++` survive the swap.
    pub fn with_root(&self, root: &str) -> String {
        match self.kind {
            ToolchainFlagKind::GccToolchain => format!("{}{}", GCC_TOOLCHAIN_PREFIX, root),
            ToolchainFlagKind::GxxName => {
                let driver = match self.value.trim_end_matches('/').rsplit('/').next() {
                    Some(name) if !name.is_empty() && name != "." && name != ".." => name,
                    _ => "g++",
                };
                format!(
                    "{}{}",
                    GXX_NAME_PREFIX,
                    resolve_path(root, &format!("bin/{}", driver))
                )
            }
        }
    }
}

/// True iff some argument is a toolchain flag.
pub fn has_toolchain_flag<S: AsRef<str>>(args: &[S]) -> bool {
    flag_prefix(args).is_some()
}

/// Prefix (flag name plus `=`) of the first toolchain flag in `args`.
///
/// ```
/// use toolchain_flags::flags::flag_prefix;
///
/// assert_eq!(flag_prefix(&["-O2", "--gxx-name=/opt/gcc/bin/g++"]), Some("--gxx-name="));
/// assert_eq!(flag_prefix(&["-O2"]), None);
/// ```
pub fn flag_prefix<S: AsRef<str>>(args: &[S]) -> Option<&'static str> {
    ToolchainFlag::find(args).map(|flag| flag.kind.prefix())
}

/// Copy of `args` without any toolchain flag.
pub fn remove_toolchain_flag<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .map(AsRef::<str>::as_ref)
        .filter(|arg| ToolchainFlag::parse(arg).is_none())
        .map(str::to_string)
        .collect()
}

/// Toolchain install root named by the first toolchain flag in `args`.
///
/// Relative values are resolved against the directory containing
/// `executable_path`. Returns `None` when no flag is present; picking a
/// fallback is up to the caller.
pub fn extract_toolchain_path<S: AsRef<str>>(executable_path: &str, args: &[S]) -> Option<String> {
    ToolchainFlag::find(args).map(|flag| flag.install_root(parent_dir(executable_path)))
}

/// Same as [`extract_toolchain_path`] over a raw option string.
pub fn toolchain_path_from_options(executable_path: &str, options: &str) -> Option<String> {
    extract_toolchain_path(executable_path, &split_arguments(options))
}

/// Copy of `args` with every toolchain flag pointing at `new_path`.
///
/// Each flag keeps its own spelling and position. Nothing is inserted when
/// `args` carries no flag.
pub fn replace_toolchain_path<S: AsRef<str>>(args: &[S], new_path: &str) -> Vec<String> {
    let root = resolve_path("", new_path);
    args.iter()
        .map(|arg| {
            let arg: &str = arg.as_ref();
            match ToolchainFlag::parse(arg) {
                Some(flag) => flag.with_root(&root),
                None => arg.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clang_invocation() -> Vec<String> {
        [
            "-gdwarf-4",
            "-g",
            "-o",
            "output.s",
            "-mllvm",
            "--x86-asm-syntax=intel",
            "-S",
            "--gcc-toolchain=/opt/compiler-explorer/gcc-12.2.0",
            "-fcolor-diagnostics",
            "-fno-crash-diagnostics",
            "/app/example.cpp",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_no_flag_is_untouched() {
        let args = vec!["-O2", "-g", "--gcc-toolchain", "/opt/gcc", "--GCC-TOOLCHAIN=/opt/gcc"];
        assert!(!has_toolchain_flag(&args));
        assert_eq!(flag_prefix(&args), None);
        assert_eq!(remove_toolchain_flag(&args), args);
        assert_eq!(extract_toolchain_path("/opt/clang/bin/clang++", &args), None);
        assert_eq!(replace_toolchain_path(&args, "/opt/other"), args);

        let empty: Vec<String> = Vec::new();
        assert!(!has_toolchain_flag(&empty));
        assert!(remove_toolchain_flag(&empty).is_empty());
    }

    #[test]
    fn test_detect_and_remove() {
        let args = clang_invocation();
        assert!(has_toolchain_flag(&args));
        assert_eq!(flag_prefix(&args), Some("--gcc-toolchain="));

        let removed = remove_toolchain_flag(&args);
        assert!(!has_toolchain_flag(&removed));
        assert_eq!(removed.len(), args.len() - 1);
        assert_eq!(removed[6], "-S");
        assert_eq!(removed[7], "-fcolor-diagnostics");

        // Input is left alone and removal is idempotent
        assert_eq!(args, clang_invocation());
        assert_eq!(remove_toolchain_flag(&removed), removed);
    }

    #[test]
    fn test_remove_all_spellings() {
        let args = vec![
            "--gxx-name=/opt/gcc-8.2.0/bin/g++",
            "-O1",
            "--gcc-toolchain=/a",
            "--gcc-toolchain=/b",
        ];
        assert_eq!(flag_prefix(&args), Some("--gxx-name="));
        assert_eq!(remove_toolchain_flag(&args), vec!["-O1"]);
    }

    #[test]
    fn test_extract_absolute() {
        let args = clang_invocation();
        assert_eq!(
            extract_toolchain_path("/opt/compiler-explorer/clang-16.0.0/bin/clang++", &args),
            Some("/opt/compiler-explorer/gcc-12.2.0".to_string())
        );
    }

    #[test]
    fn test_extract_relative_to_executable() {
        let args = vec!["--gcc-toolchain=../../gcc-9.1.0/"];
        assert_eq!(
            extract_toolchain_path("/opt/compiler-explorer/clang-9/bin/clang++", &args),
            Some("/opt/compiler-explorer/gcc-9.1.0".to_string())
        );
    }

    #[test]
    fn test_extract_relative_without_executable_directory() {
        let args = vec!["--gcc-toolchain=gcc-7"];
        assert_eq!(extract_toolchain_path("clang++", &args), Some("/gcc-7".to_string()));
        assert_eq!(extract_toolchain_path("", &args), Some("/gcc-7".to_string()));
        assert_eq!(
            extract_toolchain_path("bin/clang++", &["--gcc-toolchain=../gcc-7"]),
            Some("/gcc-7".to_string())
        );
    }

    #[test]
    fn test_extract_gxx_name() {
        let args = vec!["--gxx-name=/opt/compiler-explorer/gcc-8.2.0/bin/g++"];
        assert_eq!(
            extract_toolchain_path("/opt/compiler-explorer/intel-2019.1/bin/icc", &args),
            Some("/opt/compiler-explorer/gcc-8.2.0".to_string())
        );
    }

    #[test]
    fn test_extract_first_flag_wins() {
        let args = vec!["--gcc-toolchain=/first", "--gcc-toolchain=/second"];
        assert_eq!(extract_toolchain_path("", &args), Some("/first".to_string()));
    }

    #[test]
    fn test_toolchain_path_from_options() {
        assert_eq!(
            toolchain_path_from_options(
                "/opt/compiler-explorer/clang-8.0.0/bin/clang++",
                "-O2 --gcc-toolchain=/opt/compiler-explorer/gcc-7.2.0"
            ),
            Some("/opt/compiler-explorer/gcc-7.2.0".to_string())
        );
        assert_eq!(toolchain_path_from_options("/usr/bin/clang++", ""), None);
    }

    #[test]
    fn test_swap_toolchain() {
        let args = clang_invocation();
        let replaced = replace_toolchain_path(&args, "/opt/compiler-explorer/gcc-11.1.0");

        let mut expected = clang_invocation();
        expected[7] = "--gcc-toolchain=/opt/compiler-explorer/gcc-11.1.0".to_string();
        assert_eq!(replaced, expected);
        assert_eq!(
            extract_toolchain_path("/opt/compiler-explorer/clang-16.0.0/bin/clang++", &replaced),
            Some("/opt/compiler-explorer/gcc-11.1.0".to_string())
        );
    }

    #[test]
    fn test_replace_normalizes_and_keeps_spelling() {
        let args = vec!["--gxx-name=/opt/gcc-8.2.0/bin/g++", "-c", "--gcc-toolchain=/opt/gcc-8.2.0"];
        let replaced = replace_toolchain_path(&args, "/opt//gcc-13.1.0/");
        assert_eq!(
            replaced,
            vec![
                "--gxx-name=/opt/gcc-13.1.0/bin/g++",
                "-c",
                "--gcc-toolchain=/opt/gcc-13.1.0",
            ]
        );
        assert_eq!(extract_toolchain_path("", &replaced), Some("/opt/gcc-13.1.0".to_string()));
    }

    #[test]
    fn test_replace_keeps_cross_driver_name() {
        let args = vec![
            "--gxx-name=/opt/riscv64/gcc-8.2.0/bin/riscv64-unknown-linux-gnu-g++",
            "-O2",
        ];
        let replaced = replace_toolchain_path(&args, "/opt/riscv64/gcc-12.2.0");
        assert_eq!(
            replaced,
            vec![
                "--gxx-name=/opt/riscv64/gcc-12.2.0/bin/riscv64-unknown-linux-gnu-g++",
                "-O2",
            ]
        );
        assert_eq!(
            extract_toolchain_path("/opt/intel/bin/icc", &replaced),
            Some("/opt/riscv64/gcc-12.2.0".to_string())
        );
    }

    #[test]
    fn test_replace_after_insert() {
        let base = vec!["-O3", "-Wall"];
        for inserted in [0, 1, 2] {
            let mut args: Vec<String> = base.iter().map(|s| s.to_string()).collect();
            args.insert(inserted, format!("{}{}", GCC_TOOLCHAIN_PREFIX, "/opt/gcc-7"));

            let replaced = replace_toolchain_path(&args, "/opt/x/../gcc-12");
            assert!(has_toolchain_flag(&replaced));
            assert_eq!(replaced[inserted], "--gcc-toolchain=/opt/gcc-12");
            assert_eq!(extract_toolchain_path("/usr/bin/clang", &replaced), Some("/opt/gcc-12".to_string()));
            assert_eq!(remove_toolchain_flag(&replaced), base);
        }
    }

    #[test]
    fn test_value_as_separate_token_is_ignored() {
        let args = vec!["--gcc-toolchain", "/opt/gcc"];
        assert!(ToolchainFlag::find(&args).is_none());
    }
}
