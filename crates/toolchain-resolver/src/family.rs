//! Classification of compiler executables by family.
//!
//! Only the executable path is inspected, and only as a string.

use serde::{Deserialize, Serialize};

/// Compiler families that differ in how they select a GCC toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompilerFamily {
    /// Windows compiler binary run under emulation (e.g. `cl.exe` via wine).
    WindowsEmulated,
    /// clang, clang++ and prefixed or versioned variants.
    Clang,
    /// Intel classic compilers.
    Icc,
    /// gcc/g++, including cross compilers such as `riscv64-unknown-linux-gnu-g++`.
    Gcc,
    Unknown,
}

impl CompilerFamily {
    /// Classify a compiler by its executable path.
    pub fn classify(executable_path: &str) -> Self {
        if executable_path.contains('\\') {
            return CompilerFamily::WindowsEmulated;
        }

        let name = file_name(executable_path);
        if name.to_ascii_lowercase().ends_with(".exe") {
            return CompilerFamily::WindowsEmulated;
        }
        if name.contains("clang") {
            return CompilerFamily::Clang;
        }

        let unversioned = strip_version_suffix(name);
        if matches!(unversioned, "icc" | "icpc") {
            return CompilerFamily::Icc;
        }
        if unversioned.ends_with("g++") || unversioned.ends_with("gcc") {
            return CompilerFamily::Gcc;
        }

        CompilerFamily::Unknown
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            CompilerFamily::WindowsEmulated => "windows-emulated",
            CompilerFamily::Clang => "clang",
            CompilerFamily::Icc => "icc",
            CompilerFamily::Gcc => "gcc",
            CompilerFamily::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for CompilerFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Drop one trailing `-<version>` made of digits and dots (`g++-12`, `icc-19.1`).
fn strip_version_suffix(name: &str) -> &str {
    match name.rsplit_once('-') {
        Some((stem, version))
            if !stem.is_empty()
                && !version.is_empty()
                && version.chars().all(|c| c.is_ascii_digit() || c == '.') =>
        {
            stem
        }
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_clang() {
        assert_eq!(
            CompilerFamily::classify("/opt/compiler-explorer/clang-8.0.0/bin/clang++"),
            CompilerFamily::Clang
        );
        assert_eq!(
            CompilerFamily::classify("/usr/bin/x86_64-linux-gnu-clang-16"),
            CompilerFamily::Clang
        );
    }

    #[test]
    fn test_classify_gcc() {
        assert_eq!(
            CompilerFamily::classify("/opt/compiler-explorer/gcc-8.0/bin/g++"),
            CompilerFamily::Gcc
        );
        assert_eq!(
            CompilerFamily::classify(
                "/opt/compiler-explorer/riscv64/gcc-8.2.0/riscv64-unknown-linux-gnu/bin/riscv64-unknown-linux-gnu-g++"
            ),
            CompilerFamily::Gcc
        );
        assert_eq!(CompilerFamily::classify("/usr/bin/gcc-12"), CompilerFamily::Gcc);
        assert_eq!(CompilerFamily::classify("g++"), CompilerFamily::Gcc);
    }

    #[test]
    fn test_classify_icc() {
        assert_eq!(
            CompilerFamily::classify("/opt/compiler-explorer/intel-2019.1/bin/icc"),
            CompilerFamily::Icc
        );
        assert_eq!(CompilerFamily::classify("/opt/intel/bin/icpc"), CompilerFamily::Icc);
    }

    #[test]
    fn test_classify_windows() {
        assert_eq!(
            CompilerFamily::classify("/opt/compiler-explorer/windows/19.14.26423/bin/cl.exe"),
            CompilerFamily::WindowsEmulated
        );
        assert_eq!(
            CompilerFamily::classify("/opt/mingw/bin/g++.EXE"),
            CompilerFamily::WindowsEmulated
        );
        assert_eq!(
            CompilerFamily::classify("Z:\\msvc\\bin\\cl"),
            CompilerFamily::WindowsEmulated
        );
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(CompilerFamily::classify(""), CompilerFamily::Unknown);
        assert_eq!(CompilerFamily::classify("/usr/bin/rustc"), CompilerFamily::Unknown);
        assert_eq!(CompilerFamily::classify("/opt/gcc-8.0/bin/"), CompilerFamily::Unknown);
    }

    #[test]
    fn test_strip_version_suffix() {
        assert_eq!(strip_version_suffix("g++-12"), "g++");
        assert_eq!(strip_version_suffix("icc-19.1"), "icc");
        assert_eq!(strip_version_suffix("riscv64-unknown-linux-gnu-g++"), "riscv64-unknown-linux-gnu-g++");
        assert_eq!(strip_version_suffix("-12"), "-12");
    }
}
