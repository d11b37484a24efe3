//! Compiler catalog loaded from a JSON file.
//!
//! The catalog maps compiler ids to their static description:
//!
//! ```json
//! {
//!   "compilers": {
//!     "clang800": {
//!       "exe": "/opt/compiler-explorer/clang-8.0.0/bin/clang++",
//!       "options": "--gcc-toolchain=/opt/compiler-explorer/gcc-7.2.0"
//!     }
//!   }
//! }
//! ```

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use toolchain_resolver::CompilerDescriptor;

/// Environment variable consulted when no catalog path is given.
pub const CATALOG_ENV_VAR: &str = "TOOLCHAIN_RESOLVE_COMPILERS";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompilerCatalog {
    #[serde(default)]
    pub compilers: BTreeMap<String, CompilerDescriptor>,
}

impl CompilerCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read compiler catalog: {}", path.display()))?;
        let catalog: CompilerCatalog = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse compiler catalog: {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            compilers = catalog.compilers.len(),
            "loaded compiler catalog"
        );
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Result<&CompilerDescriptor> {
        self.compilers.get(id).ok_or_else(|| {
            let known: Vec<&str> = self.compilers.keys().map(String::as_str).collect();
            anyhow!(
                "Unknown compiler '{}' (known: {})",
                id,
                if known.is_empty() {
                    "none".to_string()
                } else {
                    known.join(", ")
                }
            )
        })
    }
}

/// Explicit path, else [`CATALOG_ENV_VAR`].
pub fn catalog_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var(CATALOG_ENV_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}
