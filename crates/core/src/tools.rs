//! Local tool manifest resolution.
//!
//! Build repositories declare their locally restored tools in a JSON manifest
//! (`.config/dotnet-tools.json`). This module parses that manifest and answers
//! "is this tool installed" and "which package owns this command" questions.
//!
//! The resolver is caller-owned: construct one per build invocation from the
//! repository root. There is no ambient or lazily initialized global state.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Manifest location relative to the repository root
pub const MANIFEST_RELATIVE_PATH: &str = ".config/dotnet-tools.json";

/// The raw tool manifest as found on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolManifest {
    /// Manifest format version
    pub version: u32,

    /// Whether this manifest is the root manifest for the repository
    #[serde(default)]
    pub is_root: bool,

    /// Declared tools, keyed by package identifier (order preserved)
    #[serde(default)]
    pub tools: IndexMap<String, ToolDefinition>,
}

/// A single tool entry in the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolDefinition {
    /// Pinned package version
    pub version: String,

    /// Executable commands the package provides
    #[serde(default)]
    pub commands: Vec<String>,
}

/// A command resolved back to its owning package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    /// Package identifier that provides the command
    pub package: String,
    /// Pinned package version
    pub version: String,
    /// The command name itself
    pub command: String,
}

/// Caller-owned view over a parsed tool manifest.
///
/// Package lookups are case-insensitive, matching the package-id semantics of
/// the manifest format. Command lookups are exact.
#[derive(Debug, Default)]
pub struct ToolResolver {
    tools: IndexMap<String, ToolDefinition>,
    commands: IndexMap<String, ToolCommand>,
}

impl ToolResolver {
    /// Build a resolver from the manifest under the given repository root.
    ///
    /// A missing manifest yields an empty resolver; a manifest that exists but
    /// cannot be parsed is an error.
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self> {
        Self::from_manifest_path(root.as_ref().join(MANIFEST_RELATIVE_PATH))
    }

    /// Build a resolver from an explicit manifest path.
    pub fn from_manifest_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no tool manifest found, resolver is empty");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .map_err(|source| Error::io(source, Some(path.clone()), "reading tool manifest"))?;
        let manifest: ToolManifest = serde_json::from_str(&text)
            .map_err(|err| Error::manifest(&path, err.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            tools = manifest.tools.len(),
            "loaded tool manifest"
        );
        Ok(Self::from_manifest(manifest))
    }

    /// Build a resolver from an already parsed manifest.
    #[must_use]
    pub fn from_manifest(manifest: ToolManifest) -> Self {
        let mut tools = IndexMap::new();
        let mut commands = IndexMap::new();

        for (package, definition) in manifest.tools {
            for command in &definition.commands {
                commands.insert(
                    command.clone(),
                    ToolCommand {
                        package: package.clone(),
                        version: definition.version.clone(),
                        command: command.clone(),
                    },
                );
            }
            tools.insert(package.to_lowercase(), definition);
        }

        Self { tools, commands }
    }

    /// Whether the given package is declared in the manifest.
    #[must_use]
    pub fn is_installed(&self, package: &str) -> bool {
        self.tools.contains_key(&package.to_lowercase())
    }

    /// Get the definition for a declared package.
    #[must_use]
    pub fn tool(&self, package: &str) -> Option<&ToolDefinition> {
        self.tools.get(&package.to_lowercase())
    }

    /// Resolve a command name to its owning package.
    #[must_use]
    pub fn command(&self, name: &str) -> Option<&ToolCommand> {
        self.commands.get(name)
    }

    /// Number of declared packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the resolver has no declared packages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
