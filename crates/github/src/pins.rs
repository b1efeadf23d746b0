//! Pinned action reference normalization.
//!
//! Regenerating a workflow file must not silently bump pinned action versions.
//! Before a freshly rendered workflow replaces the previous one, the prior
//! file is scanned for `uses:` references; any newly generated reference whose
//! action name matches keeps the previously pinned version.
//!
//! The absence of a prior file simply skips normalization. A prior file that
//! exists but cannot be parsed is fatal for the pass.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Lookup from action name to the full previously pinned reference.
#[derive(Debug, Clone, Default)]
pub struct ActionPins {
    pins: IndexMap<String, String>,
}

impl ActionPins {
    /// Load pins from a previously emitted workflow file.
    ///
    /// Returns `Ok(None)` when the file does not exist. An unparseable file
    /// propagates as [`Error::PriorWorkflow`].
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no prior workflow, skipping pin normalization");
            return Ok(None);
        }

        let text = std::fs::read_to_string(path)
            .map_err(|source| Error::io(source, Some(path.to_path_buf()), "reading prior workflow"))?;
        let document: serde_yaml::Value = serde_yaml::from_str(&text)
            .map_err(|err| Error::prior_workflow(path, err.to_string()))?;

        let mut pins = IndexMap::new();
        collect_pins(&document, &mut pins);
        tracing::debug!(path = %path.display(), pins = pins.len(), "loaded action pins");
        Ok(Some(Self { pins }))
    }

    /// Build pins directly from a map of action name to pinned reference.
    #[must_use]
    pub fn from_pins(pins: IndexMap<String, String>) -> Self {
        Self { pins }
    }

    /// The pinned reference recorded for an action name, if any.
    #[must_use]
    pub fn pinned(&self, name: &str) -> Option<&str> {
        self.pins.get(name).map(String::as_str)
    }

    /// Resolve a `uses:` reference against the recorded pins.
    ///
    /// A reference whose name portion matches a recorded pin yields the prior
    /// full reference; anything else passes through unchanged.
    #[must_use]
    pub fn resolve<'a>(&'a self, uses: &'a str) -> &'a str {
        let name = uses.split('@').next().unwrap_or(uses);
        self.pinned(name).unwrap_or(uses)
    }

    /// Rewrite all `uses:` references in freshly generated text.
    #[must_use]
    pub fn apply(&self, generated: &str) -> String {
        let mut result = String::with_capacity(generated.len());
        for line in generated.lines() {
            result.push_str(&self.rewrite_line(line));
            result.push('\n');
        }
        result
    }

    fn rewrite_line(&self, line: &str) -> String {
        let trimmed = line.trim_start();
        let key = trimmed.strip_prefix("- ").unwrap_or(trimmed);
        let Some(rest) = key.strip_prefix("uses:") else {
            return line.to_string();
        };

        // The reference runs to the first whitespace; anything after it
        // (trailing spaces, an inline comment) is carried over untouched.
        let value = rest.trim_start();
        let reference_len = value.find(char::is_whitespace).unwrap_or(value.len());
        let (reference, trailer) = value.split_at(reference_len);
        if !reference.contains('@') {
            return line.to_string();
        }

        let resolved = self.resolve(reference);
        if resolved == reference {
            return line.to_string();
        }

        tracing::debug!(from = reference, to = resolved, "normalized pinned action reference");
        // `value` is a suffix of `line`, so this is the reference's offset.
        let reference_start = line.len() - value.len();
        format!("{}{}{}", &line[..reference_start], resolved, trailer)
    }

    /// Number of recorded pins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Whether no pins were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

/// Walk a YAML document collecting `uses:` values that carry a version.
///
/// The first occurrence of an action name wins, matching the prior file's
/// top-to-bottom order.
fn collect_pins(value: &serde_yaml::Value, pins: &mut IndexMap<String, String>) {
    match value {
        serde_yaml::Value::Mapping(mapping) => {
            if let Some(serde_yaml::Value::String(uses)) = mapping.get("uses")
                && let Some((name, _)) = uses.split_once('@')
            {
                pins.entry(name.to_string()).or_insert_with(|| uses.clone());
            }
            for (_, child) in mapping {
                collect_pins(child, pins);
            }
        }
        serde_yaml::Value::Sequence(sequence) => {
            for child in sequence {
                collect_pins(child, pins);
            }
        }
        _ => {}
    }
}
