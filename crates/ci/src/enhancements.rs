//! Enhancement registry.
//!
//! Build definitions name an ordered list of enhancements to apply to a
//! generated configuration. Each enhancement is an explicitly registered
//! transformation function; the embedding application supplies the registry,
//! so there is no runtime scanning of any kind.

use std::collections::HashMap;

/// Registry mapping enhancement names to transformation functions over a
/// configuration value.
///
/// Applying an unknown name is not an error: it is skipped with a warning,
/// so a definition can name enhancements that only some embedders register.
pub struct EnhancementRegistry<C> {
    entries: HashMap<&'static str, Box<dyn Fn(C) -> C + Send + Sync>>,
}

impl<C> Default for EnhancementRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> EnhancementRegistry<C> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register an enhancement under the given name.
    ///
    /// Registering the same name twice replaces the earlier function.
    pub fn register(
        &mut self,
        name: &'static str,
        enhancement: impl Fn(C) -> C + Send + Sync + 'static,
    ) {
        self.entries.insert(name, Box::new(enhancement));
    }

    /// Apply the named enhancements to `config`, in the order given.
    #[must_use]
    pub fn apply(&self, names: &[String], mut config: C) -> C {
        for name in names {
            match self.entries.get(name.as_str()) {
                Some(enhancement) => config = enhancement(config),
                None => {
                    tracing::warn!(enhancement = %name, "unknown enhancement, skipping");
                }
            }
        }
        config
    }

    /// All registered enhancement names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered enhancements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C> std::fmt::Debug for EnhancementRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnhancementRegistry")
            .field("entries", &self.names())
            .finish()
    }
}
