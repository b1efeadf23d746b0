//! Workflow file generation.
//!
//! A [`WorkflowDefinition`] is the declarative description of one workflow
//! file: its trigger configuration, dispatch/call parameters, environment, and
//! a pre-rendered job body supplied by the embedding build tool. Generation
//! applies the named enhancements, renders the file, normalizes pinned action
//! references against any previously emitted file, and writes the result to
//! the deterministic path under `.github/workflows/`.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rigging_ci::{ConfigWriter, EnhancementRegistry, RenderEntity, single_quote};

use crate::config::TriggerConfig;
use crate::error::{Error, Result};
use crate::pins::ActionPins;
use crate::triggers::{WorkflowInput, WorkflowOutput, WorkflowSecret};

/// Declarative description of a single workflow file.
#[derive(Debug, Clone, Default)]
pub struct WorkflowDefinition {
    /// Workflow name; also determines the output file name
    pub name: String,
    /// Trigger configuration
    pub triggers: TriggerConfig,
    /// Inputs for dispatch/call triggers
    pub inputs: Vec<WorkflowInput>,
    /// Outputs for call triggers
    pub outputs: Vec<WorkflowOutput>,
    /// Secrets for call triggers
    pub secrets: Vec<WorkflowSecret>,
    /// Workflow-level environment variables (order preserved)
    pub env: IndexMap<String, String>,
    /// Names of enhancements to apply before rendering
    pub enhancements: Vec<String>,
    /// Pre-rendered trailing block, typically the `jobs:` section produced by
    /// the embedding build tool
    pub body: Option<String>,
}

impl WorkflowDefinition {
    /// Create a definition with the given name and no triggers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Merge environment variables into the definition; later values win.
    pub fn merge_env(&mut self, overlay: &IndexMap<String, String>) {
        rigging_core::collections::merge(&mut self.env, overlay);
    }
}

/// The deterministic output path for a workflow name.
#[must_use]
pub fn workflow_path(root: &Path, name: &str) -> PathBuf {
    root.join(".github")
        .join("workflows")
        .join(format!("{name}.yml"))
}

/// Render a definition to workflow text.
#[must_use]
pub fn render(definition: &WorkflowDefinition) -> String {
    let mut writer = ConfigWriter::new();
    writer.comment("Generated by rigging. Changes here will be overwritten on the next run.");
    writer.write_line(&format!("name: {}", definition.name));
    writer.write_line("");

    let triggers = definition.triggers.build_triggers(
        &definition.inputs,
        &definition.outputs,
        &definition.secrets,
    );
    writer.write_block("on:", |w| {
        for trigger in &triggers {
            trigger.render(w);
        }
    });

    if !definition.env.is_empty() {
        writer.write_line("");
        writer.write_block("env:", |w| {
            for (key, value) in &definition.env {
                w.write_line(&format!("{key}: {}", single_quote(value)));
            }
        });
    }

    let mut text = writer.finish();
    if let Some(body) = &definition.body {
        text.push('\n');
        text.push_str(body);
        if !body.ends_with('\n') {
            text.push('\n');
        }
    }
    text
}

/// Generates workflow files from definitions.
pub struct WorkflowGenerator {
    root: PathBuf,
    registry: EnhancementRegistry<WorkflowDefinition>,
}

impl WorkflowGenerator {
    /// Create a generator rooted at the repository root.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            registry: EnhancementRegistry::new(),
        }
    }

    /// Create a generator with an existing enhancement registry.
    #[must_use]
    pub fn with_registry(
        root: impl Into<PathBuf>,
        registry: EnhancementRegistry<WorkflowDefinition>,
    ) -> Self {
        Self {
            root: root.into(),
            registry,
        }
    }

    /// Register an enhancement on the generator's registry.
    pub fn register_enhancement(
        &mut self,
        name: &'static str,
        enhancement: impl Fn(WorkflowDefinition) -> WorkflowDefinition + Send + Sync + 'static,
    ) {
        self.registry.register(name, enhancement);
    }

    /// Generate the workflow file for a definition and return its path.
    ///
    /// Enhancements named by the definition are applied first, in order. If a
    /// previous version of the file exists, pinned action references in the
    /// fresh output are normalized against it before writing.
    pub fn generate(&self, definition: WorkflowDefinition) -> Result<PathBuf> {
        let names = definition.enhancements.clone();
        let definition = self.registry.apply(&names, definition);

        let path = workflow_path(&self.root, &definition.name);
        let mut rendered = render(&definition);

        if let Some(pins) = ActionPins::load(&path)? {
            rendered = pins.apply(&rendered);
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| {
                Error::io(source, Some(parent.to_path_buf()), "creating workflow directory")
            })?;
        }
        std::fs::write(&path, &rendered)
            .map_err(|source| Error::io(source, Some(path.clone()), "writing workflow file"))?;

        tracing::info!(path = %path.display(), workflow = %definition.name, "wrote workflow");
        Ok(path)
    }
}

impl std::fmt::Debug for WorkflowGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowGenerator")
            .field("root", &self.root)
            .field("registry", &self.registry)
            .finish()
    }
}
