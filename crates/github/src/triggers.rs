//! Workflow trigger model.
//!
//! A workflow's `on:` section is an ordered sequence of detailed triggers.
//! Each trigger kind maps to a fixed wire token; the detailed variants carry
//! the branch/tag/path filters, the cron expression, or the reusable-workflow
//! inputs/outputs/secrets, and render themselves into the configuration
//! writer.

use rigging_ci::{ConfigWriter, RenderEntity, single_quote};

/// The kind of trigger for a GitHub Actions workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    /// Push
    Push,
    /// Pull request
    PullRequest,
    /// Release
    Release,
    /// Manual dispatch
    WorkflowDispatch,
    /// Reusable-workflow call
    WorkflowCall,
    /// Completion of another workflow
    WorkflowRun,
    /// Pull request target
    PullRequestTarget,
}

impl TriggerKind {
    /// The wire-format token emitted for this kind.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::PullRequest => "pull_request",
            Self::Release => "release",
            Self::WorkflowDispatch => "workflow_dispatch",
            Self::WorkflowCall => "workflow_call",
            Self::WorkflowRun => "workflow_run",
            Self::PullRequestTarget => "pull_request_target",
        }
    }
}

impl std::fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// A fully parameterized, renderable trigger condition.
#[derive(Debug, Clone)]
pub enum DetailedTrigger {
    /// Version-control trigger with branch/tag/path filters
    Vcs(VcsTrigger),
    /// Cron-scheduled trigger
    Scheduled(ScheduledTrigger),
    /// Manual-dispatch or reusable-workflow trigger
    Workflow(WorkflowTrigger),
}

impl RenderEntity for DetailedTrigger {
    fn render(&self, writer: &mut ConfigWriter) {
        match self {
            Self::Vcs(trigger) => trigger.render(writer),
            Self::Scheduled(trigger) => trigger.render(writer),
            Self::Workflow(trigger) => trigger.render(writer),
        }
    }
}

/// A detailed trigger for version control events.
///
/// `kind` is expected to be one of `Push`, `PullRequest`, or
/// `PullRequestTarget`; the trigger-set builder only constructs those.
#[derive(Debug, Clone)]
pub struct VcsTrigger {
    /// The kind of the trigger
    pub kind: TriggerKind,
    /// Branch filters
    pub branches: Vec<String>,
    /// Tag filters
    pub tags: Vec<String>,
    /// Included path filters
    pub include_paths: Vec<String>,
    /// Excluded path filters
    pub exclude_paths: Vec<String>,
}

impl VcsTrigger {
    /// Create a trigger of the given kind with no filters.
    #[must_use]
    pub const fn new(kind: TriggerKind) -> Self {
        Self {
            kind,
            branches: Vec::new(),
            tags: Vec::new(),
            include_paths: Vec::new(),
            exclude_paths: Vec::new(),
        }
    }
}

fn write_quoted_list(writer: &mut ConfigWriter, values: &[String]) {
    for value in values {
        writer.write_line(&format!("- {}", single_quote(value)));
    }
}

impl RenderEntity for VcsTrigger {
    fn render(&self, writer: &mut ConfigWriter) {
        writer.write_line(&format!("{}:", self.kind.token()));

        // Workflow kinds carry no filter body; the token line stands alone.
        if matches!(
            self.kind,
            TriggerKind::WorkflowDispatch | TriggerKind::WorkflowCall
        ) {
            return;
        }

        writer.indented(|w| {
            if !self.branches.is_empty() {
                w.write_block("branches:", |w| write_quoted_list(w, &self.branches));
            }

            if !self.tags.is_empty() {
                w.write_block("tags:", |w| write_quoted_list(w, &self.tags));
            }

            if self.include_paths.is_empty() && !self.exclude_paths.is_empty() {
                w.write_block("paths-ignore:", |w| write_quoted_list(w, &self.exclude_paths));
            } else if !self.include_paths.is_empty() && self.exclude_paths.is_empty() {
                w.write_block("paths:", |w| write_quoted_list(w, &self.include_paths));
            } else if !self.include_paths.is_empty() || !self.exclude_paths.is_empty() {
                w.write_block("paths:", |w| {
                    write_quoted_list(w, &self.include_paths);
                    for path in &self.exclude_paths {
                        w.write_line(&format!("- {}", single_quote(&format!("!{path}"))));
                    }
                });
            }
        });
    }
}

/// A cron-scheduled trigger.
///
/// The expression is emitted verbatim; this layer does not validate cron
/// syntax.
#[derive(Debug, Clone)]
pub struct ScheduledTrigger {
    /// Five-field cron expression
    pub cron: String,
}

impl RenderEntity for ScheduledTrigger {
    fn render(&self, writer: &mut ConfigWriter) {
        writer.write_block("schedule:", |w| {
            w.write_line(&format!("- cron: {}", single_quote(&self.cron)));
        });
    }
}

/// Input type for dispatch/call inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    /// Free-form string input
    #[default]
    String,
    /// Boolean input
    Boolean,
    /// Numeric input
    Number,
}

impl InputType {
    /// The wire-format token for this input type.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Number => "number",
        }
    }
}

/// A named input declared on a dispatch or call trigger.
#[derive(Debug, Clone, Default)]
pub struct WorkflowInput {
    /// Input name
    pub name: String,
    /// Input type
    pub input_type: InputType,
    /// Default value, emitted single-quoted
    pub default: Option<String>,
    /// Whether the caller must supply the input
    pub required: bool,
    /// Human-readable description
    pub description: Option<String>,
}

impl RenderEntity for WorkflowInput {
    fn render(&self, writer: &mut ConfigWriter) {
        writer.write_block(&format!("{}:", self.name), |w| {
            if let Some(description) = &self.description {
                w.write_line(&format!("description: {}", single_quote(description)));
            }
            w.write_line(&format!("type: {}", self.input_type.token()));
            if let Some(default) = &self.default {
                w.write_line(&format!("default: {}", single_quote(default)));
            }
            w.write_line(&format!("required: {}", self.required));
        });
    }
}

/// A named output declared on a call trigger.
#[derive(Debug, Clone, Default)]
pub struct WorkflowOutput {
    /// Output name
    pub name: String,
    /// Human-readable description
    pub description: Option<String>,
}

impl RenderEntity for WorkflowOutput {
    fn render(&self, writer: &mut ConfigWriter) {
        writer.write_block(&format!("{}:", self.name), |w| {
            if let Some(description) = &self.description {
                w.write_line(&format!("description: {}", single_quote(description)));
            }
        });
    }
}

/// A named secret declared on a call trigger.
#[derive(Debug, Clone, Default)]
pub struct WorkflowSecret {
    /// Secret name
    pub name: String,
    /// Human-readable description
    pub description: Option<String>,
    /// Whether the caller must supply the secret
    pub required: bool,
    /// Parameter alias used by the embedding build definition, not rendered
    pub alias: Option<String>,
}

impl WorkflowSecret {
    /// Create a secret descriptor with just a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The well-known default token secret.
    #[must_use]
    pub fn github_token() -> Self {
        Self {
            name: "GITHUB_TOKEN".to_string(),
            description: Some("The default github actions token".to_string()),
            required: false,
            alias: Some("GithubToken".to_string()),
        }
    }
}

impl RenderEntity for WorkflowSecret {
    fn render(&self, writer: &mut ConfigWriter) {
        writer.write_block(&format!("{}:", self.name), |w| {
            if let Some(description) = &self.description {
                w.write_line(&format!("description: {}", single_quote(description)));
            }
            w.write_line(&format!("required: {}", self.required));
        });
    }
}

/// A manual-dispatch or reusable-workflow trigger.
#[derive(Debug, Clone)]
pub struct WorkflowTrigger {
    /// `WorkflowDispatch` or `WorkflowCall`
    pub kind: TriggerKind,
    /// Declared inputs
    pub inputs: Vec<WorkflowInput>,
    /// Declared outputs (call triggers only)
    pub outputs: Vec<WorkflowOutput>,
    /// Declared secrets (call triggers only)
    pub secrets: Vec<WorkflowSecret>,
}

impl RenderEntity for WorkflowTrigger {
    fn render(&self, writer: &mut ConfigWriter) {
        writer.write_line(&format!("{}:", self.kind.token()));
        writer.indented(|w| {
            if !self.inputs.is_empty() {
                w.write_block("inputs:", |w| {
                    for input in &self.inputs {
                        input.render(w);
                    }
                });
            }

            if !self.outputs.is_empty() {
                w.write_block("outputs:", |w| {
                    for output in &self.outputs {
                        output.render(w);
                    }
                });
            }

            if !self.secrets.is_empty() {
                w.write_block("secrets:", |w| {
                    for secret in &self.secrets {
                        secret.render(w);
                    }
                });
            }
        });
    }
}
