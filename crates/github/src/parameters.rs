//! Build parameters surfaced to the workflow.

use rigging_ci::{ConfigWriter, RenderEntity, single_quote};

/// A named build parameter with its default value.
///
/// Rendered into parameter maps (`with:` blocks, dispatch input defaults) as
/// `name: 'default'`.
#[derive(Debug, Clone, Default)]
pub struct WorkflowParameter {
    /// Parameter name
    pub name: String,
    /// Default value, emitted single-quoted
    pub default_value: String,
}

impl WorkflowParameter {
    /// Create a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: default_value.into(),
        }
    }
}

impl RenderEntity for WorkflowParameter {
    fn render(&self, writer: &mut ConfigWriter) {
        writer.write_line(&format!(
            "{}: {}",
            self.name,
            single_quote(&self.default_value)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_name_and_quoted_default() {
        let parameter = WorkflowParameter::new("Configuration", "Release");
        assert_eq!(parameter.render_to_string(), "Configuration: 'Release'\n");
    }

    #[test]
    fn empty_default_still_renders_quotes() {
        let parameter = WorkflowParameter::new("Skip", "");
        assert_eq!(parameter.render_to_string(), "Skip: ''\n");
    }
}
