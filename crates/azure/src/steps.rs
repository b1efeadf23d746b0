//! Pipeline steps and parameters.

use rigging_ci::{ConfigWriter, RenderEntity, single_quote};

/// One pipeline step invoking a set of build targets through the build script.
#[derive(Debug, Clone, Default)]
pub struct AzurePipelinesStep {
    /// The step name
    pub name: String,
    /// The display name shown in the pipeline UI
    pub display_name: String,
    /// Path to the build script the step runs
    pub script_path: String,
    /// Targets the step invokes
    pub invoked_targets: Vec<String>,
}

impl AzurePipelinesStep {
    /// Write the step, skipping the given already-satisfied parameters.
    pub fn render(&self, writer: &mut ConfigWriter, skipped_parameters: &str) {
        let command = format!(
            "- pwsh: {} {} --skip {}",
            self.script_path,
            self.invoked_targets.join(" "),
            skipped_parameters
        );
        writer.write_block(command.trim_end(), |w| {
            w.write_line(&format!("displayName: {}", single_quote(&self.display_name)));
        });
    }
}

/// A pipeline parameter entry with its default value.
#[derive(Debug, Clone, Default)]
pub struct AzurePipelinesParameter {
    /// Parameter name
    pub name: String,
    /// Default value, emitted single-quoted
    pub default_value: String,
}

impl RenderEntity for AzurePipelinesParameter {
    fn render(&self, writer: &mut ConfigWriter) {
        writer.write_block(&format!("- name: {}", self.name), |w| {
            w.write_line(&format!("default: {}", single_quote(&self.default_value)));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_joins_targets_with_spaces() {
        let step = AzurePipelinesStep {
            name: "build".to_string(),
            display_name: "Build".to_string(),
            script_path: "./build.ps1".to_string(),
            invoked_targets: vec!["Restore".to_string(), "Build".to_string()],
        };

        let mut writer = ConfigWriter::new();
        step.render(&mut writer, "Restore Build");
        assert_eq!(
            writer.finish(),
            "- pwsh: ./build.ps1 Restore Build --skip Restore Build\n  displayName: 'Build'\n"
        );
    }

    #[test]
    fn step_with_no_parameters_trims_the_command() {
        let step = AzurePipelinesStep {
            name: "test".to_string(),
            display_name: "Test".to_string(),
            script_path: "./build.ps1".to_string(),
            invoked_targets: vec!["Test".to_string()],
        };

        let mut writer = ConfigWriter::new();
        step.render(&mut writer, "");
        assert_eq!(
            writer.finish(),
            "- pwsh: ./build.ps1 Test --skip\n  displayName: 'Test'\n"
        );
    }

    #[test]
    fn parameter_renders_name_and_default() {
        let parameter = AzurePipelinesParameter {
            name: "configuration".to_string(),
            default_value: "Release".to_string(),
        };

        assert_eq!(
            parameter.render_to_string(),
            "- name: configuration\n  default: 'Release'\n"
        );
    }
}
