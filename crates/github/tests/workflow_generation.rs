//! Integration tests for workflow file generation.
//!
//! These exercise the full path from a workflow definition through enhancement
//! application, rendering, pin normalization, and file emission.

use indexmap::IndexMap;
use rigging_github::config::TriggerConfig;
use rigging_github::generator::{WorkflowDefinition, WorkflowGenerator, workflow_path};
use rigging_github::triggers::{InputType, TriggerKind, WorkflowInput, WorkflowSecret};

fn definition() -> WorkflowDefinition {
    WorkflowDefinition {
        triggers: TriggerConfig {
            on: vec![TriggerKind::WorkflowDispatch],
            on_push_branches: vec!["main".to_string(), "release/*".to_string()],
            on_push_tags: vec!["v*".to_string()],
            on_pull_request_branches: vec!["main".to_string()],
            on_cron_schedule: Some("0 4 * * 1".to_string()),
            ..TriggerConfig::default()
        },
        inputs: vec![WorkflowInput {
            name: "reason".to_string(),
            input_type: InputType::String,
            description: Some("Why the run was started".to_string()),
            ..WorkflowInput::default()
        }],
        ..WorkflowDefinition::new("ci")
    }
}

/// The emitted file lands at the deterministic path and contains the `on:`
/// sequence in builder order.
#[test]
fn generates_workflow_at_deterministic_path() {
    let root = tempfile::tempdir().unwrap();
    let generator = WorkflowGenerator::new(root.path());

    let path = generator.generate(definition()).unwrap();
    assert_eq!(path, workflow_path(root.path(), "ci"));

    let content = std::fs::read_to_string(&path).unwrap();
    let dispatch = content.find("workflow_dispatch:").unwrap();
    let push = content.find("push:").unwrap();
    let pull_request = content.find("pull_request:").unwrap();
    let schedule = content.find("schedule:").unwrap();
    assert!(dispatch < push && push < pull_request && pull_request < schedule);

    assert!(content.contains("- 'main'"));
    assert!(content.contains("- 'release/*'"));
    assert!(content.contains("- cron: '0 4 * * 1'"));
}

/// Regenerating over a prior file keeps the previously pinned action versions.
#[test]
fn regeneration_preserves_pinned_action_versions() {
    let root = tempfile::tempdir().unwrap();
    let generator = WorkflowGenerator::new(root.path());

    let path = workflow_path(root.path(), "ci");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        "jobs:\n  build:\n    steps:\n      - uses: actions/checkout@v3\n",
    )
    .unwrap();

    let mut fresh = definition();
    fresh.body = Some(
        "jobs:\n  build:\n    steps:\n      - uses: actions/checkout@v4\n      - uses: actions/cache@v4\n"
            .to_string(),
    );
    generator.generate(fresh).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("uses: actions/checkout@v3"));
    assert!(content.contains("uses: actions/cache@v4"));
}

/// Without a prior file the freshly generated references are left alone.
#[test]
fn first_generation_keeps_fresh_references() {
    let root = tempfile::tempdir().unwrap();
    let generator = WorkflowGenerator::new(root.path());

    let mut fresh = definition();
    fresh.body =
        Some("jobs:\n  build:\n    steps:\n      - uses: actions/checkout@v4\n".to_string());
    let path = generator.generate(fresh).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("uses: actions/checkout@v4"));
}

/// An unparseable prior file fails the whole generation pass.
#[test]
fn unparseable_prior_file_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    let generator = WorkflowGenerator::new(root.path());

    let path = workflow_path(root.path(), "ci");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "jobs: [unclosed").unwrap();

    let result = generator.generate(definition());
    assert!(matches!(
        result,
        Err(rigging_github::Error::PriorWorkflow { .. })
    ));
}

/// Enhancements named by the definition are applied in order before rendering.
#[test]
fn enhancements_apply_in_definition_order() {
    let root = tempfile::tempdir().unwrap();
    let mut generator = WorkflowGenerator::new(root.path());

    generator.register_enhancement("add-env", |mut definition: WorkflowDefinition| {
        let mut overlay = IndexMap::new();
        overlay.insert("CONFIGURATION".to_string(), "Debug".to_string());
        definition.merge_env(&overlay);
        definition
    });
    generator.register_enhancement("release-env", |mut definition: WorkflowDefinition| {
        let mut overlay = IndexMap::new();
        overlay.insert("CONFIGURATION".to_string(), "Release".to_string());
        definition.merge_env(&overlay);
        definition
    });

    let mut fresh = definition();
    fresh.enhancements = vec![
        "add-env".to_string(),
        "release-env".to_string(),
        "not-registered".to_string(),
    ];
    let path = generator.generate(fresh).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("CONFIGURATION: 'Release'"));
    assert!(!content.contains("CONFIGURATION: 'Debug'"));
}

/// Call triggers re-declare caller secrets but never the default token.
#[test]
fn call_trigger_lists_secrets_without_default_token() {
    let root = tempfile::tempdir().unwrap();
    let generator = WorkflowGenerator::new(root.path());

    let fresh = WorkflowDefinition {
        triggers: TriggerConfig {
            on: vec![TriggerKind::WorkflowCall],
            ..TriggerConfig::default()
        },
        secrets: vec![WorkflowSecret::new("NUGET_API_KEY")],
        ..WorkflowDefinition::new("publish")
    };
    let path = generator.generate(fresh).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("workflow_call:"));
    assert!(content.contains("NUGET_API_KEY:"));
    assert!(!content.contains("GITHUB_TOKEN:"));
}
