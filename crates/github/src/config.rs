//! Trigger-set builder.
//!
//! The flat trigger configuration declared on a build definition is turned
//! into the ordered sequence of detailed triggers to emit. Evaluation order is
//! fixed (dispatch, call, push, pull request, schedule) so regenerating a
//! workflow never reorders its `on:` section.

use crate::triggers::{
    DetailedTrigger, ScheduledTrigger, TriggerKind, VcsTrigger, WorkflowInput, WorkflowOutput,
    WorkflowSecret, WorkflowTrigger,
};

/// Flat trigger configuration for one workflow.
#[derive(Debug, Clone, Default)]
pub struct TriggerConfig {
    /// Enabled trigger kinds
    pub on: Vec<TriggerKind>,

    /// Branches that trigger on push
    pub on_push_branches: Vec<String>,
    /// Tags that trigger on push
    pub on_push_tags: Vec<String>,
    /// Paths included for push triggers
    pub on_push_include_paths: Vec<String>,
    /// Paths excluded for push triggers
    pub on_push_exclude_paths: Vec<String>,

    /// Target branches for pull request triggers
    pub on_pull_request_branches: Vec<String>,
    /// Tags for pull request triggers
    pub on_pull_request_tags: Vec<String>,
    /// Paths included for pull request triggers
    pub on_pull_request_include_paths: Vec<String>,
    /// Paths excluded for pull request triggers
    pub on_pull_request_exclude_paths: Vec<String>,

    /// Cron schedule, emitted verbatim when set
    pub on_cron_schedule: Option<String>,
}

impl TriggerConfig {
    /// Whether the given kind is enabled.
    #[must_use]
    pub fn is_enabled(&self, kind: TriggerKind) -> bool {
        self.on.contains(&kind)
    }

    /// Build the ordered sequence of detailed triggers to emit.
    ///
    /// A VCS category is emitted only when at least one of its filter lists is
    /// non-empty; workflow kinds are emitted when their kind flag is set; the
    /// schedule is emitted when a cron expression is present. Categories whose
    /// filters are all empty are deliberately skipped (opt-in by
    /// non-emptiness).
    #[must_use]
    pub fn build_triggers(
        &self,
        inputs: &[WorkflowInput],
        outputs: &[WorkflowOutput],
        secrets: &[WorkflowSecret],
    ) -> Vec<DetailedTrigger> {
        let mut triggers = Vec::new();

        if self.is_enabled(TriggerKind::WorkflowDispatch) {
            triggers.push(DetailedTrigger::Workflow(WorkflowTrigger {
                kind: TriggerKind::WorkflowDispatch,
                inputs: inputs.to_vec(),
                outputs: Vec::new(),
                secrets: Vec::new(),
            }));
        }

        if self.is_enabled(TriggerKind::WorkflowCall) {
            triggers.push(DetailedTrigger::Workflow(WorkflowTrigger {
                kind: TriggerKind::WorkflowCall,
                inputs: inputs.to_vec(),
                outputs: outputs.to_vec(),
                secrets: all_secrets(secrets, false),
            }));
        }

        if !self.on_push_branches.is_empty()
            || !self.on_push_tags.is_empty()
            || !self.on_push_include_paths.is_empty()
            || !self.on_push_exclude_paths.is_empty()
        {
            triggers.push(DetailedTrigger::Vcs(VcsTrigger {
                kind: TriggerKind::Push,
                branches: self.on_push_branches.clone(),
                tags: self.on_push_tags.clone(),
                include_paths: self.on_push_include_paths.clone(),
                exclude_paths: self.on_push_exclude_paths.clone(),
            }));
        }

        if !self.on_pull_request_branches.is_empty()
            || !self.on_pull_request_tags.is_empty()
            || !self.on_pull_request_include_paths.is_empty()
            || !self.on_pull_request_exclude_paths.is_empty()
        {
            triggers.push(DetailedTrigger::Vcs(VcsTrigger {
                kind: TriggerKind::PullRequest,
                branches: self.on_pull_request_branches.clone(),
                tags: self.on_pull_request_tags.clone(),
                include_paths: self.on_pull_request_include_paths.clone(),
                exclude_paths: self.on_pull_request_exclude_paths.clone(),
            }));
        }

        if let Some(cron) = &self.on_cron_schedule {
            triggers.push(DetailedTrigger::Scheduled(ScheduledTrigger {
                cron: cron.clone(),
            }));
        }

        triggers
    }
}

/// The full secret list for a workflow.
///
/// When `include_default_token` is set, the well-known `GITHUB_TOKEN`
/// descriptor comes first; caller secrets follow in their given order. Call
/// triggers pass `false` because the default token is implicit at the call
/// site and must not be re-declared.
#[must_use]
pub fn all_secrets(secrets: &[WorkflowSecret], include_default_token: bool) -> Vec<WorkflowSecret> {
    let mut result = Vec::with_capacity(secrets.len() + usize::from(include_default_token));
    if include_default_token {
        result.push(WorkflowSecret::github_token());
    }
    result.extend(secrets.iter().cloned());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(trigger: &DetailedTrigger) -> TriggerKind {
        match trigger {
            DetailedTrigger::Vcs(t) => t.kind,
            DetailedTrigger::Workflow(t) => t.kind,
            DetailedTrigger::Scheduled(_) => unreachable!("scheduled has no kind"),
        }
    }

    #[test]
    fn builder_output_follows_the_fixed_order() {
        let config = TriggerConfig {
            on: vec![TriggerKind::WorkflowCall, TriggerKind::WorkflowDispatch],
            on_push_branches: vec!["main".to_string()],
            on_pull_request_branches: vec!["main".to_string()],
            on_cron_schedule: Some("0 4 * * 1".to_string()),
            ..TriggerConfig::default()
        };

        let triggers = config.build_triggers(&[], &[], &[]);
        assert_eq!(triggers.len(), 5);
        assert_eq!(kind_of(&triggers[0]), TriggerKind::WorkflowDispatch);
        assert_eq!(kind_of(&triggers[1]), TriggerKind::WorkflowCall);
        assert_eq!(kind_of(&triggers[2]), TriggerKind::Push);
        assert_eq!(kind_of(&triggers[3]), TriggerKind::PullRequest);
        assert!(matches!(triggers[4], DetailedTrigger::Scheduled(_)));
    }

    #[test]
    fn empty_categories_are_not_emitted() {
        let config = TriggerConfig::default();
        assert!(config.build_triggers(&[], &[], &[]).is_empty());
    }

    #[test]
    fn any_single_filter_enables_its_category() {
        let config = TriggerConfig {
            on_push_exclude_paths: vec!["docs/**".to_string()],
            ..TriggerConfig::default()
        };

        let triggers = config.build_triggers(&[], &[], &[]);
        assert_eq!(triggers.len(), 1);
        assert_eq!(kind_of(&triggers[0]), TriggerKind::Push);
    }

    #[test]
    fn call_trigger_omits_the_default_token() {
        let config = TriggerConfig {
            on: vec![TriggerKind::WorkflowCall],
            ..TriggerConfig::default()
        };
        let secrets = vec![WorkflowSecret::new("S1")];

        let triggers = config.build_triggers(&[], &[], &secrets);
        let DetailedTrigger::Workflow(call) = &triggers[0] else {
            panic!("expected workflow trigger");
        };
        assert_eq!(call.secrets.len(), 1);
        assert_eq!(call.secrets[0].name, "S1");
    }

    #[test]
    fn dispatch_trigger_carries_inputs_but_no_secrets() {
        let config = TriggerConfig {
            on: vec![TriggerKind::WorkflowDispatch],
            ..TriggerConfig::default()
        };
        let inputs = vec![WorkflowInput {
            name: "reason".to_string(),
            ..WorkflowInput::default()
        }];

        let triggers = config.build_triggers(&inputs, &[], &[WorkflowSecret::new("S1")]);
        let DetailedTrigger::Workflow(dispatch) = &triggers[0] else {
            panic!("expected workflow trigger");
        };
        assert_eq!(dispatch.inputs.len(), 1);
        assert!(dispatch.secrets.is_empty());
        assert!(dispatch.outputs.is_empty());
    }

    #[test]
    fn all_secrets_prepends_the_default_token() {
        let secrets = vec![WorkflowSecret::new("S1")];

        let with_token = all_secrets(&secrets, true);
        assert_eq!(with_token.len(), 2);
        assert_eq!(with_token[0].name, "GITHUB_TOKEN");
        assert_eq!(with_token[1].name, "S1");

        let without_token = all_secrets(&secrets, false);
        assert_eq!(without_token.len(), 1);
        assert_eq!(without_token[0].name, "S1");
    }
}
