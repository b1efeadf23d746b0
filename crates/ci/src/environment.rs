//! CI environment inspection.
//!
//! Server builds dump the state of well-known CI environment variables for
//! debugging. The prefix list covers the providers the conventions target plus
//! the agent/build variables Azure Pipelines sets.

/// Environment variable prefixes that identify CI provider state.
pub const WELL_KNOWN_PREFIXES: &[&str] = &[
    "CIRCLE",
    "GITHUB",
    "APPVEYOR",
    "TRAVIS",
    "BITRISE",
    "BAMBOO",
    "GITLAB",
    "JENKINS",
    "TEAMCITY",
    "AGENT_",
    "BUILD_",
    "RELEASE_",
    "PIPELINE_",
    "ENVIRONMENT_",
    "SYSTEM_",
];

/// Collect the current environment variables matching a well-known CI prefix.
///
/// Matching is case-insensitive on the variable name; results are sorted by
/// name for stable output.
#[must_use]
pub fn collect_environment() -> Vec<(String, String)> {
    let mut variables: Vec<(String, String)> = std::env::vars()
        .filter(|(key, _)| {
            let upper = key.to_uppercase();
            WELL_KNOWN_PREFIXES
                .iter()
                .any(|prefix| upper.starts_with(prefix))
        })
        .collect();
    variables.sort();
    variables
}

/// Log the CI environment state at info level.
pub fn log_environment() {
    tracing::info!(ci = ?std::env::var("CI").ok(), "CI environment");
    for (key, value) in collect_environment() {
        tracing::info!("{key}: {value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_matching_variables_sorted() {
        temp_env::with_vars(
            [
                ("GITHUB_REF", Some("refs/heads/main")),
                ("BUILD_NUMBER", Some("42")),
                ("UNRELATED_VAR", Some("nope")),
            ],
            || {
                let variables = collect_environment();
                assert!(
                    variables
                        .iter()
                        .any(|(k, v)| k == "BUILD_NUMBER" && v == "42")
                );
                assert!(variables.iter().any(|(k, _)| k == "GITHUB_REF"));
                assert!(!variables.iter().any(|(k, _)| k == "UNRELATED_VAR"));

                let mut sorted = variables.clone();
                sorted.sort();
                assert_eq!(variables, sorted);
            },
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        temp_env::with_vars([("github_token_lower", Some("x"))], || {
            assert!(
                collect_environment()
                    .iter()
                    .any(|(k, _)| k == "github_token_lower")
            );
        });
    }
}
