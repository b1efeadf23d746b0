//! GitHub Actions workflow generation for the rigging build conventions.
//!
//! This crate turns a flat trigger configuration declared on a build
//! definition into a committed workflow file under `.github/workflows/`:
//!
//! - [`triggers`]: trigger kinds, detailed trigger variants, and descriptor
//!   types, each rendering itself into the configuration writer
//! - [`config`]: the trigger-set builder producing the ordered `on:` sequence
//! - [`generator`]: workflow definitions, rendering, and file emission
//! - [`pins`]: normalization of pinned action references across regenerations
//! - [`parameters`]: build parameters surfaced to the workflow
//! - [`summary`]: step-summary stitching conventions
//!
//! # Example
//!
//! ```
//! use rigging_github::config::TriggerConfig;
//! use rigging_github::generator::{WorkflowDefinition, render};
//! use rigging_github::triggers::TriggerKind;
//!
//! let definition = WorkflowDefinition {
//!     triggers: TriggerConfig {
//!         on: vec![TriggerKind::WorkflowDispatch],
//!         on_push_branches: vec!["main".to_string()],
//!         ..TriggerConfig::default()
//!     },
//!     ..WorkflowDefinition::new("ci")
//! };
//!
//! let yaml = render(&definition);
//! assert!(yaml.contains("workflow_dispatch:"));
//! assert!(yaml.contains("push:"));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod parameters;
pub mod pins;
pub mod summary;
pub mod triggers;

pub use config::{TriggerConfig, all_secrets};
pub use error::{Error, Result};
pub use generator::{WorkflowDefinition, WorkflowGenerator, workflow_path};
pub use pins::ActionPins;
pub use triggers::{
    DetailedTrigger, ScheduledTrigger, TriggerKind, VcsTrigger, WorkflowInput, WorkflowOutput,
    WorkflowSecret, WorkflowTrigger,
};
