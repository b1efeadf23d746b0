//! Azure Pipelines step generation for the rigging build conventions.
//!
//! Renders the per-target invocation steps and pipeline parameters emitted
//! into an Azure Pipelines stage definition. The surrounding pipeline file
//! (stages, pools, variables) is owned by the embedding build tool.

pub mod steps;

pub use steps::{AzurePipelinesParameter, AzurePipelinesStep};
