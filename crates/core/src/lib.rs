//! Core types and helpers for the rigging build conventions.
//!
//! This crate carries the pieces every provider crate leans on:
//!
//! - [`error`]: the shared error type with diagnostic codes
//! - [`tools`]: caller-owned resolution of the local tool manifest
//! - [`paths`]: deterministic file globbing
//! - [`collections`]: ordered map merging

pub mod collections;
pub mod error;
pub mod paths;
pub mod tools;

pub use error::{Error, Result};
pub use tools::{ToolCommand, ToolDefinition, ToolManifest, ToolResolver};
