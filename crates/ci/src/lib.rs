//! Provider-agnostic CI configuration plumbing.
//!
//! Provider crates (GitHub Actions, Azure Pipelines) share the concerns that
//! live here:
//!
//! - [`writer`]: the indentation-scoped text writer all configuration renders
//!   into
//! - [`entity`]: the "render to text" contract implemented by every
//!   configuration fragment
//! - [`enhancements`]: an explicit registry of named configuration
//!   transformations, applied in caller order
//! - [`environment`]: the well-known CI environment variable dump

pub mod enhancements;
pub mod entity;
pub mod environment;
pub mod writer;

pub use enhancements::EnhancementRegistry;
pub use entity::RenderEntity;
pub use writer::{ConfigWriter, single_quote};
