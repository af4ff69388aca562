//! YAML configuration loader for navkit navigation components.

mod error;
mod manifest;

pub use error::ParseError;
pub use manifest::{ContextConfig, NavManifest, NavSection};
