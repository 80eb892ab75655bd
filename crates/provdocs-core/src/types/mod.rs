//! Type definitions for provider metadata

mod provider_types;

pub use provider_types::*;
