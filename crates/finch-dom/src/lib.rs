//! finch DOM - Attribute/property reflection core
//!
//! Per-element attribute storage plus the typed bridge between raw markup
//! attributes and script-visible properties: boolean presence flags,
//! enumerated strings with per-profile validation, temporal values and the
//! default/live value pair that survives cloning.

mod attributes;
mod defaults;
mod element;
mod reflect;
mod temporal;

pub use attributes::{Attr, AttributeStore};
pub use defaults::DefaultValueTracker;
pub use element::ElementNode;
pub use reflect::{
    EnumeratedSpec, PropertyKind, ScriptString, read_boolean, read_enumerated, write_boolean,
    write_enumerated,
};
pub use temporal::is_valid_time;

/// Reflection error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReflectionError {
    #[error("invalid value '{value}' for enumerated attribute '{attribute}'")]
    InvalidEnumeratedValue { attribute: String, value: String },
}
