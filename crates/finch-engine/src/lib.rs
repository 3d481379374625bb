//! finch Engine - Reflection orchestration
//!
//! Wires script-engine property traffic through the per-tag binding tables
//! to the attribute store and default-value tracker, under the rules of the
//! session's active browser profile.

mod bindings;
mod document;
mod engine;
mod markup;
mod session;

pub use bindings::{Binding, bindings_for_tag, resolve_binding};
pub use document::{Document, ElementId};
pub use engine::ReflectionEngine;
pub use markup::MarkupEvent;
pub use session::Session;

pub use finch_dom::ReflectionError;
pub use finch_js::JsValue;
