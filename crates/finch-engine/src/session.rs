//! Session - One simulated page/window
//!
//! Owns a document and a reflection engine bound to the profile selected
//! at creation. Sessions are independent of one another; only the
//! read-only profile table is shared.

use finch_js::{ErrorConstructor, ErrorKind, ErrorObject, JsValue, StackFrame};
use finch_profiles::{Profile, ProfileId, ProfileTable};

use crate::document::{Document, ElementId};
use crate::engine::ReflectionEngine;
use crate::markup::MarkupEvent;

/// One simulated window with its element graph and error objects
pub struct Session {
    profile: &'static Profile,
    engine: ReflectionEngine,
    document: Document,
}

impl Session {
    /// Create a session under the given profile
    pub fn new(profile_id: ProfileId) -> Self {
        tracing::debug!(profile = profile_id.as_str(), "creating session");
        let profile = ProfileTable::get(profile_id);
        Self {
            profile,
            engine: ReflectionEngine::new(profile),
            document: Document::new(),
        }
    }

    pub fn profile(&self) -> &'static Profile {
        self.profile
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Script construction path
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.document.create_element(tag)
    }

    /// Markup parse path
    pub fn insert_markup(&mut self, event: &MarkupEvent) -> ElementId {
        self.document.insert_markup(event)
    }

    /// Fragment (innerHTML) parse path
    pub fn insert_fragment(&mut self, events: &[MarkupEvent]) -> Vec<ElementId> {
        self.document.insert_fragment(events)
    }

    /// `cloneNode`
    pub fn clone_node(&mut self, id: ElementId) -> Option<ElementId> {
        self.document.clone_node(id)
    }

    /// Script property read
    pub fn get_property(&self, id: ElementId, property: &str) -> JsValue {
        self.engine.get_property(&self.document, id, property)
    }

    /// Script property write
    pub fn set_property(
        &mut self,
        id: ElementId,
        property: &str,
        value: JsValue,
    ) -> Result<(), finch_dom::ReflectionError> {
        self.engine.set_property(&mut self.document, id, property, value)
    }

    /// `getAttribute`: raw string, `Null` when absent
    pub fn get_attribute(&self, id: ElementId, name: &str) -> JsValue {
        match self.document.get(id).and_then(|e| e.get_attribute(name)) {
            Some(raw) => JsValue::string(raw),
            None => JsValue::Null,
        }
    }

    /// `setAttribute`
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(element) = self.document.get_mut(id) {
            element.set_attribute(name, value);
        }
    }

    /// `removeAttribute`
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) {
        if let Some(element) = self.document.get_mut(id) {
            element.remove_attribute(name);
        }
    }

    /// `new Error()` / native throw: error object under this profile
    pub fn new_error(&self, kind: ErrorKind, frames: Vec<StackFrame>) -> ErrorObject {
        ErrorObject::new(kind, frames, self.profile)
    }

    /// The `Error` constructor's profile-gated capabilities
    pub fn error_constructor(&self) -> ErrorConstructor {
        ErrorConstructor::new(self.profile)
    }
}
