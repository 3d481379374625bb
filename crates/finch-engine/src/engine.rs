//! Reflection Engine
//!
//! Dispatches script property traffic to the element's binding set.
//! Unrecognized properties fall through to a generic string-attribute
//! binding when the attribute exists, and to `undefined` / an ignored
//! write otherwise - permissive host-object semantics, never an error.

use finch_dom::{
    PropertyKind, ReflectionError, ScriptString, read_boolean, read_enumerated, write_boolean,
    write_enumerated,
};
use finch_js::JsValue;
use finch_profiles::Profile;

use crate::bindings::resolve_binding;
use crate::document::{Document, ElementId};

/// Property get/set dispatcher for one active profile
#[derive(Debug, Clone, Copy)]
pub struct ReflectionEngine {
    profile: &'static Profile,
}

impl ReflectionEngine {
    pub fn new(profile: &'static Profile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &'static Profile {
        self.profile
    }

    /// Property read; `Undefined` for unknown elements or unbound names
    pub fn get_property(&self, document: &Document, id: ElementId, property: &str) -> JsValue {
        let Some(element) = document.get(id) else {
            return JsValue::Undefined;
        };
        tracing::trace!(tag = element.tag(), property, "property read");

        if element.tag() == "input" {
            match property {
                "defaultValue" => return JsValue::String(element.default_value()),
                "type" => return JsValue::string(element.get_attribute("type").unwrap_or("")),
                _ => {}
            }
        }

        if let Some(binding) = resolve_binding(element.tag(), property) {
            return match binding.kind {
                PropertyKind::Boolean => {
                    JsValue::Bool(read_boolean(element.attributes(), binding.attribute))
                }
                PropertyKind::Enumerated(spec) => {
                    JsValue::String(read_enumerated(element.attributes(), binding.attribute, spec))
                }
                PropertyKind::Time => JsValue::String(element.value()),
                PropertyKind::String => {
                    JsValue::string(element.get_attribute(binding.attribute).unwrap_or(""))
                }
            };
        }

        match element.get_attribute(property) {
            Some(raw) => JsValue::string(raw),
            None => JsValue::Undefined,
        }
    }

    /// Property write
    ///
    /// Validation errors surface at the assignment site and leave the
    /// attribute store unchanged.
    pub fn set_property(
        &self,
        document: &mut Document,
        id: ElementId,
        property: &str,
        value: JsValue,
    ) -> Result<(), ReflectionError> {
        let Some(element) = document.get_mut(id) else {
            return Ok(());
        };
        tracing::trace!(tag = element.tag(), property, "property write");

        if element.tag() == "input" {
            match property {
                "type" => {
                    element.set_type(&plain_text(&value));
                    return Ok(());
                }
                // The default snapshot is read-only
                "defaultValue" => return Ok(()),
                _ => {}
            }
        }

        let Some(binding) = resolve_binding(element.tag(), property) else {
            // Generic fall-through: update an existing attribute, ignore
            // writes to names with no binding and no attribute
            if element.has_attribute(property) {
                element.set_attribute(property, &plain_text(&value));
            }
            return Ok(());
        };

        match binding.kind {
            PropertyKind::Boolean => {
                write_boolean(element.attributes_mut(), binding.attribute, value.is_truthy());
            }
            PropertyKind::Enumerated(spec) => {
                let text;
                let script = match &value {
                    JsValue::Null => ScriptString::Null,
                    JsValue::Undefined => ScriptString::Undefined,
                    other => {
                        text = other.coerce_to_string();
                        ScriptString::Text(&text)
                    }
                };
                write_enumerated(
                    element.attributes_mut(),
                    binding.attribute,
                    spec,
                    self.profile,
                    script,
                )?;
            }
            PropertyKind::Time => element.set_value(&plain_text(&value)),
            PropertyKind::String => element.set_attribute(binding.attribute, &plain_text(&value)),
        }
        Ok(())
    }
}

fn plain_text(value: &JsValue) -> String {
    if value.is_nullish() {
        String::new()
    } else {
        value.coerce_to_string()
    }
}
