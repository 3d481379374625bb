//! Element Attributes
//!
//! Insertion-ordered attribute collection with case-insensitive lookup.
//! Stored name case is preserved for iteration and serialization. No
//! validation happens here; coercion lives in the reflection layer.

use std::collections::HashMap;

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Per-element attribute map
///
/// Presence of a key always implies a string value; absence is distinct
/// from the empty string.
#[derive(Debug, Clone, Default)]
pub struct AttributeStore {
    attributes: Vec<Attr>,
    by_name: HashMap<String, usize>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .map(|&i| self.attributes[i].value.as_str())
    }

    /// Check if an attribute is present
    pub fn has(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_ascii_lowercase())
    }

    /// Set an attribute, replacing any previous value
    ///
    /// An existing entry keeps its stored name and insertion position.
    pub fn set(&mut self, name: &str, value: &str) {
        let key = name.to_ascii_lowercase();
        if let Some(&index) = self.by_name.get(&key) {
            self.attributes[index].value = value.to_string();
        } else {
            let index = self.attributes.len();
            self.by_name.insert(key, index);
            self.attributes.push(Attr::new(name, value));
        }
    }

    /// Remove an attribute by name
    pub fn remove(&mut self, name: &str) -> Option<Attr> {
        let key = name.to_ascii_lowercase();
        let index = self.by_name.remove(&key)?;
        // Fix up indices of entries after the removed one
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.attributes.remove(index))
    }

    /// Iterate attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}
