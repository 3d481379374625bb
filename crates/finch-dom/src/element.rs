//! Element Node
//!
//! Owns the attribute store and the default/live value pair. The same node
//! type backs every construction path (markup parse, script construction,
//! fragment parse) so the paths cannot drift apart.

use crate::attributes::AttributeStore;
use crate::defaults::DefaultValueTracker;
use crate::temporal::is_valid_time;

/// One element in a simulated document
#[derive(Debug, Clone)]
pub struct ElementNode {
    tag: String,
    attributes: AttributeStore,
    tracker: DefaultValueTracker,
}

impl ElementNode {
    /// Script construction: no attributes, empty default snapshot
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: AttributeStore::new(),
            tracker: DefaultValueTracker::capture(None),
        }
    }

    /// Parse construction: attributes filled in, snapshot taken at
    /// parse-complete
    pub fn from_attributes<'a, I>(tag: &str, attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut store = AttributeStore::new();
        for (name, value) in attributes {
            store.set(name, value);
        }
        let tracker = DefaultValueTracker::capture(store.get("value"));
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: store,
            tracker,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }

    /// Raw attribute read, `None` when absent
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.set(name, value);
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.has(name)
    }

    /// Whether the element's value follows the strict time grammar
    pub fn is_temporal(&self) -> bool {
        self.tag == "input"
            && self
                .attributes
                .get("type")
                .is_some_and(|t| t.eq_ignore_ascii_case("time"))
    }

    /// The live value, grammar-validated for temporal controls
    pub fn value(&self) -> String {
        let current = self.tracker.current_value(self.attributes.get("value"));
        self.validated(current).to_string()
    }

    /// The default-value snapshot, grammar-validated for temporal controls
    pub fn default_value(&self) -> String {
        self.validated(self.tracker.default_value()).to_string()
    }

    /// Script or simulated user input sets the live value
    pub fn set_value(&mut self, value: &str) {
        self.tracker.set_live(value);
    }

    /// Simulated user clear; the default snapshot survives
    pub fn clear_value(&mut self) {
        self.tracker.clear_live();
    }

    /// Script retype (`element.type = ...`)
    ///
    /// Becoming a temporal control masks any attribute-derived value: the
    /// live value starts absent regardless of prior markup and stays so
    /// until explicitly set.
    pub fn set_type(&mut self, value: &str) {
        self.attributes.set("type", value);
        if self.is_temporal() {
            self.tracker.mask();
        }
    }

    /// Clone the element: attribute snapshot is copied, the default is
    /// re-derived from that copy, and script-only runtime state (live
    /// override, retype mask) never carries forward.
    pub fn clone_node(&self) -> Self {
        tracing::trace!(tag = %self.tag, "cloning element");
        let attributes = self.attributes.clone();
        let tracker = DefaultValueTracker::capture(attributes.get("value"));
        Self {
            tag: self.tag.clone(),
            attributes,
            tracker,
        }
    }

    fn validated<'a>(&self, value: &'a str) -> &'a str {
        if self.is_temporal() && !value.is_empty() && !is_valid_time(value) {
            ""
        } else {
            value
        }
    }
}
