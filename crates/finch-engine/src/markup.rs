//! Markup Construction Events
//!
//! The narrow interface to the external markup parser: a stream of
//! `(tag, attribute-list)` events. Fragment parsing (innerHTML) feeds the
//! same event type through a separate entry point so both paths converge
//! on identical element state.

/// One element-construction event from the parser
#[derive(Debug, Clone)]
pub struct MarkupEvent {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

impl MarkupEvent {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
        }
    }

    /// Add an attribute, builder style
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }
}
