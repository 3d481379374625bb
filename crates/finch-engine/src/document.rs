//! Document - Element arena
//!
//! Flat arena of elements owned by one simulated page. All three
//! construction paths (markup parse, script `createElement`, fragment
//! parse) produce the same node type with the same snapshot rules.

use finch_dom::ElementNode;

use crate::markup::MarkupEvent;

/// Element identifier (index into the arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u32);

/// One simulated page's element graph
#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<ElementNode>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Script construction path (`document.createElement`)
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.insert(ElementNode::new(tag))
    }

    /// Markup parse path: one parse-complete construction event
    pub fn insert_markup(&mut self, event: &MarkupEvent) -> ElementId {
        let node = ElementNode::from_attributes(
            &event.tag,
            event.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str())),
        );
        self.insert(node)
    }

    /// Fragment parse path (innerHTML): same events, separate entry
    pub fn insert_fragment(&mut self, events: &[MarkupEvent]) -> Vec<ElementId> {
        events.iter().map(|e| self.insert_markup(e)).collect()
    }

    /// Clone an element into a fresh node (`cloneNode`)
    pub fn clone_node(&mut self, id: ElementId) -> Option<ElementId> {
        let clone = self.get(id)?.clone_node();
        Some(self.insert(clone))
    }

    pub fn get(&self, id: ElementId) -> Option<&ElementNode> {
        self.elements.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut ElementNode> {
        self.elements.get_mut(id.0 as usize)
    }

    fn insert(&mut self, node: ElementNode) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(node);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_paths_share_node_semantics() {
        let mut doc = Document::new();

        let parsed = doc.insert_markup(&MarkupEvent::new("ul").attr("compact", "blah"));
        let fragment = doc.insert_fragment(&[MarkupEvent::new("ul").attr("compact", "blah")]);
        let scripted = doc.create_element("ul");
        doc.get_mut(scripted)
            .expect("just created")
            .set_attribute("compact", "blah");

        for id in [parsed, fragment[0], scripted] {
            let node = doc.get(id).expect("element exists");
            assert_eq!(node.tag(), "ul");
            assert_eq!(node.get_attribute("compact"), Some("blah"));
        }
    }

    #[test]
    fn test_clone_gets_a_fresh_id() {
        let mut doc = Document::new();
        let original = doc.insert_markup(&MarkupEvent::new("input").attr("value", "x"));
        let clone = doc.clone_node(original).expect("clone succeeds");

        assert_ne!(original, clone);
        doc.get_mut(original).expect("exists").set_attribute("value", "y");
        assert_eq!(doc.get(clone).expect("exists").get_attribute("value"), Some("x"));
    }
}
