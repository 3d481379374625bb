//! Property Binding Tables
//!
//! Static, per-tag sets of reflected properties, shared across every
//! element of a tag and every profile. Profile divergence lives in the
//! coercion layer, not here.

use finch_dom::{EnumeratedSpec, PropertyKind};

/// One property-to-attribute binding
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub property: &'static str,
    pub attribute: &'static str,
    pub kind: PropertyKind,
}

/// List `type`: canonical members are case-sensitive, `a` and `A` distinct
static LIST_TYPE: EnumeratedSpec = EnumeratedSpec {
    values: &["1", "a", "A", "i", "I"],
    case_sensitive: true,
    fallback: "",
};

/// Global `dir`: case-insensitive with canonical lowercase
static TEXT_DIRECTION: EnumeratedSpec = EnumeratedSpec {
    values: &["ltr", "rtl", "auto"],
    case_sensitive: false,
    fallback: "",
};

static LIST_BINDINGS: [Binding; 2] = [
    Binding {
        property: "compact",
        attribute: "compact",
        kind: PropertyKind::Boolean,
    },
    Binding {
        property: "type",
        attribute: "type",
        kind: PropertyKind::Enumerated(&LIST_TYPE),
    },
];

static COMPACT_BINDINGS: [Binding; 1] = [Binding {
    property: "compact",
    attribute: "compact",
    kind: PropertyKind::Boolean,
}];

static INPUT_BINDINGS: [Binding; 4] = [
    Binding {
        property: "value",
        attribute: "value",
        kind: PropertyKind::Time,
    },
    Binding {
        property: "min",
        attribute: "min",
        kind: PropertyKind::String,
    },
    Binding {
        property: "max",
        attribute: "max",
        kind: PropertyKind::String,
    },
    Binding {
        property: "step",
        attribute: "step",
        kind: PropertyKind::String,
    },
];

static GLOBAL_BINDINGS: [Binding; 3] = [
    Binding {
        property: "dir",
        attribute: "dir",
        kind: PropertyKind::Enumerated(&TEXT_DIRECTION),
    },
    Binding {
        property: "id",
        attribute: "id",
        kind: PropertyKind::String,
    },
    Binding {
        property: "title",
        attribute: "title",
        kind: PropertyKind::String,
    },
];

/// The tag-specific bindings an element exposes, in declaration order
pub fn bindings_for_tag(tag: &str) -> &'static [Binding] {
    match tag {
        "ul" | "ol" => &LIST_BINDINGS,
        "dl" | "menu" | "dir" => &COMPACT_BINDINGS,
        "input" => &INPUT_BINDINGS,
        _ => &[],
    }
}

/// Resolve a property name: tag-specific bindings first, then globals
pub fn resolve_binding(tag: &str, property: &str) -> Option<&'static Binding> {
    bindings_for_tag(tag)
        .iter()
        .chain(GLOBAL_BINDINGS.iter())
        .find(|b| b.property == property)
}
