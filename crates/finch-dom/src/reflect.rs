//! Reflected Properties
//!
//! Bidirectional mapping between one raw attribute and one script-visible
//! property. Each kind is a stateless descriptor; profile-dependent rules
//! (strict vs permissive enums, nullish coercion) are looked up per call so
//! the same descriptor serves every element of a tag.

use finch_profiles::{EnumPolicy, NullAssignment, Profile};

use crate::ReflectionError;
use crate::attributes::AttributeStore;

/// Enumerated-string descriptor: valid member set with canonical casing
#[derive(Debug, Clone, Copy)]
pub struct EnumeratedSpec {
    /// Valid members, in canonical form
    pub values: &'static [&'static str],
    /// Whether matching requires the canonical case
    pub case_sensitive: bool,
    /// Getter result when the attribute is absent or invalid
    pub fallback: &'static str,
}

impl EnumeratedSpec {
    /// Resolve a raw string to its canonical member, if valid
    pub fn canonical(&self, raw: &str) -> Option<&'static str> {
        self.values.iter().copied().find(|v| {
            if self.case_sensitive {
                *v == raw
            } else {
                v.eq_ignore_ascii_case(raw)
            }
        })
    }
}

/// Coercion kind of one reflected property
#[derive(Debug, Clone, Copy)]
pub enum PropertyKind {
    /// Property is `true` iff the attribute is present
    Boolean,
    /// Validated member set with canonical casing
    Enumerated(&'static EnumeratedSpec),
    /// Strict `HH:MM[:SS]` value, absent when malformed
    Time,
    /// Raw string pass-through, empty when absent
    String,
}

/// A string arriving from a script assignment, nullish values kept distinct
/// so profile-specific coercion can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptString<'a> {
    Text(&'a str),
    Null,
    Undefined,
}

/// Boolean reflection read: presence alone decides, the raw value does not
pub fn read_boolean(store: &AttributeStore, attribute: &str) -> bool {
    store.has(attribute)
}

/// Boolean reflection write: truthy sets the empty string, falsy removes
pub fn write_boolean(store: &mut AttributeStore, attribute: &str, on: bool) {
    if on {
        store.set(attribute, "");
    } else {
        store.remove(attribute);
    }
}

/// Enumerated reflection read: canonical member or the fallback
pub fn read_enumerated(store: &AttributeStore, attribute: &str, spec: &EnumeratedSpec) -> String {
    match store.get(attribute).and_then(|raw| spec.canonical(raw)) {
        Some(canonical) => canonical.to_string(),
        None => spec.fallback.to_string(),
    }
}

/// Enumerated reflection write
///
/// Valid members are canonicalized into the store. Invalid members diverge
/// per profile: permissive engines record the raw string verbatim (the
/// getter keeps returning the fallback), strict engines reject and leave
/// the store untouched. Nullish assignment is a profile quirk of its own:
/// stringified or treated as removal.
pub fn write_enumerated(
    store: &mut AttributeStore,
    attribute: &str,
    spec: &EnumeratedSpec,
    profile: &Profile,
    value: ScriptString<'_>,
) -> Result<(), ReflectionError> {
    let text = match value {
        ScriptString::Text(s) => s,
        ScriptString::Null | ScriptString::Undefined => match profile.null_assignment {
            NullAssignment::RemoveAttribute => {
                store.remove(attribute);
                return Ok(());
            }
            NullAssignment::Stringify => {
                if value == ScriptString::Null {
                    "null"
                } else {
                    "undefined"
                }
            }
        },
    };

    match spec.canonical(text) {
        Some(canonical) => {
            store.set(attribute, canonical);
            Ok(())
        }
        None => match profile.enum_policy {
            EnumPolicy::Permissive => {
                store.set(attribute, text);
                Ok(())
            }
            EnumPolicy::Strict => {
                tracing::debug!(attribute, value = text, "rejecting enumerated assignment");
                Err(ReflectionError::InvalidEnumeratedValue {
                    attribute: attribute.to_string(),
                    value: text.to_string(),
                })
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use finch_profiles::{ProfileId, ProfileTable};

    use super::*;

    static LIST_TYPE: EnumeratedSpec = EnumeratedSpec {
        values: &["1", "a", "A", "i", "I"],
        case_sensitive: true,
        fallback: "",
    };

    static TEXT_DIRECTION: EnumeratedSpec = EnumeratedSpec {
        values: &["ltr", "rtl", "auto"],
        case_sensitive: false,
        fallback: "",
    };

    #[test]
    fn test_boolean_presence_wins_over_value() {
        let mut store = AttributeStore::new();
        for raw in ["", "blah", "2", "false"] {
            store.set("compact", raw);
            assert!(read_boolean(&store, "compact"), "raw value {:?}", raw);
            assert_eq!(store.get("compact"), Some(raw));
        }
        store.remove("compact");
        assert!(!read_boolean(&store, "compact"));
    }

    #[test]
    fn test_boolean_write_normalizes_to_empty() {
        let mut store = AttributeStore::new();
        store.set("compact", "blah");

        write_boolean(&mut store, "compact", true);
        assert_eq!(store.get("compact"), Some(""));

        write_boolean(&mut store, "compact", false);
        assert_eq!(store.get("compact"), None);
    }

    #[test]
    fn test_enumerated_read_canonicalizes() {
        let mut store = AttributeStore::new();
        store.set("dir", "RTL");
        assert_eq!(read_enumerated(&store, "dir", &TEXT_DIRECTION), "rtl");

        store.set("dir", "sideways");
        assert_eq!(read_enumerated(&store, "dir", &TEXT_DIRECTION), "");
    }

    #[test]
    fn test_enumerated_case_sensitive_members_stay_distinct() {
        let mut store = AttributeStore::new();
        store.set("type", "A");
        assert_eq!(read_enumerated(&store, "type", &LIST_TYPE), "A");

        store.set("type", "a");
        assert_eq!(read_enumerated(&store, "type", &LIST_TYPE), "a");
    }

    #[test]
    fn test_permissive_invalid_write_records_raw() {
        let profile = ProfileTable::get(ProfileId::Default);
        let mut store = AttributeStore::new();

        write_enumerated(&mut store, "type", &LIST_TYPE, profile, ScriptString::Text("u"))
            .expect("permissive profile must not reject");
        assert_eq!(store.get("type"), Some("u"));
        assert_eq!(read_enumerated(&store, "type", &LIST_TYPE), "");
    }

    #[test]
    fn test_strict_invalid_write_leaves_store_untouched() {
        let profile = ProfileTable::get(ProfileId::LegacyA);
        let mut store = AttributeStore::new();
        store.set("type", "I");

        let err = write_enumerated(&mut store, "type", &LIST_TYPE, profile, ScriptString::Text("u"))
            .unwrap_err();
        assert!(matches!(err, ReflectionError::InvalidEnumeratedValue { .. }));
        assert_eq!(store.get("type"), Some("I"));
    }

    #[test]
    fn test_nullish_write_per_profile() {
        let mut store = AttributeStore::new();
        store.set("type", "I");

        // Stringifying engines record the literal and fall back on read
        let default = ProfileTable::get(ProfileId::Default);
        write_enumerated(&mut store, "type", &LIST_TYPE, default, ScriptString::Null).unwrap();
        assert_eq!(store.get("type"), Some("null"));
        assert_eq!(read_enumerated(&store, "type", &LIST_TYPE), "");

        // Removal engines drop the attribute instead
        let legacy = ProfileTable::get(ProfileId::LegacyA);
        write_enumerated(&mut store, "type", &LIST_TYPE, legacy, ScriptString::Null).unwrap();
        assert_eq!(store.get("type"), None);
    }
}
