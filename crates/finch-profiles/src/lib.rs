//! finch Profiles - Browser behavior tables
//!
//! Each simulated browser engine variant is a `Profile`: a named, immutable
//! bundle of coercion, validation and capability rules. Profiles are plain
//! data consulted at each operation site, never subclassed per engine.

/// Profile identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProfileId {
    /// The default engine (permissive coercion, eager stack capture)
    #[default]
    Default,
    /// Alternate engine with `name@location` stack frames
    AltEngine,
    /// Legacy engine A: strict enum validation, stack captured on first read
    LegacyA,
    /// Legacy engine B: strict enum validation, no stack support at all
    LegacyB,
}

impl ProfileId {
    /// Parse from a profile name string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "default" => Some(Self::Default),
            "alt-engine" => Some(Self::AltEngine),
            "legacy-a" => Some(Self::LegacyA),
            "legacy-b" => Some(Self::LegacyB),
            _ => None,
        }
    }

    /// Canonical profile name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::AltEngine => "alt-engine",
            Self::LegacyA => "legacy-a",
            Self::LegacyB => "legacy-b",
        }
    }
}

/// How an engine treats assignment of an invalid enumerated value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumPolicy {
    /// Record the raw string on the attribute; the property getter keeps
    /// returning the fallback
    Permissive,
    /// Reject the assignment; the attribute keeps its previous value
    Strict,
}

/// How an engine coerces a `null`/`undefined` property assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullAssignment {
    /// Stringify to the literal `"null"` / `"undefined"`
    Stringify,
    /// Remove the reflected attribute
    RemoveAttribute,
}

/// When an engine materializes an error's stack trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackCapture {
    /// Synthesized at error construction
    Eager,
    /// Synthesized on first read of the stack field
    Lazy,
    /// The stack field never exists
    Unsupported,
}

/// Per-profile stack frame rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackFrameFormat {
    /// `name (location)`
    NameParenLocation,
    /// `name@location`
    NameAtLocation,
}

impl StackFrameFormat {
    /// Render one frame line
    pub fn render(&self, name: &str, location: &str) -> String {
        match self {
            Self::NameParenLocation => format!("{} ({})", name, location),
            Self::NameAtLocation => format!("{}@{}", name, location),
        }
    }
}

/// One simulated engine variant, immutable after registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub id: ProfileId,
    pub enum_policy: EnumPolicy,
    pub null_assignment: NullAssignment,
    pub stack_capture: StackCapture,
    pub stack_format: StackFrameFormat,
    /// `Error.stackTraceLimit` when the engine exposes it
    pub stack_trace_limit: Option<u32>,
    /// Whether `Error.captureStackTrace` exists on this engine
    pub capture_stack_trace: bool,
}

static PROFILES: [Profile; 4] = [
    Profile {
        id: ProfileId::Default,
        enum_policy: EnumPolicy::Permissive,
        null_assignment: NullAssignment::Stringify,
        stack_capture: StackCapture::Eager,
        stack_format: StackFrameFormat::NameParenLocation,
        stack_trace_limit: Some(10),
        capture_stack_trace: true,
    },
    Profile {
        id: ProfileId::AltEngine,
        enum_policy: EnumPolicy::Permissive,
        null_assignment: NullAssignment::Stringify,
        stack_capture: StackCapture::Eager,
        stack_format: StackFrameFormat::NameAtLocation,
        stack_trace_limit: None,
        capture_stack_trace: false,
    },
    Profile {
        id: ProfileId::LegacyA,
        enum_policy: EnumPolicy::Strict,
        null_assignment: NullAssignment::RemoveAttribute,
        stack_capture: StackCapture::Lazy,
        stack_format: StackFrameFormat::NameParenLocation,
        stack_trace_limit: Some(10),
        capture_stack_trace: false,
    },
    Profile {
        id: ProfileId::LegacyB,
        enum_policy: EnumPolicy::Strict,
        null_assignment: NullAssignment::RemoveAttribute,
        stack_capture: StackCapture::Unsupported,
        stack_format: StackFrameFormat::NameParenLocation,
        stack_trace_limit: None,
        capture_stack_trace: false,
    },
];

/// Shared read-only registry of all known profiles
pub struct ProfileTable;

impl ProfileTable {
    /// Look up a profile by id
    pub fn get(id: ProfileId) -> &'static Profile {
        match id {
            ProfileId::Default => &PROFILES[0],
            ProfileId::AltEngine => &PROFILES[1],
            ProfileId::LegacyA => &PROFILES[2],
            ProfileId::LegacyB => &PROFILES[3],
        }
    }

    /// Look up a profile by name
    pub fn by_name(name: &str) -> Option<&'static Profile> {
        ProfileId::parse(name).map(Self::get)
    }

    /// All registered profiles
    pub fn all() -> &'static [Profile] {
        &PROFILES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_name_round_trip() {
        for profile in ProfileTable::all() {
            assert_eq!(ProfileId::parse(profile.id.as_str()), Some(profile.id));
        }
        assert_eq!(ProfileId::parse("netscape"), None);
    }

    #[test]
    fn test_table_is_consistent() {
        for profile in ProfileTable::all() {
            assert_eq!(ProfileTable::get(profile.id).id, profile.id);
        }
    }

    #[test]
    fn test_default_profile_capabilities() {
        let profile = ProfileTable::get(ProfileId::Default);
        assert_eq!(profile.stack_trace_limit, Some(10));
        assert!(profile.capture_stack_trace);
        assert_eq!(profile.enum_policy, EnumPolicy::Permissive);
    }

    #[test]
    fn test_legacy_b_has_no_stack_support() {
        let profile = ProfileTable::get(ProfileId::LegacyB);
        assert_eq!(profile.stack_capture, StackCapture::Unsupported);
        assert_eq!(profile.stack_trace_limit, None);
        assert!(!profile.capture_stack_trace);
    }

    #[test]
    fn test_frame_format_render() {
        assert_eq!(
            StackFrameFormat::NameParenLocation.render("test", "script.js:3"),
            "test (script.js:3)"
        );
        assert_eq!(
            StackFrameFormat::NameAtLocation.render("test", "script.js:3"),
            "test@script.js:3"
        );
    }
}
