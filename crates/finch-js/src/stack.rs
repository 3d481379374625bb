//! Stack Frames
//!
//! Call-stack snapshots handed over by the script engine at construction
//! and throw sites, and their profile-dependent rendering.

use finch_profiles::Profile;

/// One call-stack frame, immutable once captured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub function_name: String,
    pub location: String,
}

impl StackFrame {
    pub fn new(function_name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            location: location.into(),
        }
    }
}

/// Render a stack trace string: one line per frame, innermost first,
/// formatted and clamped per profile
///
/// An empty snapshot (unreachable call-stack context) renders as an empty
/// string rather than failing.
pub fn synthesize_stack(frames: &[StackFrame], profile: &Profile) -> String {
    let limit = profile
        .stack_trace_limit
        .map(|l| l as usize)
        .unwrap_or(usize::MAX);
    let lines: Vec<String> = frames
        .iter()
        .take(limit)
        .map(|f| profile.stack_format.render(&f.function_name, &f.location))
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use finch_profiles::{ProfileId, ProfileTable};

    use super::*;

    fn frames() -> Vec<StackFrame> {
        vec![
            StackFrame::new("method", "script.js:7"),
            StackFrame::new("test", "script.js:3"),
        ]
    }

    #[test]
    fn test_paren_format() {
        let profile = ProfileTable::get(ProfileId::Default);
        assert_eq!(
            synthesize_stack(&frames(), profile),
            "method (script.js:7)\ntest (script.js:3)"
        );
    }

    #[test]
    fn test_at_format() {
        let profile = ProfileTable::get(ProfileId::AltEngine);
        assert_eq!(
            synthesize_stack(&frames(), profile),
            "method@script.js:7\ntest@script.js:3"
        );
    }

    #[test]
    fn test_limit_clamps_frames() {
        let profile = ProfileTable::get(ProfileId::Default);
        let deep: Vec<StackFrame> = (0..25)
            .map(|i| StackFrame::new(format!("f{}", i), "script.js:1"))
            .collect();
        let stack = synthesize_stack(&deep, profile);
        assert_eq!(stack.lines().count(), 10);
        assert!(stack.starts_with("f0 "));
    }

    #[test]
    fn test_empty_snapshot_degrades_to_empty_string() {
        let profile = ProfileTable::get(ProfileId::Default);
        assert_eq!(synthesize_stack(&[], profile), "");
    }
}
