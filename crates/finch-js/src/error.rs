//! Error Objects
//!
//! Script-visible error objects whose `stack` field is an explicit state
//! machine: `Unsynthesized -> Synthesized -> Overwritten`, plus a terminal
//! `Absent` for engines without stack support. Overwriting by script is
//! terminal from any state; synthesis never runs again afterwards.

use finch_profiles::{Profile, StackCapture};

use crate::stack::{StackFrame, synthesize_stack};

/// Native runtime failure vs script-constructed `Error`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Native,
    Scripted,
}

#[derive(Debug, Clone)]
enum StackState {
    Unsynthesized,
    Synthesized(String),
    Overwritten(String),
    Absent,
}

/// A thrown or constructed error object
#[derive(Debug, Clone)]
pub struct ErrorObject {
    kind: ErrorKind,
    profile: &'static Profile,
    frames: Vec<StackFrame>,
    state: StackState,
}

impl ErrorObject {
    /// Construct with the call-stack snapshot at the construction site
    pub fn new(kind: ErrorKind, frames: Vec<StackFrame>, profile: &'static Profile) -> Self {
        let state = match profile.stack_capture {
            StackCapture::Eager => StackState::Synthesized(synthesize_stack(&frames, profile)),
            StackCapture::Lazy => StackState::Unsynthesized,
            StackCapture::Unsupported => StackState::Absent,
        };
        Self {
            kind,
            profile,
            frames,
            state,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// A throw event on this object refreshes the pending snapshot.
    /// Synthesized and overwritten stacks are sticky.
    pub fn record_throw(&mut self, frames: Vec<StackFrame>) {
        if matches!(self.state, StackState::Unsynthesized) {
            self.frames = frames;
        }
    }

    /// Whether the stack field exists (`'stack' in e`)
    ///
    /// Lazy engines only materialize the field at synthesis.
    pub fn has_stack(&self) -> bool {
        !matches!(self.state, StackState::Absent | StackState::Unsynthesized)
    }

    /// Read the stack field; `None` means `undefined`
    ///
    /// First read under a lazy profile synthesizes and caches.
    pub fn stack(&mut self) -> Option<&str> {
        if matches!(self.state, StackState::Unsynthesized) {
            tracing::trace!(profile = self.profile.id.as_str(), "synthesizing stack");
            self.state = StackState::Synthesized(synthesize_stack(&self.frames, self.profile));
        }
        match &self.state {
            StackState::Synthesized(s) | StackState::Overwritten(s) => Some(s),
            _ => None,
        }
    }

    /// Script assignment to the stack field: terminal from any state
    pub fn overwrite_stack(&mut self, value: &str) {
        self.state = StackState::Overwritten(value.to_string());
    }
}

/// Profile-gated `Error` constructor capabilities
///
/// `stackTraceLimit` and `captureStackTrace` exist only on engines that
/// support them; absence is a valid, non-error outcome surfaced as `None`.
#[derive(Debug, Clone, Copy)]
pub struct ErrorConstructor {
    profile: &'static Profile,
}

impl ErrorConstructor {
    pub fn new(profile: &'static Profile) -> Self {
        Self { profile }
    }

    /// `Error.stackTraceLimit`, `None` where the engine has no such field
    pub fn stack_trace_limit(&self) -> Option<u32> {
        self.profile.stack_trace_limit
    }

    /// `Error.captureStackTrace(target)`; `None` where the engine does not
    /// expose the function. Overwritten stacks stay detached.
    pub fn capture_stack_trace(
        &self,
        target: &mut ErrorObject,
        frames: Vec<StackFrame>,
    ) -> Option<()> {
        if !self.profile.capture_stack_trace {
            return None;
        }
        if !matches!(target.state, StackState::Overwritten(_)) {
            target.frames = frames;
            target.state =
                StackState::Synthesized(synthesize_stack(&target.frames, target.profile));
        }
        Some(())
    }
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
    fn test_eager_profile_has_stack_before_throw() {
        let profile = ProfileTable::get(ProfileId::Default);
        let mut e = ErrorObject::new(ErrorKind::Scripted, frames(), profile);
        assert!(e.has_stack());
        let stack = e.stack().expect("stack exists");
        assert!(stack.contains("method (script.js:7)"));
    }

    #[test]
    fn test_lazy_profile_synthesizes_on_first_read() {
        let profile = ProfileTable::get(ProfileId::LegacyA);
        let mut e = ErrorObject::new(ErrorKind::Native, frames(), profile);
        assert!(!e.has_stack());

        let first = e.stack().expect("read materializes the field").to_string();
        assert!(e.has_stack());
        assert_eq!(e.stack(), Some(first.as_str()));
    }

    #[test]
    fn test_absent_profile_never_materializes() {
        let profile = ProfileTable::get(ProfileId::LegacyB);
        let mut e = ErrorObject::new(ErrorKind::Scripted, frames(), profile);
        assert!(!e.has_stack());
        assert_eq!(e.stack(), None);
        assert_eq!(e.stack(), None);
        assert!(!e.has_stack());
    }

    #[test]
    fn test_overwrite_is_terminal() {
        let profile = ProfileTable::get(ProfileId::Default);
        let mut e = ErrorObject::new(ErrorKind::Native, frames(), profile);
        assert!(e.stack().is_some_and(|s| s.len() > 10));

        e.overwrite_stack("kcats");
        assert_eq!(e.stack(), Some("kcats"));

        // Further throws never restart synthesis
        e.record_throw(vec![StackFrame::new("other", "script.js:9")]);
        assert_eq!(e.stack(), Some("kcats"));
        assert_eq!(e.stack(), Some("kcats"));
    }

    #[test]
    fn test_overwrite_from_unsynthesized() {
        let profile = ProfileTable::get(ProfileId::LegacyA);
        let mut e = ErrorObject::new(ErrorKind::Scripted, frames(), profile);
        e.overwrite_stack("mine");
        assert!(e.has_stack());
        assert_eq!(e.stack(), Some("mine"));
    }

    #[test]
    fn test_throw_refreshes_pending_snapshot() {
        let profile = ProfileTable::get(ProfileId::LegacyA);
        let mut e = ErrorObject::new(ErrorKind::Scripted, vec![], profile);
        e.record_throw(frames());
        assert!(e.stack().is_some_and(|s| s.starts_with("method")));
    }

    #[test]
    fn test_capture_stack_trace_gating() {
        let supported = ErrorConstructor::new(ProfileTable::get(ProfileId::Default));
        let missing = ErrorConstructor::new(ProfileTable::get(ProfileId::AltEngine));

        let profile = ProfileTable::get(ProfileId::Default);
        let mut e = ErrorObject::new(ErrorKind::Scripted, vec![], profile);
        assert!(
            supported
                .capture_stack_trace(&mut e, frames())
                .is_some()
        );
        assert!(e.stack().is_some_and(|s| s.contains("test")));

        assert!(missing.capture_stack_trace(&mut e, frames()).is_none());
    }

    #[test]
    fn test_stack_trace_limit_gating() {
        assert_eq!(
            ErrorConstructor::new(ProfileTable::get(ProfileId::Default)).stack_trace_limit(),
            Some(10)
        );
        assert_eq!(
            ErrorConstructor::new(ProfileTable::get(ProfileId::AltEngine)).stack_trace_limit(),
            None
        );
    }
}
