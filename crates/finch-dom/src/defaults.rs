//! Default Value Tracking
//!
//! A form control's default value is snapshotted once, at parse-complete or
//! script construction, and again at clone time. The live value is a
//! separate, explicit override slot so clone semantics stay mechanically
//! checkable instead of being recomputed from the shared attribute store.

/// Default/live value pair for one element
#[derive(Debug, Clone, Default)]
pub struct DefaultValueTracker {
    default: String,
    live: Option<String>,
    /// Set when script retypes the control; the attribute-derived value is
    /// masked until an explicit script or user set.
    masked: bool,
}

impl DefaultValueTracker {
    /// Capture the attribute-derived snapshot
    pub fn capture(attribute_value: Option<&str>) -> Self {
        Self {
            default: attribute_value.unwrap_or("").to_string(),
            live: None,
            masked: false,
        }
    }

    /// The immutable snapshot taken at capture time
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// The live value: the override when set, otherwise the current
    /// attribute-derived value passed by the caller
    pub fn current_value<'a>(&'a self, attribute_value: Option<&'a str>) -> &'a str {
        match &self.live {
            Some(live) => live,
            None if self.masked => "",
            None => attribute_value.unwrap_or(""),
        }
    }

    /// Script or simulated user input sets the live value
    pub fn set_live(&mut self, value: &str) {
        self.live = Some(value.to_string());
    }

    /// Simulated user clear: live value becomes empty, snapshot untouched
    pub fn clear_live(&mut self) {
        self.live = Some(String::new());
    }

    /// Mask the attribute-derived value after a script retype
    pub fn mask(&mut self) {
        self.live = None;
        self.masked = true;
    }

    /// Whether a live override diverges from the attribute-derived value
    pub fn is_overridden(&self) -> bool {
        self.live.is_some() || self.masked
    }
}
