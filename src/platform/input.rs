//! Abstract input events

use serde::{Deserialize, Serialize};

/// Input delivered by whatever device the host binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The single game action: flap
    Trigger,
    /// Anything else the host chose to forward
    Other,
}

/// Enable/disable switch between the host's events and the flyer
#[derive(Debug, Clone, Copy, Default)]
pub struct InputGate {
    enabled: bool,
}

impl InputGate {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// True if `event` should trigger a flap
    pub fn admits(&self, event: InputEvent) -> bool {
        self.enabled && event == InputEvent::Trigger
    }
}
