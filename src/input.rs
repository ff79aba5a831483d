//! Input model: the triggers the form controller reacts to.
//!
//! The DOM host translates browser events into `FormEvent`s. Tests build them
//! directly, so the controller never needs a real event object.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::ENTER_KEY;

/// A keyboard key as reported by the browser (`KeyboardEvent.key`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn enter() -> Self {
        Self(ENTER_KEY.to_owned())
    }

    #[must_use]
    pub fn is_enter(&self) -> bool {
        self.0 == ENTER_KEY
    }
}

/// DOM event kinds the host subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The input's content changed.
    ContentChanged,
    /// A button was clicked or pressed.
    Activated,
    /// A key went down while the region had focus.
    KeyPressed,
}

impl EventKind {
    /// Browser event name passed to `addEventListener`.
    #[must_use]
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::ContentChanged => "input",
            Self::Activated => "click",
            Self::KeyPressed => "keydown",
        }
    }
}

/// A trigger delivered to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The email input now holds this value.
    InputChanged(String),
    /// The submit control was activated.
    SubmitActivated,
    /// A key was pressed while the email input had focus.
    KeyPressed(Key),
    /// The dismiss control was activated.
    DismissActivated,
}

impl FormEvent {
    /// Whether the host must call `preventDefault()` for this event.
    ///
    /// Both submit paths suppress navigation; other keys keep their default
    /// behavior so typing still works.
    #[must_use]
    pub fn suppresses_default(&self) -> bool {
        match self {
            Self::SubmitActivated => true,
            Self::KeyPressed(key) => key.is_enter(),
            Self::InputChanged(_) | Self::DismissActivated => false,
        }
    }
}
