//! View and error state for the signup form.
//!
//! DESIGN
//! ======
//! The two panels are a single `ViewState` enum, so "both visible" and "both
//! hidden" cannot be represented. The error state is independent of the view
//! but every transition into `SuccessVisible` clears it.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Why a submitted value was rejected. `Display` is the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email is required")]
    Empty,
    #[error("Please enter a valid email address")]
    Malformed,
}

/// Which panel is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    FormVisible,
    /// Carries the accepted address so the display region can be re-rendered.
    SuccessVisible { email: String },
}

impl ViewState {
    #[must_use]
    pub fn is_form_visible(&self) -> bool {
        matches!(self, Self::FormVisible)
    }

    #[must_use]
    pub fn is_success_visible(&self) -> bool {
        matches!(self, Self::SuccessVisible { .. })
    }
}

/// Whether a validation message is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorState {
    #[default]
    NoError,
    ErrorShown(ValidationError),
}

impl ErrorState {
    #[must_use]
    pub fn is_shown(self) -> bool {
        matches!(self, Self::ErrorShown(_))
    }

    /// The message to display, if any.
    #[must_use]
    pub fn message(self) -> Option<String> {
        match self {
            Self::NoError => None,
            Self::ErrorShown(err) => Some(err.to_string()),
        }
    }
}

/// Combined widget state with its transition functions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    view: ViewState,
    error: ErrorState,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn error(&self) -> ErrorState {
        self.error
    }

    /// `ErrorShown -> NoError`. Returns whether anything changed.
    pub fn clear_error(&mut self) -> bool {
        let was_shown = self.error.is_shown();
        self.error = ErrorState::NoError;
        was_shown
    }

    /// Show a validation error. The view is left as is.
    pub fn reject(&mut self, err: ValidationError) {
        self.error = ErrorState::ErrorShown(err);
    }

    /// `FormVisible -> SuccessVisible`, clearing any error.
    pub fn accept(&mut self, email: impl Into<String>) {
        self.error = ErrorState::NoError;
        self.view = ViewState::SuccessVisible { email: email.into() };
    }

    /// `SuccessVisible -> FormVisible`, clearing any residual error.
    /// Returns whether the view changed.
    pub fn dismiss(&mut self) -> bool {
        self.error = ErrorState::NoError;
        let was_success = self.view.is_success_visible();
        self.view = ViewState::FormVisible;
        was_success
    }
}
