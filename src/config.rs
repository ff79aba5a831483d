//! Widget configuration: region identifiers and error decoration colors.
//!
//! DESIGN
//! ======
//! One `FormConfig` value renders the page markup and binds the controller,
//! so the identifiers in the DOM and the lookups can never disagree.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    DISMISS_BUTTON_ID, EMAIL_INPUT_ID, ERROR_BACKGROUND_COLOR, ERROR_BORDER_COLOR, ERROR_MESSAGE_ID, FORM_PANEL_ID,
    HEADER_ID, SUBMIT_BUTTON_ID, SUBMITTED_EMAIL_ID, SUCCESS_PANEL_ID,
};

/// Identifiers of every region the controller binds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionIds {
    pub email_input: &'static str,
    pub submit_button: &'static str,
    pub error_message: &'static str,
    pub form_panel: &'static str,
    /// Optional heading; binding succeeds without it.
    pub header: &'static str,
    pub success_panel: &'static str,
    pub submitted_email: &'static str,
    pub dismiss_button: &'static str,
}

impl RegionIds {
    /// All identifiers, required ones first, header last.
    #[must_use]
    pub fn all(&self) -> [&'static str; 8] {
        [
            self.email_input,
            self.submit_button,
            self.error_message,
            self.form_panel,
            self.success_panel,
            self.submitted_email,
            self.dismiss_button,
            self.header,
        ]
    }
}

impl Default for RegionIds {
    fn default() -> Self {
        Self {
            email_input: EMAIL_INPUT_ID,
            submit_button: SUBMIT_BUTTON_ID,
            error_message: ERROR_MESSAGE_ID,
            form_panel: FORM_PANEL_ID,
            header: HEADER_ID,
            success_panel: SUCCESS_PANEL_ID,
            submitted_email: SUBMITTED_EMAIL_ID,
            dismiss_button: DISMISS_BUTTON_ID,
        }
    }
}

/// Style applied to the email input while a validation error is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoration {
    pub border_color: &'static str,
    pub background_color: &'static str,
}

impl Default for Decoration {
    fn default() -> Self {
        Self { border_color: ERROR_BORDER_COLOR, background_color: ERROR_BACKGROUND_COLOR }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormConfig {
    pub ids: RegionIds,
    pub error_decoration: Decoration,
}

impl FormConfig {
    /// Replace the region identifiers, keeping the decoration.
    #[must_use]
    pub fn with_ids(self, ids: RegionIds) -> Self {
        Self { ids, ..self }
    }
}
