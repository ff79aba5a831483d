//! Shared constants for the signup form.

// ── Region identifiers ──────────────────────────────────────────

/// Email text input.
pub const EMAIL_INPUT_ID: &str = "email";

/// Submit button.
pub const SUBMIT_BUTTON_ID: &str = "submit-btn";

/// Inline validation message under the input.
pub const ERROR_MESSAGE_ID: &str = "email-error";

/// Panel wrapping the input, submit button and error message.
pub const FORM_PANEL_ID: &str = "signup-form";

/// Heading above the form. Optional; hidden together with the form.
pub const HEADER_ID: &str = "signup-header";

/// Panel shown after a successful submit.
pub const SUCCESS_PANEL_ID: &str = "success-message";

/// Span inside the success panel that echoes the submitted address.
pub const SUBMITTED_EMAIL_ID: &str = "submitted-email";

/// Button that returns from the success panel to the form.
pub const DISMISS_BUTTON_ID: &str = "dismiss-btn";

// ── Markers ─────────────────────────────────────────────────────

/// Class that hides a region (`display: none` in the stylesheet).
pub const HIDDEN_MARKER: &str = "hidden";

// ── Error decoration ────────────────────────────────────────────

/// Input border color while a validation error is shown.
pub const ERROR_BORDER_COLOR: &str = "#e53e3e";

/// Input background color while a validation error is shown.
pub const ERROR_BACKGROUND_COLOR: &str = "#fff5f5";

// ── Keys ────────────────────────────────────────────────────────

/// `KeyboardEvent.key` value that submits from the input.
pub const ENTER_KEY: &str = "Enter";
