//! Form controller: turns triggers into state transitions and surface updates.
//!
//! ARCHITECTURE
//! ============
//! `FormController` owns the surface, the bound `Regions` and the `FormState`.
//! Every handler mutates `FormState` first and then re-renders the affected
//! regions from it, so the surface always mirrors the state.
//!
//! Submit and Enter share `attempt_submit`. The outcome is returned to the
//! host so it can decide on side effects without reading the surface back.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::FormConfig;
use crate::email;
use crate::input::{FormEvent, Key};
use crate::state::{ErrorState, FormState, ValidationError, ViewState};
use crate::surface::{BindError, Regions, StyleProp, Surface};

/// Result of handling one trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to do for this trigger in the current state.
    Ignored,
    /// A shown validation error was cleared.
    ErrorCleared,
    /// The submitted value failed validation.
    Rejected(ValidationError),
    /// The value was accepted and the success panel is showing.
    Accepted(String),
    /// The success panel was dismissed.
    Dismissed,
}

pub struct FormController<S: Surface> {
    surface: S,
    regions: Regions<S::Handle>,
    config: FormConfig,
    state: FormState,
}

impl<S: Surface> FormController<S> {
    /// Bind to the regions named in `config` and render the initial state.
    ///
    /// # Errors
    ///
    /// [`BindError::MissingRegion`] if a required region is not on the surface.
    pub fn bind(surface: S, config: FormConfig) -> Result<Self, BindError> {
        let regions = Regions::bind(&surface, &config.ids)?;
        let mut controller = Self { surface, regions, config, state: FormState::new() };
        controller.render_view();
        controller.render_error();
        log::info!("signup form bound to {} regions", controller.regions.count());
        Ok(controller)
    }

    // --- Queries ---

    #[must_use]
    pub fn view(&self) -> &ViewState {
        self.state.view()
    }

    #[must_use]
    pub fn error(&self) -> ErrorState {
        self.state.error()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn regions(&self) -> &Regions<S::Handle> {
        &self.regions
    }

    // --- Triggers ---

    /// Dispatch a host event to its handler.
    pub fn handle(&mut self, event: &FormEvent) -> Outcome {
        match event {
            FormEvent::InputChanged(value) => self.on_input_change(value),
            FormEvent::SubmitActivated => self.on_submit(),
            FormEvent::KeyPressed(key) => self.on_key_pressed(key),
            FormEvent::DismissActivated => self.on_dismiss(),
        }
    }

    /// The input now holds `value`. Clears any shown error.
    pub fn on_input_change(&mut self, value: &str) -> Outcome {
        if self.surface.value(&self.regions.email_input) != value {
            self.surface.set_value(&self.regions.email_input, value);
        }
        let cleared = self.state.clear_error();
        self.render_error();
        if cleared {
            log::debug!("validation error cleared");
            Outcome::ErrorCleared
        } else {
            Outcome::Ignored
        }
    }

    /// The submit control was activated.
    pub fn on_submit(&mut self) -> Outcome {
        self.attempt_submit()
    }

    /// A key went down in the input. Only Enter submits.
    pub fn on_key_pressed(&mut self, key: &Key) -> Outcome {
        if key.is_enter() { self.attempt_submit() } else { Outcome::Ignored }
    }

    /// The dismiss control was activated.
    pub fn on_dismiss(&mut self) -> Outcome {
        let changed = self.state.dismiss();
        self.render_view();
        self.render_error();
        if changed {
            log::debug!("view: success -> form");
            Outcome::Dismissed
        } else {
            Outcome::Ignored
        }
    }

    fn attempt_submit(&mut self) -> Outcome {
        if !self.state.view().is_form_visible() {
            return Outcome::Ignored;
        }
        let value = self.surface.value(&self.regions.email_input);
        if let Err(err) = email::validate(&value) {
            self.state.reject(err);
            self.render_error();
            return Outcome::Rejected(err);
        }

        self.state.accept(value.clone());
        self.surface.set_value(&self.regions.email_input, "");
        self.render_error();
        self.render_view();
        log::info!("signup accepted");
        log::debug!("view: form -> success");
        Outcome::Accepted(value)
    }

    // --- Rendering ---

    /// Show exactly one of the form and success panels.
    fn render_view(&mut self) {
        let form_visible = self.state.view().is_form_visible();
        self.surface.set_visible(&self.regions.form_panel, form_visible);
        if let Some(header) = &self.regions.header {
            self.surface.set_visible(header, form_visible);
        }
        self.surface.set_visible(&self.regions.success_panel, !form_visible);

        if let ViewState::SuccessVisible { email: submitted } = self.state.view() {
            self.surface.set_text(&self.regions.submitted_email, submitted);
        }
    }

    fn render_error(&mut self) {
        let input = &self.regions.email_input;
        let error = &self.regions.error_message;
        match self.state.error() {
            ErrorState::NoError => {
                self.surface.set_text(error, "");
                self.surface.set_visible(error, false);
                self.surface.set_style(input, StyleProp::BorderColor, None);
                self.surface.set_style(input, StyleProp::BackgroundColor, None);
            }
            ErrorState::ErrorShown(err) => {
                let decoration = self.config.error_decoration;
                self.surface.set_text(error, &err.to_string());
                self.surface.set_visible(error, true);
                self.surface.set_style(input, StyleProp::BorderColor, Some(decoration.border_color));
                self.surface.set_style(input, StyleProp::BackgroundColor, Some(decoration.background_color));
            }
        }
    }
}
