//! Visual surface abstraction and the bound region handles.
//!
//! ARCHITECTURE
//! ============
//! The controller only talks to a `Surface`: look a region up by identifier,
//! read and write its text, value, style and markers. `dom::DomSurface`
//! implements it over `web_sys`; tests use an in-memory fake.
//!
//! Region handles are resolved once into a `Regions` record. Nothing is looked
//! up again after binding.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::config::RegionIds;
use crate::consts::HIDDEN_MARKER;

/// Style properties the controller touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProp {
    BorderColor,
    BackgroundColor,
}

impl StyleProp {
    /// CSS property name.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::BorderColor => "border-color",
            Self::BackgroundColor => "background-color",
        }
    }
}

/// Fatal setup failures. The widget cannot run without its regions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("missing region: #{id}")]
    MissingRegion { id: String },
    #[error("no document available")]
    NoDocument,
    #[error("failed to subscribe to {event}: {reason}")]
    Listener { event: &'static str, reason: String },
}

/// A generic visual surface. Handles are cheap references to regions.
pub trait Surface {
    type Handle: Clone;

    /// Find a region by identifier.
    fn lookup(&self, id: &str) -> Option<Self::Handle>;

    fn text(&self, region: &Self::Handle) -> String;
    fn set_text(&mut self, region: &Self::Handle, text: &str);

    /// Input value. Regions that are not inputs report an empty string.
    fn value(&self, region: &Self::Handle) -> String;
    fn set_value(&mut self, region: &Self::Handle, value: &str);

    /// Inline style value, `None` when unset.
    fn style(&self, region: &Self::Handle, prop: StyleProp) -> Option<String>;
    /// Set an inline style, or remove it with `None`.
    fn set_style(&mut self, region: &Self::Handle, prop: StyleProp, value: Option<&str>);

    fn has_marker(&self, region: &Self::Handle, marker: &str) -> bool;
    fn add_marker(&mut self, region: &Self::Handle, marker: &str);
    fn remove_marker(&mut self, region: &Self::Handle, marker: &str);

    fn is_visible(&self, region: &Self::Handle) -> bool {
        !self.has_marker(region, HIDDEN_MARKER)
    }

    fn set_visible(&mut self, region: &Self::Handle, visible: bool) {
        if visible {
            self.remove_marker(region, HIDDEN_MARKER);
        } else {
            self.add_marker(region, HIDDEN_MARKER);
        }
    }
}

/// Handles to every region the controller mutates.
#[derive(Debug, Clone)]
pub struct Regions<H> {
    pub email_input: H,
    pub submit_button: H,
    pub error_message: H,
    pub form_panel: H,
    pub header: Option<H>,
    pub success_panel: H,
    pub submitted_email: H,
    pub dismiss_button: H,
}

impl<H: Clone> Regions<H> {
    /// Resolve every identifier through `surface`.
    ///
    /// # Errors
    ///
    /// [`BindError::MissingRegion`] for the first required region that is not
    /// found. The header is optional.
    pub fn bind<S>(surface: &S, ids: &RegionIds) -> Result<Self, BindError>
    where
        S: Surface<Handle = H>,
    {
        let find = |id: &str| surface.lookup(id).ok_or_else(|| BindError::MissingRegion { id: id.to_owned() });
        Ok(Self {
            email_input: find(ids.email_input)?,
            submit_button: find(ids.submit_button)?,
            error_message: find(ids.error_message)?,
            form_panel: find(ids.form_panel)?,
            header: surface.lookup(ids.header),
            success_panel: find(ids.success_panel)?,
            submitted_email: find(ids.submitted_email)?,
            dismiss_button: find(ids.dismiss_button)?,
        })
    }

    /// Number of bound regions, header included when present.
    #[must_use]
    pub fn count(&self) -> usize {
        7 + usize::from(self.header.is_some())
    }
}
