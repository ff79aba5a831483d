//! Browser host: `Surface` over the DOM and event wiring.
//!
//! Requires a browser environment (feature `csr`).
//!
//! TRADE-OFFS
//! ==========
//! Listener closures are leaked with `forget()`. The widget lives as long as
//! the page, so there is nothing to unsubscribe.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::config::FormConfig;
use crate::controller::FormController;
use crate::input::{EventKind, FormEvent, Key};
use crate::surface::{BindError, StyleProp, Surface};

/// `Surface` backed by a live document.
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Surface for DomSurface {
    type Handle = HtmlElement;

    fn lookup(&self, id: &str) -> Option<HtmlElement> {
        self.document.get_element_by_id(id)?.dyn_ref::<HtmlElement>().cloned()
    }

    fn text(&self, region: &HtmlElement) -> String {
        region.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, region: &HtmlElement, text: &str) {
        region.set_text_content(Some(text));
    }

    fn value(&self, region: &HtmlElement) -> String {
        region.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value).unwrap_or_default()
    }

    fn set_value(&mut self, region: &HtmlElement, value: &str) {
        if let Some(input) = region.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn style(&self, region: &HtmlElement, prop: StyleProp) -> Option<String> {
        match region.style().get_property_value(prop.css_name()) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    fn set_style(&mut self, region: &HtmlElement, prop: StyleProp, value: Option<&str>) {
        let style = region.style();
        let result = match value {
            Some(value) => style.set_property(prop.css_name(), value),
            None => style.remove_property(prop.css_name()).map(drop),
        };
        if let Err(err) = result {
            log::warn!("failed to update {} on #{}: {err:?}", prop.css_name(), region.id());
        }
    }

    fn has_marker(&self, region: &HtmlElement, marker: &str) -> bool {
        region.class_list().contains(marker)
    }

    fn add_marker(&mut self, region: &HtmlElement, marker: &str) {
        if let Err(err) = region.class_list().add_1(marker) {
            log::warn!("failed to add class {marker} on #{}: {err:?}", region.id());
        }
    }

    fn remove_marker(&mut self, region: &HtmlElement, marker: &str) {
        if let Err(err) = region.class_list().remove_1(marker) {
            log::warn!("failed to remove class {marker} on #{}: {err:?}", region.id());
        }
    }
}

type SharedController = Rc<RefCell<FormController<DomSurface>>>;

/// Bind a controller to the rendered markup and subscribe to its events.
///
/// # Errors
///
/// [`BindError::MissingRegion`] if the markup is incomplete, or
/// [`BindError::Listener`] if the browser rejects a subscription.
pub fn attach(document: &Document, config: FormConfig) -> Result<(), BindError> {
    let controller = FormController::bind(DomSurface::new(document.clone()), config)?;
    let regions = controller.regions().clone();
    let controller: SharedController = Rc::new(RefCell::new(controller));

    subscribe(&regions.email_input, EventKind::ContentChanged, &controller, |ev| {
        let value = ev.target()?.dyn_ref::<HtmlInputElement>()?.value();
        Some(FormEvent::InputChanged(value))
    })?;
    subscribe(&regions.email_input, EventKind::KeyPressed, &controller, |ev| {
        let key = ev.dyn_ref::<KeyboardEvent>()?.key();
        Some(FormEvent::KeyPressed(Key(key)))
    })?;
    subscribe(&regions.submit_button, EventKind::Activated, &controller, |_| Some(FormEvent::SubmitActivated))?;
    subscribe(&regions.dismiss_button, EventKind::Activated, &controller, |_| Some(FormEvent::DismissActivated))?;
    Ok(())
}

fn subscribe<F>(target: &HtmlElement, kind: EventKind, controller: &SharedController, to_event: F) -> Result<(), BindError>
where
    F: Fn(&Event) -> Option<FormEvent> + 'static,
{
    let controller = Rc::clone(controller);
    let cb = Closure::wrap(Box::new(move |ev: Event| {
        let Some(event) = to_event(&ev) else {
            return;
        };
        if event.suppresses_default() {
            ev.prevent_default();
        }
        // Handlers run to completion; a nested dispatch would mean the
        // browser re-entered us from inside a DOM mutation.
        let Ok(mut controller) = controller.try_borrow_mut() else {
            log::warn!("dropped re-entrant {} event", kind.dom_name());
            return;
        };
        controller.handle(&event);
    }) as Box<dyn FnMut(Event)>);

    target
        .add_event_listener_with_callback(kind.dom_name(), cb.as_ref().unchecked_ref())
        .map_err(|err| BindError::Listener { event: kind.dom_name(), reason: format!("{err:?}") })?;
    cb.forget();
    Ok(())
}
