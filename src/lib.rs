//! # signup-form
//!
//! Email signup widget compiled to WebAssembly. It validates the shape of an
//! address and switches between a form panel and a success panel. Nothing is
//! sent anywhere.
//!
//! The controller only depends on the [`surface::Surface`] trait, so all of
//! its behavior is tested natively. The `csr` feature adds the browser host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Event handlers, state transitions and rendering |
//! | [`state`] | View state, error state and validation errors |
//! | [`email`] | Email shape check |
//! | [`input`] | Trigger types delivered by the host |
//! | [`surface`] | Visual surface trait and bound region handles |
//! | [`config`] | Region identifiers and error decoration |
//! | [`consts`] | Default identifiers, colors and marker names |
//! | [`page`] | Leptos markup for the widget |
//! | `dom` | `Surface` over `web_sys` and event wiring (`csr` only) |

pub mod config;
pub mod consts;
pub mod controller;
#[cfg(feature = "csr")]
pub mod dom;
pub mod email;
pub mod input;
pub mod page;
pub mod state;
pub mod surface;

#[cfg(test)]
mod testing;

/// WASM entry point: mount the page and attach the controller.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::page::SignupPage;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }

    let config = config::FormConfig::default();
    leptos::mount::mount_to_body(move || view! { <SignupPage config=config/> });

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("signup form not started: {}", surface::BindError::NoDocument);
        return;
    };
    if let Err(err) = dom::attach(&document, config) {
        log::error!("signup form not started: {err}");
    }
}
