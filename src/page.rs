//! Signup page markup.
//!
//! The view is static: it renders each region once with the configured
//! identifiers and leaves every later mutation to the form controller.

use leptos::prelude::*;

use crate::config::FormConfig;
use crate::consts::HIDDEN_MARKER;

#[component]
pub fn SignupPage(#[prop(optional)] config: FormConfig) -> impl IntoView {
    let ids = config.ids;
    let header_id = ids.header;
    let form_id = ids.form_panel;
    let input_id = ids.email_input;
    let error_id = ids.error_message;
    let submit_id = ids.submit_button;
    let success_id = ids.success_panel;
    let submitted_id = ids.submitted_email;
    let dismiss_id = ids.dismiss_button;
    let error_class = format!("signup-error {HIDDEN_MARKER}");
    let success_class = format!("signup-success {HIDDEN_MARKER}");

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h1 id=header_id class="signup-card__title">"Join the mailing list"</h1>
                <div id=form_id class="signup-form">
                    <input
                        id=input_id
                        class="signup-input"
                        type="text"
                        inputmode="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                    />
                    <p id=error_id class=error_class></p>
                    <button id=submit_id class="signup-button" type="button">
                        "Subscribe"
                    </button>
                </div>
                <div id=success_id class=success_class>
                    <p class="signup-success__title">"Thanks for signing up!"</p>
                    <p class="signup-success__detail">
                        "We'll be in touch at "
                        <span id=submitted_id class="signup-success__email"></span>
                    </p>
                    <button id=dismiss_id class="signup-button signup-button--secondary" type="button">
                        "Sign up another address"
                    </button>
                </div>
            </div>
        </div>
    }
}
