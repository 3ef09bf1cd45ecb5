use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::leads;
use crate::validation::{check_email, lead_outcome};

#[function_component(NewsletterSignup)]
pub fn newsletter_signup() -> Html {
    let email = use_state(String::new);
    let submitting = use_state(|| false);
    let success = use_state(|| false);
    let error = use_state(|| None::<String>);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let submitting = submitting.clone();
        let success = success.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            error.set(None);

            let address = match check_email(&email) {
                Ok(address) => address,
                Err(message) => {
                    error.set(Some(message.to_string()));
                    return;
                }
            };

            submitting.set(true);
            let email = email.clone();
            let submitting = submitting.clone();
            let success = success.clone();
            let error = error.clone();
            spawn_local(async move {
                match lead_outcome(leads::subscribe_newsletter(address).await) {
                    Ok(()) => {
                        email.set(String::new());
                        success.set(true);
                    }
                    Err(message) => error.set(Some(message)),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="newsletter">
            <div class="newsletter-head">
                <div class="newsletter-icon">{"✉"}</div>
                <div>
                    <h3>{"Stay Updated"}</h3>
                    <p>{"Get the latest insights on sustainable architecture"}</p>
                </div>
            </div>
            if *success {
                <div class="newsletter-success">{"Successfully subscribed!"}</div>
            } else {
                <form class="newsletter-form" {onsubmit} novalidate={true}>
                    if let Some(message) = (*error).clone() {
                        <div class="newsletter-error">{ message }</div>
                    }
                    <div class="newsletter-row">
                        <input
                            type="email"
                            placeholder="Enter your email"
                            value={(*email).clone()}
                            {oninput}
                        />
                        <button type="submit" disabled={*submitting}>
                            { if *submitting { "…" } else { "Subscribe" } }
                        </button>
                    </div>
                    <p class="newsletter-fine-print">
                        {"By subscribing, you agree to receive updates from ArchiDius. Unsubscribe anytime."}
                    </p>
                </form>
            }
            <style>
                {r#"
                .newsletter { padding: 2rem; border-radius: 1rem; background: linear-gradient(135deg, #0f172a, #1e293b); color: #fff; }
                .newsletter-head { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
                .newsletter-head h3 { font-size: 1.5rem; font-weight: 700; }
                .newsletter-head p { font-size: 0.875rem; color: #cbd5e1; }
                .newsletter-icon { display: grid; place-items: center; width: 3rem; height: 3rem; border-radius: 0.75rem; background: rgba(100,184,71,0.2); color: #64B847; font-size: 1.4rem; }
                .newsletter-form { display: flex; flex-direction: column; gap: 1rem; }
                .newsletter-row { display: flex; gap: 0.5rem; }
                .newsletter-row input { flex: 1; padding: 0.7rem 1rem; border-radius: 0.5rem; border: 1px solid rgba(255,255,255,0.2); background: rgba(255,255,255,0.1); color: #fff; }
                .newsletter-row button { padding: 0.7rem 1.25rem; border: none; border-radius: 0.5rem; background: #64B847; color: #fff; font-weight: 600; cursor: pointer; }
                .newsletter-error { padding: 0.75rem; border-radius: 0.5rem; border: 1px solid rgba(239,68,68,0.3); background: rgba(239,68,68,0.2); font-size: 0.875rem; }
                .newsletter-success { padding: 1rem; border-radius: 0.5rem; border: 1px solid rgba(34,197,94,0.3); background: rgba(34,197,94,0.2); font-size: 0.875rem; font-weight: 500; }
                .newsletter-fine-print { font-size: 0.75rem; color: #94a3b8; }
                "#}
            </style>
        </div>
    }
}
