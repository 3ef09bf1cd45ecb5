use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::leads;
use crate::api::models::ContactRequest;
use crate::validation::{check_contact, lead_outcome, optional_field};

pub const PROJECT_TYPES: &[(&str, &str)] = &[
    ("residential", "Residential Design"),
    ("commercial", "Commercial Project"),
    ("urban", "Urban Planning"),
    ("consulting", "Sustainability Consulting"),
    ("miniature", "Miniature Models"),
    ("research", "Research Partnership"),
    ("other", "Other"),
];

const SUCCESS_MESSAGE: &str = "Thank you! We'll get back to you soon.";

#[derive(Clone, Default, PartialEq)]
struct ContactFields {
    name: String,
    email: String,
    phone: String,
    company: String,
    project_type: String,
    message: String,
}

impl ContactFields {
    fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional_field(&self.phone),
            company: optional_field(&self.company),
            project_type: optional_field(&self.project_type),
            message: self.message.trim().to_string(),
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let fields = use_state(ContactFields::default);
    let submitting = use_state(|| false);
    let success = use_state(|| false);
    let error = use_state(|| None::<String>);

    let update = |apply: fn(&mut ContactFields, String)| {
        let fields = fields.clone();
        move |value: String| {
            let mut next = (*fields).clone();
            apply(&mut next, value);
            fields.set(next);
        }
    };

    let on_name = {
        let set = update(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let set = update(|f, v| f.email = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_phone = {
        let set = update(|f, v| f.phone = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_company = {
        let set = update(|f, v| f.company = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_project_type = {
        let set = update(|f, v| f.project_type = v);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let set = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let onsubmit = {
        let fields = fields.clone();
        let submitting = submitting.clone();
        let success = success.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            success.set(false);
            error.set(None);

            let request = fields.to_request();
            if let Err(message) = check_contact(&request) {
                error.set(Some(message.to_string()));
                return;
            }

            submitting.set(true);
            let fields = fields.clone();
            let submitting = submitting.clone();
            let success = success.clone();
            let error = error.clone();
            spawn_local(async move {
                match lead_outcome(leads::submit_contact(request).await) {
                    Ok(()) => {
                        log::info!("Contact inquiry sent");
                        fields.set(ContactFields::default());
                        success.set(true);
                    }
                    Err(message) => error.set(Some(message)),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <form class="contact-form" {onsubmit} novalidate={true}>
            if *success {
                <div class="form-success">{ SUCCESS_MESSAGE }</div>
            }
            if let Some(message) = (*error).clone() {
                <div class="form-error">{ message }</div>
            }
            <div class="form-row">
                <label>
                    {"Full Name *"}
                    <input type="text" placeholder="Your Name" value={fields.name.clone()} oninput={on_name} />
                </label>
                <label>
                    {"Email *"}
                    <input type="email" placeholder="you@example.com" value={fields.email.clone()} oninput={on_email} />
                </label>
            </div>
            <div class="form-row">
                <label>
                    {"Phone"}
                    <input type="tel" placeholder="+91 9887 654 234" value={fields.phone.clone()} oninput={on_phone} />
                </label>
                <label>
                    {"Company"}
                    <input type="text" placeholder="Your Company" value={fields.company.clone()} oninput={on_company} />
                </label>
            </div>
            <label>
                {"Project Type"}
                <select onchange={on_project_type}>
                    <option value="" selected={fields.project_type.is_empty()}>{"Select project type"}</option>
                    { for PROJECT_TYPES.iter().map(|(value, label)| html! {
                        <option value={*value} selected={fields.project_type == *value}>{ *label }</option>
                    }) }
                </select>
            </label>
            <label>
                {"Message *"}
                <textarea
                    rows="6"
                    placeholder="Tell us about your project..."
                    value={fields.message.clone()}
                    oninput={on_message}
                />
            </label>
            <button type="submit" class="form-submit" disabled={*submitting}>
                { if *submitting { "Sending..." } else { "Send Message" } }
            </button>
            <style>
                {r#"
                .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
                .contact-form .form-row { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
                .contact-form label { display: flex; flex-direction: column; gap: 0.5rem; font-size: 0.9rem; font-weight: 500; }
                .contact-form input, .contact-form select, .contact-form textarea { padding: 0.75rem 1rem; border: 1px solid #e2e8f0; border-radius: 0.5rem; font: inherit; }
                .contact-form textarea { resize: none; }
                .form-success { padding: 1rem; border: 1px solid #bbf7d0; background: #f0fdf4; color: #166534; border-radius: 0.5rem; }
                .form-error { padding: 1rem; border: 1px solid #fecaca; background: #fef2f2; color: #991b1b; border-radius: 0.5rem; }
                .form-submit { padding: 0.9rem; border: none; border-radius: 0.5rem; background: #64B847; color: #fff; font-weight: 600; cursor: pointer; }
                .form-submit:disabled { opacity: 0.6; cursor: wait; }
                "#}
            </style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_trims_and_drops_blank_optionals() {
        let fields = ContactFields {
            name: "  Ada Lovelace ".into(),
            email: " ada@example.com".into(),
            phone: "   ".into(),
            company: " Analytical ".into(),
            project_type: String::new(),
            message: " A library for the city. ".into(),
        };
        let request = fields.to_request();
        assert_eq!(request.name, "Ada Lovelace");
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.phone, None);
        assert_eq!(request.company.as_deref(), Some("Analytical"));
        assert_eq!(request.project_type, None);
        assert_eq!(request.message, "A library for the city.");
    }

    #[test]
    fn project_types_are_unique() {
        let mut values: Vec<_> = PROJECT_TYPES.iter().map(|(v, _)| *v).collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), PROJECT_TYPES.len());
    }
}
