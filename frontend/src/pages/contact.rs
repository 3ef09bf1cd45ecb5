use yew::prelude::*;

use crate::components::contact_form::ContactForm;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="content-page">
            <section class="page-hero">
                <h1>{"Get in Touch"}</h1>
                <p>{"Ready to start your sustainable architecture project? Let's discuss how we can bring your vision to life."}</p>
            </section>
            <section class="page-section muted">
                <div class="contact-layout">
                    <div>
                        <h2>{"Contact Information"}</h2>
                        <dl class="contact-details">
                            <dt>{"Office Location"}</dt>
                            <dd>{"Archidius"}<br />{"Hyderabad, 500065"}</dd>
                            <dt>{"Phone"}</dt>
                            <dd><a href="tel:+919887657456">{"+91 9887 657 456"}</a></dd>
                            <dt>{"Email"}</dt>
                            <dd><a href="mailto:hello@archidius.com">{"hello@archidius.com"}</a></dd>
                            <dt>{"Business Hours"}</dt>
                            <dd>
                                {"Monday - Friday: 9:00 AM - 6:00 PM"}<br />
                                {"Saturday: 10:00 AM - 2:00 PM"}<br />
                                {"Sunday: Closed"}
                            </dd>
                        </dl>
                    </div>
                    <div class="contact-card">
                        <h2>{"Send Us a Message"}</h2>
                        <ContactForm />
                    </div>
                </div>
            </section>
            <style>
                {r#"
                .contact-layout { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 3rem; }
                .contact-layout h2 { font-size: 1.9rem; font-weight: 700; margin-bottom: 2rem; }
                .contact-details dt { font-weight: 600; margin-top: 1.5rem; }
                .contact-details dd { margin: 0.25rem 0 0; color: #64748b; line-height: 1.6; }
                .contact-details a { color: inherit; text-decoration: none; }
                .contact-details a:hover { color: #64B847; }
                .contact-card { background: #fff; padding: 2rem; border-radius: 1rem; box-shadow: 0 10px 30px -15px rgba(0,0,0,0.2); }
                "#}
            </style>
        </div>
    }
}
