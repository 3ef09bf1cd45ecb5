use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::newsletter_signup::NewsletterSignup;
use crate::Route;

const QUICK_LINKS: &[(&str, Route)] = &[
    ("About Us", Route::About),
    ("Our Work", Route::Work),
    ("Philosophy", Route::Philosophy),
    ("Innovation", Route::Innovation),
    ("Blog", Route::Blog),
    ("Contact", Route::Contact),
];

const SERVICES: &[&str] = &[
    "Residential Design",
    "Commercial Projects",
    "Urban Planning",
    "Sustainability Consulting",
    "Miniature Models",
    "Research & Development",
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-newsletter">
                    <NewsletterSignup />
                </div>
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <span class="footer-mark">{"A"}</span>
                            <span class="footer-name">{"ArchiDius"}</span>
                        </div>
                        <p class="footer-muted">
                            {"Pioneering self-sufficient, sustainable architecture for a better tomorrow."}
                        </p>
                    </div>
                    <div>
                        <h3>{"Quick Links"}</h3>
                        <ul>
                            { for QUICK_LINKS.iter().map(|(label, route)| html! {
                                <li><Link<Route> to={route.clone()} classes="footer-link">{ *label }</Link<Route>></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h3>{"Services"}</h3>
                        <ul>
                            { for SERVICES.iter().map(|label| html! {
                                <li><Link<Route> to={Route::Services} classes="footer-link">{ *label }</Link<Route>></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h3>{"Contact Us"}</h3>
                        <ul>
                            <li class="footer-muted">{"Archidius"}<br />{"Hyderabad, 500065"}</li>
                            <li><a class="footer-link" href="tel:+919887978876">{"+91 9887 978 876"}</a></li>
                            <li><a class="footer-link" href="mailto:hello@archidius.com">{"hello@archidius.com"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{ format!("© {} ArchiDius. All rights reserved.", year) }</p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer { background: #0f172a; color: #fff; padding: 4rem 1.5rem 2rem; }
                .footer-inner { max-width: 80rem; margin: 0 auto; }
                .footer-newsletter { margin-bottom: 4rem; }
                .footer-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 3rem; margin-bottom: 3rem; }
                .footer-grid h3 { font-size: 1.1rem; font-weight: 700; margin-bottom: 1rem; }
                .footer-grid ul { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; }
                .footer-brand { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1rem; }
                .footer-mark { display: grid; place-items: center; width: 2.5rem; height: 2.5rem; border-radius: 0.5rem; background: #64B847; font-weight: 700; font-size: 1.25rem; }
                .footer-name { font-size: 1.5rem; font-weight: 700; }
                .footer-muted, .footer-link, .footer-bottom p { color: #94a3b8; line-height: 1.6; }
                .footer-link { text-decoration: none; transition: color 0.2s; }
                .footer-link:hover { color: #64B847; }
                .footer-bottom { padding-top: 2rem; border-top: 1px solid rgba(255,255,255,0.1); font-size: 0.875rem; }
                "#}
            </style>
        </footer>
    }
}
