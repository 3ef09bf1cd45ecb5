use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use yew_hooks::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod validation;
mod api {
    pub mod models;
    pub mod content;
    pub mod leads;
    pub mod hooks;
}
mod reveal {
    pub mod stage;
    pub mod storage;
    pub mod sequencer;
    pub mod typewriter;
    pub mod particles;
    pub mod site_reveal;
}
mod components {
    pub mod category_filter;
    pub mod contact_form;
    pub mod footer;
    pub mod innovation_sandbox;
    pub mod newsletter_signup;
    pub mod philosophy_triad;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod services;
    pub mod philosophy;
    pub mod innovation;
    pub mod work;
    pub mod project;
    pub mod blog;
    pub mod blog_post;
    pub mod contact;
    pub mod not_found;
}

use components::footer::Footer;
use pages::{
    about::About,
    blog::Blog,
    blog_post::BlogPost,
    contact::Contact,
    home::Home,
    innovation::Innovation,
    not_found::NotFound,
    philosophy::Philosophy,
    project::ProjectPage,
    services::Services,
    work::Work,
};
use reveal::site_reveal::SiteReveal;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/philosophy")]
    Philosophy,
    #[at("/innovation")]
    Innovation,
    #[at("/work")]
    Work,
    #[at("/work/:slug")]
    Project { slug: String },
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Philosophy => {
            info!("Rendering Philosophy page");
            html! { <Philosophy /> }
        },
        Route::Innovation => {
            info!("Rendering Innovation page");
            html! { <Innovation /> }
        },
        Route::Work => {
            info!("Rendering Work page");
            html! { <Work /> }
        },
        Route::Project { slug } => {
            info!("Rendering Project page for {}", slug);
            html! { <ProjectPage slug={slug} /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogPost { slug } => {
            info!("Rendering Blog post {}", slug);
            html! { <BlogPost slug={slug} /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

const NAV_LINKS: &[(Route, &str, &str)] = &[
    (Route::About, "About", "Vision, team, ethos"),
    (Route::Work, "Work", "Selected case studies"),
    (Route::Philosophy, "Philosophy", "Principles & process"),
    (Route::Innovation, "Innovation", "Systems & R&D"),
    (Route::Blog, "Blog", "Notes from the studio"),
    (Route::Contact, "Contact", "Start a conversation"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 50.0);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("Could not listen for scroll events");
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <>
            <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-wordmark">
                        <span class="nav-name">{"ArchiDius"}<span class="nav-caret"></span></span>
                        <span class="nav-tagline">{"The Valor of Space"}</span>
                    </Link<Route>>
                    <Link<Route> to={Route::Home} classes="nav-logo">{"A"}</Link<Route>>
                    <button
                        class="burger-menu"
                        aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={(*menu_open).to_string()}
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>
            <div class={classes!("menu-layer", (*menu_open).then(|| "open"))}>
                <div class="menu-dim" onclick={close_menu.clone()}></div>
                <div class="menu-panel" role="dialog" aria-modal="true">
                    <div class="menu-head">
                        <span>{"Menu"}</span>
                        <button class="menu-close" aria-label="Close menu" onclick={close_menu.clone()}>{"×"}</button>
                    </div>
                    <ul class="menu-links">
                        { for NAV_LINKS.iter().map(|(route, label, hint)| html! {
                            <li onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes="menu-link">
                                    <span class="menu-link-label">{ *label }<span class="menu-arrow">{"→"}</span></span>
                                    <span class="menu-link-hint">{ *hint }</span>
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                    <div class="menu-cta" onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="menu-cta-button">{"Get Started"}</Link<Route>>
                    </div>
                </div>
            </div>
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <SiteReveal video_poster={Some(AttrValue::Static("/images/reveal-poster.jpg"))}>
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </SiteReveal>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::warn!("Logger was already initialized");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
