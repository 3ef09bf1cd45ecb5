use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundViewProps {
    #[prop_or(AttrValue::Static("page"))]
    pub what: AttrValue,
    #[prop_or(Route::Home)]
    pub back: Route,
}

/// Shown for unknown routes and for detail pages whose slug does not exist.
#[function_component(NotFoundView)]
pub fn not_found_view(props: &NotFoundViewProps) -> Html {
    html! {
        <div class="not-found">
            <span class="not-found-code">{"404"}</span>
            <h1>{ format!("This {} could not be found", props.what) }</h1>
            <p>{"It may have moved, or the link may be mistyped."}</p>
            <Link<Route> to={props.back.clone()} classes="not-found-back">{"Go back"}</Link<Route>>
            <style>
                {r#"
                .not-found { min-height: 70vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; padding: 8rem 1.5rem 4rem; text-align: center; }
                .not-found-code { font-size: 5rem; font-weight: 700; background: linear-gradient(90deg, #9B47B8, #64B847); -webkit-background-clip: text; -webkit-text-fill-color: transparent; }
                .not-found h1 { font-size: 2rem; font-weight: 700; }
                .not-found p { color: #64748b; }
                .not-found-back { margin-top: 1rem; padding: 0.75rem 1.75rem; border-radius: 9999px; background: #64B847; color: #fff; text-decoration: none; }
                "#}
            </style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! { <NotFoundView /> }
}
