use yew::prelude::*;
use yew_router::components::Link;

use crate::components::innovation_sandbox::InnovationSandbox;
use crate::Route;

#[function_component(Innovation)]
pub fn innovation() -> Html {
    html! {
        <div class="content-page">
            <section class="page-hero">
                <h1>{"Innovation"}</h1>
                <p>{"Systems and research that let our buildings run on sun, rain and air. Move the sliders to see how each loop responds."}</p>
            </section>
            <InnovationSandbox />
            <section class="page-cta">
                <h2>{"Partner With Our Research Lab"}</h2>
                <p>{"We collaborate with universities, manufacturers and cities on new building systems."}</p>
                <Link<Route> to={Route::Contact} classes="cta-button">{"Start a Conversation →"}</Link<Route>>
            </section>
        </div>
    }
}
