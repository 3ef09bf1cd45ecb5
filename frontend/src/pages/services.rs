use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

struct Service {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const SERVICES: &[Service] = &[
    Service {
        title: "Residential Design",
        description: "Custom homes that blend luxury with sustainability. From compact urban dwellings to expansive estates, we create living spaces that generate their own energy and adapt to your lifestyle.",
        features: ["Net-positive energy homes", "Smart home integration", "Passive climate control", "Water recycling systems"],
    },
    Service {
        title: "Commercial Projects",
        description: "Office buildings, retail spaces, and mixed-use developments that reduce operating costs while enhancing occupant wellbeing and productivity.",
        features: ["LEED Platinum certification support", "Biophilic design elements", "Advanced HVAC optimization", "Flexible workspace planning"],
    },
    Service {
        title: "Urban Planning",
        description: "Master planning for sustainable communities that integrate residential, commercial, and green spaces into cohesive, self-sufficient ecosystems.",
        features: ["Mixed-use development planning", "Green infrastructure design", "Community energy systems", "Transit-oriented design"],
    },
    Service {
        title: "Sustainability Consulting",
        description: "Expert guidance on achieving your environmental goals, from energy audits to full building retrofits and certification support.",
        features: ["Energy efficiency audits", "Carbon footprint analysis", "Green building certification", "Retrofit planning"],
    },
    Service {
        title: "Miniature Models",
        description: "Precision architectural models that bring designs to life. Perfect for client presentations, exhibitions, and design refinement.",
        features: ["Scale models (1:50 to 1:200)", "3D-printed components", "Detailed interior modeling", "Exhibition-quality finish"],
    },
    Service {
        title: "Research & Development",
        description: "Collaborative research partnerships exploring cutting-edge sustainable technologies and building methodologies.",
        features: ["Material innovation", "Energy system optimization", "Climate adaptation strategies", "Smart building technologies"],
    },
];

const PROCESS: &[(&str, &str, &str)] = &[
    ("01", "Discovery", "We listen, learn, and understand your vision, needs, and constraints."),
    ("02", "Design", "Collaborative design development with sustainability at the core."),
    ("03", "Development", "Detailed documentation, engineering, and permit coordination."),
    ("04", "Delivery", "Construction oversight and post-occupancy support."),
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="content-page">
            <section class="page-hero">
                <h1>{"Our Services"}</h1>
                <p>{"Comprehensive architectural solutions that transform visions into sustainable, self-sufficient realities."}</p>
            </section>
            <section class="page-section muted">
                <div class="tile-grid wide">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="tile lift">
                            <h3>{ service.title }</h3>
                            <p>{ service.description }</p>
                            <ul class="checklist">
                                { for service.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </section>
            <section class="page-section">
                <div class="section-head">
                    <h2>{"Our Process"}</h2>
                    <p>{"A collaborative journey from concept to completion"}</p>
                </div>
                <div class="tile-grid">
                    { for PROCESS.iter().map(|(step, title, description)| html! {
                        <div class="process-step">
                            <div class="process-number">{ *step }</div>
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    }) }
                </div>
            </section>
            <section class="page-cta">
                <h2>{"Ready to Start Your Project?"}</h2>
                <p>{"Let's discuss how we can bring your vision to life with sustainable, innovative design."}</p>
                <Link<Route> to={Route::Contact} classes="cta-button">{"Get in Touch →"}</Link<Route>>
            </section>
            <style>
                {r#"
                .checklist { list-style: none; padding: 0; margin-top: 1.5rem; display: flex; flex-direction: column; gap: 0.5rem; }
                .checklist li::before { content: "✓"; color: #64B847; margin-right: 0.5rem; }
                .process-step { text-align: center; }
                .process-number { font-size: 3.75rem; font-weight: 700; color: rgba(100,184,71,0.25); margin-bottom: 1rem; }
                "#}
            </style>
        </div>
    }
}
