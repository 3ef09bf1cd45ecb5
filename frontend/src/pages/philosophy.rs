use yew::prelude::*;

use crate::components::philosophy_triad::{PhilosophyTriad, Principle};

fn principle_copy(principle: Principle) -> (&'static str, [&'static str; 4]) {
    match principle {
        Principle::SelfSufficient => (
            "We design buildings as living ecosystems that generate their own energy, manage water sustainably, and create healthy environments for inhabitants.",
            [
                "Integrated renewable energy systems (solar, wind, geothermal)",
                "Advanced water recycling and rainwater harvesting",
                "Natural ventilation and passive climate control",
                "On-site food production capabilities where applicable",
            ],
        ),
        Principle::Excellence => (
            "Our designs transcend borders, adapting seamlessly to different cultures, climates, and contexts while maintaining uncompromising quality.",
            [
                "Modular, adaptable design systems",
                "Climate-responsive architecture",
                "Culturally sensitive spatial planning",
                "Accessible design for all abilities",
            ],
        ),
        Principle::FutureProof => (
            "We anticipate tomorrow's challenges today, creating structures that remain relevant, efficient, and beautiful for generations.",
            [
                "Flexible spaces that adapt to changing needs",
                "Durable, low-maintenance materials",
                "Smart building systems with upgrade pathways",
                "Circular economy principles in material selection",
            ],
        ),
    }
}

const APPROACH: &[(&str, &str)] = &[
    ("Holistic Integration", "Every system works in harmony: energy, water, materials, and human experience."),
    ("Human-Centered", "Technology serves people, not the other way around. Comfort and wellbeing come first."),
    ("Continuous Innovation", "We constantly research, test, and refine new approaches to sustainable design."),
];

#[function_component(Philosophy)]
pub fn philosophy() -> Html {
    html! {
        <div class="content-page">
            <section class="page-hero">
                <h1>{"Our Philosophy"}</h1>
                <p>{"Architecture that doesn't just exist in the future. It creates it. Our three core principles guide every project we undertake."}</p>
            </section>
            <section class="page-section">
                { for Principle::ALL.iter().enumerate().map(|(i, p)| {
                    let (description, details) = principle_copy(*p);
                    html! {
                        <div class={classes!("split", "principle", (i % 2 == 1).then_some("reversed"))}>
                            <div>
                                <h2>{ p.title() }</h2>
                                <p class="lead">{ description }</p>
                                <ul class="checklist">
                                    { for details.iter().map(|d| html! { <li>{ *d }</li> }) }
                                </ul>
                            </div>
                            <img class="split-image" src="/placeholder.svg" alt={p.title()} />
                        </div>
                    }
                }) }
            </section>
            <PhilosophyTriad />
            <section class="page-section muted">
                <div class="section-head">
                    <h2>{"Our Approach"}</h2>
                    <p>{"How we bring our philosophy to life in every project"}</p>
                </div>
                <div class="tile-grid">
                    { for APPROACH.iter().map(|(title, description)| html! {
                        <div class="tile">
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    }) }
                </div>
            </section>
            <section class="page-cta">
                <blockquote>
                    <p class="quote">{"\"We don't design buildings. We design futures: sustainable, self-sufficient, and universally accessible futures that empower every person who inhabits them.\""}</p>
                    <cite>{"Dr. Sarah Chen, Founder & Lead Architect"}</cite>
                </blockquote>
            </section>
            <style>
                {r#"
                .split { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 3rem; align-items: center; }
                .principle + .principle { margin-top: 6rem; }
                .principle.reversed > img { order: -1; }
                .split-image { width: 100%; border-radius: 1rem; box-shadow: 0 25px 50px -12px rgba(0,0,0,0.25); }
                .checklist { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; }
                .checklist li::before { content: "✓"; color: #64B847; margin-right: 0.5rem; }
                .quote { max-width: 56rem; margin: 0 auto 2rem; font-size: 2.25rem; font-weight: 700; line-height: 1.25; }
                blockquote cite { font-style: normal; color: #cbd5e1; }
                "#}
            </style>
        </div>
    }
}
