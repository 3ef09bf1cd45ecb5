use yew::prelude::*;

struct TeamMember {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Dr. Sarah Chen",
        role: "Founder & Lead Architect",
        bio: "Visionary architect with 20+ years pioneering sustainable design solutions.",
    },
    TeamMember {
        name: "Marcus Rodriguez",
        role: "Director of Innovation",
        bio: "Leading research in self-sufficient building systems and renewable energy integration.",
    },
    TeamMember {
        name: "Elena Volkov",
        role: "Senior Designer",
        bio: "Award-winning designer specializing in adaptive architecture and miniature modeling.",
    },
    TeamMember {
        name: "James Okonkwo",
        role: "Sustainability Consultant",
        bio: "Expert in environmental systems and carbon-neutral construction methodologies.",
    },
];

const VALUES: &[(&str, &str)] = &[
    ("Mission-Driven", "Every project advances our mission to create a sustainable, self-sufficient future for all."),
    ("Globally Minded", "We design for diverse cultures, climates, and communities across the world."),
    ("Excellence First", "Uncompromising quality and innovation in every detail of our work."),
    ("Collaborative", "We partner closely with clients, communities, and experts to achieve shared visions."),
];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|w| !w.ends_with('.'))
        .filter_map(|w| w.chars().next())
        .collect()
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="content-page">
            <section class="page-hero">
                <h1>{"About ArchiDius"}</h1>
                <p>{"We're not just architects. We're pioneers of a sustainable future, crafting spaces that empower people and regenerate the planet."}</p>
            </section>
            <section class="page-section">
                <div class="split">
                    <div>
                        <h2>{"Our Story"}</h2>
                        <p class="lead">{"Founded in 2015, ArchiDius emerged from a simple yet powerful question: What if buildings could give back more than they take?"}</p>
                        <p class="lead">{"Our founder, Dr. Sarah Chen, assembled a team of visionary architects, engineers, and sustainability experts united by a shared belief that architecture should be a force for positive change."}</p>
                        <p class="lead">{"Today, we've completed over 50 projects across 12 countries, each one pushing the boundaries of what's possible in self-sufficient, sustainable design. From compact urban residences to sprawling commercial complexes, our work proves that environmental responsibility and architectural excellence are inseparable."}</p>
                    </div>
                    <img class="split-image" src="/placeholder.svg" alt="ArchiDius Studio" />
                </div>
            </section>
            <section class="page-section muted">
                <div class="section-head">
                    <h2>{"Our Values"}</h2>
                    <p>{"The principles that guide every decision we make"}</p>
                </div>
                <div class="tile-grid">
                    { for VALUES.iter().map(|(title, description)| html! {
                        <div class="tile">
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    }) }
                </div>
            </section>
            <section class="page-section">
                <div class="section-head">
                    <h2>{"Meet Our Team"}</h2>
                    <p>{"The brilliant minds behind ArchiDius"}</p>
                </div>
                <div class="tile-grid">
                    { for TEAM.iter().map(|member| html! {
                        <div class="team-member">
                            <div class="team-portrait">{ initials(member.name) }</div>
                            <h3>{ member.name }</h3>
                            <p class="team-role">{ member.role }</p>
                            <p>{ member.bio }</p>
                        </div>
                    }) }
                </div>
            </section>
            <style>
                {r#"
                .split { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 4rem; align-items: center; }
                .split-image { width: 100%; border-radius: 1rem; box-shadow: 0 25px 50px -12px rgba(0,0,0,0.25); }
                .team-member { text-align: center; }
                .team-portrait { display: grid; place-items: center; aspect-ratio: 1; border-radius: 1rem; margin-bottom: 1.5rem; background: linear-gradient(135deg, #9B47B8, #64B847); color: #fff; font-size: 3rem; font-weight: 700; }
                .team-role { color: #64B847; font-weight: 500; margin: 0.25rem 0 0.75rem; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_skip_titles() {
        assert_eq!(initials("Dr. Sarah Chen"), "SC");
        assert_eq!(initials("Elena Volkov"), "EV");
    }
}
