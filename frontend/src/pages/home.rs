use yew::prelude::*;
use yew_router::components::Link;

use crate::api::content::fetch_featured_projects;
use crate::api::hooks::{use_fetch, Load};
use crate::api::models::Project;
use crate::components::innovation_sandbox::InnovationSandbox;
use crate::components::philosophy_triad::PhilosophyTriad;
use crate::Route;

/// Placement of one card in the featured carousel relative to the active card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub offset_px: i32,
    pub scale: f64,
    pub opacity: f64,
    pub rotate_deg: i32,
    pub z_index: i32,
}

pub fn card_pose(index: usize, active: usize) -> CardPose {
    let delta = index as i32 - active as i32;
    let is_active = delta == 0;
    CardPose {
        offset_px: delta * 400,
        scale: if is_active { 1.0 } else { 0.8 },
        opacity: if is_active { 1.0 } else { 0.3 },
        rotate_deg: delta * 25,
        z_index: if is_active { 10 } else { 5 - delta.abs() },
    }
}

/// Headline figures under the carousel, `N/A` when a project has not reported one.
pub fn headline_metrics(project: &Project) -> [(&'static str, String); 3] {
    let m = &project.sustainability_metrics;
    let or_na = |v: Option<String>| v.unwrap_or_else(|| "N/A".to_string());
    [
        ("Energy kWh", or_na(m.get("energy_generated_kwh").map(|v| format!("{:.0}k", v / 1000.0)))),
        ("Water", or_na(m.get("water_recycled_percent").map(|v| format!("{:.0}%", v)))),
        ("Carbon Tons", or_na(m.get("carbon_offset_tons").map(|v| format!("-{:.0}", v)))),
    ]
}

#[function_component(Hero)]
fn hero() -> Html {
    let visible = use_state(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                visible.set(true);
                || ()
            },
            (),
        );
    }

    html! {
        <section class="hero">
            <div class="hero-checks"></div>
            <div class="hero-frame">
                <img src="/images/arc1.png" alt="ArchiDius self-sufficient architectural project" />
                <div class="hero-shade"></div>
                <div class={classes!("hero-text", (*visible).then_some("visible"))}>
                    <h1>{"Crafting Tomorrow's"}<br />{"World Today"}</h1>
                    <span class="hero-underline"></span>
                    <p>{"We design self-sufficient, sustainable spaces that don't just exist in the future. They create it."}</p>
                </div>
                <a class="hero-cta" href="#featured-projects">{"Explore our work"}</a>
            </div>
        </section>
    }
}

#[function_component(FeaturedProjects)]
fn featured_projects() -> Html {
    let projects = use_fetch((), |_| fetch_featured_projects());
    let active = use_state(|| 0usize);

    let projects = match &*projects {
        Load::Ready(list) if !list.is_empty() => list.clone(),
        _ => return html! {},
    };
    let current = (*active).min(projects.len() - 1);

    html! {
        <section id="featured-projects" class="featured">
            <div class="featured-head">
                <h2>{"Featured Projects"}</h2>
                <p>{"Transforming visions into reality, one sustainable structure at a time"}</p>
            </div>
            <div class="featured-stage">
                { for projects.iter().enumerate().map(|(i, project)| {
                    let pose = card_pose(i, current);
                    let onmouseenter = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(i))
                    };
                    html! {
                        <div
                            key={project.id}
                            class="featured-card"
                            style={format!(
                                "transform: translateX({}px) scale({}) rotateY({}deg); opacity: {}; z-index: {};",
                                pose.offset_px, pose.scale, pose.rotate_deg, pose.opacity, pose.z_index
                            )}
                            {onmouseenter}
                        >
                            <Link<Route> to={Route::Project { slug: project.slug.clone() }}>
                                <img src={project.hero_image.clone().unwrap_or_else(|| "/placeholder.svg".into())} alt={project.title.clone()} />
                                <div class="featured-card-text">
                                    <span class="featured-card-category">{ &project.category }</span>
                                    <h3>{ &project.title }</h3>
                                    <p>{ &project.description }</p>
                                    <div class="featured-card-meta">
                                        <span>{ &project.location }</span>
                                        <span>{ project.year }</span>
                                    </div>
                                </div>
                            </Link<Route>>
                        </div>
                    }
                }) }
            </div>
            <div class="featured-metrics">
                { for headline_metrics(&projects[current]).into_iter().map(|(label, value)| html! {
                    <div class="featured-metric">
                        <div class="featured-metric-value">{ value }</div>
                        <div class="featured-metric-label">{ label }</div>
                    </div>
                }) }
            </div>
            <div class="featured-dots">
                { for (0..projects.len()).map(|i| {
                    let onclick = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(i))
                    };
                    html! {
                        <button
                            class={classes!("featured-dot", (i == current).then_some("active"))}
                            aria-label={format!("View project {}", i + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
            <div class="featured-all">
                <Link<Route> to={Route::Work} classes="cta-button">{"Explore All Projects →"}</Link<Route>>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <Hero />
            <PhilosophyTriad />
            <FeaturedProjects />
            <InnovationSandbox />
            <style>
                {r#"
                .hero { position: relative; min-height: 100vh; display: flex; align-items: center; justify-content: center; overflow: hidden; background: linear-gradient(135deg, #f5f1e8, #faf8f5, #f4e4e0); }
                .hero-checks { position: absolute; inset: 0; opacity: 0.1; background-image: conic-gradient(#000 25%, #fff 0 50%, #000 0 75%, #fff 0); background-size: 80px 80px; }
                .hero-frame { position: relative; width: min(64rem, 90vw); aspect-ratio: 16 / 9; border-radius: 1.5rem; overflow: hidden; border: 8px solid rgba(255,255,255,0.5); box-shadow: 0 20px 25px -5px rgba(0,0,0,0.1); }
                .hero-frame img { width: 100%; height: 100%; object-fit: cover; }
                .hero-shade { position: absolute; inset: 0; pointer-events: none; background: linear-gradient(to top, rgba(0,0,0,0.55), transparent), linear-gradient(to left, rgba(0,0,0,0.35), transparent); }
                .hero-text { position: absolute; top: 2rem; right: 2rem; max-width: 52%; text-align: right; opacity: 0; transform: translateY(0.5rem); transition: all 0.7s; }
                .hero-text.visible { opacity: 1; transform: none; }
                .hero-text h1 { font-size: 3.5rem; line-height: 1.05; font-weight: 600; color: #000; }
                .hero-underline { display: inline-block; margin-top: 0.5rem; width: 9rem; height: 3px; border-radius: 9999px; background: linear-gradient(90deg, #9B47B8, #64B847); }
                .hero-text p { margin-top: 1rem; color: rgba(23,23,23,0.85); line-height: 1.6; }
                .hero-cta { position: absolute; right: 2rem; bottom: 2rem; padding: 0.75rem 1.25rem; border-radius: 9999px; border: 1px solid rgba(0,0,0,0.2); background: rgba(255,255,255,0.85); color: #111; text-decoration: none; }
                .hero-cta:hover { background: #111; color: #fff; }
                .featured { position: relative; padding: 8rem 1.5rem; background: #0a0a0a; color: #fff; overflow: hidden; }
                .featured-head { text-align: center; margin-bottom: 5rem; }
                .featured-head h2 { font-size: 4rem; font-weight: 700; margin-bottom: 1.5rem; }
                .featured-head p { font-size: 1.25rem; color: #a3a3a3; }
                .featured-stage { position: relative; height: 600px; margin-bottom: 3rem; display: flex; align-items: center; justify-content: center; perspective: 2000px; }
                .featured-card { position: absolute; width: 100%; max-width: 48rem; transition: all 0.7s ease-out; cursor: pointer; }
                .featured-card a { display: block; position: relative; height: 500px; border-radius: 1rem; overflow: hidden; color: #fff; text-decoration: none; }
                .featured-card img { width: 100%; height: 100%; object-fit: cover; }
                .featured-card-text { position: absolute; left: 0; right: 0; bottom: 0; padding: 2rem; background: linear-gradient(to top, #000, rgba(0,0,0,0.4), transparent); }
                .featured-card-category { display: inline-block; padding: 0.375rem 1rem; border-radius: 9999px; background: rgba(255,255,255,0.1); border: 1px solid rgba(255,255,255,0.2); font-size: 0.875rem; margin-bottom: 1rem; }
                .featured-card-text h3 { font-size: 2.25rem; font-weight: 700; margin-bottom: 0.75rem; }
                .featured-card-text p { color: rgba(255,255,255,0.8); font-size: 1.125rem; margin-bottom: 1rem; }
                .featured-card-meta { display: flex; gap: 1.5rem; color: rgba(255,255,255,0.7); font-size: 0.875rem; }
                .featured-metrics { display: flex; justify-content: center; gap: 2rem; margin-bottom: 3rem; flex-wrap: wrap; }
                .featured-metric { padding: 1rem 1.5rem; border-radius: 0.75rem; border: 1px solid #262626; background: #171717; }
                .featured-metric-value { font-size: 1.5rem; font-weight: 700; }
                .featured-metric-label { font-size: 0.75rem; color: #a3a3a3; text-transform: uppercase; letter-spacing: 0.05em; }
                .featured-dots { display: flex; justify-content: center; gap: 0.75rem; margin-bottom: 3rem; }
                .featured-dot { width: 0.75rem; height: 0.75rem; border: none; border-radius: 9999px; background: #404040; cursor: pointer; transition: all 0.3s; }
                .featured-dot.active { width: 3rem; background: #64B847; }
                .featured-all { text-align: center; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn active_card_is_centred_and_on_top() {
        let pose = card_pose(1, 1);
        assert_eq!(pose.offset_px, 0);
        assert_eq!(pose.scale, 1.0);
        assert_eq!(pose.z_index, 10);

        let left = card_pose(0, 1);
        assert_eq!(left.offset_px, -400);
        assert_eq!(left.rotate_deg, -25);
        assert_eq!(left.z_index, 4);

        let far = card_pose(3, 0);
        assert_eq!(far.offset_px, 1200);
        assert_eq!(far.opacity, 0.3);
        assert_eq!(far.z_index, 2);
    }

    #[test]
    fn missing_metrics_read_not_available() {
        let mut metrics = BTreeMap::new();
        metrics.insert("energy_generated_kwh".to_string(), 95_000.0);
        let project = Project {
            id: 2,
            title: "Compact Catalyst".into(),
            slug: "compact-catalyst".into(),
            description: String::new(),
            category: "residential".into(),
            location: "Tokyo, Japan".into(),
            year: 2024,
            area_sqm: None,
            status: "completed".into(),
            client_name: None,
            hero_image: None,
            images: Vec::new(),
            video_url: None,
            sustainability_metrics: metrics,
            featured: true,
        };
        let values: Vec<String> = headline_metrics(&project).into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec!["95k", "N/A", "N/A"]);
    }
}
