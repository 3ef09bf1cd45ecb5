use yew::prelude::*;
use yew_router::components::Link;

use crate::api::content::fetch_project;
use crate::api::hooks::{use_fetch, Load};
use crate::pages::not_found::NotFoundView;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectPageProps {
    pub slug: String,
}

#[function_component(ProjectPage)]
pub fn project_page(props: &ProjectPageProps) -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.slug.clone(),
        );
    }
    let project = use_fetch(props.slug.clone(), fetch_project);

    let project = match &*project {
        Load::Loading => return html! { <div class="detail-status">{"Loading..."}</div> },
        Load::Missing => return html! { <NotFoundView what="project" back={Route::Work} /> },
        Load::Failed => {
            return html! { <div class="detail-status">{"This project could not be loaded. Please try again later."}</div> }
        }
        Load::Ready(project) => project.clone(),
    };
    let metrics = project.metric_summaries();

    html! {
        <div class="project-page">
            <section class="project-hero">
                <img src={project.hero_image.clone().unwrap_or_else(|| "/placeholder.svg".into())} alt={project.title.clone()} />
                <div class="project-hero-shade"></div>
                <div class="project-hero-text">
                    <span class="project-category">{ &project.category }</span>
                    <h1>{ &project.title }</h1>
                    <div class="project-facts">
                        <span>{ &project.location }</span>
                        <span>{ project.year }</span>
                        if let Some(area) = project.area_label() {
                            <span>{ area }</span>
                        }
                        if project.is_in_progress() {
                            <span class="project-in-progress">{"In Progress"}</span>
                        }
                    </div>
                </div>
            </section>
            <section class="project-details">
                <div class="project-main">
                    <h2>{"Project Overview"}</h2>
                    <p class="project-description">{ &project.description }</p>
                    if let Some(client) = project.client_name.clone() {
                        <div class="project-client">
                            <h3>{"Client"}</h3>
                            <p>{ client }</p>
                        </div>
                    }
                    if let Some(video) = project.video_url.clone() {
                        <div class="project-video">
                            <h3>{"Walkthrough"}</h3>
                            <video src={video} controls={true} playsinline={true} preload="metadata"></video>
                        </div>
                    }
                    if !project.images.is_empty() {
                        <div class="project-gallery">
                            <h3>{"Gallery"}</h3>
                            <div class="project-gallery-grid">
                                { for project.images.iter().enumerate().map(|(i, src)| html! {
                                    <div class="project-gallery-item">
                                        <img
                                            src={if src.is_empty() { "/placeholder.svg".to_string() } else { src.clone() }}
                                            alt={format!("{} - Image {}", project.title, i + 1)}
                                            loading="lazy"
                                        />
                                    </div>
                                }) }
                            </div>
                        </div>
                    }
                </div>
                <aside class="project-impact">
                    <h3>{"Sustainability Impact"}</h3>
                    if metrics.is_empty() {
                        <p class="project-impact-empty">{"Sustainability metrics coming soon."}</p>
                    } else {
                        <ul>
                            { for metrics.iter().map(|m| html! {
                                <li>
                                    <div class="project-impact-value">{ &m.value }</div>
                                    <div class="project-impact-label">{ m.label }</div>
                                </li>
                            }) }
                        </ul>
                    }
                    <Link<Route> to={Route::Contact} classes="project-cta">{"Start Your Project"}</Link<Route>>
                </aside>
            </section>
            <style>
                {r#"
                .detail-status { padding: 10rem 1.5rem; text-align: center; color: #64748b; font-size: 1.25rem; }
                .project-hero { position: relative; height: 70vh; margin-top: 5rem; }
                .project-hero img { width: 100%; height: 100%; object-fit: cover; }
                .project-hero-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.6), rgba(0,0,0,0.2), transparent); }
                .project-hero-text { position: absolute; left: 0; right: 0; bottom: 3rem; max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; color: #fff; }
                .project-category { display: inline-block; padding: 0.5rem 1rem; border-radius: 9999px; background: #64B847; font-size: 0.875rem; text-transform: capitalize; margin-bottom: 1rem; }
                .project-hero-text h1 { font-size: 3.75rem; font-weight: 700; margin-bottom: 1rem; }
                .project-facts { display: flex; flex-wrap: wrap; gap: 1.5rem; align-items: center; color: rgba(255,255,255,0.9); }
                .project-in-progress { padding: 0.25rem 0.75rem; border-radius: 9999px; background: #eab308; }
                .project-details { display: grid; grid-template-columns: 2fr 1fr; gap: 3rem; max-width: 80rem; margin: 0 auto; padding: 4rem 1.5rem; }
                .project-main h2 { font-size: 1.9rem; font-weight: 700; margin-bottom: 1.5rem; }
                .project-main h3 { font-size: 1.4rem; font-weight: 700; margin-bottom: 1rem; }
                .project-description { font-size: 1.125rem; line-height: 1.7; color: #64748b; margin-bottom: 2rem; }
                .project-client, .project-video { margin-bottom: 2rem; }
                .project-video video { width: 100%; border-radius: 1rem; }
                .project-gallery { margin-top: 3rem; }
                .project-gallery-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.5rem; }
                .project-gallery-item { aspect-ratio: 4 / 3; border-radius: 0.75rem; overflow: hidden; }
                .project-gallery-item img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s; }
                .project-gallery-item img:hover { transform: scale(1.1); }
                .project-impact { align-self: start; position: sticky; top: 6rem; padding: 2rem; border-radius: 1rem; background: #f8fafc; }
                .project-impact ul { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 1.5rem; margin-top: 1.5rem; }
                .project-impact-value { font-size: 1.5rem; font-weight: 700; color: #64B847; }
                .project-impact-label, .project-impact-empty { font-size: 0.875rem; color: #64748b; }
                .project-cta { display: block; margin-top: 2rem; padding: 0.9rem; border-radius: 0.5rem; background: #64B847; color: #fff; text-align: center; text-decoration: none; font-weight: 600; }
                @media (max-width: 900px) {
                    .project-details { grid-template-columns: 1fr; }
                    .project-hero-text h1 { font-size: 2.5rem; }
                }
                "#}
            </style>
        </div>
    }
}
