use yew::prelude::*;
use yew_router::components::Link;

use crate::api::content::fetch_projects;
use crate::api::hooks::{use_fetch, Load};
use crate::api::models::Project;
use crate::components::category_filter::{use_category, CategoryFilter};
use crate::Route;

pub const PROJECT_CATEGORIES: &[(&str, &str)] = &[
    ("all", "All Projects"),
    ("residential", "Residential"),
    ("commercial", "Commercial"),
    ("urban", "Urban Development"),
    ("research", "Research"),
];

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    html! {
        <Link<Route> to={Route::Project { slug: project.slug.clone() }} classes="project-card">
            <div class="project-card-image">
                <img src={project.hero_image.clone().unwrap_or_else(|| "/placeholder.svg".into())} alt={project.title.clone()} loading="lazy" />
                <span class="project-card-category">{ &project.category }</span>
                if project.is_in_progress() {
                    <span class="project-card-status">{"In Progress"}</span>
                }
            </div>
            <div class="project-card-body">
                <h3>{ &project.title }</h3>
                <p>{ &project.description }</p>
                <div class="project-card-meta">
                    <span>{ &project.location }</span>
                    <span>{ project.year }</span>
                </div>
            </div>
        </Link<Route>>
    }
}

#[function_component(Work)]
pub fn work() -> Html {
    let category = use_category();
    let projects = use_fetch(category.clone(), fetch_projects);

    let grid = match &*projects {
        Load::Loading => html! { <p class="list-status">{"Loading projects..."}</p> },
        Load::Ready(list) if list.is_empty() => html! { <p class="list-status">{"No projects found."}</p> },
        Load::Ready(list) => html! {
            <div class="card-grid">
                { for list.iter().map(|p| html! { <ProjectCard key={p.id} project={p.clone()} /> }) }
            </div>
        },
        Load::Missing | Load::Failed => html! {
            <p class="list-status">{"Projects could not be loaded. Please try again later."}</p>
        },
    };

    html! {
        <div class="listing-page">
            <section class="listing-hero">
                <h1>{"Our Work"}</h1>
                <p>{"Explore our portfolio of transformative projects that push the boundaries of sustainable architecture and self-sufficient design."}</p>
            </section>
            <section class="listing-body">
                <CategoryFilter route={Route::Work} categories={PROJECT_CATEGORIES} current={category} />
                { grid }
            </section>
            <style>
                {r#"
                .listing-page { min-height: 100vh; }
                .listing-hero { padding: 8rem 1.5rem 4rem; background: linear-gradient(135deg, #0f172a, #1e293b); color: #fff; }
                .listing-hero h1 { max-width: 80rem; margin: 0 auto 1.5rem; font-size: 3.5rem; font-weight: 700; }
                .listing-hero p { max-width: 80rem; margin: 0 auto; font-size: 1.25rem; line-height: 1.7; color: #cbd5e1; }
                .listing-body { padding: 4rem 1.5rem; background: #f8fafc; }
                .listing-body > * { max-width: 80rem; margin-left: auto; margin-right: auto; }
                .list-status { text-align: center; padding: 4rem 0; font-size: 1.25rem; color: #64748b; }
                .card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 2rem; }
                .project-card { display: block; background: #fff; border-radius: 1rem; overflow: hidden; text-decoration: none; color: inherit; box-shadow: 0 1px 3px rgba(0,0,0,0.08); transition: all 0.3s ease; }
                .project-card:hover { transform: translateY(-8px); box-shadow: 0 20px 40px -20px rgba(0,0,0,0.3); }
                .project-card-image { position: relative; aspect-ratio: 4 / 3; overflow: hidden; }
                .project-card-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s; }
                .project-card:hover .project-card-image img { transform: scale(1.1); }
                .project-card-category, .project-card-status { position: absolute; top: 1rem; padding: 0.25rem 0.75rem; border-radius: 9999px; color: #fff; font-size: 0.875rem; text-transform: capitalize; }
                .project-card-category { left: 1rem; background: #64B847; }
                .project-card-status { right: 1rem; background: #eab308; }
                .project-card-body { padding: 1.5rem; }
                .project-card-body h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.75rem; }
                .project-card-body p { color: #64748b; line-height: 1.6; margin-bottom: 1rem; }
                .project-card-meta { display: flex; gap: 1rem; font-size: 0.875rem; color: #64748b; }
                "#}
            </style>
        </div>
    }
}
