use yew::prelude::*;
use yew_router::components::Link;

use crate::api::content::fetch_articles;
use crate::api::hooks::{use_fetch, Load};
use crate::api::models::Article;
use crate::components::category_filter::{use_category, CategoryFilter};
use crate::Route;

pub const ARTICLE_CATEGORIES: &[(&str, &str)] = &[
    ("all", "All Posts"),
    ("sustainability", "Sustainability"),
    ("technology", "Technology"),
    ("design", "Design"),
    ("news", "News"),
];

#[derive(Properties, PartialEq)]
pub struct ArticleCardProps {
    pub article: Article,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    html! {
        <Link<Route> to={Route::BlogPost { slug: article.slug.clone() }} classes="article-card">
            <div class="article-card-image">
                <img src={article.featured_image.clone().unwrap_or_else(|| "/placeholder.svg".into())} alt={article.title.clone()} loading="lazy" />
                <span class="article-card-category">{ &article.category }</span>
            </div>
            <div class="article-card-body">
                <h3>{ &article.title }</h3>
                <p>{ &article.excerpt }</p>
                <div class="article-card-meta">
                    <span>{ &article.author }</span>
                    <span>{ article.published_label() }</span>
                </div>
                <div class="article-card-more">{"Read More →"}</div>
            </div>
        </Link<Route>>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let category = use_category();
    let articles = use_fetch(category.clone(), fetch_articles);

    let grid = match &*articles {
        Load::Loading => html! { <p class="list-status">{"Loading articles..."}</p> },
        Load::Ready(list) if list.is_empty() => html! { <p class="list-status">{"No blog posts found."}</p> },
        Load::Ready(list) => html! {
            <div class="card-grid">
                { for list.iter().map(|a| html! { <ArticleCard key={a.id} article={a.clone()} /> }) }
            </div>
        },
        Load::Missing | Load::Failed => html! {
            <p class="list-status">{"Articles could not be loaded. Please try again later."}</p>
        },
    };

    html! {
        <div class="listing-page">
            <section class="listing-hero">
                <h1>{"Blog & Insights"}</h1>
                <p>{"Thought leadership on sustainable architecture, design innovation, and the future of self-sufficient living."}</p>
            </section>
            <section class="listing-body">
                <CategoryFilter route={Route::Blog} categories={ARTICLE_CATEGORIES} current={category} />
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
                .article-card { display: block; background: #fff; border-radius: 1rem; overflow: hidden; text-decoration: none; color: inherit; box-shadow: 0 1px 3px rgba(0,0,0,0.08); transition: all 0.3s ease; }
                .article-card:hover { transform: translateY(-8px); box-shadow: 0 20px 40px -20px rgba(0,0,0,0.3); }
                .article-card-image { position: relative; aspect-ratio: 16 / 9; overflow: hidden; }
                .article-card-image img { width: 100%; height: 100%; object-fit: cover; }
                .article-card-category { position: absolute; top: 1rem; left: 1rem; padding: 0.25rem 0.75rem; border-radius: 9999px; background: #64B847; color: #fff; font-size: 0.875rem; text-transform: capitalize; }
                .article-card-body { padding: 1.5rem; }
                .article-card-body h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.75rem; }
                .article-card-body p { color: #64748b; line-height: 1.6; margin-bottom: 1rem; }
                .article-card-meta { display: flex; justify-content: space-between; font-size: 0.875rem; color: #64748b; }
                .article-card-more { margin-top: 1rem; color: #64B847; font-weight: 500; }
                "#}
            </style>
        </div>
    }
}
