use yew::prelude::*;
use yew_router::components::Link;

use crate::api::content::fetch_article;
use crate::api::hooks::{use_fetch, Load};
use crate::pages::not_found::NotFoundView;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
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
    let detail = use_fetch(props.slug.clone(), fetch_article);

    let detail = match &*detail {
        Load::Loading => return html! { <div class="detail-status">{"Loading..."}</div> },
        Load::Missing => return html! { <NotFoundView what="article" back={Route::Blog} /> },
        Load::Failed => {
            return html! { <div class="detail-status">{"This article could not be loaded. Please try again later."}</div> }
        }
        Load::Ready(detail) => detail.clone(),
    };
    let article = detail.article;

    html! {
        <article class="post-page">
            <section class="post-hero">
                <div class="post-narrow">
                    <span class="post-category">{ &article.category }</span>
                    <h1>{ &article.title }</h1>
                    <div class="post-meta">
                        <span>{ &article.author }</span>
                        <span>{ article.published_label() }</span>
                    </div>
                </div>
            </section>
            <section class="post-image">
                <img src={article.featured_image.clone().unwrap_or_else(|| "/placeholder.svg".into())} alt={article.title.clone()} />
            </section>
            <section class="post-content post-narrow">
                <p class="post-excerpt">{ &article.excerpt }</p>
                <div class="post-body">{ &article.content }</div>
            </section>
            if !detail.related.is_empty() {
                <section class="post-related">
                    <h2>{"Related Articles"}</h2>
                    <div class="post-related-grid">
                        { for detail.related.iter().map(|r| html! {
                            <Link<Route> key={r.id} to={Route::BlogPost { slug: r.slug.clone() }} classes="post-related-card">
                                <img src={r.featured_image.clone().unwrap_or_else(|| "/placeholder.svg".into())} alt={r.title.clone()} loading="lazy" />
                                <h3>{ &r.title }</h3>
                                <p>{ &r.excerpt }</p>
                            </Link<Route>>
                        }) }
                    </div>
                </section>
            }
            <style>
                {r#"
                .detail-status { padding: 10rem 1.5rem; text-align: center; color: #64748b; font-size: 1.25rem; }
                .post-hero { padding: 8rem 1.5rem 4rem; background: linear-gradient(135deg, #0f172a, #1e293b); color: #fff; }
                .post-narrow { max-width: 48rem; margin: 0 auto; }
                .post-category { display: inline-block; padding: 0.5rem 1rem; border-radius: 9999px; background: #64B847; font-size: 0.875rem; text-transform: capitalize; margin-bottom: 1.5rem; }
                .post-hero h1 { font-size: 3rem; font-weight: 700; line-height: 1.15; margin-bottom: 1.5rem; }
                .post-meta { display: flex; gap: 1.5rem; color: #cbd5e1; }
                .post-image { padding: 2rem 1.5rem; background: #f8fafc; }
                .post-image img { display: block; width: 100%; max-width: 64rem; margin: 0 auto; aspect-ratio: 21 / 9; object-fit: cover; border-radius: 1rem; }
                .post-content { padding: 4rem 1.5rem; }
                .post-excerpt { font-size: 1.25rem; color: #64748b; line-height: 1.7; margin-bottom: 2rem; }
                .post-body { white-space: pre-line; line-height: 1.8; }
                .post-related { padding: 4rem 1.5rem; background: #f8fafc; }
                .post-related h2 { max-width: 80rem; margin: 0 auto 2rem; font-size: 1.9rem; font-weight: 700; }
                .post-related-grid { max-width: 80rem; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 2rem; }
                .post-related-card { display: block; background: #fff; border-radius: 1rem; overflow: hidden; text-decoration: none; color: inherit; }
                .post-related-card img { width: 100%; aspect-ratio: 16 / 9; object-fit: cover; }
                .post-related-card h3, .post-related-card p { padding: 0 1.5rem; }
                .post-related-card h3 { margin-top: 1.25rem; font-size: 1.25rem; font-weight: 700; }
                .post-related-card p { margin: 0.5rem 0 1.5rem; font-size: 0.875rem; color: #64748b; }
                "#}
            </style>
        </article>
    }
}
