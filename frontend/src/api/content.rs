use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::models::{Article, ArticleDetail, Project};
use crate::config;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// `None`, blank and "all" all mean the unfiltered listing.
pub fn category_path(base: &str, category: Option<&str>) -> String {
    match category.map(str::trim).filter(|c| !c.is_empty() && *c != "all") {
        Some(category) => format!("{}?category={}", base, urlencoding::encode(category)),
        None => base.to_string(),
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&config::api_url(path))
        .send()
        .await
        .map_err(|e| {
            gloo_console::error!(format!("Failed to fetch {}: {}", path, e));
            ApiError::Network(e.to_string())
        })?;

    match response.status() {
        404 => return Err(ApiError::NotFound),
        status if !response.ok() => return Err(ApiError::Status(status)),
        _ => {}
    }

    response.json::<T>().await.map_err(|e| {
        gloo_console::error!(format!("Failed to parse {}: {}", path, e));
        ApiError::Decode(e.to_string())
    })
}

pub async fn fetch_articles(category: Option<String>) -> Result<Vec<Article>, ApiError> {
    get_json(&category_path("/api/articles", category.as_deref())).await
}

pub async fn fetch_article(slug: String) -> Result<ArticleDetail, ApiError> {
    get_json(&format!("/api/articles/{}", urlencoding::encode(&slug))).await
}

pub async fn fetch_projects(category: Option<String>) -> Result<Vec<Project>, ApiError> {
    get_json(&category_path("/api/projects", category.as_deref())).await
}

pub async fn fetch_featured_projects() -> Result<Vec<Project>, ApiError> {
    get_json("/api/projects/featured").await
}

pub async fn fetch_project(slug: String) -> Result<Project, ApiError> {
    get_json(&format!("/api/projects/{}", urlencoding::encode(&slug))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_path_skips_all_and_blank() {
        assert_eq!(category_path("/api/projects", None), "/api/projects");
        assert_eq!(category_path("/api/projects", Some("all")), "/api/projects");
        assert_eq!(category_path("/api/projects", Some("  ")), "/api/projects");
        assert_eq!(
            category_path("/api/projects", Some("residential")),
            "/api/projects?category=residential"
        );
        assert_eq!(
            category_path("/api/articles", Some("design & build")),
            "/api/articles?category=design%20%26%20build"
        );
    }
}
