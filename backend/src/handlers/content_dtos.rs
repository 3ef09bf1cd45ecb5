use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::models::content_models::{Article, Project};

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

impl CategoryQuery {
    /// `None`, blank and "all" mean no filtering.
    pub fn filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
    }
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub featured_image: Option<String>,
    pub published_at: i32,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            slug: article.slug,
            excerpt: article.excerpt,
            content: article.content,
            author: article.author,
            category: article.category,
            featured_image: article.featured_image,
            published_at: article.published_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArticleDetailResponse {
    pub article: ArticleResponse,
    pub related: Vec<ArticleResponse>,
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub year: i32,
    pub area_sqm: Option<i32>,
    pub status: String,
    pub client_name: Option<String>,
    pub hero_image: Option<String>,
    pub images: Vec<String>,
    pub video_url: Option<String>,
    pub sustainability_metrics: BTreeMap<String, f64>,
    pub featured: bool,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        let images = serde_json::from_str::<Vec<String>>(&project.images).unwrap_or_else(|e| {
            tracing::warn!(slug = %project.slug, error = %e, "Malformed project images json");
            Vec::new()
        });
        let sustainability_metrics = parse_metrics(&project.slug, &project.sustainability_metrics);

        Self {
            id: project.id,
            title: project.title,
            slug: project.slug,
            description: project.description,
            category: project.category,
            location: project.location,
            year: project.year,
            area_sqm: project.area_sqm,
            status: project.status,
            client_name: project.client_name,
            hero_image: project.hero_image,
            images,
            video_url: project.video_url,
            sustainability_metrics,
            featured: project.featured,
        }
    }
}

// Non-numeric entries are dropped rather than failing the whole project
fn parse_metrics(slug: &str, raw: &str) -> BTreeMap<String, f64> {
    match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(raw) {
        Ok(map) => map
            .into_iter()
            .filter_map(|(key, value)| value.as_f64().map(|v| (key, v)))
            .collect(),
        Err(e) => {
            tracing::warn!(%slug, error = %e, "Malformed sustainability metrics json");
            BTreeMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(category: Option<&str>) -> CategoryQuery {
        CategoryQuery {
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn all_and_blank_categories_do_not_filter() {
        assert_eq!(query(None).filter(), None);
        assert_eq!(query(Some("")).filter(), None);
        assert_eq!(query(Some("all")).filter(), None);
        assert_eq!(query(Some("ALL")).filter(), None);
        assert_eq!(query(Some(" residential ")).filter(), Some("residential"));
    }

    #[test]
    fn metrics_keep_numbers_only() {
        let metrics = parse_metrics(
            "urban-hub",
            r#"{"energy_generated_kwh":100000,"water_recycled_percent":85.5,"note":"soon"}"#,
        );
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics["water_recycled_percent"], 85.5);
    }

    #[test]
    fn malformed_json_degrades_to_empty() {
        assert!(parse_metrics("broken", "{not json").is_empty());
    }
}
