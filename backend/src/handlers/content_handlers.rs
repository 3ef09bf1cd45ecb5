use std::sync::Arc;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::{json, Value};

use crate::{
    AppState,
    handlers::content_dtos::{ArticleDetailResponse, ArticleResponse, CategoryQuery, ProjectResponse},
    repositories::content_repository::RepositoryError,
};

type ApiError = (StatusCode, Json<Value>);

fn internal_error(context: &str, err: RepositoryError) -> ApiError {
    tracing::error!(error = %err, "{}", context);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Content is temporarily unavailable"})),
    )
}

fn not_found(message: &str) -> ApiError {
    (StatusCode::NOT_FOUND, Json(json!({"error": message})))
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<ArticleResponse>>, ApiError> {
    let articles = state
        .content
        .published_articles(query.filter())
        .map_err(|e| internal_error("Failed to load articles", e))?;
    Ok(Json(articles.into_iter().map(ArticleResponse::from).collect()))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<ArticleDetailResponse>, ApiError> {
    let article = state
        .content
        .find_published_article(&slug)
        .map_err(|e| internal_error("Failed to load article", e))?
        .ok_or_else(|| not_found("Article not found"))?;

    // a broken related query should not take the article page down with it
    let related = state.content.related_articles(&article).unwrap_or_else(|e| {
        tracing::warn!(%slug, error = %e, "Failed to load related articles");
        Vec::new()
    });

    Ok(Json(ArticleDetailResponse {
        article: article.into(),
        related: related.into_iter().map(ArticleResponse::from).collect(),
    }))
}

pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = state
        .content
        .projects(query.filter())
        .map_err(|e| internal_error("Failed to load projects", e))?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

pub async fn featured_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = state
        .content
        .featured_projects()
        .map_err(|e| internal_error("Failed to load featured projects", e))?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state
        .content
        .find_project(&slug)
        .map_err(|e| internal_error("Failed to load project", e))?
        .ok_or_else(|| not_found("Project not found"))?;
    Ok(Json(project.into()))
}

#[cfg(test)]
mod tests {
    use crate::repositories::content_repository::fixtures::{article, project};
    use crate::test_support::{body_json, get, test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn lists_articles_with_category_filter() {
        let state = test_state();
        state
            .content
            .insert_articles(&[
                article("solar-skins", "energy", 300, true),
                article("rain-rooms", "water", 200, true),
            ])
            .unwrap();

        let response = get(state.clone(), "/api/articles?category=water").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let articles = body.as_array().unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0]["slug"], "rain-rooms");

        let all = body_json(get(state, "/api/articles?category=all").await).await;
        assert_eq!(all.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn article_detail_includes_related() {
        let state = test_state();
        state
            .content
            .insert_articles(&[
                article("solar-skins", "energy", 300, true),
                article("heat-pumps", "energy", 100, true),
                article("rain-rooms", "water", 200, true),
            ])
            .unwrap();

        let body = body_json(get(state, "/api/articles/solar-skins").await).await;
        assert_eq!(body["article"]["slug"], "solar-skins");
        let related = body["related"].as_array().unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0]["slug"], "heat-pumps");
    }

    #[tokio::test]
    async fn unknown_and_draft_articles_are_not_found() {
        let state = test_state();
        state
            .content
            .insert_articles(&[article("draft-idea", "energy", 300, false)])
            .unwrap();

        let response = get(state.clone(), "/api/articles/draft-idea").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Article not found");

        let response = get(state, "/api/articles/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn featured_route_is_not_taken_for_a_slug() {
        let state = test_state();
        state
            .content
            .insert_projects(&[
                project("urban-hub", "urban", 2023, true),
                project("garden-house", "residential", 2021, false),
            ])
            .unwrap();

        let body = body_json(get(state, "/api/projects/featured").await).await;
        let featured = body.as_array().unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0]["slug"], "urban-hub");
        assert_eq!(featured[0]["images"].as_array().unwrap().len(), 2);
        assert_eq!(featured[0]["sustainability_metrics"]["water_recycled_percent"], 85.0);
    }

    #[tokio::test]
    async fn project_detail_and_missing_project() {
        let state = test_state();
        state
            .content
            .insert_projects(&[project("urban-hub", "urban", 2023, true)])
            .unwrap();

        let response = get(state.clone(), "/api/projects/urban-hub").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["title"], "Project urban-hub");
        assert_eq!(body["area_sqm"], 1200);

        let response = get(state, "/api/projects/nowhere").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Project not found");
    }
}
