use axum::{
    routing::{get, post},
    extract::State,
    http::StatusCode,
    Router,
};
use std::num::NonZeroU32;
use std::sync::Arc;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;

pub mod handlers {
    pub mod content_dtos;
    pub mod content_handlers;
    pub mod lead_dtos;
    pub mod lead_handlers;
}
pub mod models {
    pub mod content_models;
    pub mod lead_models;
}
pub mod repositories {
    pub mod content_repository;
    pub mod lead_repository;
}
pub mod config {
    pub mod settings;
}
pub mod utils {
    pub mod rate_limit;
}
pub mod db;
pub mod schema;

use handlers::content_handlers;
use handlers::lead_handlers;
use repositories::content_repository::ContentRepository;
use repositories::lead_repository::{LeadRepository, LeadStore};
use utils::rate_limit::LeadRateLimiter;

pub use db::DbPool;

pub struct AppState {
    db_pool: DbPool,
    content: Arc<ContentRepository>,
    leads: Arc<dyn LeadStore>,
    lead_limiter: Arc<LeadRateLimiter>,
}

impl AppState {
    pub fn new(pool: DbPool, leads_per_minute: NonZeroU32) -> Self {
        Self {
            db_pool: pool.clone(),
            content: Arc::new(ContentRepository::new(pool.clone())),
            leads: Arc::new(LeadRepository::new(pool)),
            lead_limiter: Arc::new(LeadRateLimiter::per_minute(leads_per_minute)),
        }
    }
}

async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    match state.db_pool.get() {
        Ok(_) => (StatusCode::OK, "OK"),
        Err(e) => {
            tracing::error!(error = %e, "Health check could not reach the database");
            (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    let content_routes = Router::new()
        .route("/api/articles", get(content_handlers::list_articles))
        .route("/api/articles/{slug}", get(content_handlers::get_article))
        .route("/api/projects", get(content_handlers::list_projects))
        .route("/api/projects/featured", get(content_handlers::featured_projects))
        .route("/api/projects/{slug}", get(content_handlers::get_project));

    let lead_routes = Router::new()
        .route("/api/contact", post(lead_handlers::submit_contact))
        .route("/api/newsletter", post(lead_handlers::subscribe_newsletter));

    Router::new()
        .route("/api/health", get(health_check))
        .merge(content_routes)
        .merge(lead_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[cfg(test)]
mod test_support {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, Response};
    use http_body_util::BodyExt;
    use nonzero_ext::nonzero;
    use repositories::lead_repository::MockLeadStore;
    use tower::ServiceExt;

    fn state_from(pool: DbPool, leads: Arc<dyn LeadStore>) -> Arc<AppState> {
        Arc::new(AppState {
            db_pool: pool.clone(),
            content: Arc::new(ContentRepository::new(pool)),
            leads,
            lead_limiter: Arc::new(LeadRateLimiter::per_minute(nonzero!(5u32))),
        })
    }

    pub fn test_state() -> Arc<AppState> {
        let pool = db::test_pool();
        state_from(pool.clone(), Arc::new(LeadRepository::new(pool)))
    }

    pub fn state_with_leads(store: MockLeadStore) -> Arc<AppState> {
        state_from(db::test_pool(), Arc::new(store))
    }

    pub fn lead_repository(state: &AppState) -> LeadRepository {
        LeadRepository::new(state.db_pool.clone())
    }

    pub async fn get(state: Arc<AppState>, uri: &str) -> Response<Body> {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app(state).oneshot(request).await.unwrap()
    }

    pub async fn post_json(state: Arc<AppState>, uri: &str, body: serde_json::Value) -> Response<Body> {
        send_json(state, None, uri, body).await
    }

    pub async fn post_json_from(
        state: Arc<AppState>,
        client_ip: &str,
        uri: &str,
        body: serde_json::Value,
    ) -> Response<Body> {
        send_json(state, Some(client_ip), uri, body).await
    }

    async fn send_json(
        state: Arc<AppState>,
        client_ip: Option<&str>,
        uri: &str,
        body: serde_json::Value,
    ) -> Response<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(ip) = client_ip {
            request = request.header("x-forwarded-for", ip);
        }
        let request = request.body(Body::from(body.to_string())).unwrap();
        app(state).oneshot(request).await.unwrap()
    }

    pub async fn post_raw(
        state: Arc<AppState>,
        uri: &str,
        content_type: &str,
        body: &'static str,
    ) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap();
        app(state).oneshot(request).await.unwrap()
    }

    pub async fn body_json(response: Response<Body>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_check_reports_ok() {
        let response = get(test_state(), "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn unknown_api_route_is_not_found() {
        let response = get(test_state(), "/api/nothing-here").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
