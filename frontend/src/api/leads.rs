use gloo_net::http::Request;

use crate::api::content::ApiError;
use crate::api::models::{ContactRequest, LeadResult, NewsletterRequest};
use crate::config;

// Rejections come back with a LeadResult body and a 4xx/5xx status, so the body is
// read regardless of status.
async fn post_lead<B: serde::Serialize>(path: &str, body: &B) -> Result<LeadResult, ApiError> {
    let response = Request::post(&config::api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            gloo_console::error!(format!("Failed to post {}: {}", path, e));
            ApiError::Network(e.to_string())
        })?;

    let status = response.status();
    response.json::<LeadResult>().await.map_err(|e| {
        gloo_console::error!(format!("Unexpected {} response from {}: {}", status, path, e));
        ApiError::Status(status)
    })
}

pub async fn submit_contact(request: ContactRequest) -> Result<LeadResult, ApiError> {
    post_lead("/api/contact", &request).await
}

pub async fn subscribe_newsletter(email: String) -> Result<LeadResult, ApiError> {
    post_lead("/api/newsletter", &NewsletterRequest { email: &email }).await
}
