use std::sync::Arc;
use axum::{
    Json,
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
};

use crate::{
    AppState,
    handlers::lead_dtos::{
        normalize_email, ContactRequest, EmailError, LeadErrorCode, LeadResult, NewsletterRequest,
        ALREADY_SUBSCRIBED_MESSAGE, CONTACT_FAILED_MESSAGE, INVALID_EMAIL_MESSAGE,
        MISSING_EMAIL_MESSAGE, MISSING_FIELDS_MESSAGE, RATE_LIMITED_MESSAGE,
        SUBSCRIBE_FAILED_MESSAGE,
    },
    repositories::lead_repository::LeadError,
    utils::rate_limit::client_key,
};

type LeadResponse = (StatusCode, Json<LeadResult>);

fn reject(status: StatusCode, code: LeadErrorCode, message: &str) -> LeadResponse {
    (status, Json(LeadResult::failure(code, message)))
}

fn check_rate_limit(state: &AppState, headers: &HeaderMap) -> Result<(), LeadResponse> {
    if state.lead_limiter.allow(&client_key(headers)) {
        Ok(())
    } else {
        Err(reject(
            StatusCode::TOO_MANY_REQUESTS,
            LeadErrorCode::RateLimited,
            RATE_LIMITED_MESSAGE,
        ))
    }
}

fn now_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

// Bodies axum cannot decode still answer with a LeadResult
fn unreadable_body(rejection: JsonRejection, message: &str) -> LeadResponse {
    tracing::debug!(status = %rejection.status(), error = %rejection.body_text(), "Unreadable lead request body");
    reject(StatusCode::BAD_REQUEST, LeadErrorCode::MissingFields, message)
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> LeadResponse {
    if let Err(limited) = check_rate_limit(&state, &headers) {
        return limited;
    }
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return unreadable_body(rejection, MISSING_FIELDS_MESSAGE),
    };

    let Some(inquiry) = request.into_inquiry(now_timestamp()) else {
        return reject(StatusCode::BAD_REQUEST, LeadErrorCode::MissingFields, MISSING_FIELDS_MESSAGE);
    };

    let project_type = inquiry.project_type.clone();
    match state.leads.insert_inquiry(inquiry) {
        Ok(()) => {
            tracing::info!(project_type = ?project_type, "Contact inquiry stored");
            (StatusCode::OK, Json(LeadResult::ok()))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store contact inquiry");
            reject(StatusCode::INTERNAL_SERVER_ERROR, LeadErrorCode::StoreFailure, CONTACT_FAILED_MESSAGE)
        }
    }
}

pub async fn subscribe_newsletter(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<NewsletterRequest>, JsonRejection>,
) -> LeadResponse {
    if let Err(limited) = check_rate_limit(&state, &headers) {
        return limited;
    }
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return unreadable_body(rejection, MISSING_EMAIL_MESSAGE),
    };

    let email = match normalize_email(&request.email) {
        Ok(email) => email,
        Err(EmailError::Missing) => {
            return reject(StatusCode::BAD_REQUEST, LeadErrorCode::MissingFields, MISSING_EMAIL_MESSAGE)
        }
        Err(EmailError::Invalid) => {
            return reject(StatusCode::BAD_REQUEST, LeadErrorCode::InvalidEmail, INVALID_EMAIL_MESSAGE)
        }
    };

    match state.leads.insert_subscriber(&email, now_timestamp()) {
        Ok(()) => {
            tracing::info!("Newsletter subscriber added");
            (StatusCode::OK, Json(LeadResult::ok()))
        }
        Err(LeadError::AlreadySubscribed) => {
            tracing::debug!("Duplicate newsletter signup");
            reject(StatusCode::CONFLICT, LeadErrorCode::AlreadySubscribed, ALREADY_SUBSCRIBED_MESSAGE)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store newsletter subscriber");
            reject(StatusCode::INTERNAL_SERVER_ERROR, LeadErrorCode::StoreFailure, SUBSCRIBE_FAILED_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::lead_dtos::{
        ALREADY_SUBSCRIBED_MESSAGE, CONTACT_FAILED_MESSAGE, INVALID_EMAIL_MESSAGE,
        MISSING_EMAIL_MESSAGE, MISSING_FIELDS_MESSAGE,
    };
    use crate::repositories::lead_repository::{LeadError, MockLeadStore};
    use crate::test_support::{
        body_json, post_json, post_json_from, post_raw, state_with_leads, test_state,
    };
    use axum::http::StatusCode;
    use diesel::result::Error as DieselError;
    use serde_json::json;

    #[tokio::test]
    async fn empty_message_never_reaches_the_store() {
        let mut store = MockLeadStore::new();
        store.expect_insert_inquiry().times(0);
        let state = state_with_leads(store);

        let response = post_json(
            state,
            "/api/contact",
            json!({"name": "Ada", "email": "ada@example.com", "message": "   "}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "missing_fields");
        assert_eq!(body["error"], MISSING_FIELDS_MESSAGE);
    }

    #[tokio::test]
    async fn valid_contact_is_stored_with_optional_fields_cleaned() {
        let mut store = MockLeadStore::new();
        store
            .expect_insert_inquiry()
            .withf(|inquiry| {
                inquiry.name == "Ada"
                    && inquiry.phone.is_none()
                    && inquiry.project_type.as_deref() == Some("residential")
            })
            .times(1)
            .returning(|_| Ok(()));
        let state = state_with_leads(store);

        let response = post_json(
            state,
            "/api/contact",
            json!({
                "name": " Ada ",
                "email": "ada@example.com",
                "phone": "",
                "project_type": "residential",
                "message": "A home that feeds the grid."
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"success": true}));
    }

    #[tokio::test]
    async fn contact_store_failure_is_generic() {
        let mut store = MockLeadStore::new();
        store
            .expect_insert_inquiry()
            .returning(|_| Err(LeadError::Query(DieselError::BrokenTransactionManager)));
        let state = state_with_leads(store);

        let response = post_json(
            state,
            "/api/contact",
            json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["code"], "store_failure");
        assert_eq!(body["error"], CONTACT_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn newsletter_email_is_normalized_before_insert() {
        let mut store = MockLeadStore::new();
        store
            .expect_insert_subscriber()
            .withf(|email, _| email == "reader@example.com")
            .times(1)
            .returning(|_, _| Ok(()));
        let state = state_with_leads(store);

        let response = post_json(state, "/api/newsletter", json!({"email": " Reader@Example.com "})).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_email_is_rejected_without_insert() {
        let mut store = MockLeadStore::new();
        store.expect_insert_subscriber().times(0);
        let state = state_with_leads(store);

        let response = post_json(state, "/api/newsletter", json!({"email": "not-an-email"})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "invalid_email");
        assert_eq!(body["error"], INVALID_EMAIL_MESSAGE);
    }

    #[tokio::test]
    async fn second_signup_reports_already_subscribed() {
        let state = test_state();

        let first = post_json(state.clone(), "/api/newsletter", json!({"email": "reader@example.com"})).await;
        assert_eq!(first.status(), StatusCode::OK);

        let second = post_json(state.clone(), "/api/newsletter", json!({"email": "READER@example.com"})).await;
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let body = body_json(second).await;
        assert_eq!(body["code"], "already_subscribed");
        assert_eq!(body["error"], ALREADY_SUBSCRIBED_MESSAGE);

        let repo = crate::test_support::lead_repository(&state);
        assert_eq!(repo.subscriber_count("reader@example.com").unwrap(), 1);
    }

    #[tokio::test]
    async fn clients_are_rate_limited_separately() {
        let mut store = MockLeadStore::new();
        store.expect_insert_subscriber().returning(|_, _| Ok(()));
        let state = state_with_leads(store);

        for i in 0..5 {
            let response = post_json_from(
                state.clone(),
                "203.0.113.9",
                "/api/newsletter",
                json!({"email": format!("reader{}@example.com", i)}),
            )
            .await;
            assert_eq!(response.status(), StatusCode::OK);
        }

        let limited = post_json_from(
            state.clone(),
            "203.0.113.9",
            "/api/newsletter",
            json!({"email": "late@example.com"}),
        )
        .await;
        assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body_json(limited).await["code"], "rate_limited");

        let other = post_json_from(
            state,
            "198.51.100.4",
            "/api/newsletter",
            json!({"email": "other@example.com"}),
        )
        .await;
        assert_eq!(other.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_json_still_answers_with_lead_result() {
        let mut store = MockLeadStore::new();
        store.expect_insert_subscriber().times(0);
        let state = state_with_leads(store);

        let response = post_raw(state, "/api/newsletter", "application/json", "{not json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "missing_fields");
        assert_eq!(body["error"], MISSING_EMAIL_MESSAGE);
    }

    #[tokio::test]
    async fn wrong_content_type_and_field_types_answer_with_lead_result() {
        let mut store = MockLeadStore::new();
        store.expect_insert_inquiry().times(0);
        store.expect_insert_subscriber().times(0);
        let state = state_with_leads(store);

        let plain = post_raw(
            state.clone(),
            "/api/contact",
            "text/plain",
            r#"{"name":"Ada","email":"ada@example.com","message":"Hi"}"#,
        )
        .await;
        assert_eq!(plain.status(), StatusCode::BAD_REQUEST);
        let body = body_json(plain).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "missing_fields");
        assert_eq!(body["error"], MISSING_FIELDS_MESSAGE);

        let mistyped = post_json(state, "/api/newsletter", json!({"email": 5})).await;
        assert_eq!(mistyped.status(), StatusCode::BAD_REQUEST);
        let body = body_json(mistyped).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "missing_fields");
    }
}
