use axum::async_trait;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that validates the payload before the handler runs.
///
/// Undecodable bodies, missing fields and a wrong content type are rejected as
/// `400 Bad Request` with the decoder's message. Field rules declared with
/// `#[validate(...)]` are checked next and also surface as `400`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(anyhow::anyhow!(rejection.body_text())))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode, header},
        routing::post,
    };
    use serde::Deserialize;
    use tower::util::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
    }

    async fn echo(ValidatedJson(payload): ValidatedJson<Payload>) -> String {
        payload.name
    }

    async fn post_json(body: &'static str) -> StatusCode {
        let app = Router::new().route("/", post(echo));
        app.oneshot(
            HttpRequest::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
    }

    #[tokio::test]
    async fn accepts_valid_payload() {
        assert_eq!(post_json(r#"{"name":"ok"}"#).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_field_is_bad_request() {
        assert_eq!(post_json(r#"{}"#).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn failed_rule_is_bad_request() {
        assert_eq!(post_json(r#"{"name":""}"#).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        assert_eq!(post_json("{not json").await, StatusCode::BAD_REQUEST);
    }
}
