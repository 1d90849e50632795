use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// Require `Authorization: Bearer <API_TOKEN>` on the request.
///
/// When no token is configured the service runs in dev mode and every
/// request passes through.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let Some(expected) = state.config.api_token.as_deref() else {
        return Ok(next.run(request).await);
    };

    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        Some(token) if token == expected => Ok(next.run(request).await),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::body::Body;
    use axum::middleware as axum_middleware;
    use axum::routing::get;
    use axum::Router;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(api_token: Option<&str>) -> Router {
        let state = AppState {
            config: Arc::new(AppConfig {
                api_token: api_token.map(String::from),
                port: 8000,
            }),
        };

        Router::new()
            .route("/test", get(|| async { "ok" }))
            .route_layer(axum_middleware::from_fn_with_state(
                state.clone(),
                require_auth,
            ))
            .with_state(state)
    }

    async fn send(app: Router, auth_header: Option<&str>) -> StatusCode {
        let mut request = axum::http::Request::builder().uri("/test");
        if let Some(value) = auth_header {
            request = request.header("authorization", value);
        }

        let response = app
            .oneshot(request.body(Body::empty()).expect("request"))
            .await
            .expect("response");

        response.status()
    }

    #[tokio::test]
    async fn auth_disabled_passes_through() {
        assert_eq!(send(test_app(None), None).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_header_returns_401() {
        assert_eq!(
            send(test_app(Some("secret")), None).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn malformed_header_returns_401() {
        assert_eq!(
            send(test_app(Some("secret")), Some("Token secret")).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn wrong_token_returns_401() {
        assert_eq!(
            send(test_app(Some("secret")), Some("Bearer wrong")).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn correct_token_passes_through() {
        assert_eq!(
            send(test_app(Some("secret")), Some("Bearer secret")).await,
            StatusCode::OK
        );
    }
}
