use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::response::Response;
use axum::routing::{any, get};
use axum::Router;

use crate::handlers::AnalyzeHandler;
use crate::response::HttpResponse;

pub fn create_router(handler: Arc<AnalyzeHandler>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/analyze-dish", any(analyze_dish))
        .route("/health", get(health_check))
        .with_state(handler)
}

/// Method dispatch (405, the OPTIONS probe) belongs to the handler, so the
/// route accepts every method and forwards it as-is.
async fn analyze_dish(
    State(handler): State<Arc<AnalyzeHandler>>,
    method: Method,
    body: String,
) -> Response {
    into_axum_response(handler.handle(method.as_str(), &body).await)
}

fn into_axum_response(reply: HttpResponse) -> Response {
    let mut response = Response::new(Body::from(reply.body));
    *response.status_mut() =
        StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    for (name, value) in reply.headers {
        if let (Ok(name), Ok(value)) = (HeaderName::try_from(name), HeaderValue::try_from(value)) {
            response.headers_mut().insert(name, value);
        }
    }

    response
}

async fn root_handler() -> &'static str {
    "Dish Analysis API - POST /analyze-dish with {\"image\": \"<base64>\"}"
}

async fn health_check() -> &'static str {
    "OK"
}
