use crate::error::AnalyzeError;
use crate::models::NutritionResult;

/// Transport-shaped response. The serving layer only copies these fields
/// onto the wire, which keeps the whole contract testable without a
/// running server.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

// Browsers call this API cross-origin, so every response carries the
// permissive origin header, errors included.
const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");
const CONTENT_TYPE_JSON: (&str, &str) = ("Content-Type", "application/json");

/// Empty 200 for the browser pre-flight probe.
pub fn preflight() -> HttpResponse {
    HttpResponse {
        status: 200,
        headers: vec![
            ALLOW_ORIGIN,
            ("Access-Control-Allow-Methods", "POST, OPTIONS"),
            ("Access-Control-Allow-Headers", "Content-Type"),
            ("Access-Control-Max-Age", "86400"),
        ],
        body: String::new(),
    }
}

/// 200 with the serialized analysis. serde_json leaves non-ASCII text
/// as-is, so Russian dish names reach the client unescaped.
pub fn success(result: &NutritionResult) -> HttpResponse {
    match serde_json::to_string(result) {
        Ok(body) => json_response(200, body),
        Err(err) => error(&AnalyzeError::Upstream(err.to_string())),
    }
}

pub fn error(err: &AnalyzeError) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    json_response(err.status(), body.to_string())
}

fn json_response(status: u16, body: String) -> HttpResponse {
    HttpResponse {
        status,
        headers: vec![CONTENT_TYPE_JSON, ALLOW_ORIGIN],
        body,
    }
}
