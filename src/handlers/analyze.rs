use std::sync::Arc;

use serde::Deserialize;

use crate::error::AnalyzeError;
use crate::models::NutritionResult;
use crate::prompt::DISH_ANALYSIS_PROMPT;
use crate::response::{self, HttpResponse};
use crate::services::DishAnalysis;

/// Body of an analysis request. Anything beyond `image` is ignored.
#[derive(Debug, Default, Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    image: Option<String>,
}

pub struct AnalyzeHandler {
    /// `None` when no API key was configured at startup; requests then get
    /// a configuration error before any provider call is attempted.
    analyzer: Option<Arc<dyn DishAnalysis>>,
}

impl AnalyzeHandler {
    pub fn new(analyzer: Option<Arc<dyn DishAnalysis>>) -> Self {
        Self { analyzer }
    }

    /// The whole request-to-response transformation: validate, call the
    /// vision model, extract the structured reply. Every failure short-
    /// circuits into a JSON error response with the matching status.
    pub async fn handle(&self, method: &str, body: &str) -> HttpResponse {
        if method == "OPTIONS" {
            return response::preflight();
        }

        match self.analyze(method, body).await {
            Ok(result) => {
                log::info!("✅ Dish analyzed: {} ({} kcal)", result.dish_name, result.calories);
                response::success(&result)
            }
            Err(err) => {
                log::warn!("⚠️ Analysis request failed: {}", err);
                response::error(&err)
            }
        }
    }

    async fn analyze(&self, method: &str, body: &str) -> Result<NutritionResult, AnalyzeError> {
        if method != "POST" {
            return Err(AnalyzeError::MethodNotAllowed);
        }

        let request = parse_request_body(body)?;
        let image = request
            .image
            .filter(|image| !image.is_empty())
            .ok_or(AnalyzeError::MissingImage)?;

        // Configuration is checked last among the request errors so a
        // misconfigured deployment still reports bad requests accurately.
        let analyzer = self.analyzer.as_ref().ok_or(AnalyzeError::MissingApiKey)?;

        log::info!("📸 Analyzing dish image ({} base64 chars)", image.len());
        let reply = analyzer
            .analyze_image(&image, DISH_ANALYSIS_PROMPT)
            .await
            .map_err(|err| AnalyzeError::Upstream(err.to_string()))?;

        parse_nutrition_reply(&reply)
    }
}

/// An empty or blank body counts as `{}`, so it fails on the missing image
/// rather than on JSON syntax.
fn parse_request_body(body: &str) -> Result<AnalyzeRequest, AnalyzeError> {
    if body.trim().is_empty() {
        return Ok(AnalyzeRequest::default());
    }
    serde_json::from_str(body).map_err(|_| AnalyzeError::InvalidRequestBody)
}

/// Models wrap structured output in prose or code fences, so take the slice
/// between the first `{` and the last `}` instead of parsing the full reply.
/// No bracket balancing, the plain scan is the contract.
fn extract_json_object(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&reply[start..=end])
}

fn parse_nutrition_reply(reply: &str) -> Result<NutritionResult, AnalyzeError> {
    let json = extract_json_object(reply).ok_or_else(|| {
        AnalyzeError::MalformedModelOutput("no JSON object in model reply".to_string())
    })?;

    serde_json::from_str(json).map_err(|err| AnalyzeError::MalformedModelOutput(err.to_string()))
}
