use anyhow::Result;
use serde::{Deserialize, Serialize};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Upper bound on the model reply, keeps cost and latency in check.
const MAX_RESPONSE_TOKENS: u32 = 1000;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ContentPart {
    Text {
        #[serde(rename = "type")]
        content_type: String,
        text: String,
    },
    ImageUrl {
        #[serde(rename = "type")]
        content_type: String,
        image_url: ImageData,
    },
}

#[derive(Debug, Serialize)]
struct ImageData {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Debug, Deserialize)]
struct MessageContent {
    content: String,
}

/// Vision-model seam of the pipeline. Tests script the provider reply
/// through this trait instead of hitting the network.
#[async_trait::async_trait]
pub trait DishAnalysis: Send + Sync {
    /// Sends one multimodal message (instruction text plus inlined image)
    /// and returns the model's raw text reply.
    async fn analyze_image(&self, image_base64: &str, instruction: &str) -> Result<String>;
}

pub struct OpenAiVisionService {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiVisionService {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl DishAnalysis for OpenAiVisionService {
    async fn analyze_image(&self, image_base64: &str, instruction: &str) -> Result<String> {
        // The image arrives already base64-encoded, it only needs the data
        // URI wrapper the chat API expects.
        let data_url = format!("data:image/jpeg;base64,{}", image_base64);

        let messages = vec![ChatMessage {
            role: "user".to_string(),
            content: vec![
                ContentPart::Text {
                    content_type: "text".to_string(),
                    text: instruction.to_string(),
                },
                ContentPart::ImageUrl {
                    content_type: "image_url".to_string(),
                    image_url: ImageData { url: data_url },
                },
            ],
        }];

        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            max_tokens: MAX_RESPONSE_TOKENS,
        };

        log::info!("🤖 Sending image to OpenAI with model: {}", self.model);
        log::debug!(
            "📤 Request payload size: {} bytes",
            serde_json::to_string(&request)?.len()
        );

        // Single best-effort attempt, no retries.
        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        log::debug!("📥 OpenAI response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await?;
            log::error!("❌ OpenAI API error ({}): {}", status, error_text);
            anyhow::bail!("OpenAI API error ({}): {}", status, error_text);
        }

        let chat_response: ChatResponse = response.json().await?;
        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow::anyhow!("OpenAI response contained no choices"))?;

        log::debug!("💬 OpenAI reply content: {}", content);
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multimodal_request_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        content_type: "text".to_string(),
                        text: "опиши блюдо".to_string(),
                    },
                    ContentPart::ImageUrl {
                        content_type: "image_url".to_string(),
                        image_url: ImageData {
                            url: "data:image/jpeg;base64,QUJD".to_string(),
                        },
                    },
                ],
            }],
            max_tokens: MAX_RESPONSE_TOKENS,
        };

        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains(r#""type":"text""#));
        assert!(json.contains(r#""type":"image_url""#));
        assert!(json.contains(r#""url":"data:image/jpeg;base64,QUJD""#));
        assert!(json.contains(r#""max_tokens":1000"#));
    }

    #[test]
    fn test_chat_response_parses_first_choice() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "{\"dishName\":\"Плов\"}"}}
            ]
        }"#;

        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.choices[0].message.content,
            "{\"dishName\":\"Плов\"}"
        );
    }
}
