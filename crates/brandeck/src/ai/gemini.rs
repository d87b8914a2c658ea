use anyhow::{Context, Result};
use serde_json::{Value, json};

use super::{
    ASPECT_RATIO, CopyKind, EMPTY_COPY_FALLBACK, Resolution, THINKING_BUDGET,
    brand_voice_instruction, enhance_image_prompt,
};
use crate::config::AiConfig;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Image responses at 4K easily exceed ureq's default body limit.
const MAX_RESPONSE_BYTES: u64 = 64 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    image_model: String,
    text_model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, image_model: String, text_model: String) -> Self {
        Self {
            api_key,
            image_model,
            text_model,
        }
    }

    /// Build a client from config, or `None` when no key is resolvable.
    pub fn from_config(ai: &AiConfig) -> Option<Self> {
        let api_key = ai.resolve_api_key()?;
        Some(Self::new(
            api_key,
            ai.image_model().to_string(),
            ai.text_model().to_string(),
        ))
    }

    /// Generate a 16:9 architectural render. Returns the encoded image bytes.
    pub fn generate_image(&self, subject: &str, resolution: Resolution) -> Result<Vec<u8>> {
        tracing::info!(
            model = %self.image_model,
            size = resolution.image_size(),
            "requesting image"
        );
        let body = image_request(subject, resolution);
        let response = self.post(&self.image_model, &body)?;
        parse_image_response(&response)
    }

    /// Draft brand copy of the given kind about `topic`.
    pub fn generate_copy(&self, topic: &str, kind: CopyKind) -> Result<String> {
        tracing::info!(model = %self.text_model, kind = kind.name(), "requesting copy");
        let body = copy_request(topic, kind);
        let response = self.post(&self.text_model, &body)?;
        Ok(parse_copy_response(&response))
    }

    fn post(&self, model: &str, body: &Value) -> Result<Value> {
        let url = format!("{API_BASE}/{model}:generateContent?key={}", self.api_key);

        let response: Value = ureq::post(&url)
            .header("Content-Type", "application/json")
            .send_json(body)
            .context("Failed to call Gemini API")?
            .body_mut()
            .with_config()
            .limit(MAX_RESPONSE_BYTES)
            .read_json()
            .context("Failed to parse Gemini response")?;

        if let Some(message) = response["error"]["message"].as_str() {
            anyhow::bail!("Gemini API error: {message}");
        }
        Ok(response)
    }
}

fn image_request(subject: &str, resolution: Resolution) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": enhance_image_prompt(subject) }]
        }],
        "generationConfig": {
            "responseModalities": ["TEXT", "IMAGE"],
            "imageConfig": {
                "aspectRatio": ASPECT_RATIO,
                "imageSize": resolution.image_size()
            }
        }
    })
}

fn copy_request(topic: &str, kind: CopyKind) -> Value {
    json!({
        "systemInstruction": {
            "parts": [{ "text": brand_voice_instruction(topic, kind) }]
        },
        "contents": [{
            "role": "user",
            "parts": [{ "text": topic }]
        }],
        "generationConfig": {
            "thinkingConfig": { "thinkingBudget": THINKING_BUDGET }
        }
    })
}

fn response_parts(response: &Value) -> &[Value] {
    response["candidates"][0]["content"]["parts"]
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Pull the first inline image out of a response.
fn parse_image_response(response: &Value) -> Result<Vec<u8>> {
    for part in response_parts(response) {
        if let Some(b64) = part["inlineData"]["data"].as_str() {
            use base64::Engine;
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(b64)
                .context("Failed to decode base64 image data from Gemini")?;
            return Ok(bytes);
        }
    }

    anyhow::bail!("No image data returned.")
}

/// Join the visible text parts, skipping thought summaries.
fn parse_copy_response(response: &Value) -> String {
    let text: String = response_parts(response)
        .iter()
        .filter(|part| !part["thought"].as_bool().unwrap_or(false))
        .filter_map(|part| part["text"].as_str())
        .collect();

    let text = text.trim();
    if text.is_empty() {
        EMPTY_COPY_FALLBACK.to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_request_shape() {
        let body = image_request("concrete pavilion", Resolution::FourK);
        let config = &body["generationConfig"]["imageConfig"];
        assert_eq!(config["aspectRatio"], "16:9");
        assert_eq!(config["imageSize"], "4K");
        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("Subject: concrete pavilion."));
    }

    #[test]
    fn test_copy_request_shape() {
        let body = copy_request("studio opening", CopyKind::Description);
        assert_eq!(body["contents"][0]["parts"][0]["text"], "studio opening");
        assert_eq!(
            body["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            32768
        );
        let instruction = body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(instruction.contains("Write a description about: studio opening."));
    }

    #[test]
    fn test_parse_image_response_finds_inline_data() {
        let response = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is your render." },
                        { "inlineData": { "mimeType": "image/png", "data": "iVBORw0K" } }
                    ]
                }
            }]
        });
        let bytes = parse_image_response(&response).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_parse_image_response_without_image() {
        let response = json!({
            "candidates": [{ "content": { "parts": [{ "text": "Sorry." }] } }]
        });
        let err = parse_image_response(&response).unwrap_err();
        assert!(err.to_string().contains("No image data"));

        assert!(parse_image_response(&json!({})).is_err());
    }

    #[test]
    fn test_parse_copy_response_skips_thoughts() {
        let response = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Planning the caption...", "thought": true },
                        { "text": "Light. Proportion. " },
                        { "text": "Structure." }
                    ]
                }
            }]
        });
        assert_eq!(
            parse_copy_response(&response),
            "Light. Proportion. Structure."
        );
    }

    #[test]
    fn test_parse_copy_response_fallback() {
        assert_eq!(parse_copy_response(&json!({})), EMPTY_COPY_FALLBACK);
        let blank = json!({
            "candidates": [{ "content": { "parts": [{ "text": "   " }] } }]
        });
        assert_eq!(parse_copy_response(&blank), EMPTY_COPY_FALLBACK);
    }

    #[test]
    fn test_client_requires_key() {
        let ai = AiConfig {
            api_key: Some("k".to_string()),
            text_model: Some("custom-text".to_string()),
            ..Default::default()
        };
        let client = GeminiClient::from_config(&ai).unwrap();
        assert_eq!(client.text_model, "custom-text");
        assert_eq!(client.image_model, crate::config::DEFAULT_IMAGE_MODEL);
    }
}
