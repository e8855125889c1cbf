//! Google Gemini 구조화 출력 어댑터.

use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use crate::application::ports::StructuredGenerator;
use crate::domain::generation::{GeneratedText, GenerationRequest, TokenUsage};
use crate::infrastructure::config::{GeminiConfig, resolve_api_key};

use super::api_runner::{build_api_client, send_json};
use super::schema::response_schema;

pub struct GeminiGenerator {
    client: Client,
    base_url: String,
    model: String,
    credential: Option<String>,
}

impl GeminiGenerator {
    /// 시작 시점에 한 번 자격 증명을 읽는다. 없으면 호출 시점에 실패한다.
    pub fn from_config(config: &GeminiConfig) -> Self {
        let resolution = resolve_api_key(config);
        debug!(source = ?resolution.source, "gemini credential resolved");
        Self {
            client: build_api_client(config.timeout()),
            base_url: config.api_base(),
            model: config.model(),
            credential: resolution.credential,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

/// 프롬프트와 응답 형태 선언을 담은 요청 본문.
pub(crate) fn build_payload(request: &GenerationRequest) -> Value {
    json!({
        "contents": [
            {
                "role": "user",
                "parts": [
                    { "text": request.prompt }
                ]
            }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema(request.mode)
        }
    })
}

/// 첫 후보의 텍스트 파트를 이어 붙인다. 사고(thought) 파트는 제외한다.
pub(crate) fn extract_text(response: &Value) -> Result<String> {
    let Some(candidate) = response.pointer("/candidates/0") else {
        if let Some(reason) = response
            .pointer("/promptFeedback/blockReason")
            .and_then(Value::as_str)
        {
            bail!("Gemini: prompt blocked ({reason})");
        }
        bail!("Gemini: response has no candidates");
    };

    let text = candidate
        .pointer("/content/parts")
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter(|part| !part.get("thought").and_then(Value::as_bool).unwrap_or(false))
                .filter_map(|part| part.get("text").and_then(Value::as_str))
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = candidate
            .get("finishReason")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        bail!("Gemini: empty response content (finishReason={reason})");
    }
    Ok(text)
}

pub(crate) fn extract_usage(response: &Value) -> TokenUsage {
    TokenUsage {
        prompt_tokens: response
            .pointer("/usageMetadata/promptTokenCount")
            .and_then(Value::as_u64),
        completion_tokens: response
            .pointer("/usageMetadata/candidatesTokenCount")
            .and_then(Value::as_u64),
        total_tokens: response
            .pointer("/usageMetadata/totalTokenCount")
            .and_then(Value::as_u64),
    }
}

#[async_trait]
impl StructuredGenerator for GeminiGenerator {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedText> {
        let Some(credential) = &self.credential else {
            bail!("Gemini: API key is not configured (set GEMINI_API_KEY or gemini.api_key)");
        };

        let endpoint = self.endpoint();
        let payload = build_payload(request);

        // Gemini는 API key(query) 또는 OAuth(Bearer) 방식 모두 허용한다.
        let builder = if credential.starts_with("AIza") {
            let mut url = Url::parse(&endpoint)?;
            url.query_pairs_mut().append_pair("key", credential);
            self.client.post(url)
        } else {
            self.client.post(endpoint).bearer_auth(credential)
        };

        let response = send_json(self.name(), "request Gemini API", builder.json(&payload)).await?;

        Ok(GeneratedText {
            text: extract_text(&response)?,
            usage: extract_usage(&response),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mode::GenerationMode;

    #[test]
    fn payload_declares_json_shape() {
        let payload = build_payload(&GenerationRequest {
            mode: GenerationMode::Copy,
            prompt: "Write copy".to_string(),
        });
        assert_eq!(payload["contents"][0]["parts"][0]["text"], "Write copy");
        assert_eq!(
            payload["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            payload["generationConfig"]["responseSchema"]["required"][0],
            "hook"
        );
    }

    #[test]
    fn extracts_joined_text_parts() {
        let response = json!({
            "candidates": [{
                "content": { "role": "model", "parts": [
                    { "text": "thinking", "thought": true },
                    { "text": "{\"hook\":" },
                    { "text": "\"h\"}" }
                ]},
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 30, "totalTokenCount": 42 }
        });
        assert_eq!(extract_text(&response).unwrap(), "{\"hook\":\"h\"}");
        let usage = extract_usage(&response);
        assert_eq!(usage.total_tokens, Some(42));
        assert_eq!(usage.completion_tokens, Some(30));
    }

    #[test]
    fn blocked_prompt_is_reported() {
        let response = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = extract_text(&response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn empty_candidate_is_an_error() {
        let response = json!({ "candidates": [{ "finishReason": "MAX_TOKENS" }] });
        let err = extract_text(&response).unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));
    }

    #[tokio::test]
    async fn missing_credential_fails_at_call_time() {
        let config = GeminiConfig {
            api_key_env: Some("SHOPARCH_TEST_UNSET_KEY".to_string()),
            ..GeminiConfig::default()
        };
        let generator = GeminiGenerator::from_config(&config);
        assert_eq!(generator.model(), "gemini-3-flash-preview");

        let err = generator
            .generate(&GenerationRequest {
                mode: GenerationMode::Strategy,
                prompt: "p".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("API key is not configured"));
    }
}
