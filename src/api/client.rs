use super::{config, errors::DeepSeekError};
use crate::session::ConversationEntry;
use futures_util::StreamExt;
use reqwest::Client;
use serde_json::{json, Value};

/// API client for the DeepSeek chat-completions endpoint.
pub struct DeepSeekApi {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

impl DeepSeekApi {
    pub fn new(api_key: String, model: String, temperature: f32) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: config::BASE_URL.to_string(),
            model,
            temperature,
        }
    }

    /// Streams one chat completion over the full conversation. Each content
    /// fragment is handed to `on_chunk` as it arrives; the return value is the
    /// concatenation of all fragments (one JSON document per the system
    /// prompt's contract).
    pub async fn stream_chat(
        &self,
        messages: &[ConversationEntry],
        mut on_chunk: impl FnMut(&str),
    ) -> Result<String, DeepSeekError> {
        log::debug!(
            "calling DeepSeek chat completions with {} messages",
            messages.len()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": messages,
                "temperature": self.temperature,
                "max_tokens": config::MAX_TOKENS,
                "response_format": {"type": "json_object"},
                "stream": true,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(DeepSeekError::ApiError(error_text));
        }

        let mut stream = response.bytes_stream();
        let mut pending = String::new();
        let mut full_content = String::new();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            pending.push_str(&String::from_utf8_lossy(&chunk));

            // SSE frames are newline-delimited; a chunk may end mid-line, so
            // only complete lines are consumed here.
            while let Some(newline) = pending.find('\n') {
                let line = pending[..newline].to_string();
                pending.drain(..=newline);
                match parse_stream_line(&line)? {
                    Some(text) => {
                        on_chunk(&text);
                        full_content.push_str(&text);
                    }
                    None => continue,
                }
            }
        }

        log::info!("DeepSeek response: {}", full_content);
        Ok(full_content)
    }
}

/// Extracts the delta content carried by one SSE line, if any. Returns
/// `Ok(None)` for keep-alives, `[DONE]`, and deltas with no content; surfaces
/// in-band `error` payloads as `ApiError`.
fn parse_stream_line(line: &str) -> Result<Option<String>, DeepSeekError> {
    let Some(data) = line.trim().strip_prefix("data:") else {
        return Ok(None);
    };
    let data = data.trim();
    if data.is_empty() || data == "[DONE]" {
        return Ok(None);
    }

    let payload: Value = match serde_json::from_str(data) {
        Ok(payload) => payload,
        // Malformed frames are skipped rather than aborting the stream.
        Err(e) => {
            log::debug!("skipping unparseable stream frame: {}", e);
            return Ok(None);
        }
    };

    if let Some(error) = payload.get("error") {
        return Err(DeepSeekError::ApiError(error.to_string()));
    }

    Ok(payload["choices"][0]["delta"]["content"]
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string))
}
