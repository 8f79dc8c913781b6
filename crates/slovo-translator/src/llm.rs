use async_trait::async_trait;
use serde_json::json;

use crate::{
    LanguageCode, ProviderKind, ProviderMetadata, TranslateError, Translation, Translator,
};

pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI-compatible chat completion endpoint prompted for one-word answers
#[derive(Clone)]
pub struct LlmTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl LlmTranslator {
    pub fn new(api_key: String, model: String, api_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url: api_url.unwrap_or_else(|| OPENAI_CHAT_URL.to_string()),
            model,
        }
    }

    fn prompt(text: &str, from: &str, to: &str) -> String {
        format!(
            "Translate the {from} word \"{text}\" into {to}. \
             Reply with the translation only, no quotes, no explanation."
        )
    }
}

/// Models like to wrap answers in quotes or end them with a period
pub(crate) fn clean_answer(answer: &str) -> String {
    answer
        .trim()
        .trim_end_matches('.')
        .trim_matches(|c| matches!(c, '"' | '\'' | '«' | '»' | '“' | '”'))
        .trim_end_matches('.')
        .trim()
        .to_string()
}

#[async_trait]
impl Translator for LlmTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let body = json!({
            "model": self.model,
            "temperature": 0,
            "max_tokens": 60,
            "messages": [
                { "role": "system", "content": "You are a terse bilingual dictionary." },
                { "role": "user", "content": Self::prompt(text, &from, &to) }
            ]
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        match response.status().as_u16() {
            401 | 403 => return Err(TranslateError::AuthenticationError),
            429 => return Err(TranslateError::RateLimitExceeded),
            _ => {}
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        let content = json["choices"]
            .get(0)
            .and_then(|c| c["message"]["content"].as_str())
            .ok_or_else(|| {
                TranslateError::MalformedResponse("No message content in response".to_string())
            })?;

        Ok(Translation {
            text: clean_answer(content),
            from,
            to,
            provider: self.model.clone(),
            confidence: None,
            alternatives: vec![],
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: format!("LLM ({})", self.model),
            kind: ProviderKind::Llm,
            requires_api_key: true,
            free_tier_available: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_answer() {
        assert_eq!(clean_answer(" \"кіт\".\n"), "кіт");
        assert_eq!(clean_answer("«собака»"), "собака");
        assert_eq!(clean_answer("дім"), "дім");
    }
}
