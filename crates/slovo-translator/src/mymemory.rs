use async_trait::async_trait;
use serde_json::Value;

use crate::{
    LanguageCode, ProviderKind, ProviderMetadata, TranslateError, Translation, Translator,
};

pub const MYMEMORY_URL: &str = "https://api.mymemory.translated.net/get";

/// Free MyMemory translation memory API
#[derive(Clone)]
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    api_url: String,
    contact_email: Option<String>,
}

impl MyMemoryTranslator {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: MYMEMORY_URL.to_string(),
            contact_email: None,
        }
    }

    pub fn with_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }

    pub fn with_contact_email(mut self, email: Option<String>) -> Self {
        self.contact_email = email.filter(|e| !e.trim().is_empty());
        self
    }
}

impl Default for MyMemoryTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// `responseStatus` comes back as a number on success and as a string on some errors
fn response_status(json: &Value) -> Option<u64> {
    match &json["responseStatus"] {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn parse_response(json: &Value) -> Result<(String, Vec<String>), TranslateError> {
    let status = response_status(json);
    if status != Some(200) {
        let details = json["responseDetails"]
            .as_str()
            .filter(|d| !d.is_empty())
            .unwrap_or("unknown");
        return Err(TranslateError::ApiError(format!(
            "status {}: {}",
            status.map(|s| s.to_string()).unwrap_or_else(|| "missing".to_string()),
            details
        )));
    }

    let text = json["responseData"]["translatedText"]
        .as_str()
        .ok_or_else(|| {
            TranslateError::MalformedResponse("no responseData.translatedText".to_string())
        })?;

    let mut alternatives: Vec<String> = Vec::new();
    if let Some(matches) = json["matches"].as_array() {
        for m in matches {
            if let Some(alt) = m["translation"].as_str()
                && alt != text
                && !alternatives.iter().any(|a| a == alt)
            {
                alternatives.push(alt.to_string());
            }
        }
    }

    Ok((text.to_string(), alternatives))
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let langpair = format!("{}|{}", from, to);
        let mut params = vec![("q", text), ("langpair", langpair.as_str())];
        if let Some(email) = &self.contact_email {
            params.push(("de", email.as_str()));
        }

        let response = self
            .client
            .get(&self.api_url)
            .header("Accept", "application/json")
            .query(&params)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: Value = response.json().await.map_err(|e| {
            TranslateError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        let (translated, alternatives) = parse_response(&json)?;

        Ok(Translation {
            text: translated,
            from,
            to,
            provider: "mymemory".to_string(),
            confidence: json["responseData"]["match"].as_f64().map(|m| m as f32),
            alternatives,
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "MyMemory".to_string(),
            kind: ProviderKind::MachineTranslation,
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_success() {
        let body = json!({
            "responseStatus": 200,
            "responseData": { "translatedText": "привіт", "match": 1 },
            "matches": [
                { "translation": "привіт" },
                { "translation": "вітаю" }
            ]
        });

        let (text, alternatives) = parse_response(&body).unwrap();
        assert_eq!(text, "привіт");
        assert_eq!(alternatives, vec!["вітаю".to_string()]);
    }

    #[test]
    fn test_parse_string_status_error() {
        let body = json!({
            "responseStatus": "403",
            "responseDetails": "INVALID LANGUAGE PAIR SPECIFIED",
            "responseData": { "translatedText": "" }
        });

        let err = parse_response(&body).unwrap_err();
        assert!(matches!(err, TranslateError::ApiError(msg) if msg.contains("403")));
    }

    #[test]
    fn test_parse_missing_field() {
        let body = json!({ "responseStatus": 200, "responseData": {} });
        assert!(matches!(
            parse_response(&body),
            Err(TranslateError::MalformedResponse(_))
        ));
    }
}
