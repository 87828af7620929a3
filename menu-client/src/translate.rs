//! Best-effort translation
//!
//! Every failure (network, HTTP status, unexpected body, non-200
//! `responseStatus`) falls back to the original text. Callers never see an
//! error from this module.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::ClientConfig;
use crate::language::Language;

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text`, or return it unchanged when translation fails
    async fn translate(&self, text: &str, source: Language, target: Language) -> String;

    /// Translate a batch concurrently, item order preserved, same per-item fallback
    async fn translate_many(
        &self,
        texts: &[String],
        source: Language,
        target: Language,
    ) -> Vec<String> {
        futures::future::join_all(texts.iter().map(|t| self.translate(t, source, target))).await
    }
}

/// Translator backed by the public MyMemory API
#[derive(Debug, Clone)]
pub struct MyMemoryTranslator {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    #[serde(default)]
    response_data: Option<MyMemoryData>,
    /// Usually a number, sometimes a string ("403")
    #[serde(default)]
    response_status: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryData {
    translated_text: Option<String>,
}

impl MyMemoryResponse {
    fn is_ok(&self) -> bool {
        match &self.response_status {
            serde_json::Value::Number(n) => n.as_u64() == Some(200),
            serde_json::Value::String(s) => s == "200",
            _ => false,
        }
    }
}

impl MyMemoryTranslator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> crate::ClientResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> crate::ClientResult<Self> {
        Self::new(
            &config.translate_url,
            Duration::from_secs(config.translate_timeout),
        )
    }

    async fn request(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<Option<String>, reqwest::Error> {
        let langpair = format!("{}|{}", source.code(), target.code());
        let body: MyMemoryResponse = self
            .client
            .get(&self.endpoint)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !body.is_ok() {
            tracing::debug!(status = %body.response_status, "Translation service declined");
            return Ok(None);
        }
        Ok(body
            .response_data
            .and_then(|d| d.translated_text)
            .filter(|t| !t.is_empty()))
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(&self, text: &str, source: Language, target: Language) -> String {
        if text.trim().is_empty() || source == target {
            return text.to_string();
        }

        match self.request(text, source, target).await {
            Ok(Some(translated)) => translated,
            Ok(None) => text.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "Translation unavailable, keeping original text");
                text.to_string()
            }
        }
    }
}
