//! Gemini-backed advisory gateway.
//!
//! Credentials come from the OS keyring (entry `gemini_api_key`), with the
//! `GEMINI_API_KEY` environment variable as fallback, following the same
//! credential pattern as the other external service boundaries.

use std::time::Duration;

use chrono::NaiveDate;
use log::warn;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::AdvisorError;
use crate::habit::DailyStatus;
use crate::storage::AdvisorConfig;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Returned when no API key is configured.
pub const KEY_MISSING_ADVICE: &str =
    "API Key not configured. Please set the API Key to get AI insights.";

/// Returned when the service answers successfully but with no text.
pub const EMPTY_RESPONSE_ADVICE: &str = "Keep pushing forward. You got this.";

/// Returned on any transport or service failure.
pub const FALLBACK_ADVICE: &str = "Consistency is key. Keep logging your progress.";

/// Thin wrapper around the OS keyring for credential storage.
pub mod keyring_store {
    const SERVICE: &str = "habitrack";

    pub fn get(key: &str) -> Result<Option<String>, Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.get_password() {
            Ok(pw) => Ok(Some(pw)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set(key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        entry.set_password(value)?;
        Ok(())
    }

    pub fn delete(key: &str) -> Result<(), Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Advisory gateway against the Gemini `generateContent` endpoint.
pub struct GeminiAdvisor {
    api_key: Option<String>,
    model: String,
    timeout: Duration,
    base_url: String,
}

impl GeminiAdvisor {
    /// Build from configuration, resolving the API key from the keyring
    /// and then the environment.
    pub fn new(config: &AdvisorConfig) -> Self {
        let api_key = keyring_store::get("gemini_api_key")
            .ok()
            .flatten()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|key| !key.is_empty());
        Self {
            api_key,
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the resolved API key. Used by tests and programmatic callers.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.is_empty());
        self
    }

    /// Point the gateway at a different endpoint. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Request a short motivational message for `habit_name` from its
    /// 7-day history (most recent first).
    ///
    /// Never fails: missing credentials, transport errors, service errors
    /// and empty model output each yield a fixed non-empty fallback.
    pub async fn motivation(
        &self,
        habit_name: &str,
        history: &[(NaiveDate, DailyStatus)],
    ) -> String {
        let Some(api_key) = &self.api_key else {
            return KEY_MISSING_ADVICE.to_string();
        };

        match self.generate(api_key, &coach_prompt(habit_name, history)).await {
            Ok(text) => text,
            Err(AdvisorError::EmptyResponse) => EMPTY_RESPONSE_ADVICE.to_string(),
            Err(e) => {
                warn!("advisory request for '{habit_name}' failed: {e}");
                FALLBACK_ADVICE.to_string()
            }
        }
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, AdvisorError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let client = Client::builder().timeout(self.timeout).build()?;
        let resp = client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(AdvisorError::Api { status, message });
        }

        let parsed: GenerateContentResponse = resp.json().await?;
        parsed
            .first_text()
            .filter(|text| !text.trim().is_empty())
            .ok_or(AdvisorError::EmptyResponse)
    }
}

/// The coach prompt consumed by the model. The 7-day history arrives
/// most recent first.
fn coach_prompt(habit_name: &str, history: &[(NaiveDate, DailyStatus)]) -> String {
    let lines: Vec<String> = history
        .iter()
        .map(|(date, status)| format!("{date}: {}", status.label()))
        .collect();

    format!(
        "I am tracking a habit called \"{habit_name}\".\n\
         Here is my performance for the last 7 days (most recent first):\n\
         {}\n\n\
         Act as a tough but encouraging coach.\n\
         Based on this data, give me a 2-sentence specific motivational message or piece of advice.\n\
         If I am failing, be stern. If I am winning, challenge me to keep going.\n\
         Do not use markdown. Just plain text.",
        lines.join("\n")
    )
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
    }
}
