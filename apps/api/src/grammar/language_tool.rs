//! LanguageTool client: the single point of entry for grammar checking calls.
//!
//! Speaks the public `/v2/check` API (also served by self-hosted LanguageTool).
//! The language profile is fixed at construction. No retries: a failed call
//! surfaces as `GrammarError` and the request fails.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::grammar::{GrammarChecker, GrammarError, RawIssue};

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<RawIssue>,
}

/// Thread-safe: `reqwest::Client` pools connections internally and is cheap to clone.
#[derive(Clone)]
pub struct LanguageToolChecker {
    client: Client,
    endpoint: String,
    language: String,
    timeout_secs: u64,
}

impl LanguageToolChecker {
    pub fn new(endpoint: String, language: String, timeout_secs: u64) -> Result<Self, GrammarError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            language,
            timeout_secs,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

#[async_trait]
impl GrammarChecker for LanguageToolChecker {
    async fn check(&self, text: &str) -> Result<Vec<RawIssue>, GrammarError> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GrammarError::Timeout(self.timeout_secs)
                } else {
                    GrammarError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LanguageTool returned {}: {}", status, body);
            return Err(GrammarError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: CheckResponse = response.json().await?;
        debug!(
            "LanguageTool check succeeded: chars={}, matches={}",
            text.chars().count(),
            parsed.matches.len()
        );

        Ok(parsed.matches)
    }
}
