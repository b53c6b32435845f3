//! Remote HTTP providers
//!
//! One POST per call: `{"preset": .., "input": <prompt>}` with a bearer
//! token read from the endpoint's credential variable. The answer is the
//! `output` field of the JSON reply.

use super::environment::HostEnvironment;
use super::timeout_reason;
use council_domain::{InvocationOutcome, RemoteEndpoint};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct RemoteRequest<'a> {
    preset: &'a str,
    input: &'a str,
}

/// Calls a [`RemoteEndpoint`] once per call
pub struct RemoteInvoker {
    client: reqwest::Client,
    env: Arc<dyn HostEnvironment>,
}

impl RemoteInvoker {
    pub fn new(env: Arc<dyn HostEnvironment>) -> Self {
        Self {
            client: reqwest::Client::new(),
            env,
        }
    }

    pub async fn invoke(
        &self,
        endpoint: &RemoteEndpoint,
        prompt: &str,
        timeout: Duration,
    ) -> InvocationOutcome {
        // Re-read: the variable may have been cleared since the registry was built
        let Some(api_key) = self
            .env
            .var(&endpoint.api_key_env)
            .filter(|key| !key.trim().is_empty())
        else {
            return InvocationOutcome::failure(format!("{} not set", endpoint.api_key_env));
        };

        debug!("POST {} (preset {})", endpoint.url, endpoint.preset);

        let body = RemoteRequest {
            preset: &endpoint.preset,
            input: prompt,
        };
        let response = match self
            .client
            .post(&endpoint.url)
            .bearer_auth(api_key.trim())
            .json(&body)
            .timeout(timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return InvocationOutcome::failure(describe_error(&e, timeout)),
        };

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned {}", endpoint.url, status);
            return InvocationOutcome::failure(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return InvocationOutcome::failure(describe_error(&e, timeout)),
        };

        match serde_json::from_str::<Value>(&body) {
            Ok(value) => InvocationOutcome::success(extract_answer(&value)),
            Err(e) => InvocationOutcome::failure(format!("Malformed response: {}", e)),
        }
    }
}

fn describe_error(e: &reqwest::Error, timeout: Duration) -> String {
    if e.is_timeout() {
        timeout_reason(timeout)
    } else if e.is_connect() {
        format!("Connection error: {}", e)
    } else if e.is_decode() {
        format!("Malformed response: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}

/// `output` as-is when it is a string, compact JSON when it is anything
/// else, and the whole body when the field is absent.
fn extract_answer(value: &Value) -> String {
    match value.get("output") {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => value.to_string(),
    }
}
