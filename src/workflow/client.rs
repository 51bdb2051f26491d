use super::types::InferenceParams;
use crate::{Error, Result, config::ProviderConfig};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait InferenceWorkflow: Send + Sync {
    async fn inference(&self, params: InferenceParams) -> Result<Value>;
}

/// Client for one named Chasm.net closed-source-software inference endpoint.
///
/// Built once per endpoint at startup and shared read-only across requests.
pub struct CssWorkflow {
    client: reqwest::Client,
    url: String,
    api_key: String,
    endpoint: String,
}

impl CssWorkflow {
    pub fn new(config: &ProviderConfig, endpoint: &str) -> Result<Self> {
        // Bounded wait: a hung provider surfaces as an error instead of
        // holding the connection open indefinitely.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let url = format!("{}/{}", config.base_url.trim_end_matches('/'), endpoint);

        Ok(Self {
            client,
            url,
            api_key: config.api_key.clone(),
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl InferenceWorkflow for CssWorkflow {
    async fn inference(&self, params: InferenceParams) -> Result<Value> {
        debug!("Dispatching inference to endpoint: {}", self.endpoint);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::workflow(format!(
                "Provider returned {} for endpoint {}: {}",
                status, self.endpoint, body
            )));
        }

        let result = response.json::<Value>().await?;

        debug!("Received inference result from endpoint: {}", self.endpoint);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_config() -> ProviderConfig {
        ProviderConfig {
            base_url: "https://api.chasm.net/v1".to_string(),
            api_key: "test-api-key".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_workflow_url_joins_endpoint() {
        let workflow = CssWorkflow::new(&create_test_config(), "prompt").unwrap();

        assert_eq!(workflow.url, "https://api.chasm.net/v1/prompt");
        assert_eq!(workflow.endpoint, "prompt");
    }

    #[test]
    fn test_workflow_url_tolerates_trailing_slash() {
        let mut config = create_test_config();
        config.base_url = "https://api.chasm.net/v1/".to_string();

        let workflow = CssWorkflow::new(&config, "workflows").unwrap();

        assert_eq!(workflow.url, "https://api.chasm.net/v1/workflows");
    }
}
