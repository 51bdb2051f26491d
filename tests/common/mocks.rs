use async_trait::async_trait;
use chasm_bridge::{
    Error, Result,
    workflow::{InferenceParams, InferenceWorkflow},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Mock inference workflow for testing
pub struct MockWorkflow {
    pub result: Value,
    pub requests: Arc<Mutex<Vec<InferenceParams>>>,
    pub error: Option<String>,
}

impl MockWorkflow {
    pub fn returning(result: Value) -> Self {
        Self {
            result,
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            result: Value::Null,
            requests: Arc::new(Mutex::new(Vec::new())),
            error: Some(error.into()),
        }
    }

    pub fn requests(&self) -> Vec<InferenceParams> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceWorkflow for MockWorkflow {
    async fn inference(&self, params: InferenceParams) -> Result<Value> {
        self.requests.lock().unwrap().push(params);

        if let Some(ref error) = self.error {
            return Err(Error::workflow(error.clone()));
        }

        Ok(self.result.clone())
    }
}
