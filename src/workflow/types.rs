use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body accepted by the provider's completion endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceParams {
    pub model: String,
    pub params: Value,
}

impl InferenceParams {
    /// The bridge always dispatches with an empty model name; the provider
    /// resolves the model per endpoint.
    pub fn with_params(params: Value) -> Self {
        Self {
            model: String::new(),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_with_params_leaves_model_empty() {
        let params = InferenceParams::with_params(json!({"prompt": "hi"}));

        assert_eq!(params.model, "");
        assert_eq!(params.params, json!({"prompt": "hi"}));
    }

    #[test]
    fn test_serializes_to_provider_shape() {
        let params = InferenceParams::with_params(json!("tell me a story"));

        let serialized = serde_json::to_value(&params).unwrap();
        assert_eq!(
            serialized,
            json!({"model": "", "params": "tell me a story"})
        );
    }
}
