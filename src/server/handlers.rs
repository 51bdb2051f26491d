use super::types::{
    ErrorResponse, OffchainResponse, OnchainResponse, RequestSource, ServiceRequest,
    ServiceResponse,
};
use crate::{
    Error, abi,
    workflow::{InferenceParams, InferenceWorkflow},
};
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub prompt: Arc<dyn InferenceWorkflow>,
    pub workflows: Arc<dyn InferenceWorkflow>,
    pub route_on_decoded_endpoint: bool,
}

impl AppState {
    /// Picks the dispatch target for a request.
    ///
    /// The stock behavior looks up the `endpoint` key on the raw `data` value
    /// for both sources. For on-chain payloads `data` is a hex string, so the
    /// lookup yields nothing and the request lands on the `workflows` target.
    /// With `route_on_decoded_endpoint` set, hex payloads are routed by their
    /// decoded `endpoint_id` instead.
    fn select_target(&self, data: &Value, endpoint_id: &Value) -> &Arc<dyn InferenceWorkflow> {
        let requested = if self.route_on_decoded_endpoint && data.is_string() {
            endpoint_id.as_str()
        } else {
            data.get("endpoint").and_then(Value::as_str)
        };

        if requested == Some("prompt") {
            &self.prompt
        } else {
            &self.workflows
        }
    }
}

/// Utility endpoint to check if the service is running.
pub async fn index() -> &'static str {
    "Chasm.net Example Program"
}

pub async fn service_output(
    State(state): State<AppState>,
    Json(request): Json<ServiceRequest>,
) -> Result<Json<ServiceResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!("Received service request from source: {:?}", request.source);

    match bridge(&state, request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Failed to bridge service request: {}", e);
            let status = if e.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            Err((status, Json(ErrorResponse { error: e.to_string() })))
        }
    }
}

async fn bridge(state: &AppState, request: ServiceRequest) -> crate::Result<ServiceResponse> {
    let (endpoint_id, body) = extract(&request)?;

    let target = state.select_target(&request.data, &endpoint_id);

    let result = target.inference(InferenceParams::with_params(body)).await?;

    let response = match request.source {
        RequestSource::Offchain => ServiceResponse::Offchain(OffchainResponse { message: result }),
        RequestSource::Onchain => {
            let raw_output = abi::encode_output(&stringify(&result));
            ServiceResponse::Onchain(OnchainResponse::from_raw_output(raw_output))
        }
    };

    Ok(response)
}

/// Pulls the `(endpoint_id, body)` pair out of the request payload.
fn extract(request: &ServiceRequest) -> crate::Result<(Value, Value)> {
    match request.source {
        RequestSource::Offchain => {
            let data = request
                .data
                .as_object()
                .ok_or_else(|| Error::malformed("off-chain data must be a JSON object"))?;

            // Missing keys flow through as null rather than failing; the
            // provider decides what to do with an empty body.
            let endpoint_id = data.get("endpoint_id").cloned().unwrap_or(Value::Null);
            let body = data.get("body").cloned().unwrap_or(Value::Null);

            Ok((endpoint_id, body))
        }
        RequestSource::Onchain => {
            let payload = request
                .data
                .as_str()
                .ok_or_else(|| Error::malformed("on-chain data must be a hex string"))?;

            let (endpoint_id, body) = abi::decode_request(payload)?;

            Ok((Value::String(endpoint_id), Value::String(body)))
        }
    }
}

/// String results encode verbatim; structured results encode as their JSON
/// text.
fn stringify(result: &Value) -> String {
    match result {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
