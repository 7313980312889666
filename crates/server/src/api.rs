use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use nextplay_agent::{
    boundary::{self, InboundRequest, ReplyEnvelope},
    runtime::AgentRuntime,
};
use nextplay_core::InterfaceError;
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

#[derive(Clone)]
pub struct ApiState {
    runtime: Arc<AgentRuntime>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApiError {
    pub error: String,
    pub correlation_id: String,
}

pub fn router(runtime: Arc<AgentRuntime>) -> Router {
    Router::new().route("/api/ai", post(handle_message)).with_state(ApiState { runtime })
}

pub async fn handle_message(
    State(state): State<ApiState>,
    Json(request): Json<InboundRequest>,
) -> Result<Json<ReplyEnvelope>, (StatusCode, Json<ApiError>)> {
    let correlation_id = Uuid::new_v4().to_string();

    boundary::respond(&state.runtime, request, &correlation_id).await.map(Json).map_err(|failure| {
        let interface = failure.into_interface(correlation_id);
        let status = status_for(&interface);
        if status.is_server_error() {
            error!(
                event_name = "system.api.request_failed",
                correlation_id = interface.correlation_id(),
                status = status.as_u16(),
                error = %interface,
                "message request failed"
            );
        }
        (
            status,
            Json(ApiError {
                error: interface.message().to_string(),
                correlation_id: interface.correlation_id().to_string(),
            }),
        )
    })
}

fn status_for(error: &InterfaceError) -> StatusCode {
    match error {
        InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        InterfaceError::ServiceUnavailable { .. } => StatusCode::BAD_GATEWAY,
    }
}
