use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::FlowError;
use crate::flow::model::{ExecuteRequest, ExecutionReport, TaskInfo};
use crate::runtime::FlowExecutor;

use super::state::AppState;

/// Error body returned for every fault response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Wrapper translating fault kinds into transport status codes: validation
/// faults are the caller's mistake, everything else is server-side.
struct ApiError(FlowError);

impl From<FlowError> for ApiError {
    fn from(error: FlowError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            FlowError::Validation(_) => StatusCode::BAD_REQUEST,
            FlowError::CycleDetected(_) | FlowError::TaskFailed { .. } | FlowError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        warn!(%status, error = %self.0, "flow request failed");
        let body = ErrorBody {
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// GET /flows/tasks
async fn list_tasks(State(state): State<Arc<AppState>>) -> Json<Vec<TaskInfo>> {
    let tasks = state
        .registry
        .names()
        .map(|name| TaskInfo {
            name: name.to_string(),
        })
        .collect();
    Json(tasks)
}

// POST /flows/execute
async fn execute_flow(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExecuteRequest>,
) -> Result<(StatusCode, Json<ExecutionReport>), ApiError> {
    let executor = FlowExecutor::new(Arc::clone(&state.registry));
    let report = executor.execute(&request.flow)?;
    info!(flow_id = %report.id, "flow executed");
    Ok((StatusCode::CREATED, Json(report)))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/flows/tasks", get(list_tasks))
        .route("/flows/execute", post(execute_flow))
        .with_state(state)
}
