use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::conversations::ChatTurn;
use crate::error::ServiceError;
use crate::state::AppState;

const DEFAULT_TEST_QUESTION: &str = "What products do you have?";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub question: String,
    #[serde(default)]
    pub thread_id: Option<String>,
}

impl GenerateRequest {
    /// Thread to continue. An empty id counts as none.
    pub fn continued_thread(&self) -> Option<&str> {
        self.thread_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub question: String,
    pub answer: String,
    pub thread_id: String,
}

impl From<ChatTurn> for GenerateResponse {
    fn from(turn: ChatTurn) -> Self {
        Self {
            question: turn.question,
            answer: turn.answer.into_text(),
            thread_id: turn.thread_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TestQuery {
    #[serde(default = "default_test_question")]
    pub question: String,
}

fn default_test_question() -> String {
    DEFAULT_TEST_QUESTION.to_string()
}

/// Remote failures surface as a generic server error.
pub struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Failed to generate response: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": self.0.to_string()})),
        )
            .into_response()
    }
}

pub async fn root() -> Json<Value> {
    Json(json!({"message": "Hello World"}))
}

pub async fn generate_response(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let thread_id = request.continued_thread();
    info!("generate_response (continuing: {})", thread_id.is_some());
    let turn = state.proxy.generate(&request.question, thread_id).await?;
    Ok(Json(turn.into()))
}

/// Always starts a fresh conversation.
pub async fn test_generate(
    State(state): State<AppState>,
    Query(query): Query<TestQuery>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let turn = state.proxy.generate(&query.question, None).await?;
    Ok(Json(turn.into()))
}
