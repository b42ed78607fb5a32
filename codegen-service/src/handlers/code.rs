use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

use crate::dtos::{CodeBody, CodeRequest, CodeResponse, ExplainResponse, OptimizeResponse};
use crate::startup::AppState;

#[tracing::instrument(skip(state, request), fields(language = %request.language))]
pub async fn generate_code(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CodeRequest>,
) -> Result<Json<CodeResponse>, AppError> {
    let shaped = state
        .gateway
        .generate(&request.prompt, &request.language)
        .await?;

    Ok(Json(CodeResponse {
        code: shaped.code,
        explanation: shaped.explanation,
    }))
}

#[tracing::instrument(skip(state, body))]
pub async fn explain_code(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CodeBody>,
) -> Result<Json<ExplainResponse>, AppError> {
    let explanation = state.gateway.explain(&body.code).await?;
    Ok(Json(ExplainResponse { explanation }))
}

#[tracing::instrument(skip(state, body))]
pub async fn optimize_code(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CodeBody>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let optimized_code = state.gateway.optimize(&body.code).await?;
    Ok(Json(OptimizeResponse { optimized_code }))
}
