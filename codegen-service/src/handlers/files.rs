//! Storage stubs: they acknowledge the file and keep nothing.

use axum::Json;
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

use crate::dtos::{FileAck, FileCreateRequest, FileUploadRequest};

pub async fn create_file(
    ValidatedJson(request): ValidatedJson<FileCreateRequest>,
) -> Result<Json<FileAck>, AppError> {
    tracing::info!(filename = %request.filename, "Acknowledged file create");

    Ok(Json(FileAck::success(
        format!("File '{}' created successfully", request.filename),
        request.filename,
        &request.content,
    )))
}

pub async fn upload_file(
    ValidatedJson(request): ValidatedJson<FileUploadRequest>,
) -> Result<Json<FileAck>, AppError> {
    tracing::info!(filename = %request.filename, "Acknowledged file upload");

    Ok(Json(FileAck::success(
        format!("File '{}' uploaded successfully", request.filename),
        request.filename,
        &request.content,
    )))
}
