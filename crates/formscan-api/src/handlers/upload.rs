use crate::error::HttpAppError;
use crate::services::UploadService;
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use formscan_core::{AppError, UploadResponse};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/upload",
    tag = "upload",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Document stored and analyzed", body = UploadResponse),
        (status = 400, description = "No file uploaded.", body = String, content_type = "text/plain"),
        (status = 413, description = "File too large", body = String, content_type = "text/plain"),
        (status = 500, description = "Error processing file: <cause>", body = String, content_type = "text/plain")
    )
)]
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    // A body that is not multipart at all cannot carry a file field
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!(rejection = %rejection, "Upload request is not multipart");
        AppError::MissingFile
    })?;

    let file = extract_multipart_file(multipart).await?;

    let response = UploadService::new(&state).process(file).await?;

    Ok(Json(response))
}
