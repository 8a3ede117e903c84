//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers;
use formscan_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Formscan API",
        version = "0.1.0",
        description = "Uploads a document to S3, analyzes it with Textract (tables and forms) and returns the analysis."
    ),
    paths(handlers::upload::upload_document),
    components(schemas(models::UploadResponse)),
    tags((name = "upload", description = "Document upload and analysis"))
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
