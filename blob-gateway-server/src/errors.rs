use actix_multipart::MultipartError;
use actix_web::error::QueryPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use blob_store::BlobStoreError;
use serde_json::json;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum GatewayErr {
    #[error("{0}")]
    MalformedId(#[source] BlobStoreError),

    #[error("File not found in storage.")]
    NotFound,

    #[error("Could not save file to storage: {0}")]
    Upload(#[source] BlobStoreError),

    #[error("Could not read file from storage: {0}")]
    Storage(#[source] BlobStoreError),

    #[error("Invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Missing multipart file field 'file'")]
    MissingFile,

    #[error("Invalid query string: {0}")]
    Query(#[from] QueryPayloadError),
}

impl From<BlobStoreError> for GatewayErr {
    fn from(e: BlobStoreError) -> Self {
        match e {
            BlobStoreError::MalformedId { .. } => GatewayErr::MalformedId(e),
            BlobStoreError::NotFound(_) => GatewayErr::NotFound,
            BlobStoreError::Write { .. } => GatewayErr::Upload(e),
            BlobStoreError::Io(_) => GatewayErr::Storage(e),
        }
    }
}

impl ResponseError for GatewayErr {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayErr::MalformedId(_)
            | GatewayErr::Multipart(_)
            | GatewayErr::MissingFile
            | GatewayErr::Query(_) => StatusCode::BAD_REQUEST,
            GatewayErr::NotFound => StatusCode::NOT_FOUND,
            GatewayErr::Upload(_) | GatewayErr::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            GatewayErr::NotFound => HttpResponse::NotFound().finish(),
            _ => HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() })),
        }
    }
}
