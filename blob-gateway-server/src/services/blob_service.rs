use std::io;
use std::path::PathBuf;
use actix_multipart::Multipart;
use actix_web::web::{self, Data};
use actix_web::{get, post, routes, HttpResponse, Responder};
use blob_store::{BlobId, BlobStore, LocalFileBlobStore, CHUNK_SIZE};
use futures_util::TryStreamExt;
use serde::{Deserialize, Serialize};
use tokio_util::io::{ReaderStream, StreamReader};
use crate::errors::GatewayErr;

pub const APP_TYPE_JSON: &str = "application/json";
pub const APP_TYPE_OCTET_STREAM: &str = "application/octet-stream";
// Content type is not recorded at upload; the signature pad exports PNG.
pub const IMAGE_PNG: &str = "image/png";

const FILE_FIELD: &str = "file";

/// One store plus what its downloads are served as.
pub struct Bucket {
    name: &'static str,
    store: LocalFileBlobStore,
    content_type: &'static str,
}

pub struct GatewayState {
    pub(crate) documents: Bucket,
    pub(crate) signatures: Bucket,
}

impl GatewayState {
    pub fn open(documents_dir: impl Into<PathBuf>, signatures_dir: impl Into<PathBuf>) -> io::Result<Self> {
        Ok(Self {
            documents: Bucket {
                name: "documents",
                store: LocalFileBlobStore::new(documents_dir)?,
                content_type: APP_TYPE_OCTET_STREAM,
            },
            signatures: Bucket {
                name: "signatures",
                store: LocalFileBlobStore::new(signatures_dir)?,
                content_type: IMAGE_PNG,
            },
        })
    }
}

#[derive(Serialize, Deserialize)]
struct UploadResponse {
    uuid: String,
}

#[derive(Deserialize)]
struct OpenQuery {
    #[serde(alias = "pdf_uuid")]
    id: String,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| GatewayErr::from(err).into()))
        .service(upload_document)
        .service(open_document)
        .service(upload_signature)
        .service(open_signature)
        .service(health);
}

#[routes]
#[post("/upload")]
#[post("/api/v1/upload_pdf/")]
async fn upload_document(payload: Multipart, state: Data<GatewayState>) -> Result<HttpResponse, GatewayErr> {
    store_upload(&state.documents, payload).await
}

#[routes]
#[get("/open")]
#[get("/api/v1/open_file/")]
async fn open_document(query: web::Query<OpenQuery>, state: Data<GatewayState>) -> Result<HttpResponse, GatewayErr> {
    stream_blob(&state.documents, &query.id).await
}

#[post("/upload-signature")]
async fn upload_signature(payload: Multipart, state: Data<GatewayState>) -> Result<HttpResponse, GatewayErr> {
    store_upload(&state.signatures, payload).await
}

#[get("/open-signature/{id}")]
async fn open_signature(id: web::Path<String>, state: Data<GatewayState>) -> Result<HttpResponse, GatewayErr> {
    stream_blob(&state.signatures, &id).await
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok()
        .content_type(APP_TYPE_JSON)
        .json(Health { status: "ok" })
}

/// Streams the first `file` part of the form into `bucket`.
async fn store_upload(bucket: &Bucket, mut payload: Multipart) -> Result<HttpResponse, GatewayErr> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != Some(FILE_FIELD) {
            while field.try_next().await?.is_some() {}
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("")
            .to_string();
        let content_type = field.content_type().map(|m| m.to_string()).unwrap_or_default();
        tracing::info!(store = bucket.name, %filename, %content_type, "Uploading file to storage");

        let reader = StreamReader::new(field.map_err(|e| io::Error::other(e.to_string())));
        tokio::pin!(reader);

        return match bucket.store.put(&mut reader).await {
            Ok(id) => {
                tracing::info!(store = bucket.name, %id, %filename, "File saved");
                Ok(HttpResponse::Ok()
                    .content_type(APP_TYPE_JSON)
                    .json(UploadResponse { uuid: id.to_string() }))
            }
            Err(e) => {
                tracing::error!(store = bucket.name, %filename, "Error saving file to storage: {}", e);
                Err(GatewayErr::from(e))
            }
        };
    }
    Err(GatewayErr::MissingFile)
}

/// validate -> exists-check -> stream. No filesystem access before the id parses.
async fn stream_blob(bucket: &Bucket, raw_id: &str) -> Result<HttpResponse, GatewayErr> {
    let id: BlobId = raw_id.parse().map_err(|e| {
        tracing::warn!(store = bucket.name, "Invalid UUID format requested: {:?}", raw_id);
        GatewayErr::from(e)
    })?;

    let blob = bucket.store.open(&id).await.map_err(|e| {
        tracing::info!(store = bucket.name, %id, "Could not open blob: {}", e);
        GatewayErr::from(e)
    })?;
    tracing::debug!(store = bucket.name, %id, bytes = blob.len, "Streaming blob");

    let body = ReaderStream::with_capacity(blob.reader, CHUNK_SIZE);
    Ok(HttpResponse::Ok()
        .content_type(bucket.content_type)
        .no_chunking(blob.len)
        .streaming(body))
}
