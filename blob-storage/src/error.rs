use std::io;
use thiserror::Error;
use crate::blob_id::BlobId;

pub type BlobStoreResult<T> = Result<T, BlobStoreError>;

#[derive(Debug, Error)]
pub enum BlobStoreError {
    #[error("Invalid UUID format {input:?}: {source}")]
    MalformedId {
        input: String,
        #[source]
        source: uuid::Error,
    },

    #[error("No blob stored under {0}")]
    NotFound(BlobId),

    #[error("Failed writing blob {id}: {source}")]
    Write {
        id: BlobId,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
