use async_trait::async_trait;
use tokio::io::AsyncRead;
use crate::blob_id::BlobId;
use crate::error::BlobStoreResult;

/// Buffer size for both the upload copy loop and download streaming.
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// A blob opened for streaming.
pub struct StoredBlob {
    pub id: BlobId,
    /// Size in bytes at open time. Blobs are never modified in place.
    pub len: u64,
    pub reader: Box<dyn AsyncRead + Send + Unpin>,
}

/// Stores opaque blobs keyed by a generated [`BlobId`].
///
/// Futures are not required to be `Send`: request bodies handed to `put`
/// come straight from the HTTP worker that owns them.
#[async_trait(?Send)]
pub trait BlobStore {
    /// Copies `reader` to a new blob and returns its identifier. On failure
    /// nothing is left behind under the generated identifier.
    async fn put(&self, reader: &mut (dyn AsyncRead + Unpin)) -> BlobStoreResult<BlobId>;

    /// Opens a stored blob, or fails with `NotFound`.
    async fn open(&self, id: &BlobId) -> BlobStoreResult<StoredBlob>;

    async fn exists(&self, id: &BlobId) -> bool;
}
