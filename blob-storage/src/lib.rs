pub mod blob_id;
pub mod error;
pub mod local_store;
pub mod store;

pub use blob_id::BlobId;
pub use error::{BlobStoreError, BlobStoreResult};
pub use local_store::LocalFileBlobStore;
pub use store::{BlobStore, StoredBlob, CHUNK_SIZE};
