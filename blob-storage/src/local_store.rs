use std::io;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use crate::blob_id::BlobId;
use crate::error::{BlobStoreError, BlobStoreResult};
use crate::store::{BlobStore, StoredBlob, CHUNK_SIZE};

/// A flat directory of blobs, each file named by its identifier.
#[derive(Clone, Debug)]
pub struct LocalFileBlobStore {
    base_path: PathBuf,
}

impl LocalFileBlobStore {
    /// Creates the store, creating `base_path` and its parents if absent.
    pub fn new(base_path: impl Into<PathBuf>) -> io::Result<Self> {
        let base_path = base_path.into();
        std::fs::create_dir_all(&base_path)?;
        tracing::info!(path = %base_path.display(), "Opened local blob store");
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn path_for(&self, id: &BlobId) -> PathBuf {
        self.base_path.join(id.to_string())
    }
}

#[async_trait(?Send)]
impl BlobStore for LocalFileBlobStore {
    async fn put(&self, reader: &mut (dyn AsyncRead + Unpin)) -> BlobStoreResult<BlobId> {
        let id = BlobId::generate();
        let path = self.path_for(&id);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|source| BlobStoreError::Write { id, source })?;

        match copy_chunked(reader, &mut file).await {
            Ok(written) => {
                tracing::debug!(%id, bytes = written, "Stored blob");
                Ok(id)
            }
            Err(source) => {
                drop(file);
                if let Err(e) = fs::remove_file(&path).await {
                    tracing::warn!(%id, path = %path.display(), "Could not remove partial blob: {}", e);
                }
                Err(BlobStoreError::Write { id, source })
            }
        }
    }

    async fn open(&self, id: &BlobId) -> BlobStoreResult<StoredBlob> {
        let file = match File::open(self.path_for(id)).await {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(BlobStoreError::NotFound(*id)),
            Err(e) => return Err(e.into()),
        };
        let metadata = file.metadata().await?;
        if !metadata.is_file() {
            return Err(BlobStoreError::NotFound(*id));
        }
        Ok(StoredBlob { id: *id, len: metadata.len(), reader: Box::new(file) })
    }

    async fn exists(&self, id: &BlobId) -> bool {
        fs::metadata(self.path_for(id))
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }
}

async fn copy_chunked<R, W>(reader: &mut R, writer: &mut W) -> io::Result<u64>
where
    R: AsyncRead + Unpin + ?Sized,
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut written = 0u64;
    loop {
        let n = match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n]).await?;
        written += n as u64;
    }
    // tokio::fs::File completes writes in the background until flushed
    writer.flush().await?;
    Ok(written)
}
