use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "blob-gateway-server", about = "Stores uploaded documents and signatures under generated UUIDs")]
pub struct Args {
    #[clap(long, env = "BLOB_GATEWAY_HTTP_ADDR", default_value = "127.0.0.1:8000")]
    pub(crate) http_addr: String,
    /// Created on startup if absent.
    #[clap(long, env = "BLOB_GATEWAY_DOCUMENTS_DIR", default_value = "uploaded_files")]
    pub(crate) documents_dir: PathBuf,
    /// Created on startup if absent.
    #[clap(long, env = "BLOB_GATEWAY_SIGNATURES_DIR", default_value = "uploaded_signatures")]
    pub(crate) signatures_dir: PathBuf,
    /// Defaults to the number of physical cores.
    #[clap(long, env = "BLOB_GATEWAY_WORKERS")]
    pub(crate) workers: Option<usize>,
}
