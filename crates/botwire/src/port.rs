//! Hexagonal port for the HTTP transport.

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::AsyncWrite;

use crate::{wire::Document, Result};

/// The HTTP-calling collaborator behind the typed API surface.
///
/// Implementations own connection pooling, timeouts and retry policy. The
/// core performs no I/O of its own and re-raises transport failures
/// unchanged as [`crate::Error::Remote`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one API call and return the decoded result payload.
    async fn post(&self, endpoint: &str, params: Document) -> Result<Value>;

    /// Resolve a file id into its metadata document.
    async fn get_file(&self, file_id: &str) -> Result<Value>;

    /// Stream the file at `file_path` into `dest`, returning bytes written.
    ///
    /// Where the bytes end up (disk, memory, another socket) is the caller's
    /// decision; the core never persists anything itself.
    async fn download(
        &self,
        file_path: &str,
        dest: &mut (dyn AsyncWrite + Send + Unpin),
    ) -> Result<u64>;
}
