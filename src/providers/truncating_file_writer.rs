use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::error::AcquireError;

pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Writes through `tokio::fs::File`, never appending. A write call that makes
/// no progress ends the loop and the short count is returned to the caller.
pub struct TruncatingFileWriter {}

impl crate::providers::file_writer::FileWriter for TruncatingFileWriter {
    fn new() -> impl crate::providers::file_writer::FileWriter {
        TruncatingFileWriter {}
    }

    async fn write_truncate(&self, path: &Path, content: &[u8]) -> Result<usize, AcquireError> {
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(DEFAULT_FILE_MODE)
            .open(path)
            .await
            .map_err(|e| AcquireError::filesystem(path, e))?;

        let mut written = 0;
        while written < content.len() {
            match file.write(&content[written..]).await {
                Ok(0) => break,
                Ok(n) => written += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(AcquireError::filesystem(path, e)),
            }
        }
        file.flush()
            .await
            .map_err(|e| AcquireError::filesystem(path, e))?;
        Ok(written)
    }
}
