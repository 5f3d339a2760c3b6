use std::path::Path;

use crate::error::AcquireError;

pub trait FileWriter {
    fn new() -> impl FileWriter;

    /// Creates or truncates `path`, writes `content` and returns how many bytes
    /// actually reached the file. The count may be short without an error.
    fn write_truncate(
        &self,
        path: &Path,
        content: &[u8],
    ) -> impl std::future::Future<Output = Result<usize, AcquireError>> + Send;
}
