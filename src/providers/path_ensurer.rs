use std::path::Path;

use crate::error::AcquireError;

pub const DEFAULT_DIR_MODE: u32 = 0o755;

pub trait PathEnsurer {
    fn new() -> impl PathEnsurer;

    /// Creates every missing ancestor directory of `file_path`.
    fn ensure_parents(
        &self,
        file_path: &Path,
        mode: u32,
    ) -> impl std::future::Future<Output = Result<(), AcquireError>> + Send;
}
