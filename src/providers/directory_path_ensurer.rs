use std::path::{Component, Path, PathBuf};

use crate::error::AcquireError;

/// Creates ancestors one level at a time so that each prefix can be checked
/// individually, instead of relying on `create_dir_all`.
pub struct DirectoryPathEnsurer {}

impl crate::providers::path_ensurer::PathEnsurer for DirectoryPathEnsurer {
    fn new() -> impl crate::providers::path_ensurer::PathEnsurer {
        DirectoryPathEnsurer {}
    }

    async fn ensure_parents(&self, file_path: &Path, mode: u32) -> Result<(), AcquireError> {
        let Some(parent) = file_path.parent() else {
            return Ok(());
        };

        let mut prefix = PathBuf::new();
        for component in parent.components() {
            prefix.push(component);
            if matches!(component, Component::Normal(_) | Component::ParentDir) {
                create_dir(&prefix, mode).await?;
            }
        }
        Ok(())
    }
}

async fn create_dir(path: &Path, mode: u32) -> Result<(), AcquireError> {
    let mut builder = tokio::fs::DirBuilder::new();
    builder.mode(mode);
    match builder.create(path).await {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "created directory");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            let metadata = tokio::fs::metadata(path)
                .await
                .map_err(|stat_error| AcquireError::filesystem(path, stat_error))?;
            if metadata.is_dir() {
                Ok(())
            } else {
                Err(AcquireError::filesystem(path, e))
            }
        }
        Err(e) => Err(AcquireError::filesystem(path, e)),
    }
}
