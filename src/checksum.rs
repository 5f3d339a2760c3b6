//! SHA-256 digests rendered as lowercase hex.

use std::{collections::BTreeSet, path::Path};

use sha2::{Digest, Sha256};

use crate::error::AcquireError;

pub fn sha256_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// True when `path` exists and its digest is one of `digests`.
/// A missing file, or an empty digest set, is never a match.
pub async fn file_matches_any(path: &Path, digests: &BTreeSet<String>) -> Result<bool, AcquireError> {
    if digests.is_empty() {
        return Ok(false);
    }
    let content = match tokio::fs::read(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(AcquireError::filesystem(path, e)),
    };
    Ok(digests.contains(&sha256_hex(&content)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sha256_hex_empty() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_hex_known_bytes() {
        assert_eq!(
            sha256_hex(&[0x01, 0x02, 0x03, 0x04]),
            "9f64a747e1b97f131fabb6b447296c9b6f0201e79fb3c5356e6c77e89b6a806a"
        );
    }

    #[tokio::test]
    async fn test_file_matches_any() {
        // Arrange
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("a.bin");
        tokio::fs::write(&path, b"hello\n").await.unwrap();
        let matching = BTreeSet::from([
            "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03".to_string(),
        ]);
        let other = BTreeSet::from([sha256_hex(b"other")]);

        // Act & Assert
        assert!(file_matches_any(&path, &matching).await.unwrap());
        assert!(!file_matches_any(&path, &other).await.unwrap());
        assert!(!file_matches_any(&path, &BTreeSet::new()).await.unwrap());
        assert!(!file_matches_any(&temp_dir.path().join("missing"), &matching).await.unwrap());
    }
}
