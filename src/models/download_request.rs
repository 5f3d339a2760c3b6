use std::{collections::BTreeSet, path::PathBuf};

use crate::{error::ConfigError, models::configuration::DownloadEntry};

const SHA256_HEX_LEN: usize = 64;

/// A validated manifest entry: where to fetch from, where to write, and which
/// digests are acceptable. An empty digest set disables verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub source: String,
    pub destination: PathBuf,
    pub acceptable_digests: BTreeSet<String>,
}

impl DownloadRequest {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<PathBuf>,
        acceptable_digests: impl IntoIterator<Item = String>,
    ) -> Self {
        DownloadRequest {
            source: source.into(),
            destination: destination.into(),
            acceptable_digests: acceptable_digests.into_iter().collect(),
        }
    }

    pub fn is_verified(&self) -> bool {
        !self.acceptable_digests.is_empty()
    }

    /// Validates a manifest record. `index` is only used for error reporting.
    pub fn from_entry(index: usize, entry: &DownloadEntry) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::Invalid { index, reason };

        if entry.url.trim().is_empty() {
            return Err(invalid("url must not be empty".to_string()));
        }
        if entry.filename.trim().is_empty() {
            return Err(invalid("filename must not be empty".to_string()));
        }

        let mut acceptable_digests = BTreeSet::new();
        for checksum in entry.checksums.iter().flatten() {
            let checksum = checksum.trim();
            if checksum.len() != SHA256_HEX_LEN
                || !checksum.chars().all(|c| c.is_ascii_hexdigit())
            {
                return Err(invalid(format!(
                    "checksum {:?} is not a sha256 hex digest",
                    checksum
                )));
            }
            acceptable_digests.insert(checksum.to_ascii_lowercase());
        }

        let destination = shellexpand::tilde(&entry.filename);
        Ok(DownloadRequest::new(
            entry.url.clone(),
            destination.into_owned(),
            acceptable_digests,
        ))
    }
}
