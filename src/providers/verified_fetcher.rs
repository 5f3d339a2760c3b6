use tracing::Instrument;

use crate::{
    checksum::sha256_hex,
    error::AcquireError,
    models::{
        acquisition::{AcquireState, WriteResult},
        download_request::DownloadRequest,
    },
    providers::{
        downloader::Downloader,
        file_writer::FileWriter,
        path_ensurer::{DEFAULT_DIR_MODE, PathEnsurer},
    },
};

/// Fetches one artifact, checks its digest and writes it to its destination.
///
/// Holds no per-request state, so a single instance may serve requests for
/// distinct destinations concurrently. Two requests targeting the same
/// destination at once are not coordinated.
pub struct VerifiedFetcher<D, P, W> {
    downloader: D,
    path_ensurer: P,
    file_writer: W,
}

impl<D, P, W> VerifiedFetcher<D, P, W>
where
    D: Downloader,
    P: PathEnsurer,
    W: FileWriter,
{
    pub fn new(downloader: D, path_ensurer: P, file_writer: W) -> Self {
        VerifiedFetcher {
            downloader,
            path_ensurer,
            file_writer,
        }
    }

    /// Runs the whole pipeline for `request`. Any failure is terminal; a
    /// destination that was partially written before the failure is left as is.
    pub async fn acquire(&self, request: &DownloadRequest) -> Result<WriteResult, AcquireError> {
        let span = tracing::debug_span!("acquire", url = %request.source);
        let result = self.run(request).instrument(span).await;
        match &result {
            Ok(write) => tracing::trace!(
                state = %AcquireState::Done,
                bytes = write.bytes_written,
                "acquire finished"
            ),
            Err(e) => tracing::debug!(state = %AcquireState::Failed, error = %e, "acquire failed"),
        }
        result
    }

    async fn run(&self, request: &DownloadRequest) -> Result<WriteResult, AcquireError> {
        let destination = request.destination.as_path();
        tracing::trace!(state = %AcquireState::Pending, destination = %destination.display());

        let payload = self.downloader.fetch(&request.source).await?;
        tracing::trace!(state = %AcquireState::Fetched, bytes = payload.len());

        let digest = sha256_hex(&payload);
        if request.is_verified() {
            if !request.acceptable_digests.contains(&digest) {
                return Err(AcquireError::ChecksumMismatch {
                    url: request.source.clone(),
                    expected: request.acceptable_digests.iter().cloned().collect(),
                    actual: digest,
                });
            }
        } else {
            tracing::warn!(
                url = %request.source,
                sha256 = %digest,
                "no checksums configured, writing unverified content"
            );
        }
        tracing::trace!(state = %AcquireState::Verified, sha256 = %digest);

        self.path_ensurer
            .ensure_parents(destination, DEFAULT_DIR_MODE)
            .await?;
        tracing::trace!(state = %AcquireState::DirReady);

        let written = self.file_writer.write_truncate(destination, &payload).await?;
        tracing::trace!(state = %AcquireState::Written, bytes = written);

        if written != payload.len() {
            return Err(AcquireError::IncompleteWrite {
                path: destination.to_path_buf(),
                expected: payload.len(),
                written,
            });
        }

        Ok(WriteResult {
            bytes_written: written,
        })
    }
}
