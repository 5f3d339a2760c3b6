use std::path::{Path, PathBuf};

pub mod checksum;
pub mod error;
pub mod logging;
pub mod models;
pub mod providers;
#[cfg(test)]
mod test_support;

use crate::{
    error::{AcquireError, ConfigError},
    models::{configuration::Manifest, download_request::DownloadRequest},
    providers::{
        directory_path_ensurer::DirectoryPathEnsurer,
        downloader::Downloader,
        file_writer::FileWriter,
        path_ensurer::PathEnsurer,
        truncating_file_writer::TruncatingFileWriter,
        unauthenticated_downloader::UnauthenticatedDownloader,
        verified_fetcher::VerifiedFetcher,
    },
};

async fn read_yaml_file(path: &Path) -> Result<Vec<DownloadRequest>, ConfigError> {
    let content = tokio::fs::read(path).await.map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let manifest: Manifest = serde_yaml::from_slice(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    manifest
        .iter()
        .enumerate()
        .map(|(index, entry)| DownloadRequest::from_entry(index, entry))
        .collect()
}

#[derive(Debug, Default, PartialEq, Eq)]
struct RunSummary {
    acquired: usize,
    skipped: usize,
    bytes_written: usize,
}

/// Acquires every request in order and stops at the first failure. Entries
/// whose destination already holds one of the acceptable digests are skipped.
async fn run_manifest<D, P, W>(
    fetcher: &VerifiedFetcher<D, P, W>,
    requests: &[DownloadRequest],
) -> Result<RunSummary, AcquireError>
where
    D: Downloader,
    P: PathEnsurer,
    W: FileWriter,
{
    let mut summary = RunSummary::default();
    for request in requests {
        let destination = request.destination.display();
        if checksum::file_matches_any(&request.destination, &request.acceptable_digests).await? {
            tracing::info!(%destination, "already up to date, skipping");
            summary.skipped += 1;
            continue;
        }

        match fetcher.acquire(request).await {
            Ok(result) => {
                tracing::info!(
                    url = %request.source,
                    %destination,
                    bytes = result.bytes_written,
                    "downloaded"
                );
                summary.acquired += 1;
                summary.bytes_written += result.bytes_written;
            }
            Err(e) => {
                tracing::error!(url = %request.source, %destination, "{}", e);
                return Err(e);
            }
        }
    }
    Ok(summary)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let file = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!(
            "Usage: {} <path to manifest file>",
            std::env::args().next().unwrap_or_else(|| "provisioner".to_string())
        );
        std::process::exit(2);
    });

    logging::init_logging();

    let manifest_path = PathBuf::from(file);
    let requests = read_yaml_file(&manifest_path).await?;
    tracing::info!(
        manifest = %manifest_path.display(),
        entries = requests.len(),
        "loaded manifest"
    );

    let fetcher = VerifiedFetcher::new(
        UnauthenticatedDownloader::new(),
        DirectoryPathEnsurer::new(),
        TruncatingFileWriter::new(),
    );

    match run_manifest(&fetcher, &requests).await {
        Ok(summary) => {
            tracing::info!(
                acquired = summary.acquired,
                skipped = summary.skipped,
                bytes = summary.bytes_written,
                "Done!"
            );
            Ok(())
        }
        Err(_) => std::process::exit(1),
    }
}
