use bytes::Bytes;

use crate::error::AcquireError;

/// Plain HTTP(S) GET without credentials. Redirects are followed by reqwest.
pub struct UnauthenticatedDownloader {
    client: reqwest::Client,
}

impl crate::providers::downloader::Downloader for UnauthenticatedDownloader {
    fn new() -> impl super::downloader::Downloader {
        UnauthenticatedDownloader {
            client: reqwest::Client::new(),
        }
    }

    async fn fetch(&self, url: &str) -> Result<Bytes, AcquireError> {
        let fetch_error = |e: reqwest::Error| AcquireError::Fetch {
            url: url.to_string(),
            source: Box::new(e),
        };
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(fetch_error)?;
        let bytes = response.bytes().await.map_err(fetch_error)?;
        tracing::debug!(url, bytes = bytes.len(), "fetched");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use crate::providers::downloader::Downloader;
    use crate::test_support::MockServer;

    use super::*;
    use iron::status;

    #[tokio::test]
    async fn test_fetch_returns_body() {
        // Arrange
        let content = b"test content";
        let server = MockServer::ok(content);
        let downloader = UnauthenticatedDownloader::new();

        // Act
        let result = downloader.fetch(&server.url("a.bin")).await;

        // Assert
        assert_eq!(result.unwrap(), Bytes::from_static(content));
        assert_eq!(server.hits(), 1);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_fetch_error() {
        // Arrange
        let server = MockServer::start(status::NotFound, b"missing");
        let url = server.url("a.bin");
        let downloader = UnauthenticatedDownloader::new();

        // Act
        let result = downloader.fetch(&url).await;

        // Assert
        match result {
            Err(AcquireError::Fetch { url: failed, .. }) => assert_eq!(failed, url),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_fetch_error() {
        let downloader = UnauthenticatedDownloader::new();

        let result = downloader.fetch("http://127.0.0.1:1/a.bin").await;

        assert!(matches!(result, Err(AcquireError::Fetch { .. })));
    }
}
