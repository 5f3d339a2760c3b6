use bytes::Bytes;

use crate::error::AcquireError;

pub trait Downloader {
    fn new() -> impl Downloader;

    /// Retrieves the whole response body of `url`.
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<Bytes, AcquireError>> + Send;
}
