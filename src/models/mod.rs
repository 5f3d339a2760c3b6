pub mod acquisition;
pub mod configuration;
pub mod download_request;
