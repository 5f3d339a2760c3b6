
pub mod downloader;
pub mod unauthenticated_downloader;

pub mod path_ensurer;
pub mod directory_path_ensurer;

pub mod file_writer;
pub mod truncating_file_writer;

pub mod verified_fetcher;
