pub mod api_utils;
pub mod config;
pub mod export;
pub mod file_reader;
pub mod user_storage;
