// Infrastructure layer - File input and configuration
pub mod config;
pub mod json_file_source;
