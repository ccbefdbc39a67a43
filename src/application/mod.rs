// Application layer - Conversion use case and script rendering
pub mod converter_service;
pub mod dashboard_source;
pub mod error;
pub mod fields;
pub mod panel_renderer;
pub mod script_builder;
pub mod target_renderer;
