// Main entry point - Dependency wiring and conversion run
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::converter_service::ConverterService;
use crate::infrastructure::config::load_converter_config;
use crate::infrastructure::json_file_source::JsonFileSource;
use crate::presentation::script_output::write_script;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout carries only the script
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_converter_config().context("Failed to load converter configuration")?;

    let source = Arc::new(JsonFileSource::new(config.input_path.clone()));
    let service = ConverterService::new(source, &config);

    let conversion = service.convert_source()?;
    tracing::info!(
        "Converted {} panels from {} ({} skipped)",
        conversion.panels,
        config.input_path.display(),
        conversion.diagnostics.len()
    );

    let stdout = std::io::stdout();
    write_script(&mut stdout.lock(), &conversion).context("Failed to write script")?;

    Ok(())
}
