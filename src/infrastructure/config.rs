use crate::application::converter_service::UnsupportedPanelPolicy;
use crate::application::fields::LiteralStyle;
use serde::Deserialize;
use std::path::PathBuf;

const CONFIG_FILE: &str = "config/converter";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConverterConfig {
    pub input_path: PathBuf,
    pub literal_style: LiteralStyle,
    pub unsupported_panel_policy: UnsupportedPanelPolicy,
    pub preamble: PreambleConfig,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("./test.json"),
            literal_style: LiteralStyle::default(),
            unsupported_panel_policy: UnsupportedPanelPolicy::default(),
            preamble: PreambleConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PreambleConfig {
    pub title: String,
    pub uid: String,
    pub title_source: TitleSource,
}

impl Default for PreambleConfig {
    fn default() -> Self {
        Self {
            title: "World Server New".to_string(),
            uid: "arkadia-worldservers-new".to_string(),
            title_source: TitleSource::default(),
        }
    }
}

/// Where the dashboard header takes its title and tags from.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TitleSource {
    /// Configured title, no tags.
    #[default]
    Fixed,
    /// Title and tags of the decoded dashboard. Falls back to the
    /// configured title when the dashboard has none.
    Dashboard,
}

/// Reads `config/converter.*` if present. A missing file yields the defaults.
pub fn load_converter_config() -> anyhow::Result<ConverterConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sources_give_defaults() {
        let settings = config::Config::builder().build().unwrap();
        let parsed: ConverterConfig = settings.try_deserialize().unwrap();

        assert_eq!(parsed, ConverterConfig::default());
        assert_eq!(parsed.input_path, PathBuf::from("./test.json"));
        assert_eq!(parsed.literal_style, LiteralStyle::Quoted);
        assert_eq!(parsed.unsupported_panel_policy, UnsupportedPanelPolicy::Abort);
        assert_eq!(parsed.preamble.title_source, TitleSource::Fixed);
    }

    #[test]
    fn test_overrides() {
        let settings = config::Config::builder()
            .set_override("input_path", "dashboards/edge.json")
            .unwrap()
            .set_override("literal_style", "bare")
            .unwrap()
            .set_override("unsupported_panel_policy", "skip")
            .unwrap()
            .set_override("preamble.title_source", "dashboard")
            .unwrap()
            .set_override("preamble.uid", "edge")
            .unwrap()
            .build()
            .unwrap();
        let parsed: ConverterConfig = settings.try_deserialize().unwrap();

        assert_eq!(parsed.input_path, PathBuf::from("dashboards/edge.json"));
        assert_eq!(parsed.literal_style, LiteralStyle::Bare);
        assert_eq!(parsed.unsupported_panel_policy, UnsupportedPanelPolicy::Skip);
        assert_eq!(parsed.preamble.title_source, TitleSource::Dashboard);
        assert_eq!(parsed.preamble.uid, "edge");
        assert_eq!(parsed.preamble.title, "World Server New");
    }
}
