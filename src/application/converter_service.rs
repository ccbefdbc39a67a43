// Converter service - Use case for turning a dashboard into a grafonnet script
use crate::application::dashboard_source::DashboardSource;
use crate::application::error::{ConvertError, Diagnostic};
use crate::application::fields::LiteralStyle;
use crate::application::script_builder::{Preamble, ScriptBuilder};
use crate::domain::dashboard::Dashboard;
use crate::domain::panel_type::PanelType;
use crate::infrastructure::config::{ConverterConfig, PreambleConfig, TitleSource};
use serde::Deserialize;
use std::sync::Arc;

/// What to do with a panel whose type has no grafonnet constructor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedPanelPolicy {
    /// Fail the whole conversion, no script is produced.
    #[default]
    Abort,
    /// Drop the panel and record a diagnostic.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub script: String,
    pub diagnostics: Vec<Diagnostic>,
    pub panels: usize,
}

#[derive(Clone)]
pub struct ConverterService {
    source: Arc<dyn DashboardSource>,
    literal_style: LiteralStyle,
    unsupported_panel_policy: UnsupportedPanelPolicy,
    preamble: PreambleConfig,
}

impl ConverterService {
    pub fn new(source: Arc<dyn DashboardSource>, config: &ConverterConfig) -> Self {
        Self {
            source,
            literal_style: config.literal_style,
            unsupported_panel_policy: config.unsupported_panel_policy,
            preamble: config.preamble.clone(),
        }
    }

    /// Loads the dashboard from the configured source and converts it.
    pub fn convert_source(&self) -> Result<Conversion, ConvertError> {
        let dashboard = self.source.load_dashboard()?;
        self.convert(&dashboard)
    }

    pub fn convert(&self, dashboard: &Dashboard) -> Result<Conversion, ConvertError> {
        let preamble = self.build_preamble(dashboard);
        let mut builder = ScriptBuilder::new(&preamble, self.literal_style);
        let mut diagnostics = Vec::new();

        for (index, entry) in dashboard.panels.iter().enumerate() {
            let Some(panel) = entry else {
                tracing::warn!("Skipping null panel at index {}", index);
                diagnostics.push(Diagnostic::NullPanel { index });
                continue;
            };

            let kind = match panel.panel_type.parse::<PanelType>() {
                Ok(kind) => kind,
                Err(e) => match self.unsupported_panel_policy {
                    UnsupportedPanelPolicy::Abort => {
                        return Err(ConvertError::UnsupportedPanelType {
                            index,
                            discriminant: e.0,
                        });
                    }
                    UnsupportedPanelPolicy::Skip => {
                        tracing::warn!("Skipping panel {} with unsupported type '{}'", index, e.0);
                        diagnostics.push(Diagnostic::UnsupportedPanel {
                            index,
                            discriminant: e.0,
                        });
                        continue;
                    }
                },
            };

            tracing::debug!(
                "Adding {} panel {} with {} targets",
                kind,
                index,
                panel.targets().len()
            );
            builder.add_panel(panel, kind);
        }

        let panels = builder.panel_count();
        Ok(Conversion {
            script: builder.finish(),
            diagnostics,
            panels,
        })
    }

    fn build_preamble(&self, dashboard: &Dashboard) -> Preamble {
        let uid = self.preamble.uid.clone();
        match self.preamble.title_source {
            TitleSource::Fixed => Preamble {
                title: self.preamble.title.clone(),
                uid,
                tags: Vec::new(),
            },
            TitleSource::Dashboard => Preamble {
                title: dashboard
                    .title
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| self.preamble.title.clone()),
                uid,
                tags: dashboard.tags.clone(),
            },
        }
    }
}
