// Dashboard domain model, decoded from the dashboard JSON export
use serde::Deserialize;
use serde_json::{Number, Value};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub schema_version: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Null entries are kept so the converter can report their position.
    #[serde(default)]
    pub panels: Vec<Option<Panel>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    #[serde(rename = "type")]
    pub panel_type: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub grid_pos: GridPos,
    #[serde(default)]
    pub plugin_version: Option<String>,
    #[serde(default)]
    pub collapsed: Option<bool>,
    #[serde(default)]
    pub field_config: FieldConfig,
    #[serde(default)]
    pub options: PanelOptions,
    #[serde(default)]
    pub targets: Option<Vec<Target>>,
}

impl Panel {
    pub fn targets(&self) -> &[Target] {
        self.targets.as_deref().unwrap_or_default()
    }

    pub fn unit(&self) -> Option<&str> {
        self.field_config.defaults.unit.as_deref()
    }

    pub fn thresholds_mode(&self) -> Option<&str> {
        self.field_config
            .defaults
            .thresholds
            .as_ref()
            .and_then(|t| t.mode.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GridPos {
    pub h: u32,
    pub w: u32,
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    /// Jsonnet object literal, e.g. `{h: 8, w: 12, x: 0, y: 0}`
    pub fn to_literal(&self) -> String {
        format!("{{h: {}, w: {}, x: {}, y: {}}}", self.h, self.w, self.x, self.y)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldConfig {
    #[serde(default)]
    pub defaults: FieldDefaults,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldDefaults {
    #[serde(default)]
    #[allow(dead_code)]
    pub custom: Option<Value>,
    #[serde(default)]
    #[allow(dead_code)]
    pub color: Option<Value>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub thresholds: Option<Thresholds>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thresholds {
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelOptions {
    #[serde(default)]
    pub pie_type: Option<String>,
    #[serde(default)]
    pub color_mode: Option<String>,
    #[serde(default)]
    pub justify_mode: Option<String>,
    #[serde(default)]
    pub orientation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub expr: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub legend_format: Option<String>,
    #[serde(default)]
    pub interval_factor: Option<Number>,
    #[serde(default)]
    pub hide: Option<bool>,
    #[serde(default)]
    pub instant: Option<bool>,
    #[serde(default)]
    pub interval: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_keeps_null_panels() {
        let dashboard: Dashboard = serde_json::from_value(json!({
            "title": "Servers",
            "schemaVersion": 27,
            "tags": ["prod"],
            "panels": [
                null,
                { "type": "row", "gridPos": { "h": 1, "w": 24, "x": 0, "y": 0 } }
            ]
        }))
        .unwrap();

        assert_eq!(dashboard.title.as_deref(), Some("Servers"));
        assert_eq!(dashboard.schema_version, Some(27));
        assert_eq!(dashboard.panels.len(), 2);
        assert!(dashboard.panels[0].is_none());
        assert_eq!(dashboard.panels[1].as_ref().unwrap().panel_type, "row");
    }

    #[test]
    fn test_missing_nested_objects_decode_as_absent() {
        let panel: Panel = serde_json::from_value(json!({
            "type": "gauge",
            "gridPos": { "h": 8, "w": 6, "x": 0, "y": 1 },
            "fieldConfig": { "defaults": { "unit": "bytes" } }
        }))
        .unwrap();

        assert_eq!(panel.unit(), Some("bytes"));
        assert_eq!(panel.thresholds_mode(), None);
        assert!(panel.targets().is_empty());
        assert_eq!(panel.options.pie_type, None);
    }

    #[test]
    fn test_target_interval_factor_keeps_number_text() {
        let target: Target = serde_json::from_value(json!({
            "expr": "up",
            "intervalFactor": 2,
            "hide": false
        }))
        .unwrap();

        assert_eq!(target.interval_factor.unwrap().to_string(), "2");
        assert_eq!(target.hide, Some(false));
        assert_eq!(target.legend_format, None);
    }

    #[test]
    fn test_grid_pos_literal() {
        let pos = GridPos { h: 8, w: 12, x: 0, y: 4 };
        assert_eq!(pos.to_literal(), "{h: 8, w: 12, x: 0, y: 4}");
    }
}
