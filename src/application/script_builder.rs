// Script builder - Accumulates the grafonnet script panel by panel
use crate::application::fields::LiteralStyle;
use crate::application::panel_renderer::render_panel;
use crate::application::target_renderer::render_target;
use crate::domain::dashboard::Panel;
use crate::domain::panel_type::PanelType;

const SCHEMA_VERSION: u32 = 26;
const REFRESH_INTERVALS: [&str; 10] = [
    "30s", "1m", "5m", "15m", "30m", "1h", "2h", "1d", "2d", "7d",
];

/// Values that vary in the `grafana.dashboard.new(...)` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preamble {
    pub title: String,
    pub uid: String,
    pub tags: Vec<String>,
}

impl Preamble {
    fn render(&self) -> String {
        let tags = self
            .tags
            .iter()
            .map(|t| format!("'{}'", t))
            .collect::<Vec<_>>()
            .join(", ");
        let intervals = REFRESH_INTERVALS
            .iter()
            .map(|i| format!("'{}'", i))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "local grafana = import 'grafonnet/grafana.libsonnet';\n\
             \n\
             local prometheus = grafana.prometheus;\n\
             \n\
             grafana.dashboard.new(\n  \
               '{title}',\n  \
               schemaVersion={SCHEMA_VERSION},\n  \
               editable=true,\n  \
               refresh='5s',\n  \
               time_from='now-1h',\n  \
               time_to='now',\n  \
               timepicker=grafana.timepicker.new(\n    \
                 refresh_intervals=[{intervals}],\n  \
               ),\n  \
               uid='{uid}',\n  \
               tags=[{tags}],\n\
             )\n",
            title = self.title,
            uid = self.uid,
        )
    }
}

/// Owns the output buffer. Appends are only possible until `finish`
/// hands the script out.
#[derive(Debug)]
pub struct ScriptBuilder {
    script: String,
    style: LiteralStyle,
    panels: usize,
}

impl ScriptBuilder {
    pub fn new(preamble: &Preamble, style: LiteralStyle) -> Self {
        Self {
            script: preamble.render(),
            style,
            panels: 0,
        }
    }

    /// Chains `.addPanel(...)` with the grid position, the panel
    /// expression and the datasource, followed by one `.addTarget(...)`
    /// per query target.
    pub fn add_panel(&mut self, panel: &Panel, kind: PanelType) {
        let expression = render_panel(panel, kind, self.style);

        self.script.push_str(".addPanel(\n");
        self.script
            .push_str(&format!("  gridPos={},\n", panel.grid_pos.to_literal()));
        self.script.push_str(&format!("  panel={},\n", expression));
        self.script.push_str("  datasource=prometheus\n");
        for target in panel.targets() {
            self.script.push_str(&render_target(target, self.style));
        }
        self.script.push_str(")\n");

        self.panels += 1;
    }

    pub fn panel_count(&self) -> usize {
        self.panels
    }

    pub fn finish(self) -> String {
        self.script
    }
}
