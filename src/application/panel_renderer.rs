// Renders a panel as a grafonnet panel constructor call
use crate::application::fields::{FieldList, LiteralStyle};
use crate::domain::dashboard::Panel;
use crate::domain::panel_type::PanelType;

pub fn render_panel(panel: &Panel, kind: PanelType, style: LiteralStyle) -> String {
    let common = FieldList::new(style)
        .text("title", panel.title.as_deref())
        .text("description", panel.description.as_deref());

    match kind {
        PanelType::Row => row_panel(panel, common),
        PanelType::PieChart => pie_chart_panel(panel, common),
        PanelType::Timeseries => timeseries_panel(common),
        PanelType::Stat => stat_panel(panel, common),
        PanelType::BarGauge => bar_gauge_panel(panel, common),
        PanelType::Gauge => gauge_panel(panel, common),
    }
}

fn row_panel(panel: &Panel, fields: FieldList) -> String {
    let fields = fields.flag("collapse", Some(panel.collapsed.unwrap_or(false)));
    format!("grafana.row.new({})", fields)
}

fn timeseries_panel(fields: FieldList) -> String {
    format!("grafana.graphPanel.new({})", fields)
}

fn gauge_panel(panel: &Panel, fields: FieldList) -> String {
    let fields = fields
        .text("pluginVersion", panel.plugin_version.as_deref())
        .keyword("unit", panel.unit())
        .keyword("thresholdsMode", panel.thresholds_mode());
    format!("grafana.gaugePanel.new({})", fields)
}

fn bar_gauge_panel(panel: &Panel, fields: FieldList) -> String {
    let fields = fields.keyword("unit", panel.unit());
    format!("grafana.barGaugePanel.new({})", fields)
}

fn pie_chart_panel(panel: &Panel, fields: FieldList) -> String {
    let fields = fields.keyword("pieType", panel.options.pie_type.as_deref());
    format!("grafana.pieChartPanel.new({})", fields)
}

fn stat_panel(panel: &Panel, fields: FieldList) -> String {
    let options = &panel.options;
    let fields = fields
        .keyword("colorMode", options.color_mode.as_deref())
        .keyword("justifyMode", options.justify_mode.as_deref())
        .keyword("orientation", options.orientation.as_deref())
        .text("pluginVersion", panel.plugin_version.as_deref())
        .keyword("unit", panel.unit())
        .keyword("thresholdsMode", panel.thresholds_mode());
    format!("grafana.statPanel.new({})", fields)
}
