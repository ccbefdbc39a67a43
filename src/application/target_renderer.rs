// Renders panel query targets as chained `.addTarget(...)` calls
use crate::application::fields::{FieldList, LiteralStyle};
use crate::domain::dashboard::Target;

/// Optional target fields are emitted in the fixed order
/// format, legendFormat, intervalFactor, hide, instant, interval.
pub fn render_target(target: &Target, style: LiteralStyle) -> String {
    let fields = FieldList::new(style)
        .text("format", target.format.as_deref())
        .text("legendFormat", target.legend_format.as_deref())
        .number("intervalFactor", target.interval_factor.as_ref())
        .flag("hide", target.hide)
        .flag("instant", target.instant)
        .text("interval", target.interval.as_deref());

    let mut call = String::from("  .addTarget(\n    prometheus.target(\n");
    call.push_str(&format!("      expr='{}',\n", target.expr));
    if !fields.is_empty() {
        call.push_str(&format!("      {}\n", fields));
    }
    call.push_str("    )\n  )\n");
    call
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn target(value: serde_json::Value) -> Target {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_expr_only() {
        let rendered = render_target(&target(json!({ "expr": "up" })), LiteralStyle::Quoted);
        assert_eq!(
            rendered,
            "  .addTarget(\n    prometheus.target(\n      expr='up',\n    )\n  )\n"
        );
    }

    #[test]
    fn test_all_fields_in_fixed_order() {
        let rendered = render_target(
            &target(json!({
                "interval": "30s",
                "instant": true,
                "hide": false,
                "intervalFactor": 1,
                "legendFormat": "{{instance}}",
                "format": "time_series",
                "expr": "rate(http_requests_total[5m])"
            })),
            LiteralStyle::Quoted,
        );

        assert!(rendered.contains("expr='rate(http_requests_total[5m])',"));
        assert!(rendered.contains(
            "format='time_series',legendFormat='{{instance}}',intervalFactor='1',hide='false',instant='true',interval='30s',"
        ));
    }

    #[test]
    fn test_absent_and_empty_fields_are_omitted() {
        let rendered = render_target(
            &target(json!({ "expr": "up", "format": "", "legendFormat": null, "instant": false })),
            LiteralStyle::Quoted,
        );

        assert!(!rendered.contains("format="));
        assert!(!rendered.contains("legendFormat="));
        assert!(rendered.contains("instant='false',"));
    }

    #[test]
    fn test_bare_style() {
        let rendered = render_target(
            &target(json!({ "expr": "up", "intervalFactor": 2, "hide": true })),
            LiteralStyle::Bare,
        );
        assert!(rendered.contains("intervalFactor=2,hide=true,"));
    }
}
