// Panel type discriminants understood by the converter
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelType {
    Row,
    PieChart,
    Timeseries,
    Stat,
    BarGauge,
    Gauge,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported panel type '{0}'")]
pub struct UnsupportedPanelType(pub String);

impl PanelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelType::Row => "row",
            PanelType::PieChart => "piechart",
            PanelType::Timeseries => "timeseries",
            PanelType::Stat => "stat",
            PanelType::BarGauge => "bargauge",
            PanelType::Gauge => "gauge",
        }
    }
}

impl FromStr for PanelType {
    type Err = UnsupportedPanelType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(PanelType::Row),
            "piechart" => Ok(PanelType::PieChart),
            "timeseries" => Ok(PanelType::Timeseries),
            "stat" => Ok(PanelType::Stat),
            "bargauge" => Ok(PanelType::BarGauge),
            "gauge" => Ok(PanelType::Gauge),
            other => Err(UnsupportedPanelType(other.to_string())),
        }
    }
}

impl fmt::Display for PanelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        for kind in [
            PanelType::Row,
            PanelType::PieChart,
            PanelType::Timeseries,
            PanelType::Stat,
            PanelType::BarGauge,
            PanelType::Gauge,
        ] {
            assert_eq!(kind.as_str().parse::<PanelType>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_case_variants() {
        assert_eq!(
            "graph".parse::<PanelType>(),
            Err(UnsupportedPanelType("graph".to_string()))
        );
        assert!("Stat".parse::<PanelType>().is_err());
        assert!("".parse::<PanelType>().is_err());
    }

    #[test]
    fn test_error_names_discriminant() {
        let err = "table".parse::<PanelType>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported panel type 'table'");
    }
}
