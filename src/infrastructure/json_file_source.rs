// JSON file dashboard source
use crate::application::dashboard_source::DashboardSource;
use crate::application::error::ConvertError;
use crate::domain::dashboard::Dashboard;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn decode(&self, json: &str) -> Result<Dashboard, ConvertError> {
        serde_json::from_str(json).map_err(|source| ConvertError::MalformedInput {
            path: self.path.clone(),
            source,
        })
    }
}

impl DashboardSource for JsonFileSource {
    fn load_dashboard(&self) -> Result<Dashboard, ConvertError> {
        let json = fs::read_to_string(&self.path).map_err(|source| {
            ConvertError::MissingOrUnreadableInput {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::debug!("Read {} bytes from {}", json.len(), self.path.display());
        self.decode(&json)
    }
}
