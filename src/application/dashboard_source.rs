// Source trait for decoded dashboards
use crate::application::error::ConvertError;
use crate::domain::dashboard::Dashboard;

pub trait DashboardSource: Send + Sync {
    /// Read and decode the whole dashboard document.
    fn load_dashboard(&self) -> Result<Dashboard, ConvertError>;
}
