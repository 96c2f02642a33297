pub mod boundary;
pub mod config;
pub mod dashboard;
pub mod endpoint;
pub mod error;
pub mod logging;

pub use boundary::{BoundaryFailure, BoundaryOutcome};
pub use config::{DashboardConfig, LoggingConfig, PagingConfig};
pub use dashboard::{Dashboard, DashboardBuilder, DynRouteLoader, Navigation};
pub use endpoint::ListEndpoint;
pub use error::{CoreError, Result};
