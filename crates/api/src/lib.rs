pub mod error;
pub mod loader;
pub mod models;
pub mod paging;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use loader::{RouteLoader, RouteParams};
pub use models::*;
pub use paging::{Page, PageRequest, PagedSource};
