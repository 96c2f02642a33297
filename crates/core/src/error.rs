use storedesk_paging::PagingError;
use storedesk_plugin::PluginError;
use storedesk_routing::RouteConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Extension error: {0}")]
    Plugin(#[from] PluginError),
    #[error("Route configuration error: {0}")]
    Route(#[from] RouteConfigError),
    #[error("Paging error: {0}")]
    Paging(#[from] PagingError),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("No route matches {0}")]
    NotFound(String),
    #[error("Route {path} uses loader {loader}, which is not registered")]
    UnknownLoader { path: String, loader: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
