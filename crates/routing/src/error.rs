use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteConfigError {
    #[error("path `{path}` is registered more than once")]
    DuplicatePath { path: String },
    #[error("malformed route path `{path}`: {reason}")]
    MalformedPath { path: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, RouteConfigError>;
