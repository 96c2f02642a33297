use thiserror::Error;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid extension manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("Extension `{0}` is registered more than once")]
    DuplicateExtension(String),
    #[error("Unknown injection zone: {0}")]
    UnknownZone(String),
}

pub type Result<T> = std::result::Result<T, PluginError>;
