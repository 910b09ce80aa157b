use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MergeError>;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config encode error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported container shape: {0}")]
    UnsupportedShape(String),

    #[error("cannot write output {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
