//! Errors for loading a metadata-config table, mirrored on the teacher
//! codebase's flat `InterchangeError` shape.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterchangeError {
    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
