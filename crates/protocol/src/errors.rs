//! Protocol errors module

use thiserror::Error;

/// Protocol-level errors
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Serialization error: {source}")]
    SerializationError { source: serde_json::Error },
}

impl From<serde_json::Error> for ProtocolError {
    fn from(err: serde_json::Error) -> Self {
        ProtocolError::SerializationError { source: err }
    }
}
