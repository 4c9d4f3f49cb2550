//! Error type shared by the image layer, the numeric primitives and the
//! detector pipeline.
//!
//! The zero-crossing scan itself never fails; every variant here comes from
//! input validation, a primitive rejecting its arguments, or file I/O.
use std::path::PathBuf;

/// Errors returned by the edgel pipeline and its helpers.
#[derive(thiserror::Error, Debug)]
pub enum EdgelError {
    #[error("invalid image: {reason}")]
    InvalidImage { reason: String },
    #[error("{primitive} failed: {reason}")]
    PrimitiveFailure {
        primitive: &'static str,
        reason: String,
    },
    #[error("failed to open {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to save {}: {source}", path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl EdgelError {
    pub(crate) fn invalid_image(reason: impl Into<String>) -> Self {
        Self::InvalidImage {
            reason: reason.into(),
        }
    }

    pub(crate) fn primitive(primitive: &'static str, reason: impl Into<String>) -> Self {
        Self::PrimitiveFailure {
            primitive,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = EdgelError> = std::result::Result<T, E>;
