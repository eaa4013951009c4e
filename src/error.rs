use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum AnnotreeError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid annotation file {path}: {source}")]
    Annotations {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
impl AnnotreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnnotreeError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn annotations(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        AnnotreeError::Annotations {
            path: path.into(),
            source,
        }
    }
}
