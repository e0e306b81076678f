use std::path::PathBuf;

/// Failure while handing a blob to a [`super::Document`].
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// Reading or writing a file failed (directory target).
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The URL was never created or is already revoked.
    #[error("unknown object URL {0:?}")]
    UnknownObjectUrl(String),
    #[error("unknown anchor #{0}")]
    UnknownAnchor(usize),
    /// The DOM rejected an operation (e.g. download blocked by policy).
    #[error("browser: {0}")]
    Browser(String),
}

impl DownloadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DownloadError::Io {
            path: path.into(),
            source,
        }
    }
}
