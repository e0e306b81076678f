//! Client-side file download: hand a blob to the document as a temporary
//! `<a download>` link and activate it.
//!
//! The document is a capability passed in by the caller:
//! - [`MemoryDocument`] records every step (tests, headless embedding)
//! - [`DirectoryDocument`] saves each activated link into a directory
//! - `BrowserDocument` (`web` feature, wasm32) drives the real DOM

mod directory;
mod error;
mod memory;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod browser;

pub use directory::DirectoryDocument;
pub use error::DownloadError;
pub use memory::{MemoryDocument, SavedDownload, Step};

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use browser::BrowserDocument;

/// In-memory binary payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blob {
    pub data: Vec<u8>,
    pub mime_type: Option<String>,
}

impl Blob {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Hyperlink element with a `download` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    pub download: String,
}

/// Handle of an anchor attached to a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorId(usize);

impl AnchorId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// The DOM operations a download needs.
pub trait Document {
    /// Registers `blob` and returns a document-local URL for it.
    fn create_object_url(&mut self, blob: Blob) -> Result<String, DownloadError>;

    /// Creates the anchor and attaches it to the document body.
    fn append_anchor(&mut self, anchor: Anchor) -> Result<AnchorId, DownloadError>;

    /// Activates the anchor (starts the download).
    fn click(&mut self, id: AnchorId) -> Result<(), DownloadError>;

    /// Detaches the anchor from the document.
    fn remove(&mut self, id: AnchorId) -> Result<(), DownloadError>;

    /// Releases a URL created by [`Document::create_object_url`].
    fn revoke_object_url(&mut self, url: &str) -> Result<(), DownloadError>;
}

/// Offers `blob` to the user as a download named `file_name`.
///
/// The anchor must be attached before the click (Firefox ignores clicks on
/// detached links). The anchor is removed and the object URL revoked even when
/// the click fails; the first error is returned.
pub fn insert_blob<D>(doc: &mut D, file_name: &str, blob: Blob) -> Result<(), DownloadError>
where
    D: Document + ?Sized,
{
    let size = blob.len();
    let url = doc.create_object_url(blob)?;
    let anchor = Anchor {
        href: url.clone(),
        download: file_name.to_string(),
    };

    let id = match doc.append_anchor(anchor) {
        Ok(id) => id,
        Err(err) => {
            if let Err(revoke_err) = doc.revoke_object_url(&url) {
                tracing::warn!("revoke {} after failed append: {}", url, revoke_err);
            }
            return Err(err);
        }
    };

    let clicked = doc.click(id);
    let removed = doc.remove(id);
    let revoked = doc.revoke_object_url(&url);
    clicked?;
    removed?;
    revoked?;

    tracing::debug!(file_name, size, "download triggered");
    Ok(())
}
