//! Document that keeps everything in memory and records each call.

use std::collections::HashMap;

use super::{Anchor, AnchorId, Blob, Document, DownloadError};

/// One call made against a [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    CreateObjectUrl { url: String, size: usize },
    Append { id: AnchorId, anchor: Anchor },
    Click(AnchorId),
    Remove(AnchorId),
    Revoke(String),
}

/// A blob whose anchor was clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDownload {
    pub file_name: String,
    pub blob: Blob,
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    next_url: usize,
    urls: HashMap<String, Blob>,
    anchors: Vec<Option<Anchor>>,
    steps: Vec<Step>,
    downloads: Vec<SavedDownload>,
    fail_clicks: bool,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every click fail, as a browser blocking downloads would.
    pub fn fail_clicks(mut self) -> Self {
        self.fail_clicks = true;
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn downloads(&self) -> &[SavedDownload] {
        &self.downloads
    }

    pub fn attached_anchors(&self) -> usize {
        self.anchors.iter().flatten().count()
    }

    pub fn live_object_urls(&self) -> usize {
        self.urls.len()
    }

    fn anchor(&self, id: AnchorId) -> Result<&Anchor, DownloadError> {
        self.anchors
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(DownloadError::UnknownAnchor(id.index()))
    }
}

impl Document for MemoryDocument {
    fn create_object_url(&mut self, blob: Blob) -> Result<String, DownloadError> {
        let url = format!("blob:memory/{}", self.next_url);
        self.next_url += 1;
        self.steps.push(Step::CreateObjectUrl {
            url: url.clone(),
            size: blob.len(),
        });
        self.urls.insert(url.clone(), blob);
        Ok(url)
    }

    fn append_anchor(&mut self, anchor: Anchor) -> Result<AnchorId, DownloadError> {
        let id = AnchorId::new(self.anchors.len());
        self.steps.push(Step::Append {
            id,
            anchor: anchor.clone(),
        });
        self.anchors.push(Some(anchor));
        Ok(id)
    }

    fn click(&mut self, id: AnchorId) -> Result<(), DownloadError> {
        self.steps.push(Step::Click(id));
        if self.fail_clicks {
            return Err(DownloadError::Browser("download blocked".to_string()));
        }
        let anchor = self.anchor(id)?;
        let blob = self
            .urls
            .get(&anchor.href)
            .cloned()
            .ok_or_else(|| DownloadError::UnknownObjectUrl(anchor.href.clone()))?;
        let file_name = anchor.download.clone();
        self.downloads.push(SavedDownload { file_name, blob });
        Ok(())
    }

    fn remove(&mut self, id: AnchorId) -> Result<(), DownloadError> {
        self.steps.push(Step::Remove(id));
        self.anchor(id)?;
        self.anchors[id.index()] = None;
        Ok(())
    }

    fn revoke_object_url(&mut self, url: &str) -> Result<(), DownloadError> {
        self.steps.push(Step::Revoke(url.to_string()));
        self.urls
            .remove(url)
            .map(|_| ())
            .ok_or_else(|| DownloadError::UnknownObjectUrl(url.to_string()))
    }
}
