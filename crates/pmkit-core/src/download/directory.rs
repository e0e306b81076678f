//! Document that saves activated downloads into a local directory.
//!
//! Each click writes `<name>.part` and renames it into place, so a partially
//! written file never carries the final name.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{Anchor, AnchorId, Blob, Document, DownloadError};
use crate::filename::sanitize_file_name;

/// Name used when the suggested name sanitizes to nothing.
const DEFAULT_FILENAME: &str = "download.bin";

/// Temporary file suffix used before atomic rename.
const TEMP_SUFFIX: &str = ".part";

/// Longest final name whose `.part` sibling still fits in NAME_MAX (255).
const MAX_NAME_BYTES: usize = 255 - TEMP_SUFFIX.len();

#[derive(Debug)]
pub struct DirectoryDocument {
    dir: PathBuf,
    next_url: usize,
    urls: HashMap<String, Blob>,
    anchors: Vec<Option<Anchor>>,
    saved: Vec<PathBuf>,
}

impl DirectoryDocument {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            next_url: 0,
            urls: HashMap::new(),
            anchors: Vec::new(),
            saved: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in click order.
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    /// Local path for a suggested download name.
    pub fn target_path(&self, download: &str) -> PathBuf {
        let name = sanitize_file_name(download);
        let mut take = name.len().min(MAX_NAME_BYTES);
        while !name.is_char_boundary(take) {
            take -= 1;
        }
        let name = name[..take].trim_end_matches(|c| c == '.' || c == '_');
        if name.is_empty() {
            self.dir.join(DEFAULT_FILENAME)
        } else {
            self.dir.join(name)
        }
    }

    fn anchor(&self, id: AnchorId) -> Result<&Anchor, DownloadError> {
        self.anchors
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(DownloadError::UnknownAnchor(id.index()))
    }
}

fn temp_path(final_path: &Path) -> PathBuf {
    let mut s = final_path.as_os_str().to_owned();
    s.push(TEMP_SUFFIX);
    PathBuf::from(s)
}

fn write_atomically(path: &Path, data: &[u8]) -> Result<(), DownloadError> {
    let tmp = temp_path(path);
    fs::write(&tmp, data).map_err(|e| DownloadError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            tracing::warn!("remove {}: {}", tmp.display(), cleanup);
        }
        DownloadError::io(path, e)
    })
}

impl Document for DirectoryDocument {
    fn create_object_url(&mut self, blob: Blob) -> Result<String, DownloadError> {
        let url = format!("blob:file/{}", self.next_url);
        self.next_url += 1;
        self.urls.insert(url.clone(), blob);
        Ok(url)
    }

    fn append_anchor(&mut self, anchor: Anchor) -> Result<AnchorId, DownloadError> {
        let id = AnchorId::new(self.anchors.len());
        self.anchors.push(Some(anchor));
        Ok(id)
    }

    fn click(&mut self, id: AnchorId) -> Result<(), DownloadError> {
        let anchor = self.anchor(id)?;
        let blob = self
            .urls
            .get(&anchor.href)
            .ok_or_else(|| DownloadError::UnknownObjectUrl(anchor.href.clone()))?;
        let path = self.target_path(&anchor.download);

        fs::create_dir_all(&self.dir).map_err(|e| DownloadError::io(&self.dir, e))?;
        write_atomically(&path, &blob.data)?;
        tracing::debug!("saved {} bytes to {}", blob.len(), path.display());

        self.saved.push(path);
        Ok(())
    }

    fn remove(&mut self, id: AnchorId) -> Result<(), DownloadError> {
        self.anchor(id)?;
        self.anchors[id.index()] = None;
        Ok(())
    }

    fn revoke_object_url(&mut self, url: &str) -> Result<(), DownloadError> {
        self.urls
            .remove(url)
            .map(|_| ())
            .ok_or_else(|| DownloadError::UnknownObjectUrl(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::insert_blob;

    #[test]
    fn target_path_is_sanitized() {
        let doc = DirectoryDocument::new("/tmp/out");
        assert_eq!(
            doc.target_path("../secret/a.txt"),
            PathBuf::from("/tmp/out/secret_a.txt")
        );
        assert_eq!(doc.target_path(".."), PathBuf::from("/tmp/out/download.bin"));
    }

    #[test]
    fn temp_path_appends_part() {
        assert_eq!(
            temp_path(Path::new("/x/report.pdf")),
            PathBuf::from("/x/report.pdf.part")
        );
    }

    #[test]
    fn long_name_leaves_room_for_part_suffix() {
        let doc = DirectoryDocument::new("/tmp/out");
        let name = format!("{}.pdf", "a".repeat(250));
        let path = doc.target_path(&name);
        let file = path.file_name().unwrap().to_str().unwrap();
        assert_eq!(file.len(), MAX_NAME_BYTES);
        assert!(file.len() + TEMP_SUFFIX.len() <= 255);
    }

    #[test]
    fn long_multibyte_name_cut_on_char_boundary() {
        let doc = DirectoryDocument::new("/tmp/out");
        let path = doc.target_path(&"é".repeat(200));
        let file = path.file_name().unwrap().to_str().unwrap();
        assert_eq!(file.len(), 250);
        assert_eq!(file.chars().count(), 125);
    }

    #[test]
    fn insert_blob_with_254_byte_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = DirectoryDocument::new(dir.path());
        let name = format!("{}.pdf", "a".repeat(250));
        insert_blob(&mut doc, &name, Blob::new("body")).unwrap();

        let saved = &doc.saved()[0];
        assert_eq!(fs::read_to_string(saved).unwrap(), "body");
        assert!(!temp_path(saved).exists());
    }

    #[test]
    fn failed_rename_removes_part_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory in the way makes the rename fail.
        let blocker = dir.path().join("a.txt");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), "x").unwrap();

        let mut doc = DirectoryDocument::new(dir.path());
        let err = insert_blob(&mut doc, "a.txt", Blob::new("body")).unwrap_err();
        assert!(matches!(err, DownloadError::Io { .. }));
        assert!(!dir.path().join("a.txt.part").exists());
        assert!(doc.saved().is_empty());
    }
}
