//! `pmkit save` – run a file through the download flow into a directory.

use anyhow::{Context, Result};
use pmkit_core::download::{insert_blob, Blob, DirectoryDocument};
use std::fs;
use std::path::{Path, PathBuf};

pub(super) fn save(
    path: &Path,
    name: Option<&str>,
    dir: &Path,
    mime: Option<String>,
) -> Result<PathBuf> {
    let data = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let name = match name {
        Some(n) => n.to_string(),
        None => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("{} has no file name; pass --name", path.display()))?,
    };

    let mut blob = Blob::new(data);
    blob.mime_type = mime;

    let mut doc = DirectoryDocument::new(dir);
    insert_blob(&mut doc, &name, blob).context("download failed")?;
    doc.saved()
        .last()
        .cloned()
        .context("download produced no file")
}

pub fn run_save(path: &Path, name: Option<&str>, dir: &Path, mime: Option<String>) -> Result<()> {
    let saved = save(path, name, dir, mime)?;
    println!("{}", saved.display());
    Ok(())
}
