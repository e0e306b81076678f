//! CLI command handlers, one per file.

mod compare_perms;
mod filename;
mod group_perms;
mod save;
mod urls;

pub use compare_perms::run_compare_perms;
pub use filename::run_filename;
pub use group_perms::run_group_perms;
pub use save::run_save;
pub use urls::run_urls;

use anyhow::{Context, Result};
use pmkit_core::perms::{self, Permission};
use std::fs;
use std::path::Path;

/// Read and parse a JSON array of permissions.
fn read_permissions(path: &Path) -> Result<Vec<Permission>> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    perms::parse_permissions(&data).with_context(|| format!("parse {}", path.display()))
}
