//! `pmkit group-perms` – permissions grouped by model, as JSON.

use anyhow::Result;
use pmkit_core::perms::group_perms_by_model;
use std::path::Path;

use super::read_permissions;

pub fn run_group_perms(path: &Path) -> Result<()> {
    let perms = read_permissions(path)?;
    let groups = group_perms_by_model(&perms);
    tracing::debug!("{} permissions in {} groups", perms.len(), groups.len());
    println!("{}", serde_json::to_string_pretty(&groups)?);
    Ok(())
}
