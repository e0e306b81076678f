//! `pmkit compare-perms` – do two permission selections match?

use anyhow::Result;
use pmkit_core::perms::Permission;
use pmkit_core::sets::are_sets_equal;
use std::collections::HashSet;
use std::path::Path;

use super::read_permissions;

fn keys(perms: &[Permission]) -> HashSet<String> {
    perms.iter().map(Permission::key).collect()
}

pub(super) fn same_selection(a: &[Permission], b: &[Permission]) -> bool {
    are_sets_equal(&keys(a), &keys(b))
}

pub fn run_compare_perms(a: &Path, b: &Path) -> Result<()> {
    let left = read_permissions(a)?;
    let right = read_permissions(b)?;
    if same_selection(&left, &right) {
        println!("equal");
    } else {
        println!("different");
    }
    Ok(())
}
