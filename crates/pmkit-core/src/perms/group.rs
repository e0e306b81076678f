use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ModelScoped;

/// All permissions of one model, in their original relative order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermGroup<P> {
    pub model: String,
    pub perms: Vec<P>,
}

/// Partitions `permissions` by model.
///
/// Groups are returned in the order their model is first seen; every record
/// ends up in exactly one group.
pub fn group_perms_by_model<P>(permissions: &[P]) -> Vec<PermGroup<P>>
where
    P: ModelScoped + Clone,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<PermGroup<P>> = Vec::new();

    for perm in permissions {
        let model = perm.model();
        let slot = *index.entry(model).or_insert_with(|| {
            groups.push(PermGroup {
                model: model.to_string(),
                perms: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].perms.push(perm.clone());
    }

    groups
}
