//! Rename planning: which files change name, and to what.

use crate::clean::{clean_filename, split_extension};
use crate::model::{Conflict, RenameEntry};
use ahash::{AHashMap, AHashSet};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    /// One entry per file whose cleaned name differs, referenced files
    /// first. Conflict suffixes are already applied.
    pub entries: Vec<RenameEntry>,
    /// The collision groups found before resolution, for reporting.
    pub conflicts: Vec<Conflict>,
}

/// Build the plan from the referenced names and the physical names found
/// in `folder`. Pure: inputs are sorted and deduplicated here, so the
/// same sets produce the same plan no matter how they arrive.
///
/// Referenced names only get an entry when a physical file of that exact
/// name exists. Referenced entries come first and keep the cleaned name
/// when it collides; later colliders get `-2`, `-3`... suffixes before
/// the extension, in plan order.
pub fn plan(referenced: &[String], physical: &[String], folder: &Path) -> RenamePlan {
    let physical_set: AHashSet<&str> = physical.iter().map(String::as_str).collect();

    let mut referenced_sorted: Vec<&String> = referenced.iter().collect();
    referenced_sorted.sort();
    referenced_sorted.dedup();

    let mut physical_sorted: Vec<&String> = physical.iter().collect();
    physical_sorted.sort();
    physical_sorted.dedup();

    let mut entries: Vec<RenameEntry> = Vec::new();
    let mut planned: AHashSet<String> = AHashSet::new();

    for name in referenced_sorted {
        if !physical_set.contains(name.as_str()) {
            continue;
        }
        push_entry(&mut entries, &mut planned, name, folder, true);
    }

    for name in physical_sorted {
        push_entry(&mut entries, &mut planned, name, folder, false);
    }

    let conflicts = find_conflicts(&entries);
    resolve_conflicts(&mut entries, &conflicts, folder);

    RenamePlan { entries, conflicts }
}

fn push_entry(
    entries: &mut Vec<RenameEntry>,
    planned: &mut AHashSet<String>,
    name: &str,
    folder: &Path,
    referenced: bool,
) {
    if planned.contains(name) {
        return;
    }
    let cleaned = clean_filename(name);
    if cleaned == name {
        return;
    }
    planned.insert(name.to_string());
    entries.push(RenameEntry {
        old_name: name.to_string(),
        new_name: cleaned.clone(),
        old_path: folder.join(name),
        new_path: folder.join(&cleaned),
        referenced,
    });
}

/// Group entries by target name, plan order, and keep the groups with
/// more than one member.
fn find_conflicts(entries: &[RenameEntry]) -> Vec<Conflict> {
    let mut members: AHashMap<&str, Vec<&str>> = AHashMap::new();
    let mut group_order: Vec<&str> = Vec::new();
    for entry in entries {
        let group = members.entry(entry.new_name.as_str()).or_default();
        if group.is_empty() {
            group_order.push(entry.new_name.as_str());
        }
        group.push(entry.old_name.as_str());
    }

    group_order
        .into_iter()
        .filter(|new_name| members[new_name].len() > 1)
        .map(|new_name| Conflict {
            new_name: new_name.to_string(),
            old_names: members[new_name].iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

/// Every group member after the first moves to `stem-2`, `stem-3`... with
/// the extension kept. The resolved names are not checked for further
/// collisions; an occupied destination surfaces when the plan is applied.
fn resolve_conflicts(entries: &mut [RenameEntry], conflicts: &[Conflict], folder: &Path) {
    for conflict in conflicts {
        let (stem, extension) = split_extension(&conflict.new_name);
        for (position, old_name) in conflict.old_names.iter().enumerate().skip(1) {
            let resolved = format!("{}-{}{}", stem, position + 1, extension);
            if let Some(entry) = entries.iter_mut().find(|e| e.old_name == *old_name) {
                debug!("Conflict: {} -> {} (was {})", old_name, resolved, conflict.new_name);
                entry.new_name = resolved.clone();
                entry.new_path = folder.join(&resolved);
            }
        }
    }
}
