//! Merge-by-append of a freshly decoded unit list into an existing collection.
//!
//! Existing units keep their order; new ones are appended in the order they
//! arrive. Units already present (by value) are dropped. What happens to a unit
//! whose id is present but whose content differs is chosen by
//! [`ConflictStrategy`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::TranslationUnit;

/// Strategy for units whose id already exists with different content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictStrategy {
    /// Keep the unit already in the collection (default).
    #[default]
    KeepExisting,
    /// Overwrite the existing unit in place, keeping its position.
    Replace,
    /// Append the incoming unit anyway. The collection may then hold two
    /// units with the same id.
    Append,
}

/// Counters and conflicting ids collected by [`merge_units`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MergeReport {
    /// Units appended at the end of the collection.
    pub added: usize,
    /// Incoming units identical to one already present.
    pub duplicates: usize,
    /// Existing units overwritten under [`ConflictStrategy::Replace`].
    pub replaced: usize,
    /// Ids that were present with different content, in arrival order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub conflicts: Vec<String>,
}

/// Merges `incoming` into `existing` and reports what happened.
///
/// # Example
///
/// ```rust
/// use xliffcodec::{TranslationUnit, merge::{ConflictStrategy, merge_units}};
///
/// let mut open = vec![TranslationUnit::new("1", "Hello")];
/// let imported = vec![
///     TranslationUnit::new("1", "Hello"),
///     TranslationUnit::new("2", "Bye"),
/// ];
/// let report = merge_units(&mut open, imported, ConflictStrategy::default());
/// assert_eq!(report.added, 1);
/// assert_eq!(report.duplicates, 1);
/// assert_eq!(open.len(), 2);
/// ```
pub fn merge_units(
    existing: &mut Vec<TranslationUnit>,
    incoming: impl IntoIterator<Item = TranslationUnit>,
    strategy: ConflictStrategy,
) -> MergeReport {
    let mut report = MergeReport::default();
    // First position of every id currently in the collection.
    let mut positions: HashMap<String, usize> = HashMap::new();
    for (index, unit) in existing.iter().enumerate() {
        positions.entry(unit.id.clone()).or_insert(index);
    }

    for unit in incoming {
        let Some(&index) = positions.get(&unit.id) else {
            positions.insert(unit.id.clone(), existing.len());
            existing.push(unit);
            report.added += 1;
            continue;
        };

        if existing.contains(&unit) {
            report.duplicates += 1;
            continue;
        }

        log::debug!("unit `{}` conflicts with an existing unit", unit.id);
        report.conflicts.push(unit.id.clone());
        match strategy {
            ConflictStrategy::KeepExisting => {}
            ConflictStrategy::Replace => {
                existing[index] = unit;
                report.replaced += 1;
            }
            ConflictStrategy::Append => {
                existing.push(unit);
                report.added += 1;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Vec<TranslationUnit> {
        vec![
            TranslationUnit::new("1", "Hello").with_target("Bonjour"),
            TranslationUnit::new("2", "Bye"),
        ]
    }

    #[test]
    fn test_new_units_are_appended_in_order() {
        let mut units = base();
        let report = merge_units(
            &mut units,
            vec![TranslationUnit::new("4", "Four"), TranslationUnit::new("3", "Three")],
            ConflictStrategy::KeepExisting,
        );
        let ids: Vec<_> = units.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4", "3"]);
        assert_eq!(report.added, 2);
        assert!(report.conflicts.is_empty());
    }

    #[test]
    fn test_identical_units_are_skipped() {
        let mut units = base();
        let report = merge_units(&mut units, base(), ConflictStrategy::Append);
        assert_eq!(units, base());
        assert_eq!(report.duplicates, 2);
        assert_eq!(report.added, 0);
    }

    #[test]
    fn test_conflict_keep_existing() {
        let mut units = base();
        let report = merge_units(
            &mut units,
            vec![TranslationUnit::new("1", "Hello").with_target("Salut")],
            ConflictStrategy::KeepExisting,
        );
        assert_eq!(units, base());
        assert_eq!(report.conflicts, vec!["1".to_string()]);
        assert_eq!(report.replaced, 0);
    }

    #[test]
    fn test_conflict_replace_keeps_position() {
        let mut units = base();
        let report = merge_units(
            &mut units,
            vec![TranslationUnit::new("1", "Hello").with_target("Salut")],
            ConflictStrategy::Replace,
        );
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].target, "Salut");
        assert_eq!(report.replaced, 1);
    }

    #[test]
    fn test_conflict_append_allows_duplicate_ids() {
        let mut units = base();
        let report = merge_units(
            &mut units,
            vec![TranslationUnit::new("2", "Bye").with_target("Ciao")],
            ConflictStrategy::Append,
        );
        assert_eq!(units.len(), 3);
        assert_eq!(units[2].target, "Ciao");
        assert_eq!(report.added, 1);
        assert_eq!(report.conflicts, vec!["2".to_string()]);
    }

    #[test]
    fn test_appended_units_take_part_in_later_checks() {
        let mut units = Vec::new();
        let report = merge_units(
            &mut units,
            vec![
                TranslationUnit::new("1", "One"),
                TranslationUnit::new("1", "One"),
                TranslationUnit::new("1", "Uno"),
            ],
            ConflictStrategy::KeepExisting,
        );
        assert_eq!(units, vec![TranslationUnit::new("1", "One")]);
        assert_eq!(report.added, 1);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.conflicts.len(), 1);
    }
}
