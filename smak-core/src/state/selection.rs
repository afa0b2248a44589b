use crate::git::Entries;
use std::collections::BTreeSet;

/// Positions in the displayed list marked for deletion.
///
/// Every index is below the length passed to [`SelectionSet::toggle`]; a reload
/// goes through [`SelectionSet::rebase`] so no index outlives its list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: BTreeSet<usize>,
}

impl SelectionSet {
    /// Flip the mark at `index`. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize, len: usize) {
        if index >= len {
            return;
        }
        if !self.indices.remove(&index) {
            self.indices.insert(index);
        }
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Entry names at the marked positions, in ascending index order
    pub fn names(&self, entries: &Entries) -> Vec<String> {
        self.iter()
            .filter_map(|i| entries.name_at(i).map(str::to_string))
            .collect()
    }

    /// Re-derive positions by name against a freshly loaded list.
    /// Names missing from `fresh` are dropped.
    pub fn rebase(&mut self, previous: &Entries, fresh: &Entries) {
        self.indices = self
            .names(previous)
            .iter()
            .filter_map(|name| fresh.position_of(name))
            .collect();
    }
}
