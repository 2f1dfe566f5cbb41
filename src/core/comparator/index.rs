//! Append-only fingerprint index.

use super::Group;
use crate::core::hasher::Fingerprint;
use std::collections::HashMap;
use std::path::PathBuf;

/// Mapping from fingerprint to the group of files that share it.
///
/// Groups are kept in order of first appearance so that reports are
/// stable. Groups only grow; nothing is ever removed.
#[derive(Debug, Default)]
pub struct GroupIndex {
    groups: Vec<Group>,
    positions: HashMap<Fingerprint, usize>,
}

impl GroupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` to the group for `fingerprint`, creating it if needed.
    ///
    /// Returns true when this insertion took the group past one member,
    /// i.e. a duplicate was just found.
    pub fn record(&mut self, fingerprint: Fingerprint, path: PathBuf) -> bool {
        match self.positions.get(&fingerprint) {
            Some(&position) => {
                let group = &mut self.groups[position];
                group.files.push(path);
                group.is_duplicate()
            }
            None => {
                self.positions.insert(fingerprint, self.groups.len());
                self.groups.push(Group::new(fingerprint, path));
                false
            }
        }
    }

    /// Number of distinct fingerprints
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of files recorded across all groups
    pub fn total_files(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&Group> {
        self.positions
            .get(fingerprint)
            .map(|&position| &self.groups[position])
    }

    /// All groups, in order of first appearance
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Groups with more than one member, in order of first appearance
    pub fn duplicate_groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter().filter(|group| group.is_duplicate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(value: u64) -> Fingerprint {
        Fingerprint::new(value)
    }

    #[test]
    fn empty_index_has_no_groups() {
        let index = GroupIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.duplicate_groups().count(), 0);
    }

    #[test]
    fn first_insertion_is_not_a_duplicate() {
        let mut index = GroupIndex::new();
        assert!(!index.record(fp(1), PathBuf::from("a.png")));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn second_member_reports_duplicate() {
        let mut index = GroupIndex::new();
        index.record(fp(1), PathBuf::from("a.png"));

        assert!(index.record(fp(1), PathBuf::from("b.png")));
        assert!(index.record(fp(1), PathBuf::from("c.png")));
        assert_eq!(index.len(), 1);
        assert_eq!(index.total_files(), 3);
    }

    #[test]
    fn members_keep_insertion_order() {
        let mut index = GroupIndex::new();
        for name in ["z.png", "a.png", "m.png"] {
            index.record(fp(9), PathBuf::from(name));
        }

        let group = index.get(&fp(9)).unwrap();
        assert_eq!(
            group.files,
            vec![
                PathBuf::from("z.png"),
                PathBuf::from("a.png"),
                PathBuf::from("m.png")
            ]
        );
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let mut index = GroupIndex::new();
        index.record(fp(3), PathBuf::from("a.png"));
        index.record(fp(1), PathBuf::from("b.png"));
        index.record(fp(3), PathBuf::from("c.png"));
        index.record(fp(2), PathBuf::from("d.png"));
        index.record(fp(1), PathBuf::from("e.png"));

        let order: Vec<_> = index.groups().iter().map(|g| g.fingerprint).collect();
        assert_eq!(order, vec![fp(3), fp(1), fp(2)]);

        let duplicates: Vec<_> = index.duplicate_groups().map(|g| g.fingerprint).collect();
        assert_eq!(duplicates, vec![fp(3), fp(1)]);
    }

    #[test]
    fn shared_key_means_shared_group() {
        let mut index = GroupIndex::new();
        index.record(fp(5), PathBuf::from("a.png"));
        index.record(fp(5), PathBuf::from("b.png"));
        index.record(fp(6), PathBuf::from("c.png"));

        let shared = index.get(&fp(5)).unwrap();
        assert_eq!(
            shared.files,
            vec![PathBuf::from("a.png"), PathBuf::from("b.png")]
        );
        assert!(!index.get(&fp(6)).unwrap().is_duplicate());
        assert!(index.get(&fp(7)).is_none());
    }
}
