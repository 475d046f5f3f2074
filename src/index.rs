//! Parent-keyed indexes over the loaded records.
//!
//! [`EntityIndex`] owns every record and partitions them by kind. Children
//! (methods, fields, inner classes) are grouped under the exact
//! [`QualifiedName`] of their parent, in table order.

use crate::core::{EntityKind, QualifiedName, Record};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Ordered child positions keyed by parent name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildIndex {
    groups: HashMap<QualifiedName, Vec<usize>>,
}

impl ChildIndex {
    fn insert(&mut self, parent: QualifiedName, position: usize) {
        self.groups.entry(parent).or_default().push(position);
    }

    /// Positions of the children of `parent`, in table order.
    pub fn get(&self, parent: &QualifiedName) -> &[usize] {
        self.groups.get(parent).map_or(&[], Vec::as_slice)
    }

    pub fn parents(&self) -> impl Iterator<Item = &QualifiedName> {
        self.groups.keys()
    }

    /// Number of grouped children across all parents.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// All records of a run plus the collections and indexes built over them.
#[derive(Debug, Clone, Default)]
pub struct EntityIndex {
    records: Vec<Record>,
    classes: Vec<usize>,
    methods: Vec<usize>,
    fields: Vec<usize>,
    enums: Vec<usize>,
    methods_by_parent: ChildIndex,
    fields_by_parent: ChildIndex,
    inner_classes_by_parent: ChildIndex,
}

impl EntityIndex {
    /// Partition `records` by kind and group children under their parent.
    ///
    /// Methods and fields with no parent are kept in their kind collection
    /// but belong to no group.
    pub fn build(records: Vec<Record>) -> Self {
        let mut index = Self::default();

        for (position, record) in records.iter().enumerate() {
            match record.kind {
                EntityKind::Class => match &record.parent {
                    None => index.classes.push(position),
                    Some(parent) => index
                        .inner_classes_by_parent
                        .insert(parent.clone(), position),
                },
                EntityKind::Method => {
                    index.methods.push(position);
                    if let Some(parent) = &record.parent {
                        index.methods_by_parent.insert(parent.clone(), position);
                    }
                }
                EntityKind::Field => {
                    index.fields.push(position);
                    if let Some(parent) = &record.parent {
                        index.fields_by_parent.insert(parent.clone(), position);
                    }
                }
                EntityKind::Enum => index.enums.push(position),
            }
        }

        index.records = records;
        debug!(
            classes = index.classes.len(),
            inner_classes = index.inner_classes_by_parent.len(),
            methods = index.methods.len(),
            fields = index.fields.len(),
            enums = index.enums.len(),
            "built entity index"
        );
        index
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Top-level classes, the traversal roots, in table order.
    pub fn classes(&self) -> impl Iterator<Item = &Record> + '_ {
        self.resolve(&self.classes)
    }

    pub fn methods(&self) -> impl Iterator<Item = &Record> + '_ {
        self.resolve(&self.methods)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Record> + '_ {
        self.resolve(&self.fields)
    }

    /// Enum records are loaded but never turned into prompts.
    pub fn enums(&self) -> impl Iterator<Item = &Record> + '_ {
        self.resolve(&self.enums)
    }

    pub fn methods_of<'a>(&'a self, class: &QualifiedName) -> impl Iterator<Item = &'a Record> + 'a {
        self.resolve(self.methods_by_parent.get(class))
    }

    pub fn fields_of<'a>(&'a self, class: &QualifiedName) -> impl Iterator<Item = &'a Record> + 'a {
        self.resolve(self.fields_by_parent.get(class))
    }

    pub fn inner_classes_of<'a>(
        &'a self,
        class: &QualifiedName,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.resolve(self.inner_classes_by_parent.get(class))
    }

    pub fn methods_by_parent(&self) -> &ChildIndex {
        &self.methods_by_parent
    }

    pub fn fields_by_parent(&self) -> &ChildIndex {
        &self.fields_by_parent
    }

    pub fn inner_classes_by_parent(&self) -> &ChildIndex {
        &self.inner_classes_by_parent
    }

    /// Records that no traversal will ever reach: children whose parent
    /// never resolves to a reachable class, and methods or fields with no
    /// parent at all.
    pub fn orphans(&self) -> Vec<&Record> {
        let reachable = self.reachable_classes();
        self.records
            .iter()
            .filter(|record| match record.kind {
                EntityKind::Class => {
                    !record.is_top_level_class() && !reachable.contains(&record.name)
                }
                EntityKind::Method | EntityKind::Field => record
                    .parent
                    .as_ref()
                    .map_or(true, |parent| !reachable.contains(parent)),
                EntityKind::Enum => false,
            })
            .collect()
    }

    /// Names of every class reachable from a top-level class.
    fn reachable_classes(&self) -> HashSet<&QualifiedName> {
        let mut reachable = HashSet::new();
        let mut pending: Vec<&Record> = self.classes().collect();
        while let Some(class) = pending.pop() {
            if reachable.insert(&class.name) {
                pending.extend(self.inner_classes_of(&class.name));
            }
        }
        reachable
    }

    fn resolve<'a>(&'a self, positions: &'a [usize]) -> impl Iterator<Item = &'a Record> + 'a {
        positions.iter().map(move |&position| &self.records[position])
    }
}
