//! Append-only, insertion-ordered triple storage.

use crate::triple::{Relation, Triple};

/// The flat list of all known facts.
///
/// Insertion order is semantically meaningful: lookups resolve to the
/// first match in insertion order, so facts appended earlier win ties.
/// Nothing is ever removed or mutated after insertion.
#[derive(Debug, Default, Clone)]
pub struct TripleStore {
    triples: Vec<Triple>,
}

impl TripleStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            triples: Vec::new(),
        }
    }

    /// Append one triple.
    pub fn insert(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Append a batch, preserving its order.
    pub fn extend(&mut self, triples: impl IntoIterator<Item = Triple>) {
        self.triples.extend(triples);
    }

    /// Number of stored triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// All triples, in insertion order.
    #[must_use]
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Object of the first triple with this subject and relation.
    ///
    /// Triples without an object are skipped and the scan keeps going.
    #[must_use]
    pub fn first_object(&self, subject: &str, relation: &Relation) -> Option<&str> {
        self.triples.iter().find_map(|t| {
            if t.subject == subject && t.relation == *relation {
                t.object.as_deref()
            } else {
                None
            }
        })
    }

    /// Subjects of every triple with this relation and object, in
    /// insertion order. Duplicates are kept.
    pub fn subjects_for<'a>(
        &'a self,
        relation: &'a Relation,
        object: &'a str,
    ) -> impl Iterator<Item = &'a str> {
        self.triples.iter().filter_map(move |t| {
            (t.relation == *relation && t.object.as_deref() == Some(object))
                .then_some(t.subject.as_str())
        })
    }
}

impl<'a> IntoIterator for &'a TripleStore {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TripleStore {
        let mut store = TripleStore::new();
        store.insert(Triple::new("tree", Relation::LocatedIn, Some("yard")));
        store.insert(Triple::new("tree", Relation::LocatedIn, Some("park")));
        store.insert(Triple::new("birds", Relation::LivesIn, Some("tree")));
        store.insert(Triple::new("squirrels", Relation::LivesIn, Some("tree")));
        store
    }

    #[test]
    fn test_insertion_order_preserved() {
        let store = sample();
        let subjects: Vec<&str> = store.iter().map(|t| t.subject.as_str()).collect();
        assert_eq!(subjects, ["tree", "tree", "birds", "squirrels"]);
    }

    #[test]
    fn test_first_object_takes_earliest_match() {
        let store = sample();
        assert_eq!(store.first_object("tree", &Relation::LocatedIn), Some("yard"));
    }

    #[test]
    fn test_first_object_skips_absent_objects() {
        let mut store = TripleStore::new();
        store.insert(Triple::new("tree", Relation::LocatedIn, Some("")));
        store.insert(Triple::new("tree", Relation::LocatedIn, Some("yard")));
        assert_eq!(store.first_object("tree", &Relation::LocatedIn), Some("yard"));
    }

    #[test]
    fn test_first_object_misses_on_wrong_relation() {
        let store = sample();
        assert_eq!(store.first_object("tree", &Relation::Attr), None);
    }

    #[test]
    fn test_subjects_for_keeps_order_and_duplicates() {
        let mut store = sample();
        store.insert(Triple::new("birds", Relation::LivesIn, Some("tree")));
        let inhabitants: Vec<&str> = store.subjects_for(&Relation::LivesIn, "tree").collect();
        assert_eq!(inhabitants, ["birds", "squirrels", "birds"]);
    }
}
