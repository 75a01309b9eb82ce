//! Fact-table row parsing.
//!
//! Each row carries subject, relation and object separated by tabs. Extra
//! fields are ignored and rows with fewer than three fields are skipped.
//! Reading the file itself is the caller's concern.

use tracing::debug;

use crate::triple::{Relation, Triple};

/// Parse a tab-separated fact table into triples, in row order.
#[must_use]
pub fn parse_table(content: &str) -> Vec<Triple> {
    let mut triples = Vec::new();
    let mut skipped = 0_usize;

    for line in content.lines() {
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() < 3 {
            skipped += 1;
            continue;
        }
        triples.push(Triple::new(
            fields[0],
            Relation::parse(fields[1]),
            Some(fields[2]),
        ));
    }

    if skipped > 0 {
        debug!("skipped {skipped} rows with fewer than three fields");
    }
    triples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_rows_in_order() {
        let triples = parse_table("tree\tlocated_in\tyard\nbirds\tlives_in\ttree\n");
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0].subject, "tree");
        assert_eq!(triples[0].relation, Relation::LocatedIn);
        assert_eq!(triples[0].object.as_deref(), Some("yard"));
        assert_eq!(triples[1].relation, Relation::LivesIn);
    }

    #[test]
    fn test_short_rows_skipped() {
        let triples = parse_table("tree\tlocated_in\n\njust one field\n");
        assert!(triples.is_empty());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let triples = parse_table("tree\tlocated_in\tyard\tcomment\tmore\n");
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].object.as_deref(), Some("yard"));
    }

    #[test]
    fn test_fields_canonicalized() {
        let triples = parse_table("The Old Tree!\tlocated_in\tMy Yard.\n");
        assert_eq!(triples[0].subject, "the old tree");
        assert_eq!(triples[0].object.as_deref(), Some("my yard"));
    }

    #[test]
    fn test_empty_object_field_stored_as_absent() {
        let triples = parse_table("tree\tattr\t\n");
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].object, None);
    }
}
