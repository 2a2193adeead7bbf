//! Article ID generation.
//!
//! Ids are random (v4) UUIDs in their hyphenated lowercase form, e.g.
//! `"3f2b8c1e-9a4d-4e6f-8b7a-1c2d3e4f5a6b"`. Ids of the built-in sample
//! articles are short numeric strings (`"1"`, `"2"`, `"3"`); both forms are
//! opaque to the rest of the system.

use uuid::Uuid;

/// Generate a fresh, globally unique article id.
#[must_use]
pub fn new_article_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn id_is_hyphenated_uuid() {
        let id = new_article_id();
        assert_eq!(id.len(), 36, "unexpected id length: {id}");
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = new_article_id();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }
}
