//! Storage backends for the Pinboard.
//!
//! This crate provides the seam between the board façade and its state: the
//! [`BoardStore`] trait plus two interchangeable in-memory backends, selected
//! at board construction.
//!
//! # Backends
//!
//! - [`PartitionedStore`] — one item list per category, with a secondary
//!   id→category index kept atomic with every mutation
//! - [`FlatStore`] — a single insertion-ordered collection of items tagged by
//!   category, with ACLs held in a side map
//!
//! # Design Rules
//!
//! 1. Backends store and return clones; no caller ever holds a reference into
//!    backend state.
//! 2. Every stored item carries a monotonic insertion stamp; `all_items` and
//!    `items_in` yield insertion order, which the façade's enumeration sort
//!    relies on for its tie-break.
//! 3. Backends signal misses with `Option`/`bool` and never panic; the board
//!    façade owns precondition checking and error mapping.
//! 4. The secondary id index must agree with the item collection after every
//!    mutation, cascade deletion included.

pub mod category;
pub mod flat;
pub mod partitioned;
pub mod traits;

pub use category::Category;
pub use flat::FlatStore;
pub use partitioned::PartitionedStore;
pub use traits::BoardStore;

#[cfg(test)]
mod contract {
    //! Contract suite run against both backends.

    use pinboard_types::{DataItem, ItemId};

    use crate::{BoardStore, FlatStore, PartitionedStore};

    fn backends() -> Vec<Box<dyn BoardStore>> {
        vec![
            Box::new(PartitionedStore::new()),
            Box::new(FlatStore::new()),
        ]
    }

    fn item(id: u64, body: &str) -> DataItem {
        DataItem::new(id, body)
    }

    // -----------------------------------------------------------------------
    // Categories
    // -----------------------------------------------------------------------

    #[test]
    fn create_category_is_idempotent_checked() {
        for mut store in backends() {
            assert!(store.create_category("news"));
            assert!(!store.create_category("news"));
            assert!(store.has_category("news"));
            assert!(!store.has_category("sports"));
        }
    }

    #[test]
    fn remove_category_cascades_items_and_index() {
        for mut store in backends() {
            store.create_category("a");
            store.create_category("b");
            store.insert("a", item(1, "one"));
            store.insert("a", item(2, "two"));
            store.insert("b", item(3, "three"));

            assert!(store.remove_category("a"));

            assert!(!store.has_category("a"));
            assert!(!store.contains(ItemId(1)));
            assert!(!store.contains(ItemId(2)));
            assert!(store.contains(ItemId(3)));
            assert_eq!(store.len(), 1);
            assert_eq!(store.category_of(ItemId(1)), None);
        }
    }

    #[test]
    fn remove_absent_category_is_false() {
        for mut store in backends() {
            assert!(!store.remove_category("ghost"));
        }
    }

    #[test]
    fn category_names_are_sorted() {
        for mut store in backends() {
            store.create_category("zeta");
            store.create_category("alpha");
            store.create_category("mid");
            assert_eq!(store.category_names(), vec!["alpha", "mid", "zeta"]);
        }
    }

    // -----------------------------------------------------------------------
    // ACLs
    // -----------------------------------------------------------------------

    #[test]
    fn allow_and_deny_read() {
        for mut store in backends() {
            store.create_category("c");
            assert!(!store.is_readable_by("c", "fred"));

            assert!(store.allow_read("c", "fred"));
            assert!(store.is_readable_by("c", "fred"));
            assert!(!store.allow_read("c", "fred")); // already on the ACL

            assert!(store.deny_read("c", "fred"));
            assert!(!store.is_readable_by("c", "fred"));
            assert!(!store.deny_read("c", "fred")); // already gone
        }
    }

    #[test]
    fn acl_on_missing_category_is_a_miss() {
        for mut store in backends() {
            assert!(!store.allow_read("ghost", "fred"));
            assert!(!store.deny_read("ghost", "fred"));
            assert!(!store.is_readable_by("ghost", "fred"));
        }
    }

    #[test]
    fn categories_readable_by_lists_every_qualifying_category() {
        for mut store in backends() {
            store.create_category("a");
            store.create_category("b");
            store.create_category("c");
            store.allow_read("a", "fred");
            store.allow_read("c", "fred");
            store.allow_read("b", "gina");

            assert_eq!(store.categories_readable_by("fred"), vec!["a", "c"]);
            assert_eq!(store.categories_readable_by("gina"), vec!["b"]);
            assert!(store.categories_readable_by("nobody").is_empty());
        }
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    #[test]
    fn insert_tags_and_indexes_the_item() {
        for mut store in backends() {
            store.create_category("c");
            assert!(store.insert("c", item(7, "body")));

            let stored = store.get(ItemId(7)).expect("stored");
            assert_eq!(stored.category(), "c");
            assert_eq!(stored.body(), "body");
            assert_eq!(store.category_of(ItemId(7)).as_deref(), Some("c"));
        }
    }

    #[test]
    fn insert_into_missing_category_is_false() {
        for mut store in backends() {
            assert!(!store.insert("ghost", item(1, "x")));
            assert!(!store.contains(ItemId(1)));
        }
    }

    #[test]
    fn remove_returns_the_item_once() {
        for mut store in backends() {
            store.create_category("c");
            store.insert("c", item(9, "bye"));

            let removed = store.remove(ItemId(9)).expect("was present");
            assert_eq!(removed.id(), ItemId(9));
            assert!(store.remove(ItemId(9)).is_none());
            assert!(!store.contains(ItemId(9)));
            assert_eq!(store.len(), 0);
        }
    }

    #[test]
    fn push_like_mutates_stored_item() {
        for mut store in backends() {
            store.create_category("c");
            store.insert("c", item(4, "likable"));

            assert!(store.push_like(ItemId(4), "fred"));
            assert!(store.push_like(ItemId(4), "gina"));
            assert!(!store.push_like(ItemId(99), "fred"));

            let stored = store.get(ItemId(4)).unwrap();
            assert_eq!(stored.likes(), ["fred", "gina"]);
        }
    }

    #[test]
    fn all_items_preserves_board_wide_insertion_order() {
        for mut store in backends() {
            store.create_category("a");
            store.create_category("b");
            store.insert("a", item(1, "first"));
            store.insert("b", item(2, "second"));
            store.insert("a", item(3, "third"));

            let ids: Vec<ItemId> = store.all_items().iter().map(DataItem::id).collect();
            assert_eq!(ids, vec![ItemId(1), ItemId(2), ItemId(3)]);
        }
    }

    #[test]
    fn items_in_scopes_to_one_category() {
        for mut store in backends() {
            store.create_category("a");
            store.create_category("b");
            store.insert("a", item(1, "x"));
            store.insert("b", item(2, "y"));
            store.insert("a", item(3, "z"));

            let ids: Vec<ItemId> = store.items_in("a").iter().map(DataItem::id).collect();
            assert_eq!(ids, vec![ItemId(1), ItemId(3)]);
            assert!(store.items_in("ghost").is_empty());
        }
    }

    #[test]
    fn returned_items_are_clones() {
        for mut store in backends() {
            store.create_category("c");
            store.insert("c", item(5, "original"));

            let mut copy = store.get(ItemId(5)).unwrap();
            copy.insert_like("mallory");

            assert_eq!(store.get(ItemId(5)).unwrap().like_count(), 0);
        }
    }
}
