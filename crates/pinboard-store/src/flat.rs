use std::collections::{BTreeMap, HashMap};

use pinboard_types::{DataItem, ItemId};

use crate::traits::BoardStore;

/// Flat storage: a single collection of items keyed by insertion stamp and
/// tagged by category, with ACLs in a side map.
///
/// There is no secondary id→category index to keep in sync with partitions;
/// the category an item belongs to is read off the item itself. The
/// `BTreeMap` keeps board-wide insertion order for free.
#[derive(Debug, Default)]
pub struct FlatStore {
    items: BTreeMap<u64, DataItem>,
    index: HashMap<ItemId, u64>,
    acls: HashMap<String, Vec<String>>,
    next_seq: u64,
}

impl FlatStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoardStore for FlatStore {
    fn create_category(&mut self, name: &str) -> bool {
        if self.acls.contains_key(name) {
            return false;
        }
        self.acls.insert(name.to_string(), Vec::new());
        true
    }

    fn remove_category(&mut self, name: &str) -> bool {
        if self.acls.remove(name).is_none() {
            return false;
        }
        // Cascade: drop every item tagged with the category, index included.
        let doomed: Vec<u64> = self
            .items
            .iter()
            .filter(|(_, item)| item.category() == name)
            .map(|(seq, _)| *seq)
            .collect();
        for seq in doomed {
            if let Some(item) = self.items.remove(&seq) {
                self.index.remove(&item.id());
            }
        }
        true
    }

    fn has_category(&self, name: &str) -> bool {
        self.acls.contains_key(name)
    }

    fn category_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.acls.keys().cloned().collect();
        names.sort();
        names
    }

    fn allow_read(&mut self, category: &str, friend: &str) -> bool {
        let Some(readers) = self.acls.get_mut(category) else {
            return false;
        };
        if readers.iter().any(|name| name == friend) {
            return false;
        }
        readers.push(friend.to_string());
        true
    }

    fn deny_read(&mut self, category: &str, friend: &str) -> bool {
        let Some(readers) = self.acls.get_mut(category) else {
            return false;
        };
        let before = readers.len();
        readers.retain(|name| name != friend);
        readers.len() != before
    }

    fn is_readable_by(&self, category: &str, user: &str) -> bool {
        self.acls
            .get(category)
            .is_some_and(|readers| readers.iter().any(|name| name == user))
    }

    fn categories_readable_by(&self, friend: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .acls
            .iter()
            .filter(|(_, readers)| readers.iter().any(|name| name == friend))
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    fn insert(&mut self, category: &str, item: DataItem) -> bool {
        if !self.acls.contains_key(category) {
            return false;
        }
        let id = item.id();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.items.insert(seq, item.with_category(category));
        self.index.insert(id, seq);
        true
    }

    fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    fn get(&self, id: ItemId) -> Option<DataItem> {
        let seq = self.index.get(&id)?;
        self.items.get(seq).cloned()
    }

    fn remove(&mut self, id: ItemId) -> Option<DataItem> {
        let seq = self.index.remove(&id)?;
        self.items.remove(&seq)
    }

    fn category_of(&self, id: ItemId) -> Option<String> {
        let seq = self.index.get(&id)?;
        self.items.get(seq).map(|item| item.category().to_string())
    }

    fn push_like(&mut self, id: ItemId, friend: &str) -> bool {
        let Some(seq) = self.index.get(&id) else {
            return false;
        };
        match self.items.get_mut(seq) {
            Some(item) => {
                item.insert_like(friend);
                true
            }
            None => false,
        }
    }

    fn items_in(&self, category: &str) -> Vec<DataItem> {
        self.items
            .values()
            .filter(|item| item.category() == category)
            .cloned()
            .collect()
    }

    fn all_items(&self) -> Vec<DataItem> {
        self.items.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The cross-backend contract lives in the crate-level contract suite;
    // these cover the stamp/index bookkeeping specific to this backend.

    #[test]
    fn items_keep_insertion_stamps_after_removals() {
        let mut store = FlatStore::new();
        store.create_category("c");
        store.insert("c", DataItem::new(1u64, "a"));
        store.insert("c", DataItem::new(2u64, "b"));
        store.insert("c", DataItem::new(3u64, "c"));

        store.remove(ItemId(2));
        store.insert("c", DataItem::new(4u64, "d"));

        let ids: Vec<ItemId> = store.all_items().iter().map(DataItem::id).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(3), ItemId(4)]);
    }

    #[test]
    fn cascade_leaves_other_categories_untouched() {
        let mut store = FlatStore::new();
        store.create_category("a");
        store.create_category("b");
        store.insert("a", DataItem::new(1u64, "x"));
        store.insert("b", DataItem::new(2u64, "y"));
        store.insert("a", DataItem::new(3u64, "z"));

        store.remove_category("a");

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(ItemId(2)).unwrap().category(), "b");
        assert!(store.index.get(&ItemId(1)).is_none());
        assert!(store.index.get(&ItemId(3)).is_none());
    }

    #[test]
    fn category_of_reads_the_tag_off_the_item() {
        let mut store = FlatStore::new();
        store.create_category("tagged");
        store.insert("tagged", DataItem::new(9u64, "x"));
        assert_eq!(store.category_of(ItemId(9)).as_deref(), Some("tagged"));
        assert_eq!(store.category_of(ItemId(10)), None);
    }
}
