use std::collections::HashMap;

use pinboard_types::{DataItem, ItemId};

use crate::category::Category;
use crate::traits::BoardStore;

/// Per-category storage: one [`Category`] per partition, plus a secondary
/// id→category index updated atomically with every mutation.
///
/// The index makes the board-wide uniqueness check and id lookups O(1)
/// instead of a scan across partitions; cascade deletion drops the
/// category's ids from the index in the same call that drops the category.
#[derive(Debug, Default)]
pub struct PartitionedStore {
    categories: HashMap<String, Category>,
    index: HashMap<ItemId, String>,
    next_seq: u64,
}

impl PartitionedStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoardStore for PartitionedStore {
    fn create_category(&mut self, name: &str) -> bool {
        if self.categories.contains_key(name) {
            return false;
        }
        self.categories
            .insert(name.to_string(), Category::new(name));
        true
    }

    fn remove_category(&mut self, name: &str) -> bool {
        let Some(category) = self.categories.remove(name) else {
            return false;
        };
        for id in category.item_ids() {
            self.index.remove(&id);
        }
        true
    }

    fn has_category(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    fn category_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.categories.keys().cloned().collect();
        names.sort();
        names
    }

    fn allow_read(&mut self, category: &str, friend: &str) -> bool {
        self.categories
            .get_mut(category)
            .is_some_and(|cat| cat.allow_read(friend))
    }

    fn deny_read(&mut self, category: &str, friend: &str) -> bool {
        self.categories
            .get_mut(category)
            .is_some_and(|cat| cat.deny_read(friend))
    }

    fn is_readable_by(&self, category: &str, user: &str) -> bool {
        self.categories
            .get(category)
            .is_some_and(|cat| cat.is_readable_by(user))
    }

    fn categories_readable_by(&self, friend: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .categories
            .values()
            .filter(|cat| cat.is_readable_by(friend))
            .map(|cat| cat.name().to_string())
            .collect();
        names.sort();
        names
    }

    fn insert(&mut self, category: &str, item: DataItem) -> bool {
        let Some(cat) = self.categories.get_mut(category) else {
            return false;
        };
        let id = item.id();
        let seq = self.next_seq;
        self.next_seq += 1;
        cat.add_data(seq, item.with_category(category));
        self.index.insert(id, category.to_string());
        true
    }

    fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    fn get(&self, id: ItemId) -> Option<DataItem> {
        let category = self.index.get(&id)?;
        self.categories.get(category)?.get_data(id).cloned()
    }

    fn remove(&mut self, id: ItemId) -> Option<DataItem> {
        let category = self.index.remove(&id)?;
        self.categories.get_mut(&category)?.remove_data(id)
    }

    fn category_of(&self, id: ItemId) -> Option<String> {
        self.index.get(&id).cloned()
    }

    fn push_like(&mut self, id: ItemId, friend: &str) -> bool {
        let Some(category) = self.index.get(&id) else {
            return false;
        };
        match self
            .categories
            .get_mut(category)
            .and_then(|cat| cat.data_mut(id))
        {
            Some(item) => {
                item.insert_like(friend);
                true
            }
            None => false,
        }
    }

    fn items_in(&self, category: &str) -> Vec<DataItem> {
        self.categories
            .get(category)
            .map(Category::all_data)
            .unwrap_or_default()
    }

    fn all_items(&self) -> Vec<DataItem> {
        let mut entries: Vec<(u64, &DataItem)> = self
            .categories
            .values()
            .flat_map(|cat| cat.entries().iter().map(|e| (e.seq, &e.item)))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, item)| item.clone()).collect()
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}
