use pinboard_types::{DataItem, ItemId};

/// An item plus the board-wide insertion stamp assigned when it was stored.
#[derive(Clone, Debug)]
pub(crate) struct SeqItem {
    pub(crate) seq: u64,
    pub(crate) item: DataItem,
}

/// One named partition: a read ACL and the items it owns.
///
/// Invariant: every held item is tagged with this category's name. The
/// category matches items by id and keeps them in insertion order; deep-copy
/// discipline and duplicate checks live a layer up.
#[derive(Clone, Debug)]
pub struct Category {
    name: String,
    readers: Vec<String>,
    items: Vec<SeqItem>,
}

impl Category {
    /// Create an empty category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            readers: Vec::new(),
            items: Vec::new(),
        }
    }

    /// The category's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grant `friend` read access. Returns `false` if already granted.
    pub fn allow_read(&mut self, friend: &str) -> bool {
        if self.is_readable_by(friend) {
            return false;
        }
        self.readers.push(friend.to_string());
        true
    }

    /// Revoke `friend`'s read access. Returns `false` if it was not granted.
    pub fn deny_read(&mut self, friend: &str) -> bool {
        let before = self.readers.len();
        self.readers.retain(|name| name != friend);
        self.readers.len() != before
    }

    /// Whether `user` is on the ACL.
    pub fn is_readable_by(&self, user: &str) -> bool {
        self.readers.iter().any(|name| name == user)
    }

    /// Store an item under this category with its insertion stamp. The item
    /// arrives already tagged by the owning store.
    pub(crate) fn add_data(&mut self, seq: u64, item: DataItem) {
        debug_assert_eq!(item.category(), self.name);
        self.items.push(SeqItem { seq, item });
    }

    /// Whether this category holds an item with the given id.
    pub fn has_data(&self, id: ItemId) -> bool {
        self.items.iter().any(|entry| entry.item.id() == id)
    }

    /// The held item with this id.
    pub fn get_data(&self, id: ItemId) -> Option<&DataItem> {
        self.items
            .iter()
            .find(|entry| entry.item.id() == id)
            .map(|entry| &entry.item)
    }

    /// Mutable access to the held item with this id.
    pub(crate) fn data_mut(&mut self, id: ItemId) -> Option<&mut DataItem> {
        self.items
            .iter_mut()
            .find(|entry| entry.item.id() == id)
            .map(|entry| &mut entry.item)
    }

    /// Remove and return the held item with this id.
    pub fn remove_data(&mut self, id: ItemId) -> Option<DataItem> {
        let position = self.items.iter().position(|entry| entry.item.id() == id)?;
        Some(self.items.remove(position).item)
    }

    /// Snapshot of every held item, in insertion order.
    pub fn all_data(&self) -> Vec<DataItem> {
        self.items.iter().map(|entry| entry.item.clone()).collect()
    }

    /// Ids of every held item, for index maintenance on cascade.
    pub(crate) fn item_ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|entry| entry.item.id()).collect()
    }

    /// The stamped entries, for board-wide insertion-order merges.
    pub(crate) fn entries(&self) -> &[SeqItem] {
        &self.items
    }

    /// Number of held items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the category holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
