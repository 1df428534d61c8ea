use std::sync::RwLock;

use tracing::debug;

use pinboard_store::{BoardStore, PartitionedStore};
use pinboard_types::{DataItem, Identity, ItemId};

use crate::error::{BoardError, BoardResult};
use crate::iter::{BoardIter, order_by_likes};

/// The single-owner, partitioned board.
///
/// A `Board` owns its owner identity and a pluggable [`BoardStore`] holding
/// categories, ACLs, and items. Every mutating operation authenticates
/// against the owner secret, except [`Board::insert_like`], which authorizes
/// against the owning category's ACL instead.
///
/// The whole store sits behind one lock: the invariants the board enforces
/// (board-wide id uniqueness, cascade deletion, ACL-gated likes) span
/// categories and cannot be split across finer locks. Every value crossing
/// the public boundary is an independent copy.
pub struct Board {
    owner: Box<dyn Identity>,
    inner: RwLock<Box<dyn BoardStore>>,
}

impl Board {
    /// Create an empty board with the default partitioned store.
    pub fn new(owner: impl Identity + 'static) -> Self {
        Self::with_store(owner, Box::new(PartitionedStore::new()))
    }

    /// Create an empty board over a caller-chosen storage backend.
    pub fn with_store(owner: impl Identity + 'static, store: Box<dyn BoardStore>) -> Self {
        Self {
            owner: Box::new(owner),
            inner: RwLock::new(store),
        }
    }

    /// The owner's name.
    pub fn owner_name(&self) -> &str {
        self.owner.name()
    }

    fn authorize(&self, secret: &str) -> BoardResult<()> {
        if self.owner.authenticate(secret) {
            Ok(())
        } else {
            Err(BoardError::Unauthorized)
        }
    }

    fn required(value: &str, what: &str) -> BoardResult<()> {
        if value.is_empty() {
            Err(BoardError::Validation(format!("{what} must not be empty")))
        } else {
            Ok(())
        }
    }

    // -----------------------------------------------------------------------
    // Categories
    // -----------------------------------------------------------------------

    /// Create an empty category.
    pub fn create_category(&self, name: &str, secret: &str) -> BoardResult<()> {
        self.authorize(secret)?;
        Self::required(name, "category name")?;

        let mut store = self.inner.write().expect("lock poisoned");
        if !store.create_category(name) {
            return Err(BoardError::CategoryAlreadyExists(name.to_string()));
        }
        debug!(category = name, "created category");
        Ok(())
    }

    /// Remove a category, cascading: every item it holds and its whole ACL
    /// vanish atomically with it.
    pub fn remove_category(&self, name: &str, secret: &str) -> BoardResult<()> {
        self.authorize(secret)?;
        Self::required(name, "category name")?;

        let mut store = self.inner.write().expect("lock poisoned");
        if !store.remove_category(name) {
            return Err(BoardError::CategoryNotFound(name.to_string()));
        }
        debug!(category = name, "removed category and its items");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Friends
    // -----------------------------------------------------------------------

    /// Put `friend` on a category's read ACL. Authenticates the owner, not
    /// the friend.
    pub fn add_friend(&self, category: &str, secret: &str, friend: &str) -> BoardResult<()> {
        self.authorize(secret)?;
        Self::required(category, "category name")?;
        Self::required(friend, "friend name")?;

        let mut store = self.inner.write().expect("lock poisoned");
        if !store.has_category(category) {
            return Err(BoardError::CategoryNotFound(category.to_string()));
        }
        if !store.allow_read(category, friend) {
            return Err(BoardError::FriendAlreadyAdded(friend.to_string()));
        }
        Ok(())
    }

    /// Drop `friend` from a category's read ACL.
    pub fn remove_friend(&self, category: &str, secret: &str, friend: &str) -> BoardResult<()> {
        self.authorize(secret)?;
        Self::required(category, "category name")?;
        Self::required(friend, "friend name")?;

        let mut store = self.inner.write().expect("lock poisoned");
        if !store.has_category(category) {
            return Err(BoardError::CategoryNotFound(category.to_string()));
        }
        if !store.deny_read(category, friend) {
            return Err(BoardError::FriendNotFound(friend.to_string()));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Store an independent copy of `item` under `category`.
    ///
    /// The item's id must be unused anywhere on the board: uniqueness is
    /// board-wide, not per category. Returns `true` when the item was
    /// stored.
    pub fn put(&self, secret: &str, item: &DataItem, category: &str) -> BoardResult<bool> {
        self.authorize(secret)?;
        Self::required(category, "category name")?;

        let mut store = self.inner.write().expect("lock poisoned");
        if !store.has_category(category) {
            return Err(BoardError::CategoryNotFound(category.to_string()));
        }
        if store.contains(item.id()) {
            return Err(BoardError::DataAlreadyPresent(item.id()));
        }
        let stored = store.insert(category, item.clone());
        if stored {
            debug!(item = %item.id(), category, "stored item");
        }
        Ok(stored)
    }

    /// An independent copy of the item with this id, wherever it is held.
    /// Mutating the returned value does not affect the board.
    pub fn get(&self, secret: &str, id: ItemId) -> BoardResult<DataItem> {
        self.authorize(secret)?;

        let store = self.inner.read().expect("lock poisoned");
        store.get(id).ok_or(BoardError::DataNotFound(id))
    }

    /// Delete the item with this id and return a copy of what was deleted.
    pub fn remove(&self, secret: &str, id: ItemId) -> BoardResult<DataItem> {
        self.authorize(secret)?;

        let mut store = self.inner.write().expect("lock poisoned");
        let removed = store.remove(id).ok_or(BoardError::DataNotFound(id))?;
        debug!(item = %id, "removed item");
        Ok(removed)
    }

    /// Independent copies of every item in `category`, in insertion order.
    ///
    /// An existing-but-empty category yields an empty list; only an absent
    /// category is an error.
    pub fn items_in_category(&self, secret: &str, category: &str) -> BoardResult<Vec<DataItem>> {
        self.authorize(secret)?;
        Self::required(category, "category name")?;

        let store = self.inner.read().expect("lock poisoned");
        if !store.has_category(category) {
            return Err(BoardError::CategoryNotFound(category.to_string()));
        }
        Ok(store.items_in(category))
    }

    // -----------------------------------------------------------------------
    // Likes
    // -----------------------------------------------------------------------

    /// Append `friend`'s like to the item with this id.
    ///
    /// Authorization is keyed by the owning category's ACL, not the owner
    /// secret: the friend must be able to read the category holding the
    /// item. A friend likes any given item at most once.
    pub fn insert_like(&self, friend: &str, id: ItemId) -> BoardResult<()> {
        Self::required(friend, "friend name")?;

        let mut store = self.inner.write().expect("lock poisoned");
        let category = store.category_of(id).ok_or(BoardError::DataNotFound(id))?;
        if !store.is_readable_by(&category, friend) {
            return Err(BoardError::Unauthorized);
        }
        let item = store.get(id).ok_or(BoardError::DataNotFound(id))?;
        if item.liked_by(friend) {
            return Err(BoardError::FriendAlreadyAdded(friend.to_string()));
        }
        store.push_like(id, friend);
        debug!(item = %id, friend, "inserted like");
        Ok(())
    }

    /// Copy of the like list for the item with this id. No authentication.
    pub fn likes(&self, id: ItemId) -> BoardResult<Vec<String>> {
        let store = self.inner.read().expect("lock poisoned");
        let item = store.get(id).ok_or(BoardError::DataNotFound(id))?;
        Ok(item.likes().to_vec())
    }

    // -----------------------------------------------------------------------
    // Enumeration
    // -----------------------------------------------------------------------

    /// Snapshot of every item on the board, ordered by non-increasing like
    /// count; ties keep board-wide insertion order.
    ///
    /// The snapshot is taken under the lock: mutating the board afterwards
    /// does not affect an iterator already obtained, and the iterator offers
    /// no way to remove stored items.
    pub fn iter(&self, secret: &str) -> BoardResult<BoardIter> {
        self.authorize(secret)?;

        let store = self.inner.read().expect("lock poisoned");
        Ok(BoardIter::new(order_by_likes(store.all_items())))
    }

    /// Snapshot restricted to the union of items in every category whose ACL
    /// lists `friend`, with the same ordering and immutability as
    /// [`Board::iter`].
    ///
    /// A friend on no category's ACL at all is an error; a friend whose
    /// readable categories are merely empty gets an empty sequence.
    pub fn friend_iter(&self, friend: &str) -> BoardResult<BoardIter> {
        Self::required(friend, "friend name")?;

        let store = self.inner.read().expect("lock poisoned");
        let readable = store.categories_readable_by(friend);
        if readable.is_empty() {
            return Err(BoardError::UserNotFound(friend.to_string()));
        }

        let items: Vec<DataItem> = store
            .all_items()
            .into_iter()
            .filter(|item| readable.iter().any(|name| name == item.category()))
            .collect();
        Ok(BoardIter::new(order_by_likes(items)))
    }

    // -----------------------------------------------------------------------
    // Pure queries
    // -----------------------------------------------------------------------

    /// Whether a category with this name exists.
    pub fn has_category(&self, name: &str) -> bool {
        self.inner.read().expect("lock poisoned").has_category(name)
    }

    /// Whether any category holds an item with this id.
    pub fn has_data(&self, id: ItemId) -> bool {
        self.inner.read().expect("lock poisoned").contains(id)
    }

    /// Whether `user` is on the category's read ACL.
    pub fn is_readable_by(&self, category: &str, user: &str) -> bool {
        self.inner
            .read()
            .expect("lock poisoned")
            .is_readable_by(category, user)
    }

    /// Sorted names of all categories.
    pub fn category_names(&self) -> Vec<String> {
        self.inner.read().expect("lock poisoned").category_names()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let store = self.inner.read().expect("lock poisoned");
        f.debug_struct("Board")
            .field("owner", &self.owner.name())
            .field("categories", &store.category_names().len())
            .field("items", &store.len())
            .finish()
    }
}
