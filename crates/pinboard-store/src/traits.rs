use pinboard_types::{DataItem, ItemId};

/// Board storage seam, selected at board construction.
///
/// All implementations must satisfy these invariants:
/// - Every item held by a category is tagged with that category's name.
/// - The id index agrees with the item collection after every mutation;
///   removing a category removes its items from the index in the same call.
/// - `all_items` and `items_in` yield items in insertion-stamp order, which
///   is the façade's tie-break for equal like counts.
/// - Stored state is never aliased: inserts clone in, reads clone out.
/// - Misses are signalled with `Option`/`bool`, never panics; precondition
///   checking and error mapping belong to the board façade.
pub trait BoardStore: Send + Sync {
    /// Create an empty category. Returns `false` if the name is taken.
    fn create_category(&mut self, name: &str) -> bool;

    /// Remove a category, its ACL, and every item it holds, atomically.
    /// Returns `false` if no such category exists.
    fn remove_category(&mut self, name: &str) -> bool;

    /// Whether a category with this name exists.
    fn has_category(&self, name: &str) -> bool;

    /// Sorted names of all categories.
    fn category_names(&self) -> Vec<String>;

    /// Put `friend` on the category's ACL. Returns `false` if the category
    /// is missing or the friend is already listed.
    fn allow_read(&mut self, category: &str, friend: &str) -> bool;

    /// Drop `friend` from the category's ACL. Returns `false` if the
    /// category is missing or the friend is not listed.
    fn deny_read(&mut self, category: &str, friend: &str) -> bool;

    /// Whether `user` is on the category's ACL. A missing category is
    /// readable by nobody.
    fn is_readable_by(&self, category: &str, user: &str) -> bool;

    /// Sorted names of every category whose ACL lists `friend`.
    fn categories_readable_by(&self, friend: &str) -> Vec<String>;

    /// Store a clone of `item` tagged with `category`, stamping it with the
    /// next insertion sequence. Returns `false` if the category is missing.
    ///
    /// The store does not check id uniqueness; the façade does, against
    /// [`BoardStore::contains`], before calling down.
    fn insert(&mut self, category: &str, item: DataItem) -> bool;

    /// Whether any category holds an item with this id.
    fn contains(&self, id: ItemId) -> bool;

    /// Clone of the item with this id, wherever it is held.
    fn get(&self, id: ItemId) -> Option<DataItem>;

    /// Remove the item with this id and return it.
    fn remove(&mut self, id: ItemId) -> Option<DataItem>;

    /// Name of the category holding this id.
    fn category_of(&self, id: ItemId) -> Option<String>;

    /// Append a like to the stored item. Returns `false` if the id is
    /// unknown. Duplicate detection belongs to the façade.
    fn push_like(&mut self, id: ItemId, friend: &str) -> bool;

    /// Clones of every item in `category`, in insertion order. Empty when
    /// the category is missing or empty; the façade distinguishes the two
    /// via [`BoardStore::has_category`].
    fn items_in(&self, category: &str) -> Vec<DataItem>;

    /// Clones of every item on the board, in board-wide insertion order.
    fn all_items(&self) -> Vec<DataItem>;

    /// Number of items on the board.
    fn len(&self) -> usize;

    /// Whether the board holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
