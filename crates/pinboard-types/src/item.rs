use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-supplied integer identity for a [`DataItem`].
///
/// The id is the sole identity key: the board enforces that no two stored
/// items share an id, regardless of which category holds them.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ItemId(pub u64);

impl ItemId {
    /// The raw integer value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The unit of content on the board.
///
/// A `DataItem` carries its id, a body, the tag of the category that owns it
/// (empty until stored), and the set of names that liked it. The item knows
/// nothing about ACLs: duplicate-like detection and read authorization are
/// the board's responsibility.
///
/// `Clone` produces a fully independent copy, like set included, which is
/// what the board's copy-on-boundary discipline relies on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataItem {
    id: ItemId,
    body: String,
    category: String,
    liked_by: Vec<String>,
}

impl DataItem {
    /// Create an item with no category tag and no likes.
    pub fn new(id: impl Into<ItemId>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
            category: String::new(),
            liked_by: Vec::new(),
        }
    }

    /// The item's id.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The item's body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The name of the owning category; empty if the item was never stored.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Return this item re-tagged with an owning category.
    ///
    /// Storage backends tag their owned clone at insertion; callers normally
    /// have no reason to set the tag themselves.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Names that liked this item, in like order.
    pub fn likes(&self) -> &[String] {
        &self.liked_by
    }

    /// Number of likes.
    pub fn like_count(&self) -> usize {
        self.liked_by.len()
    }

    /// Whether `name` already liked this item.
    pub fn liked_by(&self, name: &str) -> bool {
        self.liked_by.iter().any(|n| n == name)
    }

    /// Append a like. This layer only appends; the board rejects duplicates
    /// before calling down here.
    pub fn insert_like(&mut self, name: impl Into<String>) {
        self.liked_by.push(name.into());
    }
}

impl fmt::Display for DataItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} ({} likes)",
            self.id,
            if self.category.is_empty() {
                "-"
            } else {
                &self.category
            },
            self.body,
            self.like_count()
        )
    }
}
