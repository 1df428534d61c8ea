use pinboard_types::ItemId;

/// Errors produced by board operations.
///
/// All errors are synchronous and terminal for the call that raised them;
/// every mutating operation is atomic with respect to the invariants it
/// touches, so a returned error implies no partial state change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Bad owner secret, or a friend lacking ACL membership for a like.
    #[error("unauthorized")]
    Unauthorized,

    /// A required argument is missing or empty.
    #[error("validation error: {0}")]
    Validation(String),

    /// The category name is already taken.
    #[error("category already exists: {0}")]
    CategoryAlreadyExists(String),

    /// No category with this name.
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    /// The friend is already on the category's ACL, or already liked the
    /// item.
    #[error("friend already added: {0}")]
    FriendAlreadyAdded(String),

    /// The friend is not on the category's ACL.
    #[error("friend not found: {0}")]
    FriendNotFound(String),

    /// An item with this id already exists somewhere on the board.
    #[error("data already present: {0}")]
    DataAlreadyPresent(ItemId),

    /// No item with this id exists in any category.
    #[error("data not found: {0}")]
    DataNotFound(ItemId),

    /// The friend is on no category's ACL at all.
    #[error("user not found: {0}")]
    UserNotFound(String),
}

/// Result alias for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
