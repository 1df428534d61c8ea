//! The Pinboard façade.
//!
//! This crate is the heart of the pinboard. It provides:
//! - [`Board`] — the single-owner store of categories, items, and likes
//! - Owner authentication on every mutation, ACL authorization for likes
//! - Board-wide id uniqueness, independent of which category holds an item
//! - Cascade deletion: removing a category removes its items and its ACL
//! - Copy-on-boundary isolation: no caller ever aliases internal state
//! - [`BoardIter`] — immutable snapshot enumeration ordered by like count
//!
//! The storage strategy behind the board is pluggable; see `pinboard-store`.

pub mod board;
pub mod error;
pub mod iter;

pub use board::Board;
pub use error::{BoardError, BoardResult};
pub use iter::BoardIter;
