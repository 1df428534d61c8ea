//! Foundation types for the Pinboard.
//!
//! This crate provides the value types and the identity capability used
//! throughout the board. Every other pinboard crate depends on
//! `pinboard-types`.
//!
//! # Key Types
//!
//! - [`ItemId`] — Caller-supplied integer identity, unique board-wide
//! - [`DataItem`] — The unit of content: id, body, category tag, like set
//! - [`Identity`] — Capability trait: a name plus secret authentication
//! - [`LocalUser`] — In-process [`Identity`] implementation, equal by name

pub mod identity;
pub mod item;

pub use identity::{Identity, LocalUser};
pub use item::{DataItem, ItemId};
