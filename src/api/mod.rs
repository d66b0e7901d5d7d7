//! Remote data gateway for the character catalog.
//!
//! This module owns the wire types and the HTTP boundary. Everything above
//! it (the feed, the selection store, the TUI) treats the API as a black
//! box that lists character pages and resolves episode batches.

pub mod client;
pub mod types;

pub use client::{Gateway, HttpGateway};
pub use types::{Character, CharacterPage, CharacterStatus, Episode, PageInfo};
