//! Selection state for the two character slots.
//!
//! The store tracks which character is picked in each pane and the
//! asynchronously resolved episode list for each pick. It is a plain
//! constructed value owned by the application state, not a global.
//!
//! Resolution is ticket-based: `select` hands back an [`EpisodeFetch`]
//! describing what to load, and a response only lands if its ticket still
//! matches the slot's latest sequence number and the store generation.
//! This makes overlapping selections "last issued wins" and lets `clear`
//! invalidate in-flight fetches without cancelling them.

pub mod views;

use std::sync::LazyLock;

use regex::Regex;

use crate::api::{Character, Episode};

use self::views::{EpisodeViews, compute_episode_views};

/// One of the two selection slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKey {
    First,
    Second,
}

impl SlotKey {
    /// The opposite slot
    pub fn other(self) -> Self {
        match self {
            SlotKey::First => SlotKey::Second,
            SlotKey::Second => SlotKey::First,
        }
    }
}

/// State of a single selection slot
#[derive(Debug, Clone, Default)]
pub struct Slot {
    /// Selected character id, unset until the first pick
    pub character_id: Option<u64>,
    /// Resolved episodes for the pick; `None` until loaded. A failed
    /// fetch leaves this unset, it never becomes an empty list by error.
    pub episodes: Option<Vec<Episode>>,
    /// Whether this slot's episode fetch is in flight
    pub loading: bool,
    /// Latest issued fetch sequence number for this slot
    seq: u64,
}

/// A pending episode fetch issued by [`SelectionStore::select`].
///
/// Carries everything the caller needs to perform the request and hand
/// the outcome back. Tickets from superseded selections or from before a
/// `clear` no longer apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeFetch {
    pub slot: SlotKey,
    pub episode_ids: Vec<u64>,
    seq: u64,
    generation: u64,
}

/// The two-slot selection store
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    first: Slot,
    second: Slot,
    /// Bumped by `clear`; tickets from an older generation are stale
    generation: u64,
}

static EPISODE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d+)$").expect("episode id pattern is valid"));

/// Extract episode ids from episode resource URLs.
///
/// A reference contributes an id only if it ends in `/<integer>`; anything
/// else is skipped.
pub fn extract_episode_ids(references: &[String]) -> Vec<u64> {
    references
        .iter()
        .filter_map(|reference| {
            EPISODE_ID_RE
                .captures(reference)
                .and_then(|captures| captures[1].parse().ok())
        })
        .collect()
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, key: SlotKey) -> &Slot {
        match key {
            SlotKey::First => &self.first,
            SlotKey::Second => &self.second,
        }
    }

    fn slot_mut(&mut self, key: SlotKey) -> &mut Slot {
        match key {
            SlotKey::First => &mut self.first,
            SlotKey::Second => &mut self.second,
        }
    }

    pub fn selected_id(&self, key: SlotKey) -> Option<u64> {
        self.slot(key).character_id
    }

    /// Whether any slot's episode fetch is in flight
    pub fn is_loading_episodes(&self) -> bool {
        self.first.loading || self.second.loading
    }

    /// Select a character into a slot.
    ///
    /// Synchronously records the id, resets the slot's episodes to unset,
    /// and returns the fetch ticket to dispatch. Selecting the currently
    /// selected character re-fetches unconditionally. When the character
    /// has no parseable episode references the slot resolves to an empty
    /// list immediately and no ticket is returned.
    pub fn select(&mut self, key: SlotKey, character: &Character) -> Option<EpisodeFetch> {
        let episode_ids = extract_episode_ids(&character.episode);
        let generation = self.generation;
        let slot = self.slot_mut(key);

        slot.character_id = Some(character.id);
        slot.episodes = None;
        // Invalidates any fetch still in flight for this slot
        slot.seq += 1;

        if episode_ids.is_empty() {
            slot.episodes = Some(Vec::new());
            slot.loading = false;
            return None;
        }

        slot.loading = true;
        Some(EpisodeFetch {
            slot: key,
            episode_ids,
            seq: slot.seq,
            generation,
        })
    }

    fn ticket_is_current(&self, ticket: &EpisodeFetch) -> bool {
        ticket.generation == self.generation && self.slot(ticket.slot).seq == ticket.seq
    }

    /// Land a successful episode fetch.
    ///
    /// Returns false (and changes nothing) when the ticket has been
    /// superseded by a newer selection or a `clear`.
    pub fn resolve_ok(&mut self, ticket: &EpisodeFetch, episodes: Vec<Episode>) -> bool {
        if !self.ticket_is_current(ticket) {
            return false;
        }
        let slot = self.slot_mut(ticket.slot);
        slot.episodes = Some(episodes);
        slot.loading = false;
        true
    }

    /// Land a failed episode fetch: the slot's episodes stay unset and
    /// only the loading flag is cleared. The error itself is the caller's
    /// to log; it never propagates.
    pub fn resolve_err(&mut self, ticket: &EpisodeFetch) -> bool {
        if !self.ticket_is_current(ticket) {
            return false;
        }
        let slot = self.slot_mut(ticket.slot);
        slot.loading = false;
        true
    }

    /// Reset both slots synchronously.
    ///
    /// In-flight fetches are not cancelled; bumping the generation makes
    /// their eventual resolution a no-op.
    pub fn clear(&mut self) {
        self.first = Slot::default();
        self.second = Slot::default();
        self.generation += 1;
    }

    /// Derived comparison views over the two slots' episode lists
    pub fn episode_views(&self) -> EpisodeViews {
        compute_episode_views(self.first.episodes.as_deref(), self.second.episodes.as_deref())
    }
}
