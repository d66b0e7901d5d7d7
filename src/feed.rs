//! Incremental loading state for the character catalog feed.
//!
//! `CharacterFeed` is a pure state machine: it decides *whether* and
//! *which* page to fetch, and folds responses into a merged,
//! order-preserving character list. The actual network call is performed
//! by the caller between `begin_fetch` and `apply_page`/`apply_error`.

use url::Url;

use crate::api::{Character, CharacterPage};

#[derive(Debug, Clone)]
pub struct CharacterFeed {
    /// Merged results of every page fetched so far, in response order.
    /// Pages are trusted not to repeat characters; no cross-page dedup.
    characters: Vec<Character>,
    /// Page number to request next; `None` once the catalog is exhausted
    next_page: Option<u32>,
    /// Whether at least one page has been applied
    started: bool,
    fetch_in_flight: bool,
    error: Option<String>,
}

impl Default for CharacterFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterFeed {
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
            next_page: Some(1),
            started: false,
            fetch_in_flight: false,
            error: None,
        }
    }

    /// Merged character list across all fetched pages
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Whether a further page exists according to the last response
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Whether a fetch beyond the first page is currently in flight
    pub fn is_fetching_next(&self) -> bool {
        self.fetch_in_flight && self.started
    }

    /// Whether the first page has not arrived yet (and no error is shown)
    pub fn is_initial_loading(&self) -> bool {
        !self.started && self.error.is_none()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start the next page fetch.
    ///
    /// Returns the page number to request, or `None` when the catalog is
    /// exhausted or a fetch is already in flight. Calls while a fetch is
    /// pending are no-ops, not queued. Starting a fetch clears any
    /// previous error (this is also the manual retry path).
    pub fn begin_fetch(&mut self) -> Option<u32> {
        if self.fetch_in_flight {
            return None;
        }
        let page = self.next_page?;
        self.fetch_in_flight = true;
        self.error = None;
        Some(page)
    }

    /// Fold a successful page response into the merged list and advance
    /// the cursor. Absence of a forward cursor, or a cursor whose `page`
    /// query parameter is missing or non-numeric, ends pagination.
    pub fn apply_page(&mut self, page: CharacterPage) {
        self.fetch_in_flight = false;
        self.started = true;
        self.characters.extend(page.results);
        self.next_page = page.info.next.as_deref().and_then(next_page_number);
    }

    /// Record a failed fetch. Previously merged results are untouched and
    /// the cursor does not advance, so a retry re-requests the same page.
    pub fn apply_error(&mut self, message: String) {
        self.fetch_in_flight = false;
        self.error = Some(message);
    }
}

/// Extract the next page number from a forward cursor URL.
fn next_page_number(cursor: &str) -> Option<u32> {
    let url = Url::parse(cursor).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}
