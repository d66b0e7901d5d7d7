//! Browser model types for testable state management.
//!
//! This module separates state ([`AppState`]) from view
//! ([`BrowserViewModel`]) enabling unit testing without the iocraft
//! framework. Transitions are pure: [`reduce`] returns the next state plus
//! the [`Effect`]s the caller must perform (network I/O lives outside).

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::api::{Character, CharacterPage, Episode};
use crate::feed::CharacterFeed;
use crate::store::{EpisodeFetch, SelectionStore, SlotKey};
use crate::tui::components::footer::Shortcut;
use crate::tui::visibility::VisibilityTrigger;

/// Rows of lookahead below the pane edge before the next page loads
const SENTINEL_MARGIN: usize = 3;

// ============================================================================
// State Types
// ============================================================================

/// Cursor and scroll position of one character pane
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaneNav {
    pub cursor: usize,
    pub scroll_offset: usize,
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct AppState {
    /// The shared character feed both panes scroll through
    pub feed: CharacterFeed,
    /// The two selection slots and their resolved episodes
    pub store: SelectionStore,
    /// Which pane keyboard input goes to
    pub active_pane: SlotKey,
    pub first_nav: PaneNav,
    pub second_nav: PaneNav,
    first_sentinel: VisibilityTrigger,
    second_sentinel: VisibilityTrigger,
    /// Whether the application should exit
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            feed: CharacterFeed::new(),
            store: SelectionStore::new(),
            active_pane: SlotKey::First,
            first_nav: PaneNav::default(),
            second_nav: PaneNav::default(),
            first_sentinel: VisibilityTrigger::new(SENTINEL_MARGIN),
            second_sentinel: VisibilityTrigger::new(SENTINEL_MARGIN),
            should_exit: false,
        }
    }

    pub fn nav(&self, pane: SlotKey) -> &PaneNav {
        match pane {
            SlotKey::First => &self.first_nav,
            SlotKey::Second => &self.second_nav,
        }
    }

    fn nav_mut(&mut self, pane: SlotKey) -> &mut PaneNav {
        match pane {
            SlotKey::First => &mut self.first_nav,
            SlotKey::Second => &mut self.second_nav,
        }
    }

    fn sentinel_mut(&mut self, pane: SlotKey) -> &mut VisibilityTrigger {
        match pane {
            SlotKey::First => &mut self.first_sentinel,
            SlotKey::Second => &mut self.second_sentinel,
        }
    }
}

// ============================================================================
// Action and Effect Types
// ============================================================================

/// All possible actions on the browser
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Navigation within the active pane
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,

    /// Switch keyboard focus to the other pane
    SwitchPane,

    /// Pick the highlighted character into the active pane's slot
    SelectHighlighted,
    /// Reset both slots
    ClearSelection,

    /// Request the next catalog page (also the manual retry after an
    /// error); no-op while a fetch is pending or the catalog is exhausted
    Fetch,

    // Network completions
    PageLoaded(CharacterPage),
    FeedFailed(String),
    EpisodesLoaded(EpisodeFetch, Vec<Episode>),
    EpisodesFailed(EpisodeFetch),

    /// Quit the application
    Quit,
}

/// Work the caller must perform after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the given catalog page and feed the outcome back as
    /// `PageLoaded` / `FeedFailed`
    FetchPage(u32),
    /// Fetch the ticket's episodes and feed the outcome back as
    /// `EpisodesLoaded` / `EpisodesFailed`
    FetchEpisodes(EpisodeFetch),
}

// ============================================================================
// Reducer
// ============================================================================

/// Pure function: apply an action to the state.
///
/// Returns the next state and the effects to dispatch. Contains no I/O.
pub fn reduce(mut state: AppState, action: AppAction, list_height: usize) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();
    let count = state.feed.len();

    match action {
        AppAction::MoveUp => {
            let nav = state.nav_mut(state.active_pane);
            nav.cursor = nav.cursor.saturating_sub(1);
            nav.scroll_offset = adjust_scroll(nav.scroll_offset, nav.cursor, list_height);
        }
        AppAction::MoveDown => {
            if count > 0 {
                let nav = state.nav_mut(state.active_pane);
                nav.cursor = (nav.cursor + 1).min(count - 1);
                nav.scroll_offset = adjust_scroll(nav.scroll_offset, nav.cursor, list_height);
            }
        }
        AppAction::GoToTop => {
            let nav = state.nav_mut(state.active_pane);
            nav.cursor = 0;
            nav.scroll_offset = 0;
        }
        AppAction::GoToBottom => {
            if count > 0 {
                let nav = state.nav_mut(state.active_pane);
                nav.cursor = count - 1;
                nav.scroll_offset = adjust_scroll(nav.scroll_offset, nav.cursor, list_height);
            }
        }
        AppAction::PageUp => {
            let jump = list_height / 2;
            let nav = state.nav_mut(state.active_pane);
            nav.cursor = nav.cursor.saturating_sub(jump);
            nav.scroll_offset = adjust_scroll(nav.scroll_offset, nav.cursor, list_height);
        }
        AppAction::PageDown => {
            if count > 0 {
                let jump = list_height / 2;
                let nav = state.nav_mut(state.active_pane);
                nav.cursor = (nav.cursor + jump).min(count - 1);
                nav.scroll_offset = adjust_scroll(nav.scroll_offset, nav.cursor, list_height);
            }
        }

        AppAction::SwitchPane => {
            state.active_pane = state.active_pane.other();
        }

        AppAction::SelectHighlighted => {
            let cursor = state.nav(state.active_pane).cursor;
            if let Some(character) = state.feed.characters().get(cursor).cloned() {
                // A character held by the other pane's slot cannot be
                // picked here
                let other = state.active_pane.other();
                if state.store.selected_id(other) != Some(character.id)
                    && let Some(ticket) = state.store.select(state.active_pane, &character)
                {
                    effects.push(Effect::FetchEpisodes(ticket));
                }
            }
        }
        AppAction::ClearSelection => {
            state.store.clear();
        }

        AppAction::Fetch => {
            if let Some(page) = state.feed.begin_fetch() {
                effects.push(Effect::FetchPage(page));
            }
        }

        AppAction::PageLoaded(page) => {
            state.feed.apply_page(page);
        }
        AppAction::FeedFailed(message) => {
            state.feed.apply_error(message);
        }
        AppAction::EpisodesLoaded(ticket, episodes) => {
            state.store.resolve_ok(&ticket, episodes);
        }
        AppAction::EpisodesFailed(ticket) => {
            state.store.resolve_err(&ticket);
        }

        AppAction::Quit => {
            state.should_exit = true;
        }
    }

    poll_sentinels(&mut state, list_height, &mut effects);
    (state, effects)
}

/// Watch the end-of-list sentinel in both panes and start the next page
/// fetch when it scrolls into view. The feed's in-flight guard keeps
/// simultaneous firings from issuing more than one request.
fn poll_sentinels(state: &mut AppState, list_height: usize, effects: &mut Vec<Effect>) {
    let sentinel = state.feed.has_more().then(|| state.feed.len());

    for pane in [SlotKey::First, SlotKey::Second] {
        let nav = *state.nav(pane);
        let fired = {
            let trigger = state.sentinel_mut(pane);
            trigger.set_target(sentinel);
            trigger.observe(nav.scroll_offset, list_height)
        };
        if fired && let Some(page) = state.feed.begin_fetch() {
            effects.push(Effect::FetchPage(page));
        }
    }
}

/// Adjust scroll offset to keep the cursor visible within the list height
pub fn adjust_scroll(scroll_offset: usize, cursor: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }
    if cursor < scroll_offset {
        return cursor;
    }
    if cursor >= scroll_offset + list_height {
        return cursor.saturating_sub(list_height - 1);
    }
    scroll_offset
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Convert a key event to an [`AppAction`] (pure function).
///
/// Returns `None` if the key doesn't map to any action.
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<AppAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') => Some(AppAction::Quit),
            _ => None,
        };
    }

    if modifiers.contains(KeyModifiers::SHIFT) {
        return match code {
            KeyCode::Char('G') | KeyCode::Char('g') => Some(AppAction::GoToBottom),
            _ => None,
        };
    }

    match code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => Some(AppAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppAction::MoveUp),
        KeyCode::Char('g') => Some(AppAction::GoToTop),
        KeyCode::Char('G') => Some(AppAction::GoToBottom),
        KeyCode::PageUp => Some(AppAction::PageUp),
        KeyCode::PageDown => Some(AppAction::PageDown),

        // Panes
        KeyCode::Tab
        | KeyCode::Char('h')
        | KeyCode::Char('l')
        | KeyCode::Left
        | KeyCode::Right => Some(AppAction::SwitchPane),

        // Selection
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppAction::SelectHighlighted),
        KeyCode::Char('c') => Some(AppAction::ClearSelection),

        // Feed
        KeyCode::Char('r') => Some(AppAction::Fetch),

        // App
        KeyCode::Char('q') | KeyCode::Esc => Some(AppAction::Quit),

        _ => None,
    }
}

// ============================================================================
// View Model Types
// ============================================================================

/// One rendered row of a character pane
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRow {
    pub character: Character,
    /// Row under the pane cursor
    pub is_cursor: bool,
    /// Character picked into this pane's slot
    pub is_picked: bool,
    /// Character held by the other pane's slot (not selectable here)
    pub is_disabled: bool,
}

/// What a character pane shows in place of (or as) its rows
#[derive(Debug, Clone, PartialEq)]
pub enum PaneBody {
    /// First page has not arrived yet
    Loading,
    /// The last fetch failed; message is user-visible
    Error(String),
    /// Loaded but the catalog is empty
    Empty,
    /// Windowed rows ready to render
    Rows(Vec<CharacterRow>),
}

/// Computed view model for one character pane
#[derive(Debug, Clone, PartialEq)]
pub struct PaneViewModel {
    pub title: String,
    pub body: PaneBody,
    pub is_focused: bool,
    /// Show the "loading more" row below the list
    pub fetching_more: bool,
}

/// What an episode column shows
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnBody {
    /// One or both characters still unselected
    SelectBoth,
    /// Ready, but this view has nothing in it
    NoEpisodes,
    Episodes(Vec<Episode>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeColumn {
    pub title: String,
    pub body: ColumnBody,
}

/// Computed view model for the three-column episode comparison
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodePanelViewModel {
    /// Any slot's episode fetch in flight
    pub loading: bool,
    pub first: EpisodeColumn,
    pub shared: EpisodeColumn,
    pub second: EpisodeColumn,
}

/// Computed view model for rendering the entire browser
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserViewModel {
    /// Total characters loaded so far
    pub character_count: usize,
    pub first_pane: PaneViewModel,
    pub second_pane: PaneViewModel,
    pub episodes: EpisodePanelViewModel,
    /// Keyboard shortcuts to display in the footer
    pub shortcuts: Vec<Shortcut>,
}

// ============================================================================
// View Model Computation
// ============================================================================

/// Pure function: compute the view model from state.
pub fn compute_view_model(state: &AppState, list_height: usize) -> BrowserViewModel {
    let views = state.store.episode_views();
    let ready = views.ready;

    let column = |title: &str, episodes: Vec<Episode>| EpisodeColumn {
        title: title.to_string(),
        body: if !ready {
            ColumnBody::SelectBoth
        } else if episodes.is_empty() {
            ColumnBody::NoEpisodes
        } else {
            ColumnBody::Episodes(episodes)
        },
    };

    let episodes = EpisodePanelViewModel {
        loading: state.store.is_loading_episodes(),
        first: column("Character #1 - Only Episodes", views.first_only),
        shared: column("Character #1 & #2 - Shared Episodes", views.shared),
        second: column("Character #2 - Only Episodes", views.second_only),
    };

    let mut shortcuts = vec![
        Shortcut::new("Tab", "switch pane"),
        Shortcut::new("j/k", "move"),
        Shortcut::new("Enter", "pick"),
        Shortcut::new("c", "clear"),
        Shortcut::new("q", "quit"),
    ];
    if state.feed.error().is_some() {
        shortcuts.push(Shortcut::new("r", "retry"));
    }

    BrowserViewModel {
        character_count: state.feed.len(),
        first_pane: pane_view_model(state, SlotKey::First, list_height),
        second_pane: pane_view_model(state, SlotKey::Second, list_height),
        episodes,
        shortcuts,
    }
}

fn pane_view_model(state: &AppState, pane: SlotKey, list_height: usize) -> PaneViewModel {
    let nav = state.nav(pane);
    let own_pick = state.store.selected_id(pane);
    let other_pick = state.store.selected_id(pane.other());

    let body = if let Some(error) = state.feed.error() {
        PaneBody::Error(error.to_string())
    } else if state.feed.is_initial_loading() {
        PaneBody::Loading
    } else if state.feed.is_empty() {
        PaneBody::Empty
    } else {
        let rows = state
            .feed
            .characters()
            .iter()
            .enumerate()
            .skip(nav.scroll_offset)
            .take(list_height)
            .map(|(index, character)| CharacterRow {
                is_cursor: index == nav.cursor,
                is_picked: own_pick == Some(character.id),
                is_disabled: other_pick == Some(character.id),
                character: character.clone(),
            })
            .collect();
        PaneBody::Rows(rows)
    };

    let number = match pane {
        SlotKey::First => 1,
        SlotKey::Second => 2,
    };

    PaneViewModel {
        title: format!("Character #{number}"),
        body,
        is_focused: state.active_pane == pane,
        fetching_more: state.feed.is_fetching_next(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CharacterStatus, PageInfo};

    fn character(id: u64, episode_urls: &[&str]) -> Character {
        Character {
            id,
            name: format!("c{id}"),
            status: CharacterStatus::Alive,
            species: "Human".to_string(),
            gender: "Male".to_string(),
            image: String::new(),
            episode: episode_urls.iter().map(|u| u.to_string()).collect(),
        }
    }

    fn episode(id: u64) -> Episode {
        Episode {
            id,
            name: format!("e{id}"),
            code: format!("S01E{id:02}"),
            air_date: String::new(),
            characters: vec![],
        }
    }

    fn page_of(ids: std::ops::Range<u64>, next: Option<&str>) -> CharacterPage {
        CharacterPage {
            info: PageInfo {
                count: 100,
                pages: 5,
                next: next.map(String::from),
                prev: None,
            },
            results: ids
                .map(|id| character(id, &[&format!("https://example.com/api/episode/{id}")]))
                .collect(),
        }
    }

    /// State with one applied page of 20 characters and more available
    fn loaded_state(list_height: usize) -> AppState {
        let state = AppState::new();
        let (state, effects) = reduce(state, AppAction::Fetch, list_height);
        assert_eq!(effects, vec![Effect::FetchPage(1)]);
        let (state, _) = reduce(
            state,
            AppAction::PageLoaded(page_of(1..21, Some("https://example.com/api/character?page=2"))),
            list_height,
        );
        state
    }

    // ========================================================================
    // Feed wiring
    // ========================================================================

    #[test]
    fn test_fetch_produces_single_page_effect() {
        let state = AppState::new();
        let (state, effects) = reduce(state, AppAction::Fetch, 10);
        assert_eq!(effects, vec![Effect::FetchPage(1)]);

        // A second request while the first is pending is a no-op
        let (_, effects) = reduce(state, AppAction::Fetch, 10);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_page_loaded_extends_feed() {
        let state = loaded_state(10);
        assert_eq!(state.feed.len(), 20);
        assert!(state.feed.has_more());
    }

    #[test]
    fn test_feed_failed_sets_error_and_keeps_results() {
        let state = loaded_state(10);
        let (state, effects) = reduce(state, AppAction::Fetch, 10);
        assert_eq!(effects, vec![Effect::FetchPage(2)]);

        let (state, _) = reduce(
            state,
            AppAction::FeedFailed("request failed: 404 Not Found".to_string()),
            10,
        );
        assert_eq!(state.feed.len(), 20);
        assert!(state.feed.error().unwrap().contains("404"));

        let vm = compute_view_model(&state, 10);
        assert!(matches!(vm.first_pane.body, PaneBody::Error(ref m) if m.contains("404")));
    }

    // ========================================================================
    // Infinite scroll
    // ========================================================================

    #[test]
    fn test_scrolling_to_bottom_triggers_next_page() {
        let mut state = loaded_state(10);
        state.first_nav = PaneNav {
            cursor: 16,
            scroll_offset: 7,
        };

        // One more row down brings the sentinel (row 20) within the
        // viewport plus lookahead
        let (state, effects) = reduce(state, AppAction::MoveDown, 10);
        assert_eq!(state.first_nav.cursor, 17);
        assert_eq!(effects, vec![Effect::FetchPage(2)]);

        // Scrolling further while the fetch is pending stays quiet
        let (_, effects) = reduce(state, AppAction::MoveDown, 10);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_second_pane_scroll_also_triggers() {
        let mut state = loaded_state(10);
        state.active_pane = SlotKey::Second;
        state.second_nav = PaneNav {
            cursor: 19,
            scroll_offset: 10,
        };

        let (_, effects) = reduce(state, AppAction::MoveUp, 10);
        assert_eq!(effects, vec![Effect::FetchPage(2)]);
    }

    #[test]
    fn test_exhausted_feed_never_triggers() {
        let state = AppState::new();
        let (state, _) = reduce(state, AppAction::Fetch, 10);
        let (mut state, _) = reduce(state, AppAction::PageLoaded(page_of(1..6, None)), 10);

        state.first_nav = PaneNav {
            cursor: 4,
            scroll_offset: 0,
        };
        let (_, effects) = reduce(state, AppAction::MoveDown, 10);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_short_page_keeps_filling_viewport() {
        let state = AppState::new();
        let (state, _) = reduce(state, AppAction::Fetch, 10);

        // Five rows cannot fill a ten-row viewport: applying the page
        // immediately requests the next one
        let (_, effects) = reduce(
            state,
            AppAction::PageLoaded(page_of(1..6, Some("https://example.com/api/character?page=2"))),
            10,
        );
        assert_eq!(effects, vec![Effect::FetchPage(2)]);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    #[test]
    fn test_move_down_clamps_to_list_end() {
        let mut state = loaded_state(10);
        state.first_nav.cursor = 19;
        let (state, _) = reduce(state, AppAction::MoveDown, 10);
        assert_eq!(state.first_nav.cursor, 19);
    }

    #[test]
    fn test_move_up_at_top_stays_put() {
        let state = loaded_state(10);
        let (state, _) = reduce(state, AppAction::MoveUp, 10);
        assert_eq!(state.first_nav.cursor, 0);
    }

    #[test]
    fn test_navigation_is_per_pane() {
        let state = loaded_state(10);
        let (state, _) = reduce(state, AppAction::MoveDown, 10);
        assert_eq!(state.first_nav.cursor, 1);
        assert_eq!(state.second_nav.cursor, 0);

        let (state, _) = reduce(state, AppAction::SwitchPane, 10);
        let (state, _) = reduce(state, AppAction::MoveDown, 10);
        assert_eq!(state.first_nav.cursor, 1);
        assert_eq!(state.second_nav.cursor, 1);
    }

    #[test]
    fn test_go_to_bottom_and_top() {
        let state = loaded_state(10);
        let (state, _) = reduce(state, AppAction::GoToBottom, 10);
        assert_eq!(state.first_nav.cursor, 19);
        assert_eq!(state.first_nav.scroll_offset, 10);

        let (state, _) = reduce(state, AppAction::GoToTop, 10);
        assert_eq!(state.first_nav.cursor, 0);
        assert_eq!(state.first_nav.scroll_offset, 0);
    }

    #[test]
    fn test_page_down_jumps_half_height() {
        let state = loaded_state(10);
        let (state, _) = reduce(state, AppAction::PageDown, 10);
        assert_eq!(state.first_nav.cursor, 5);
    }

    #[test]
    fn test_adjust_scroll() {
        // Within bounds - no change
        assert_eq!(adjust_scroll(0, 5, 10), 0);
        assert_eq!(adjust_scroll(5, 8, 10), 5);
        // Below visible - scroll down
        assert_eq!(adjust_scroll(0, 15, 10), 6);
        // Above visible - scroll up
        assert_eq!(adjust_scroll(10, 5, 10), 5);
        // Zero height
        assert_eq!(adjust_scroll(5, 10, 0), 0);
    }

    // ========================================================================
    // Selection
    // ========================================================================

    #[test]
    fn test_select_highlighted_issues_episode_fetch() {
        let state = loaded_state(10);
        let (state, effects) = reduce(state, AppAction::SelectHighlighted, 10);

        assert_eq!(state.store.selected_id(SlotKey::First), Some(1));
        assert_eq!(effects.len(), 1);
        let Effect::FetchEpisodes(ticket) = &effects[0] else {
            panic!("expected an episode fetch, got {effects:?}");
        };
        assert_eq!(ticket.slot, SlotKey::First);
        assert_eq!(ticket.episode_ids, vec![1]);
    }

    #[test]
    fn test_select_into_second_pane() {
        let mut state = loaded_state(10);
        state.active_pane = SlotKey::Second;
        state.second_nav.cursor = 3;

        let (state, effects) = reduce(state, AppAction::SelectHighlighted, 10);
        assert_eq!(state.store.selected_id(SlotKey::Second), Some(4));
        assert_eq!(state.store.selected_id(SlotKey::First), None);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_character_picked_in_other_pane_is_not_selectable() {
        let state = loaded_state(10);
        let (state, _) = reduce(state, AppAction::SelectHighlighted, 10);
        assert_eq!(state.store.selected_id(SlotKey::First), Some(1));

        // Same cursor position in the other pane: the pick is rejected
        let (state, _) = reduce(state, AppAction::SwitchPane, 10);
        let (state, effects) = reduce(state, AppAction::SelectHighlighted, 10);
        assert_eq!(state.store.selected_id(SlotKey::Second), None);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_select_on_empty_feed_is_noop() {
        let state = AppState::new();
        let (state, effects) = reduce(state, AppAction::SelectHighlighted, 10);
        assert!(effects.is_empty());
        assert_eq!(state.store.selected_id(SlotKey::First), None);
    }

    #[test]
    fn test_episode_resolution_round_trip() {
        let state = loaded_state(10);
        let (state, effects) = reduce(state, AppAction::SelectHighlighted, 10);
        let Effect::FetchEpisodes(ticket) = effects[0].clone() else {
            panic!("expected an episode fetch");
        };

        let (state, _) = reduce(
            state,
            AppAction::EpisodesLoaded(ticket, vec![episode(1)]),
            10,
        );
        let slot = state.store.slot(SlotKey::First);
        assert!(!slot.loading);
        assert_eq!(slot.episodes.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_episode_failure_leaves_slot_unset() {
        let state = loaded_state(10);
        let (state, effects) = reduce(state, AppAction::SelectHighlighted, 10);
        let Effect::FetchEpisodes(ticket) = effects[0].clone() else {
            panic!("expected an episode fetch");
        };

        let (state, _) = reduce(state, AppAction::EpisodesFailed(ticket), 10);
        let slot = state.store.slot(SlotKey::First);
        assert!(!slot.loading);
        assert!(slot.episodes.is_none());
        // The pick itself survives
        assert_eq!(slot.character_id, Some(1));
    }

    #[test]
    fn test_clear_selection() {
        let state = loaded_state(10);
        let (state, _) = reduce(state, AppAction::SelectHighlighted, 10);
        let (state, _) = reduce(state, AppAction::ClearSelection, 10);

        assert_eq!(state.store.selected_id(SlotKey::First), None);
        assert!(!state.store.is_loading_episodes());
    }

    // ========================================================================
    // Key mapping
    // ========================================================================

    #[test]
    fn test_key_to_action_navigation() {
        assert_eq!(
            key_to_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(AppAction::MoveDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Down, KeyModifiers::NONE),
            Some(AppAction::MoveDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('k'), KeyModifiers::NONE),
            Some(AppAction::MoveUp)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('g'), KeyModifiers::NONE),
            Some(AppAction::GoToTop)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('G'), KeyModifiers::SHIFT),
            Some(AppAction::GoToBottom)
        );
        assert_eq!(
            key_to_action(KeyCode::PageDown, KeyModifiers::NONE),
            Some(AppAction::PageDown)
        );
    }

    #[test]
    fn test_key_to_action_panes_and_selection() {
        assert_eq!(
            key_to_action(KeyCode::Tab, KeyModifiers::NONE),
            Some(AppAction::SwitchPane)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('h'), KeyModifiers::NONE),
            Some(AppAction::SwitchPane)
        );
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE),
            Some(AppAction::SelectHighlighted)
        );
        assert_eq!(
            key_to_action(KeyCode::Char(' '), KeyModifiers::NONE),
            Some(AppAction::SelectHighlighted)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('c'), KeyModifiers::NONE),
            Some(AppAction::ClearSelection)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('r'), KeyModifiers::NONE),
            Some(AppAction::Fetch)
        );
    }

    #[test]
    fn test_key_to_action_quit() {
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(AppAction::Quit)
        );
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE),
            Some(AppAction::Quit)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL),
            Some(AppAction::Quit)
        );
        assert_eq!(key_to_action(KeyCode::Char('x'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_reduce_quit() {
        let state = AppState::new();
        let (state, _) = reduce(state, AppAction::Quit, 10);
        assert!(state.should_exit);
    }

    // ========================================================================
    // View model
    // ========================================================================

    #[test]
    fn test_view_model_initial_loading() {
        let state = AppState::new();
        let vm = compute_view_model(&state, 10);
        assert_eq!(vm.first_pane.body, PaneBody::Loading);
        assert_eq!(vm.second_pane.body, PaneBody::Loading);
        assert!(vm.first_pane.is_focused);
        assert!(!vm.second_pane.is_focused);
    }

    #[test]
    fn test_view_model_rows_window_and_markers() {
        let mut state = loaded_state(10);
        state.first_nav = PaneNav {
            cursor: 12,
            scroll_offset: 5,
        };
        let (mut state, _) = reduce(state, AppAction::SelectHighlighted, 10);
        // Window the second pane over the same stretch of the list
        state.second_nav = PaneNav {
            cursor: 5,
            scroll_offset: 5,
        };

        let vm = compute_view_model(&state, 10);
        let PaneBody::Rows(rows) = &vm.first_pane.body else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].character.id, 6);
        assert!(rows[7].is_cursor);
        assert!(rows[7].is_picked);

        // The same character is disabled in the other pane
        let PaneBody::Rows(rows) = &vm.second_pane.body else {
            panic!("expected rows");
        };
        let row = rows.iter().find(|r| r.character.id == 13).unwrap();
        assert!(row.is_disabled);
        assert!(!row.is_picked);
    }

    #[test]
    fn test_view_model_placeholders_before_both_picked() {
        let state = loaded_state(10);
        let (state, _) = reduce(state, AppAction::SelectHighlighted, 10);

        // Only one slot resolved: every column shows the select-both
        // placeholder, not the no-episodes one
        let vm = compute_view_model(&state, 10);
        assert_eq!(vm.episodes.first.body, ColumnBody::SelectBoth);
        assert_eq!(vm.episodes.shared.body, ColumnBody::SelectBoth);
        assert_eq!(vm.episodes.second.body, ColumnBody::SelectBoth);
    }

    #[test]
    fn test_view_model_episode_columns_when_ready() {
        let state = loaded_state(10);

        let (state, effects) = reduce(state, AppAction::SelectHighlighted, 10);
        let Effect::FetchEpisodes(first_ticket) = effects[0].clone() else {
            panic!("expected an episode fetch");
        };
        let (mut state, _) = reduce(
            state,
            AppAction::EpisodesLoaded(first_ticket, vec![episode(1), episode(2)]),
            10,
        );

        state.active_pane = SlotKey::Second;
        state.second_nav.cursor = 1;
        let (state, effects) = reduce(state, AppAction::SelectHighlighted, 10);
        let Effect::FetchEpisodes(second_ticket) = effects[0].clone() else {
            panic!("expected an episode fetch");
        };
        let (state, _) = reduce(
            state,
            AppAction::EpisodesLoaded(second_ticket, vec![episode(1), episode(3)]),
            10,
        );

        let vm = compute_view_model(&state, 10);
        let ColumnBody::Episodes(shared) = &vm.episodes.shared.body else {
            panic!("expected shared episodes");
        };
        assert_eq!(shared.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1]);
        let ColumnBody::Episodes(first) = &vm.episodes.first.body else {
            panic!("expected first-only episodes");
        };
        assert_eq!(first.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2]);
        let ColumnBody::Episodes(second) = &vm.episodes.second.body else {
            panic!("expected second-only episodes");
        };
        assert_eq!(second.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_view_model_empty_feed() {
        let state = AppState::new();
        let (state, _) = reduce(state, AppAction::Fetch, 10);
        let (state, _) = reduce(
            state,
            AppAction::PageLoaded(CharacterPage {
                info: PageInfo {
                    count: 0,
                    pages: 0,
                    next: None,
                    prev: None,
                },
                results: vec![],
            }),
            10,
        );

        let vm = compute_view_model(&state, 10);
        assert_eq!(vm.first_pane.body, PaneBody::Empty);
        assert_eq!(vm.character_count, 0);
    }

    #[test]
    fn test_view_model_retry_shortcut_appears_on_error() {
        let state = AppState::new();
        let vm = compute_view_model(&state, 10);
        assert!(!vm.shortcuts.iter().any(|s| s.key == "r"));

        let (state, _) = reduce(state, AppAction::Fetch, 10);
        let (state, _) = reduce(
            state,
            AppAction::FeedFailed("request failed: 500 Internal Server Error".to_string()),
            10,
        );
        let vm = compute_view_model(&state, 10);
        assert!(vm.shortcuts.iter().any(|s| s.key == "r"));
    }
}
