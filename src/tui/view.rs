//! Main browser view component
//!
//! Wires the pure model (state, reducer, view model) into iocraft: hooks
//! state, async fetch handlers against the HTTP gateway, and keyboard
//! event dispatch.

// Allow clone on Copy types - used intentionally in async closures for clarity
#![allow(clippy::clone_on_copy)]

use iocraft::prelude::*;

use crate::api::{CharacterPage, Episode, Gateway, HttpGateway};
use crate::config::Config;
use crate::error::Result;
use crate::store::EpisodeFetch;
use crate::tui::components::{CharacterPane, EpisodePanel, Footer, Header};
use crate::tui::model::{AppAction, AppState, Effect, compute_view_model, key_to_action, reduce};
use crate::tui::theme::theme;

/// Rows reserved for the episode comparison panel
const EPISODE_PANEL_HEIGHT: u16 = 12;

/// Rows of chrome around a pane's list: header, footer, episode panel,
/// pane border and title
const CHROME_HEIGHT: u16 = 1 + 1 + EPISODE_PANEL_HEIGHT + 3;

async fn fetch_character_page(page: u32) -> Result<CharacterPage> {
    let config = Config::load()?;
    let gateway = HttpGateway::from_config(&config)?;
    gateway.list_characters(Some(page)).await
}

async fn fetch_episode_batch(ids: &[u64]) -> Result<Vec<Episode>> {
    let config = Config::load()?;
    let gateway = HttpGateway::from_config(&config)?;
    gateway.episodes_by_ids(ids).await
}

/// Props for the Browser component
#[derive(Default, Props)]
pub struct BrowserProps {}

/// Main browser component: two character panes over the episode panel
#[component]
pub fn Browser(_props: &BrowserProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let theme = theme();

    let mut state: State<AppState> = hooks.use_state(AppState::new);

    let list_height = height.saturating_sub(CHROME_HEIGHT) as usize;

    // Async page fetch handler. Applying a page can immediately request
    // the next one (short page, viewport not filled yet), so this loops
    // until the reducer stops asking.
    let page_handler: Handler<(u32, usize)> = hooks.use_async_handler({
        let state_setter = state.clone();

        move |(page, list_height): (u32, usize)| {
            let mut state_setter = state_setter.clone();

            async move {
                let mut page = page;
                loop {
                    let action = match fetch_character_page(page).await {
                        Ok(loaded) => AppAction::PageLoaded(loaded),
                        Err(e) => AppAction::FeedFailed(e.to_string()),
                    };
                    let (next, effects) = reduce(state_setter.read().clone(), action, list_height);
                    state_setter.set(next);

                    let continue_with = effects.into_iter().find_map(|effect| match effect {
                        Effect::FetchPage(next_page) => Some(next_page),
                        _ => None,
                    });
                    match continue_with {
                        Some(next_page) => page = next_page,
                        None => break,
                    }
                }
            }
        }
    });

    // Async episode fetch handler. Failures are logged and swallowed; the
    // slot simply stays without episodes (stale tickets are discarded by
    // the store on resolution).
    let episodes_handler: Handler<(EpisodeFetch, usize)> = hooks.use_async_handler({
        let state_setter = state.clone();

        move |(ticket, list_height): (EpisodeFetch, usize)| {
            let mut state_setter = state_setter.clone();

            async move {
                let action = match fetch_episode_batch(&ticket.episode_ids).await {
                    Ok(episodes) => AppAction::EpisodesLoaded(ticket, episodes),
                    Err(e) => {
                        tracing::warn!(
                            "failed to load episodes for the {:?} slot: {}",
                            ticket.slot,
                            e
                        );
                        AppAction::EpisodesFailed(ticket)
                    }
                };
                let (next, _) = reduce(state_setter.read().clone(), action, list_height);
                state_setter.set(next);
            }
        }
    });

    // Track if we've started the initial fetch
    let mut fetch_started = hooks.use_state(|| false);

    // Trigger initial feed load on startup
    if !fetch_started.get() {
        fetch_started.set(true);
        let (next, effects) = reduce(state.read().clone(), AppAction::Fetch, list_height);
        state.set(next);
        for effect in effects {
            if let Effect::FetchPage(page) = effect {
                page_handler.clone()((page, list_height));
            }
        }
    }

    // Clone handlers for use in event handling
    let page_handler_for_events = page_handler.clone();
    let episodes_handler_for_events = episodes_handler.clone();

    hooks.use_terminal_events({
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                if let Some(action) = key_to_action(code, modifiers) {
                    let (next, effects) = reduce(state.read().clone(), action, list_height);
                    state.set(next);
                    for effect in effects {
                        match effect {
                            Effect::FetchPage(page) => {
                                page_handler_for_events.clone()((page, list_height));
                            }
                            Effect::FetchEpisodes(ticket) => {
                                episodes_handler_for_events.clone()((ticket, list_height));
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    });

    // Exit if requested
    let should_exit = state.read().should_exit;
    if should_exit {
        system.exit();
    }

    let vm = compute_view_model(&state.read(), list_height);

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                character_count: vm.character_count,
                episodes_loading: vm.episodes.loading,
            )

            // The two character panes
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Row,
            ) {
                CharacterPane(pane: Some(vm.first_pane.clone()))
                CharacterPane(pane: Some(vm.second_pane.clone()))
            }

            // Episode comparison
            EpisodePanel(
                panel: Some(vm.episodes.clone()),
                height: EPISODE_PANEL_HEIGHT,
            )

            Footer(shortcuts: vm.shortcuts.clone())
        }
    }
}
