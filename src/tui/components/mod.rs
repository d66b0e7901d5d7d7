//! Shared TUI components
//!
//! Reusable UI components for the browser view.

pub mod character_pane;
pub mod episode_panel;
pub mod footer;
pub mod header;

pub use character_pane::{CharacterPane, CharacterPaneProps};
pub use episode_panel::{EpisodePanel, EpisodePanelProps};
pub use footer::{Footer, FooterProps, Shortcut};
pub use header::{Header, HeaderProps};
