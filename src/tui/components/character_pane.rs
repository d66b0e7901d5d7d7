//! Character pane component
//!
//! Displays one scrollable character list with cursor, pick markers, and
//! the loading / error / empty states.

use iocraft::prelude::*;

use crate::tui::model::{PaneBody, PaneViewModel};
use crate::tui::theme::theme;

/// Props for the CharacterPane component
#[derive(Default, Props)]
pub struct CharacterPaneProps {
    /// Computed view model for this pane
    pub pane: Option<PaneViewModel>,
}

/// One of the two character list panes
#[component]
pub fn CharacterPane(props: &CharacterPaneProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(pane) = props.pane.clone() else {
        return element!(View).into_any();
    };

    let border_color = if pane.is_focused {
        theme.border_focused
    } else {
        theme.border
    };

    element! {
        View(
            width: 50pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color,
        ) {
            View(height: 1, width: 100pct, padding_left: 1) {
                Text(
                    content: pane.title.clone(),
                    color: if pane.is_focused { theme.highlight } else { theme.text_dimmed },
                    weight: Weight::Bold,
                )
            }
            #(render_body(&pane))
        }
    }
    .into_any()
}

fn render_body(pane: &PaneViewModel) -> Option<AnyElement<'static>> {
    let theme = theme();

    match &pane.body {
        PaneBody::Loading => Some(centered_message("Loading characters...", theme.text_dimmed)),
        PaneBody::Error(message) => Some(centered_message(
            &format!("Error loading characters: {message}"),
            theme.error,
        )),
        PaneBody::Empty => Some(centered_message("No characters to show", theme.text_dimmed)),
        PaneBody::Rows(rows) => {
            let rows = rows.clone();
            let fetching_more = pane.fetching_more;

            Some(
                element! {
                    View(
                        width: 100pct,
                        flex_grow: 1.0,
                        flex_direction: FlexDirection::Column,
                    ) {
                        #(rows.iter().map(|row| {
                            let character = &row.character;

                            let indicator = if row.is_cursor { ">" } else { " " };
                            let marker = if row.is_picked { "*" } else { " " };

                            let name_color = if row.is_disabled {
                                theme.text_dimmed
                            } else {
                                theme.text
                            };
                            let status_color = if row.is_disabled {
                                theme.text_dimmed
                            } else {
                                theme.status_color(character.status)
                            };

                            let name_display = if character.name.chars().count() > 22 {
                                let short: String = character.name.chars().take(19).collect();
                                format!("{short}...")
                            } else {
                                character.name.clone()
                            };

                            element! {
                                View(
                                    height: 1,
                                    width: 100pct,
                                    padding_left: 1,
                                    background_color: if row.is_cursor { Some(theme.highlight) } else { None },
                                ) {
                                    Text(content: indicator.to_string(), color: theme.text)
                                    Text(content: marker.to_string(), color: theme.text)
                                    Text(
                                        content: format!(" {:<4}", character.id),
                                        color: if row.is_cursor { theme.text } else { theme.id_color },
                                    )
                                    Text(
                                        content: format!(" [{}]", character.status),
                                        color: if row.is_cursor { theme.text } else { status_color },
                                    )
                                    Text(content: format!(" {name_display}"), color: name_color)
                                    Text(
                                        content: format!(" {}", character.species),
                                        color: theme.text_dimmed,
                                    )
                                }
                            }
                        }))
                        #(fetching_more.then(|| element! {
                            View(height: 1, width: 100pct, padding_left: 1) {
                                Text(
                                    content: "Loading more characters...",
                                    color: theme.text_dimmed,
                                )
                            }
                        }))
                    }
                }
                .into_any(),
            )
        }
    }
}

fn centered_message(message: &str, color: Color) -> AnyElement<'static> {
    element! {
        View(
            flex_grow: 1.0,
            width: 100pct,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
        ) {
            Text(content: message.to_string(), color)
        }
    }
    .into_any()
}
