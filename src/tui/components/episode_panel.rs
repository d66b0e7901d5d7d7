//! Episode comparison panel component
//!
//! Three columns under the character panes: the first pick's episodes,
//! the shared episodes, and the second pick's episodes.

use iocraft::prelude::*;

use crate::tui::model::{ColumnBody, EpisodeColumn, EpisodePanelViewModel};
use crate::tui::theme::theme;

/// Props for the EpisodePanel component
#[derive(Default, Props)]
pub struct EpisodePanelProps {
    /// Computed view model for the panel
    pub panel: Option<EpisodePanelViewModel>,
    /// Panel height in rows
    pub height: u16,
}

/// Episode comparison panel
#[component]
pub fn EpisodePanel(props: &EpisodePanelProps) -> impl Into<AnyElement<'static>> {
    let Some(panel) = props.panel.clone() else {
        return element!(View).into_any();
    };

    let columns = vec![panel.first, panel.shared, panel.second];
    let loading = panel.loading;

    element! {
        View(
            width: 100pct,
            height: props.height,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
        ) {
            #(columns.iter().map(|column| render_column(column, loading)))
        }
    }
    .into_any()
}

fn render_column(column: &EpisodeColumn, loading: bool) -> AnyElement<'static> {
    let theme = theme();

    let title = if loading {
        format!("{} (loading...)", column.title)
    } else {
        column.title.clone()
    };

    let body: Option<AnyElement<'static>> = match &column.body {
        ColumnBody::SelectBoth => Some(
            element! {
                Text(
                    content: "Select both characters to see results",
                    color: theme.text_dimmed,
                )
            }
            .into_any(),
        ),
        ColumnBody::NoEpisodes => Some(
            element! {
                Text(
                    content: "These characters do not share episodes.",
                    color: theme.text_dimmed,
                )
            }
            .into_any(),
        ),
        ColumnBody::Episodes(episodes) => {
            let episodes = episodes.clone();
            Some(
                element! {
                    View(
                        width: 100pct,
                        flex_grow: 1.0,
                        flex_direction: FlexDirection::Column,
                    ) {
                        #(episodes.iter().map(|episode| {
                            element! {
                                View(height: 1, width: 100pct) {
                                    Text(
                                        content: episode.code.clone(),
                                        color: theme.episode_code,
                                        weight: Weight::Bold,
                                    )
                                    Text(
                                        content: format!(" - {} - {}", episode.name, episode.air_date),
                                        color: theme.text,
                                    )
                                }
                            }
                        }))
                    }
                }
                .into_any(),
            )
        }
    };

    element! {
        View(
            width: 33pct,
            flex_grow: 1.0,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
        ) {
            View(height: 1, width: 100pct) {
                Text(content: title, color: theme.text, weight: Weight::Bold)
            }
            #(body)
        }
    }
    .into_any()
}
