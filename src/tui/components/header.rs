//! App header bar component
//!
//! Displays the application title and the loaded character count.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Total characters loaded so far
    pub character_count: usize,
    /// Whether an episode fetch is in flight
    pub episodes_loading: bool,
}

/// App header bar showing title and character count
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let count_display = if props.character_count > 0 {
        format!("{} characters", props.character_count)
    } else {
        String::new()
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: "Crossover",
                color: theme.text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, column_gap: 2) {
                #(props.episodes_loading.then(|| element! {
                    Text(content: "loading episodes...", color: theme.text)
                }))
                Text(content: count_display, color: theme.text)
            }
        }
    }
}
