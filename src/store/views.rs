//! Derived episode comparison views.
//!
//! A pure function of the two slots' resolved episode lists: which
//! episodes belong to each pick, and which they share.

use std::collections::HashSet;

use crate::api::Episode;

/// The three rendering views over the two selections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeViews {
    /// Both slots have a resolved list (an empty list counts; an unset
    /// slot does not). When false the views below are empty and the UI
    /// shows the "select both characters" placeholder instead.
    pub ready: bool,
    /// The first pick's full episode list
    pub first_only: Vec<Episode>,
    /// Episodes appearing in both lists, in the first list's order,
    /// deduplicated by id
    pub shared: Vec<Episode>,
    /// The second pick's full episode list
    pub second_only: Vec<Episode>,
}

/// Compute the comparison views from the two slots' episode lists.
pub fn compute_episode_views(
    first: Option<&[Episode]>,
    second: Option<&[Episode]>,
) -> EpisodeViews {
    let (Some(first), Some(second)) = (first, second) else {
        return EpisodeViews::default();
    };

    let second_ids: HashSet<u64> = second.iter().map(|episode| episode.id).collect();
    let mut emitted = HashSet::new();
    let shared = first
        .iter()
        .filter(|episode| second_ids.contains(&episode.id) && emitted.insert(episode.id))
        .cloned()
        .collect();

    EpisodeViews {
        ready: true,
        first_only: first.to_vec(),
        shared,
        second_only: second.to_vec(),
    }
}
