//! Line formatting for CLI output.

use owo_colors::OwoColorize;

use crate::api::{Character, CharacterStatus, Episode};

pub fn format_status_colored(status: CharacterStatus) -> String {
    let badge = format!("[{status}]");
    match status {
        CharacterStatus::Alive => badge.green().to_string(),
        CharacterStatus::Dead => badge.red().to_string(),
        CharacterStatus::Unknown => badge.dimmed().to_string(),
    }
}

/// Format a character for single-line display
pub fn format_character_line(character: &Character) -> String {
    format!(
        "{} {} {} ({}, {})",
        format!("{:>4}", character.id).cyan(),
        format_status_colored(character.status),
        character.name.bold(),
        character.species,
        character.gender,
    )
}

/// Format an episode for single-line display
pub fn format_episode_line(episode: &Episode) -> String {
    format!(
        "{} {} {} ({})",
        format!("{:>4}", episode.id).cyan(),
        episode.code.yellow().bold(),
        episode.name,
        episode.air_date,
    )
}
