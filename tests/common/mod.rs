//! Shared test fixtures and builders.

#![allow(dead_code)]

use crossover::api::{Character, CharacterPage, CharacterStatus, Episode, PageInfo};

pub const EPISODE_URL_BASE: &str = "https://rickandmortyapi.com/api/episode";

/// Build a character whose episode references point at the given ids
pub fn mock_character(id: u64, name: &str, episode_ids: &[u64]) -> Character {
    Character {
        id,
        name: name.to_string(),
        status: CharacterStatus::Alive,
        species: "Human".to_string(),
        gender: "Female".to_string(),
        image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        episode: episode_ids
            .iter()
            .map(|eid| format!("{EPISODE_URL_BASE}/{eid}"))
            .collect(),
    }
}

pub fn mock_episode(id: u64, name: &str) -> Episode {
    Episode {
        id,
        name: name.to_string(),
        code: format!("S01E{id:02}"),
        air_date: "December 2, 2013".to_string(),
        characters: vec![],
    }
}

/// Build a catalog page; `next_page` becomes the forward cursor
pub fn mock_page(characters: Vec<Character>, total: u64, next_page: Option<u32>) -> CharacterPage {
    CharacterPage {
        info: PageInfo {
            count: total,
            pages: total.div_ceil(20),
            next: next_page
                .map(|p| format!("https://rickandmortyapi.com/api/character?page={p}")),
            prev: None,
        },
        results: characters,
    }
}
