//! Wire types for the character catalog API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Life status of a character as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    /// "unknown" on the wire; also the catch-all for values this client
    /// does not recognize
    #[serde(rename = "unknown")]
    #[default]
    Unknown,
}

impl<'de> Deserialize<'de> for CharacterStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "Alive" => CharacterStatus::Alive,
            "Dead" => CharacterStatus::Dead,
            _ => CharacterStatus::Unknown,
        })
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterStatus::Alive => write!(f, "alive"),
            CharacterStatus::Dead => write!(f, "dead"),
            CharacterStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// One character record from the catalog. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub status: CharacterStatus,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub gender: String,
    /// Portrait image URL (unused by the terminal views, kept for parity
    /// with the wire format)
    #[serde(default)]
    pub image: String,
    /// Episode resource URLs this character appears in
    #[serde(default)]
    pub episode: Vec<String>,
}

/// One episode record. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u64,
    pub name: String,
    /// Episode code, e.g. "S01E04"
    #[serde(rename = "episode")]
    pub code: String,
    #[serde(default)]
    pub air_date: String,
    /// Character resource URLs appearing in this episode (unused here)
    #[serde(default)]
    pub characters: Vec<String>,
}

/// Pagination metadata returned with every character page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of characters in the catalog
    pub count: u64,
    /// Total number of pages
    pub pages: u64,
    /// Forward cursor: full URL of the next page, absent on the last page
    pub next: Option<String>,
    /// Backward cursor, absent on the first page
    pub prev: Option<String>,
}

/// One page of the character listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}
