//! Interactive browser command (`crossover browse`)

use iocraft::prelude::*;

use crate::error::{CrossoverError, Result};
use crate::tui::Browser;

/// Launch the character browser TUI
pub async fn cmd_browse() -> Result<()> {
    element!(Browser)
        .fullscreen()
        .await
        .map_err(|e| CrossoverError::Other(format!("TUI error: {}", e)))
}
