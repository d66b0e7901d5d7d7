//! Character listing command (`crossover ls`)

use owo_colors::OwoColorize;

use crate::api::{Gateway, HttpGateway};
use crate::config::Config;
use crate::display::format_character_line;
use crate::error::Result;

/// List one page of the character catalog
pub async fn cmd_ls(page: Option<u32>, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let gateway = HttpGateway::from_config(&config)?;
    let listing = gateway.list_characters(page).await?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(&listing.results)?);
        return Ok(());
    }

    for character in &listing.results {
        println!("{}", format_character_line(character));
    }

    let summary = format!(
        "page {}/{} ({} characters total)",
        page.unwrap_or(1),
        listing.info.pages,
        listing.info.count
    );
    println!("{}", summary.dimmed());

    Ok(())
}
