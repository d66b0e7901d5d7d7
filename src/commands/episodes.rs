//! Episode lookup command (`crossover episodes`)

use crate::api::{Gateway, HttpGateway};
use crate::config::Config;
use crate::display::format_episode_line;
use crate::error::Result;

/// Print the episodes with the given ids
pub async fn cmd_episodes(ids: &[u64], output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let gateway = HttpGateway::from_config(&config)?;
    let episodes = gateway.episodes_by_ids(ids).await?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(&episodes)?);
        return Ok(());
    }

    for episode in &episodes {
        println!("{}", format_episode_line(episode));
    }

    Ok(())
}
