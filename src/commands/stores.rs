//! Stores command - Reports store reachability from the command line.

use crate::config::{Config, ACCOUNTS_FILE, VIDEOS_FILE};
use crate::errors::AppResult;

use super::serve::build_selector;

/// Execute the stores command
pub async fn execute(config: Config) -> AppResult<()> {
    let selector = build_selector(&config).await?;

    let durable_up = selector.try_connect().await;

    println!("Deployment mode:  {}", config.mode);
    println!(
        "Primary store:    {}",
        if durable_up { "reachable" } else { "unreachable" }
    );
    println!(
        "Fallback store:   {} ({}, {})",
        if config.mode.is_production() {
            "disabled"
        } else {
            "available"
        },
        config.data_dir.join(ACCOUNTS_FILE).display(),
        config.data_dir.join(VIDEOS_FILE).display()
    );

    match selector.select().await {
        Ok(store) => println!("Active store:     {}", store.name()),
        Err(e) => println!("Active store:     none ({})", e),
    }

    Ok(())
}
