//! `cwa locate <url>` – canonical title derivation, no network access.

use anyhow::{anyhow, Result};
use cwa_core::locator;

pub fn run_locate(url: &str) -> Result<()> {
    let id = locator::locate(url).map_err(|err| {
        tracing::warn!("locate failed: {err}");
        anyhow!("Please enter a valid Wikimedia Commons file URL.")
    })?;

    println!("{:<10} {}", "Title", id.canonical_title);
    println!("{:<10} {}", "Name", id.display_name);
    Ok(())
}
