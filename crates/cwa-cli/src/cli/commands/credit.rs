//! `cwa credit <url>` – fetch attribution and print the credit line.

use anyhow::Result;
use cwa_core::config::CwaConfig;

use super::{fetch_current, selected_format};

pub async fn run_credit(cfg: CwaConfig, url: String, plain: bool) -> Result<()> {
    let format = selected_format(plain);
    let current = fetch_current(cfg, url).await?;
    println!("{}", current.credits.get(format));
    Ok(())
}
