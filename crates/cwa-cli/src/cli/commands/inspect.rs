//! `cwa inspect <url>` – render the fetched attribution fields.

use anyhow::Result;
use cwa_core::config::CwaConfig;
use cwa_core::record::AttributionRecord;

use super::{fetch_current, selected_format};

pub async fn run_inspect(cfg: CwaConfig, url: String, plain: bool) -> Result<()> {
    let format = selected_format(plain);
    let current = fetch_current(cfg, url).await?;
    let record = &current.record;

    println!("{:<10} {}", "File", record.file_name);
    println!("{:<10} {}", "Author", record.author_plain);
    println!("{:<10} {}", "Date", record.creation_date_cleaned);
    if AttributionRecord::is_known(&record.license_url) {
        println!(
            "{:<10} {} ({})",
            "License", record.license_short_name, record.license_url
        );
    } else {
        println!("{:<10} {}", "License", record.license_short_name);
    }
    // No thumbnail line at all when the platform sent none.
    if let Some(thumb) = &record.thumbnail {
        println!("{:<10} {} ({}px)", "Thumbnail", thumb.url, thumb.width);
    }

    println!();
    println!("{}", current.credits.get(format));
    Ok(())
}
