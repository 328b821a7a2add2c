use crate::config::model::Config;
use crate::error::ScrapeError;
use crate::scraper::EventScraper;
use crate::venues::kukoon::KukoonScraper;
use crate::venues::lagerhaus::LagerhausScraper;
use crate::venues::model::Venue;
use itertools::Itertools;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Scrapes the configured venues one after the other, stopping at the first failure.
///
/// Returns the written files, one per venue.
#[instrument(skip_all)]
pub async fn run(config: &Config) -> Result<Vec<PathBuf>, ScrapeError> {
    info!("Scraping {}", config.venues.iter().join(", "));

    let urls = &config.listing_urls;
    let mut written = Vec::with_capacity(config.venues.len());

    for venue in &config.venues {
        let path = match venue {
            Venue::Kukoon => {
                export_venue(&KukoonScraper::with_events_url(&urls.kukoon), config).await?
            }
            Venue::Lagerhaus => {
                export_venue(&LagerhausScraper::with_events_url(&urls.lagerhaus), config).await?
            }
        };

        written.push(path);
    }

    Ok(written)
}

/// Writes the venue's events to `<output_dir>/<venue>.json`.
#[instrument(skip_all, fields(venue = %scraper.venue()))]
pub async fn export_venue<S: EventScraper>(
    scraper: &S,
    config: &Config,
) -> Result<PathBuf, ScrapeError> {
    let path = config.output_dir.join(scraper.venue().file_stem());

    scraper.export(&path).await
}
