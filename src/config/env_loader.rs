use crate::config::model::{Config, ConfigError, ListingUrls};
use crate::venues::kukoon::KUKOON_EVENTS_URL;
use crate::venues::lagerhaus::LAGERHAUS_EVENTS_URL;
use crate::venues::model::Venue;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;

const OUTPUT_DIR: &str = "OUTPUT_DIR";
const VENUES: &str = "VENUES";
const KUKOON_URL: &str = "KUKOON_URL";
const LAGERHAUS_URL: &str = "LAGERHAUS_URL";
const LOKI_URL: &str = "LOKI_URL";

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(|name| env::var(name).ok())
}

/// Builds the config from `lookup`, which returns the value of a setting if it is set
pub fn load_config_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(Config {
        output_dir: PathBuf::from(lookup(OUTPUT_DIR).unwrap_or_else(|| ".".to_string())),
        venues: match lookup(VENUES) {
            Some(value) => parse_venues(VENUES, &value)?,
            None => Venue::iter().collect(),
        },
        listing_urls: ListingUrls {
            kukoon: lookup(KUKOON_URL).unwrap_or_else(|| KUKOON_EVENTS_URL.to_string()),
            lagerhaus: lookup(LAGERHAUS_URL).unwrap_or_else(|| LAGERHAUS_EVENTS_URL.to_string()),
        },
        loki_url: lookup(LOKI_URL),
    })
}

fn parse_venues(name: &'static str, value: &str) -> Result<Vec<Venue>, ConfigError> {
    let venues = value
        .split(',')
        .map(str::trim)
        .filter(|venue| !venue.is_empty())
        .map(|venue| {
            Venue::from_str(venue).map_err(|_| ConfigError::UnknownVenue {
                name,
                value: venue.to_string(),
            })
        })
        .collect::<Result<Vec<Venue>, ConfigError>>()?;

    if venues.is_empty() {
        return Err(ConfigError::NoVenues { name });
    }

    Ok(venues)
}
