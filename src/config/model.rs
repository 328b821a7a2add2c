use crate::venues::model::Venue;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub output_dir: PathBuf,
    pub venues: Vec<Venue>,
    pub listing_urls: ListingUrls,
    pub loki_url: Option<String>,
}

/// Listing page fetched for each venue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingUrls {
    pub kukoon: String,
    pub lagerhaus: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config '{name}'. Unknown venue '{value}'")]
    UnknownVenue { name: &'static str, value: String },
    #[error("Invalid config '{name}'. Expected at least one venue")]
    NoVenues { name: &'static str },
}
