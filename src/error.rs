use crate::venues::model::Venue;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Failed fetching '{url}': {source}")]
    FetchFailure {
        url: String,
        #[source]
        source: reqwest_middleware::Error,
    },
    #[error("{venue} markup has no {element}")]
    MarkupShapeMismatch {
        venue: Venue,
        element: &'static str,
    },
    #[error("No date found in '{text}'")]
    NoDateFound { text: String },
    #[error("Failed writing events to '{}': {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed serializing events: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ScrapeError {
    pub(crate) fn missing(venue: Venue, element: &'static str) -> Self {
        Self::MarkupShapeMismatch { venue, element }
    }
}
