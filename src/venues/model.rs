use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Venue {
    Kukoon,
    Lagerhaus,
}

impl Venue {
    /// Lowercase venue name, used as the output file name
    pub fn file_stem(&self) -> String {
        let name: &'static str = self.into();

        name.to_lowercase()
    }
}

/// One scraped event listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub url: String,
    pub date: String,
    pub time: String,
    pub org: Venue,
    #[serde(flatten)]
    pub details: EventDetails,
}

/// Venue specific fields.
///
/// Kukoon always serializes `author_s`, even when `null`, Lagerhaus only has a description.
// Lagerhaus goes first: its `description` is required, while a missing `author_s` would
// deserialize as `None` and swallow Lagerhaus records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventDetails {
    Lagerhaus { description: String },
    Kukoon { author_s: Option<String> },
}

impl Event {
    pub fn new(
        title: String,
        url: String,
        date: String,
        time: String,
        org: Venue,
        details: EventDetails,
    ) -> Self {
        Self {
            title,
            url,
            date,
            time,
            org,
            details,
        }
    }
}
