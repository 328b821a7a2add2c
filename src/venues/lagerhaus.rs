use crate::error::ScrapeError;
use crate::scraper::{
    element_text, find_next, link_target, parse_selector, select_first, EventScraper,
};
use crate::venues::model::{Event, EventDetails, Venue};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument, warn};

pub const LAGERHAUS_EVENTS_URL: &str = "https://kulturzentrum-lagerhaus.de/lagerhaus";
const TIME_PREFIX: &str = "/ ";
pub const NO_DESCRIPTION: &str = "No description available";

lazy_static! {
    static ref ARTICLE: Selector = parse_selector("div#artikel");
    static ref HEADING: Selector = parse_selector("h1");
    static ref LINK: Selector = parse_selector("a");
    static ref DATE: Selector = parse_selector("span#datum_global");
    static ref TIME: Selector = parse_selector("span.zeit");
    static ref ARTICLE_TEXT: Selector = parse_selector("div#artikeltext");
    static ref PARAGRAPH: Selector = parse_selector("p");
}

pub struct LagerhausScraper {
    events_url: String,
}

impl Default for LagerhausScraper {
    fn default() -> Self {
        Self::with_events_url(LAGERHAUS_EVENTS_URL)
    }
}

impl LagerhausScraper {
    pub fn with_events_url(events_url: impl Into<String>) -> Self {
        Self {
            events_url: events_url.into(),
        }
    }

    #[instrument(skip_all)]
    fn parse_event(article: ElementRef) -> Result<Event, ScrapeError> {
        let venue = Venue::Lagerhaus;
        let heading = select_first(&article, &HEADING, venue, "heading")?;
        let title_link = select_first(&heading, &LINK, venue, "title link")?;

        // The listing shows dates like "Sa 18.05.", kept as they are
        let date_tag = select_first(&article, &DATE, venue, "date")?;
        let time_tag = find_next(&article, &date_tag, &TIME)
            .ok_or_else(|| ScrapeError::missing(venue, "time"))?;
        let time = element_text(&time_tag);
        let time = time
            .strip_prefix(TIME_PREFIX)
            .map(str::to_string)
            .unwrap_or(time);

        let event = Event::new(
            element_text(&title_link),
            link_target(&title_link, venue)?.to_string(),
            element_text(&date_tag),
            time,
            venue,
            EventDetails::Lagerhaus {
                description: Self::get_description(article),
            },
        );

        debug!("Parsed {:?}", event);

        Ok(event)
    }

    /// Text of the last paragraph of the article body, or [`NO_DESCRIPTION`] when there is none
    fn get_description(article: ElementRef) -> String {
        article
            .select(&ARTICLE_TEXT)
            .next()
            .and_then(|text| text.select(&PARAGRAPH).last())
            .map(|paragraph| element_text(&paragraph))
            .filter(|description| !description.is_empty())
            .unwrap_or_else(|| {
                warn!("No description found");
                NO_DESCRIPTION.to_string()
            })
    }
}

impl EventScraper for LagerhausScraper {
    fn venue(&self) -> Venue {
        Venue::Lagerhaus
    }

    fn events_url(&self) -> &str {
        &self.events_url
    }

    fn parse_events(&self, html: &str) -> Result<Vec<Event>, ScrapeError> {
        let document = Html::parse_document(html);

        document
            .select(&ARTICLE)
            .map(Self::parse_event)
            .collect()
    }
}
