use crate::date::extract_date;
use crate::error::ScrapeError;
use crate::scraper::{element_text, link_target, parse_selector, select_first, EventScraper};
use crate::venues::model::{Event, EventDetails, Venue};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

const KUKOON_ORIGIN: &str = "https://kukoon.de";
pub const KUKOON_EVENTS_URL: &str = "https://kukoon.de/de/events";

lazy_static! {
    static ref EVENT_ITEM: Selector = parse_selector("div.event-item");
    static ref CARD_TITLE: Selector = parse_selector("div.card-title");
    static ref SUBTITLE: Selector = parse_selector("div.h6-subtitle.d-flex");
    static ref LINK: Selector = parse_selector("a");
    static ref META_INFO: Selector = parse_selector("div.meta-info-short");
    static ref META_BLOCK: Selector = parse_selector("div");
    static ref TIME: Selector = parse_selector("time");
}

pub struct KukoonScraper {
    events_url: String,
}

impl Default for KukoonScraper {
    fn default() -> Self {
        Self::with_events_url(KUKOON_EVENTS_URL)
    }
}

impl KukoonScraper {
    /// Event links are still prefixed with the Kukoon origin, whatever the listing URL.
    pub fn with_events_url(events_url: impl Into<String>) -> Self {
        Self {
            events_url: events_url.into(),
        }
    }

    #[instrument(skip_all)]
    fn parse_event(item: ElementRef) -> Result<Event, ScrapeError> {
        let venue = Venue::Kukoon;
        let card_title = select_first(&item, &CARD_TITLE, venue, "card title")?;

        let author_s = card_title
            .select(&SUBTITLE)
            .next()
            .map(|subtitle| element_text(&subtitle));

        let title_link = select_first(&card_title, &LINK, venue, "title link")?;
        let url = format!("{}{}", KUKOON_ORIGIN, link_target(&title_link, venue)?);

        let meta_info = select_first(&item, &META_INFO, venue, "meta info")?;
        let mut meta_blocks = meta_info.select(&META_BLOCK);
        let date_block = meta_blocks
            .next()
            .ok_or_else(|| ScrapeError::missing(venue, "date block"))?;
        let time_block = meta_blocks
            .next()
            .ok_or_else(|| ScrapeError::missing(venue, "time block"))?;

        let date = extract_date(&element_text(&date_block))?;
        let time = element_text(&select_first(&time_block, &TIME, venue, "time")?);

        let event = Event::new(
            element_text(&title_link),
            url,
            date,
            time,
            venue,
            EventDetails::Kukoon { author_s },
        );

        debug!("Parsed {:?}", event);

        Ok(event)
    }
}

impl EventScraper for KukoonScraper {
    fn venue(&self) -> Venue {
        Venue::Kukoon
    }

    fn events_url(&self) -> &str {
        &self.events_url
    }

    fn parse_events(&self, html: &str) -> Result<Vec<Event>, ScrapeError> {
        let document = Html::parse_document(html);

        document
            .select(&EVENT_ITEM)
            .map(Self::parse_event)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const JAZZ_NIGHT: &str = r#"
        <div class="event-item">
          <div class="card-title">
            <a href="/de/events/jazz-night"> Jazz Night </a>
          </div>
          <div class="meta-info-short">
            <div> Datum: 12.05.2024 </div>
            <div><span>Beginn</span> <time> 20:00 </time></div>
          </div>
        </div>"#;

    fn parse(body: &str) -> Result<Vec<Event>, ScrapeError> {
        KukoonScraper::default().parse_events(&format!("<html><body>{}</body></html>", body))
    }

    #[test_log::test]
    fn should_parse_event_without_author() {
        let events = parse(JAZZ_NIGHT).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(
            serde_json::to_value(&events[0]).unwrap(),
            json!({
                "title": "Jazz Night",
                "url": "https://kukoon.de/de/events/jazz-night",
                "date": "12.05.2024",
                "time": "20:00",
                "org": "Kukoon",
                "author_s": null
            })
        );
    }

    #[test_log::test]
    fn should_parse_trimmed_author() {
        let events = parse(
            r#"
            <div class="event-item">
              <div class="card-title">
                <div class="h6-subtitle d-flex">
                  Das Kollektiv
                </div>
                <a href="/de/events/lesung">Lesung</a>
              </div>
              <div class="meta-info-short">
                <div>Fr, 17.05.2024</div>
                <div><time>19:00 - 21:00</time></div>
              </div>
            </div>"#,
        )
        .unwrap();

        assert_eq!(
            events[0].details,
            EventDetails::Kukoon {
                author_s: Some("Das Kollektiv".to_string())
            }
        );
        assert_eq!(events[0].time, "19:00 - 21:00");
    }

    #[test_log::test]
    fn when_there_are_no_event_items_should_return_no_events() {
        assert!(parse("<p>Keine Veranstaltungen</p>").unwrap().is_empty());
    }

    #[test_log::test]
    fn when_the_time_block_is_missing_should_fail() {
        let result = parse(
            r#"
            <div class="event-item">
              <div class="card-title"><a href="/de/events/x">X</a></div>
              <div class="meta-info-short"><div>12.05.2024</div></div>
            </div>"#,
        );

        assert!(
            matches!(
                result,
                Err(ScrapeError::MarkupShapeMismatch {
                    venue: Venue::Kukoon,
                    element: "time block"
                })
            ),
            "{:?}",
            result
        );
    }

    #[test_log::test]
    fn when_the_date_block_has_no_date_should_fail() {
        let result = parse(
            r#"
            <div class="event-item">
              <div class="card-title"><a href="/de/events/x">X</a></div>
              <div class="meta-info-short">
                <div>Datum folgt</div>
                <div><time>20:00</time></div>
              </div>
            </div>"#,
        );

        assert!(matches!(result, Err(ScrapeError::NoDateFound { .. })), "{:?}", result);
    }

    #[test_log::test]
    fn when_one_item_is_malformed_should_fail_the_whole_page() {
        let result = parse(&format!(
            r#"{}<div class="event-item"><div class="card-title"></div></div>"#,
            JAZZ_NIGHT
        ));

        assert!(
            matches!(
                result,
                Err(ScrapeError::MarkupShapeMismatch {
                    element: "title link",
                    ..
                })
            ),
            "{:?}",
            result
        );
    }
}
