use crate::error::ScrapeError;
use crate::export::export_events;
use crate::venues::model::{Event, Venue};
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use scraper::{ElementRef, Selector};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

const MAX_RETRIES: u32 = 5;

fn build_rest_client() -> ClientWithMiddleware {
    ClientBuilder::new(Client::new())
        .with(RetryTransientMiddleware::new_with_policy(
            ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES),
        ))
        .build()
}

/// A venue listing page that can be turned into [`Event`]s.
#[allow(async_fn_in_trait)]
pub trait EventScraper {
    fn venue(&self) -> Venue;

    fn events_url(&self) -> &str;

    /// Extracts every event of the listing page, in page order.
    fn parse_events(&self, html: &str) -> Result<Vec<Event>, ScrapeError>;

    async fn scrape(&self) -> Result<Vec<Event>, ScrapeError> {
        let html = fetch_page(self.events_url()).await?;
        let events = self.parse_events(&html)?;

        info!("Scraped {} events from {}", events.len(), self.venue());

        Ok(events)
    }

    /// Scrapes and writes the events to `path`, returning the file actually written.
    async fn export(&self, path: &Path) -> Result<PathBuf, ScrapeError> {
        let events = self.scrape().await?;

        export_events(&events, path)
    }
}

#[instrument]
pub async fn fetch_page(url: &str) -> Result<String, ScrapeError> {
    let fetch_failure = |source: reqwest_middleware::Error| ScrapeError::FetchFailure {
        url: url.to_string(),
        source,
    };

    let page_html = build_rest_client()
        .get(url)
        .send()
        .await
        .map_err(fetch_failure)?
        .error_for_status()
        .map_err(|err| fetch_failure(err.into()))?
        .text()
        .await
        .map_err(|err| fetch_failure(err.into()))?;

    info!("Fetched {} bytes", page_html.len());

    Ok(page_html)
}

pub(crate) fn parse_selector(selector: &str) -> Selector {
    Selector::parse(selector)
        .unwrap_or_else(|err| panic!("Invalid selector '{}': {:?}", selector, err))
}

/// All descendant text, trimmed
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

pub(crate) fn select_first<'a>(
    parent: &ElementRef<'a>,
    selector: &Selector,
    venue: Venue,
    element: &'static str,
) -> Result<ElementRef<'a>, ScrapeError> {
    parent
        .select(selector)
        .next()
        .ok_or_else(|| ScrapeError::missing(venue, element))
}

pub(crate) fn link_target<'a>(
    link: &ElementRef<'a>,
    venue: Venue,
) -> Result<&'a str, ScrapeError> {
    link.value()
        .attr("href")
        .ok_or_else(|| ScrapeError::missing(venue, "link target"))
}

/// First element after `start` in document order, limited to the `scope` subtree.
pub(crate) fn find_next<'a>(
    scope: &ElementRef<'a>,
    start: &ElementRef<'a>,
    selector: &Selector,
) -> Option<ElementRef<'a>> {
    scope
        .descendants()
        .skip_while(|node| node.id() != start.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|element| selector.matches(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test_log::test]
    fn should_find_next_element_after_start_only() {
        let html = Html::parse_fragment(
            r#"<div>
                 <span class="zeit">before</span>
                 <span id="start">start</span>
                 <p><span class="zeit">after</span></p>
                 <span class="zeit">last</span>
               </div>"#,
        );
        let scope = html.root_element();
        let start = scope.select(&parse_selector("#start")).next().unwrap();

        let next = find_next(&scope, &start, &parse_selector("span.zeit")).unwrap();

        assert_eq!(element_text(&next), "after");
    }

    #[test_log::test]
    fn when_nothing_follows_should_find_nothing() {
        let html =
            Html::parse_fragment(r#"<div><span class="zeit">x</span><b id="start"></b></div>"#);
        let scope = html.root_element();
        let start = scope.select(&parse_selector("#start")).next().unwrap();

        assert!(find_next(&scope, &start, &parse_selector("span.zeit")).is_none());
    }

    #[test_log::test]
    fn should_collect_and_trim_nested_text() {
        let html = Html::parse_fragment("<div>\n  <b>Jazz</b> Night \n</div>");
        let div = html.root_element().select(&parse_selector("div")).next().unwrap();

        assert_eq!(element_text(&div), "Jazz Night");
    }

    #[test_log::test(tokio::test)]
    async fn should_fetch_page_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/events")
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await;

        let body = fetch_page(&format!("{}/events", server.url())).await.unwrap();

        assert_eq!(body, "<html></html>");
        mock.assert_async().await;
    }

    #[test_log::test(tokio::test)]
    async fn when_the_page_is_not_found_should_fail_fetching() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;
        let url = format!("{}/missing", server.url());

        let result = fetch_page(&url).await;

        assert!(
            matches!(
                result,
                Err(ScrapeError::FetchFailure { url: ref failed, .. }) if *failed == url
            ),
            "{:?}",
            result
        );
    }
}
