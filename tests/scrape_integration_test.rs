mod common;

use anyhow::Result;
use common::{empty_page, listing_page};
use httpmock::prelude::*;
use whitehouse_actions::adapters::http::DEFAULT_USER_AGENT;
use whitehouse_actions::{HttpPageSource, ListingFetcher};

const LISTING: &str = "/presidential-actions/";

fn fetcher(server: &MockServer) -> Result<ListingFetcher<HttpPageSource>> {
    let source = HttpPageSource::new(DEFAULT_USER_AGENT)?;
    Ok(ListingFetcher::new(source, server.url(LISTING))?)
}

#[tokio::test]
async fn test_fetch_all_extracts_fields_verbatim() -> Result<()> {
    let server = MockServer::start();

    let page_one = server.mock(|when, then| {
        when.method(GET)
            .path(LISTING)
            .header("user-agent", DEFAULT_USER_AGENT);
        then.status(200)
            .header("content-type", "text/html; charset=UTF-8")
            .body(listing_page(&[(
                "Ending Radical Indoctrination",
                "https://www.whitehouse.gov/presidential-actions/2025/01/ending-radical/",
                "2025-01-29T19:31:36-05:00",
            )]));
    });
    let page_two = server.mock(|when, then| {
        when.method(GET).path("/presidential-actions/page/2/");
        then.status(200).body(empty_page());
    });

    let records = fetcher(&server)?.fetch_all(2).await;

    page_one.assert();
    page_two.assert();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Ending Radical Indoctrination");
    assert_eq!(
        records[0].url,
        "https://www.whitehouse.gov/presidential-actions/2025/01/ending-radical/"
    );
    assert_eq!(records[0].date, "2025-01-29T19:31:36-05:00");
    assert_eq!(records[0].match_confidence, 0.0);
    Ok(())
}

#[tokio::test]
async fn test_empty_page_stops_pagination() -> Result<()> {
    let server = MockServer::start();

    let page_one = server.mock(|when, then| {
        when.method(GET).path(LISTING);
        then.status(200).body(listing_page(&[
            ("One", "/one/", "2025-02-01T10:00:00-05:00"),
            ("Two", "/two/", "2025-02-02T10:00:00-05:00"),
        ]));
    });
    let page_two = server.mock(|when, then| {
        when.method(GET).path("/presidential-actions/page/2/");
        then.status(200).body(empty_page());
    });
    let page_three = server.mock(|when, then| {
        when.method(GET).path("/presidential-actions/page/3/");
        then.status(200)
            .body(listing_page(&[("Three", "/three/", "2025-02-03T10:00:00-05:00")]));
    });

    let records = fetcher(&server)?.fetch_all(5).await;

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two"]);
    page_one.assert_hits(1);
    page_two.assert_hits(1);
    page_three.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_failed_page_does_not_stop_pagination() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path(LISTING);
        then.status(200).body(listing_page(&[
            ("One", "/one/", "2025-02-01"),
            ("Two", "/two/", "2025-02-02"),
        ]));
    });
    let page_two = server.mock(|when, then| {
        when.method(GET).path("/presidential-actions/page/2/");
        then.status(500).body("Internal Server Error");
    });
    server.mock(|when, then| {
        when.method(GET).path("/presidential-actions/page/3/");
        then.status(200).body(listing_page(&[("Three", "/three/", "2025-02-03")]));
    });

    let records = fetcher(&server)?.fetch_all(3).await;

    page_two.assert();
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two", "Three"]);
    Ok(())
}

#[tokio::test]
async fn test_failed_main_page_attempts_nothing_else() -> Result<()> {
    let server = MockServer::start();

    let page_one = server.mock(|when, then| {
        when.method(GET).path(LISTING);
        then.status(503);
    });
    let page_two = server.mock(|when, then| {
        when.method(GET).path("/presidential-actions/page/2/");
        then.status(200).body(listing_page(&[("Two", "/two/", "2025-02-02")]));
    });

    let records = fetcher(&server)?.fetch_all(5).await;

    assert!(records.is_empty());
    page_one.assert_hits(1);
    page_two.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_requests_at_most_max_pages() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path(LISTING);
        then.status(200).body(listing_page(&[("One", "/one/", "2025-02-01")]));
    });
    let numbered = server.mock(|when, then| {
        when.method(GET).path_contains("/presidential-actions/page/");
        then.status(200).body(listing_page(&[("More", "/more/", "2025-02-02")]));
    });

    let records = fetcher(&server)?.fetch_all(3).await;

    assert_eq!(records.len(), 3);
    numbered.assert_hits(2);
    Ok(())
}
