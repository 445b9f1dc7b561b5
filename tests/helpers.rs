// Shared test helpers: HTML fixtures, mock-site mounting and test configs.
//
// Each integration test file pulls this in with `mod helpers;`.

#![allow(dead_code)]

use std::path::Path;

use property_crawler::{Config, ExportFormat, LogFormat, LogLevel};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const QUERY_PATH: &str = "/tilsalg/husbaad";

/// A results page. `count_label` fills the result-count heading if given.
pub fn listing_page_html(count_label: Option<&str>, links: &[String]) -> String {
    let heading = count_label
        .map(|label| {
            format!(r#"<h1 class="flex-1 text-blue-900 text-xl font-black">{label}</h1>"#)
        })
        .unwrap_or_default();
    let cards: String = links
        .iter()
        .map(|href| {
            format!(
                r#"<div class="relative min-h-80"><a href="{href}"><img src="x.jpg"></a><a href="{href}">Se bolig</a></div>"#
            )
        })
        .collect();
    format!(
        r#"<html><head><title>Boliger til salg</title></head><body>
        <button id="didomi-notice-agree-button">Accepter</button>
        {heading}{cards}</body></html>"#
    )
}

/// A fully populated detail page.
pub fn detail_page_html(name: &str, price: u64) -> String {
    format!(
        r#"<html><head>
        <meta property="og:title" content="{name}">
        <script type="application/ld+json">[
          {{"@type": "SingleFamilyResidence", "geo": {{"latitude": 55.68, "longitude": 12.59}}}},
          {{"@type": "Product", "offers": {{"price": {price}}}}}
        ]</script>
        </head><body>
        <h1><span class="text-lg font-semibold">Nyhavn 71</span><span class="text-xs font-light">1051 København K</span></h1>
        <span class="rounded-full font-semibold">Til salg</span>
        <span class="text-gray-600 pr-2">Husbåd med udsigt</span>
        <div data-tooltipped=""><svg><title>C</title></svg></div>
        <div data-testid="property-facts"><ul><li>Boligareal: 86 m²</li><li>Værelser: 3</li></ul></div>
        </body></html>"#
    )
}

/// Detail links `/adresse/<start>` .. `/adresse/<start + n - 1>`, relative.
pub fn detail_links(start: usize, n: usize) -> Vec<String> {
    (start..start + n).map(|i| format!("/adresse/{i}")).collect()
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

/// Mounts a query with the given pages of links. Page-specific mocks are
/// mounted before the bare query so they take precedence.
pub async fn mount_query(server: &MockServer, count_label: Option<&str>, pages: &[Vec<String>]) {
    for (index, links) in pages.iter().enumerate() {
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("page", (index + 1).to_string()))
            .respond_with(html(listing_page_html(None, links)))
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(html(listing_page_html(count_label, &[])))
        .mount(server)
        .await;
}

/// Mounts a detail page at `route`.
pub async fn mount_detail(server: &MockServer, route: &str, name: &str, price: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(detail_page_html(name, price)))
        .mount(server)
        .await;
}

/// Mounts one detail page answering every `/adresse/<number>` route.
pub async fn mount_numbered_details(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/adresse/\d+$"))
        .respond_with(html(detail_page_html("Husbåd i Nyhavn", 2_495_000)))
        .mount(server)
        .await;
}

/// Mounts a detail page at `route` that answers only after `delay`.
pub async fn mount_slow_detail(server: &MockServer, route: &str, delay: std::time::Duration) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(detail_page_html("Langsom", 1)).set_delay(delay))
        .mount(server)
        .await;
}

pub fn query_url(server: &MockServer) -> String {
    format!("{}{QUERY_PATH}", server.uri())
}

/// A config with short timeouts and no retries, writing CSV into `output_dir`.
pub fn test_config(output_dir: &Path) -> Config {
    Config {
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        output_dir: output_dir.to_path_buf(),
        format: ExportFormat::Csv,
        concurrency: 10,
        navigation_timeout_secs: 5,
        detail_timeout_secs: 5,
        listing_wait_secs: 1,
        consent_timeout_secs: 1,
        transaction_type_timeout_secs: 1,
        navigation_retries: 0,
        user_agent: "property_crawler_test/1.0".to_string(),
        ..Default::default()
    }
}

/// Rows of a CSV export, header excluded.
pub fn read_csv_rows(path: &Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open CSV export");
    reader
        .records()
        .map(|r| r.expect("Failed to read CSV row"))
        .collect()
}
