//! Full crawls through `run_crawl` against a mock site.

mod helpers;

use std::collections::HashSet;

use helpers::{
    detail_links, mount_numbered_details, mount_query, query_url, read_csv_rows, test_config,
};
use property_crawler::export::{sanitize_file_name, COLUMNS};
use property_crawler::{run_crawl, ExportFormat, ExportMode};
use tempfile::TempDir;
use wiremock::MockServer;

fn source_url_column() -> usize {
    COLUMNS
        .iter()
        .position(|c| *c == "source_url")
        .expect("source_url column")
}

#[tokio::test]
async fn test_three_pages_of_fifty_give_150_rows() {
    let server = MockServer::start().await;
    let pages = vec![
        detail_links(0, 50),
        detail_links(50, 50),
        detail_links(100, 50),
    ];
    mount_query(&server, Some("123 boliger"), &pages).await;
    mount_numbered_details(&server).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = test_config(dir.path());
    config.queries = vec![query_url(&server)];

    let report = run_crawl(config).await.expect("crawl");

    assert_eq!(report.queries, 1);
    assert_eq!(report.pages, 3);
    assert_eq!(report.urls, 150);
    assert_eq!(report.records, 150);
    assert_eq!(report.failed_extractions, 0);

    let expected_path = dir
        .path()
        .join(format!("{}.csv", sanitize_file_name(&query_url(&server))));
    assert_eq!(report.output_files, vec![expected_path.clone()]);

    let rows = read_csv_rows(&expected_path);
    assert_eq!(rows.len(), 150);
    let distinct: HashSet<&str> = rows.iter().map(|r| &r[source_url_column()]).collect();
    assert_eq!(distinct.len(), 150);
    // Rows follow harvest order.
    assert_eq!(
        &rows[0][source_url_column()],
        format!("{}/adresse/0", server.uri())
    );
}

#[tokio::test]
async fn test_duplicates_across_pages_are_suppressed() {
    let server = MockServer::start().await;
    let pages = vec![
        vec!["/adresse/1".to_string(), "/adresse/2".to_string()],
        vec!["/adresse/2".to_string(), "/adresse/3".to_string()],
    ];
    mount_query(&server, Some("75 boliger"), &pages).await;
    mount_numbered_details(&server).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = test_config(dir.path());
    config.queries = vec![query_url(&server)];

    let report = run_crawl(config).await.expect("crawl");

    assert_eq!(report.pages, 2);
    assert_eq!(report.urls, 3);
    let rows = read_csv_rows(&report.output_files[0]);
    let urls: Vec<&str> = rows.iter().map(|r| &r[source_url_column()]).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/adresse/1", server.uri()),
            format!("{}/adresse/2", server.uri()),
            format!("{}/adresse/3", server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_no_results_still_writes_header_only_file() {
    let server = MockServer::start().await;
    mount_query(&server, None, &[]).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = test_config(dir.path());
    config.queries = vec![query_url(&server)];

    let report = run_crawl(config).await.expect("crawl");

    assert_eq!(report.records, 0);
    assert_eq!(report.output_files.len(), 1);
    assert!(read_csv_rows(&report.output_files[0]).is_empty());
}

#[tokio::test]
async fn test_invalid_query_is_skipped() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = test_config(dir.path());
    config.queries = vec!["boligsiden.dk/tilsalg".to_string()];

    let report = run_crawl(config).await.expect("crawl");

    assert_eq!(report.queries, 0);
    assert!(report.output_files.is_empty());
}

#[tokio::test]
async fn test_combined_mode_writes_one_file() {
    let server = MockServer::start().await;
    mount_query(&server, Some("2 boliger"), &[detail_links(1, 2)]).await;
    mount_numbered_details(&server).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = test_config(dir.path());
    config.queries = vec![
        query_url(&server),
        format!("{}?sortAscending=true", query_url(&server)),
    ];
    config.export_mode = ExportMode::Combined;

    let report = run_crawl(config).await.expect("crawl");

    assert_eq!(report.queries, 2);
    assert_eq!(report.output_files, vec![dir.path().join("combined.csv")]);
    assert_eq!(read_csv_rows(&report.output_files[0]).len(), 4);
}

#[tokio::test]
async fn test_xlsx_export() {
    let server = MockServer::start().await;
    mount_query(&server, Some("1 bolig"), &[detail_links(7, 1)]).await;
    mount_numbered_details(&server).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = test_config(dir.path());
    config.queries = vec![query_url(&server)];
    config.format = ExportFormat::Xlsx;

    let report = run_crawl(config).await.expect("crawl");

    assert_eq!(report.records, 1);
    let path = &report.output_files[0];
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("xlsx"));
    assert!(path.exists());
}

#[tokio::test]
async fn test_long_query_is_exported_and_later_queries_still_run() {
    let server = MockServer::start().await;
    mount_query(&server, Some("1 bolig"), &[detail_links(1, 1)]).await;
    mount_numbered_details(&server).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = test_config(dir.path());
    let long_query = format!("{}?q={}", query_url(&server), "x".repeat(300));
    config.queries = vec![long_query.clone(), query_url(&server)];

    let report = run_crawl(config).await.expect("crawl");

    assert_eq!(report.queries, 2);
    assert_eq!(report.failed_exports, 0);
    assert_eq!(report.output_files.len(), 2);
    let long_name = report.output_files[0]
        .file_name()
        .and_then(|n| n.to_str())
        .expect("file name");
    assert!(long_name.len() < 255);
    assert_eq!(long_name, format!("{}.csv", sanitize_file_name(&long_query)));
    assert_eq!(read_csv_rows(&report.output_files[0]).len(), 1);
    assert_eq!(read_csv_rows(&report.output_files[1]).len(), 1);
}

#[tokio::test]
async fn test_export_failure_does_not_stop_the_run() {
    let server = MockServer::start().await;
    mount_query(&server, Some("1 bolig"), &[detail_links(1, 1)]).await;
    mount_numbered_details(&server).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    // A regular file where the output directory should be.
    let blocked = dir.path().join("blocked");
    std::fs::write(&blocked, b"").expect("write blocker");
    let mut config = test_config(&blocked);
    config.queries = vec![
        query_url(&server),
        format!("{}?sortAscending=true", query_url(&server)),
    ];

    let report = run_crawl(config).await.expect("crawl");

    assert_eq!(report.queries, 2);
    assert_eq!(report.records, 2);
    assert_eq!(report.failed_exports, 2);
    assert!(report.output_files.is_empty());
}
