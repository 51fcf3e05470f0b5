//! Integration tests for the generate_catalogs() end-to-end pipeline.
//!
//! Uses a MockFetcher that resolves images in memory without any network
//! access, so these tests run offline.

use image::RgbImage;

use folio_core::assets::{FetchedImage, ImageFetcher};
use folio_core::error::FolioError;
use folio_core::generate_catalogs;
use folio_core::layout::{plan_cards, rows_per_page, COLS};
use folio_core::model::{RawTable, SelectionMode};

/// Resolves URLs ending in ".ok.jpg" to a small solid image; everything
/// else (including the simulated-timeout URL) is unavailable.
struct MockFetcher;

impl ImageFetcher for MockFetcher {
    fn fetch(&self, url: &str) -> FetchedImage {
        if url.ends_with(".ok.jpg") {
            FetchedImage::Image(RgbImage::from_pixel(40, 30, image::Rgb([200, 10, 10])))
        } else {
            FetchedImage::Unavailable
        }
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn fixture_table() -> RawTable {
    let headers = ["Product Name", "Unit", "SP", "MRP", "Product Link", "Image Link"];
    let rows = [
        ["A", "pc", "100", "120", "https://shop/a", "https://img/a.ok.jpg"],
        ["B", "pc", "200", "240", "https://shop/b", "https://img/b.ok.jpg"],
        ["C", "pc", "", "360", "https://shop/c", "https://img/c.ok.jpg"],
        ["D", "pc", "400", "480", "https://shop/d", "https://img/d.timeout.jpg"],
    ];
    RawTable {
        headers: headers.iter().map(|s| s.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Test 1: Name selection "A\nC" -> two cards, both artifacts are PDFs
// ---------------------------------------------------------------------------
#[test]
fn name_selection_renders_both_artifacts() {
    let pair = generate_catalogs(
        &fixture_table(),
        SelectionMode::Name,
        "A\nC",
        "Milk Processing Machines",
        &MockFetcher,
    )
    .unwrap();

    assert!(pair.without_price.starts_with(b"%PDF"));
    assert!(pair.with_price.starts_with(b"%PDF"));
    // Price tags add content, never remove it
    assert!(!pair.without_price.is_empty());
    assert!(!pair.with_price.is_empty());

    // The 2 selected cards occupy one row on one page
    let plan = plan_cards(2);
    assert_eq!(plan.row_count, 1);
    assert_eq!(plan.page_count, 1);
}

// ---------------------------------------------------------------------------
// Test 2: URL selection is case-sensitive
// ---------------------------------------------------------------------------
#[test]
fn url_selection_case_sensitive() {
    let result = generate_catalogs(
        &fixture_table(),
        SelectionMode::Url,
        "HTTPS://SHOP/A",
        "Catalog",
        &MockFetcher,
    );
    assert!(matches!(result, Err(FolioError::NoMatches)));

    let pair = generate_catalogs(
        &fixture_table(),
        SelectionMode::Url,
        "https://shop/a",
        "Catalog",
        &MockFetcher,
    )
    .unwrap();
    assert!(pair.without_price.starts_with(b"%PDF"));
}

// ---------------------------------------------------------------------------
// Test 3: Unavailable image degrades to a placeholder, not an error
// ---------------------------------------------------------------------------
#[test]
fn unavailable_image_still_renders_card() {
    // D's image URL simulates a fetch timeout in the mock
    let pair = generate_catalogs(
        &fixture_table(),
        SelectionMode::Name,
        "D",
        "Catalog",
        &MockFetcher,
    )
    .unwrap();
    assert!(pair.without_price.starts_with(b"%PDF"));
}

// ---------------------------------------------------------------------------
// Test 4: Input error surface — heading, selection, matches, columns
// ---------------------------------------------------------------------------
#[test]
fn empty_heading_rejected() {
    let result = generate_catalogs(
        &fixture_table(),
        SelectionMode::Name,
        "A",
        "   ",
        &MockFetcher,
    );
    assert!(matches!(result, Err(FolioError::EmptyHeading)));
}

#[test]
fn blank_selection_rejected() {
    let result = generate_catalogs(
        &fixture_table(),
        SelectionMode::Name,
        "\n  \n",
        "Catalog",
        &MockFetcher,
    );
    assert!(matches!(result, Err(FolioError::EmptySelection)));
}

#[test]
fn zero_matches_rejected() {
    let result = generate_catalogs(
        &fixture_table(),
        SelectionMode::Name,
        "does-not-exist",
        "Catalog",
        &MockFetcher,
    );
    assert!(matches!(result, Err(FolioError::NoMatches)));
}

#[test]
fn missing_columns_rejected_with_all_fields_named() {
    let table = RawTable {
        headers: vec!["Product Name".into(), "MRP".into()],
        rows: vec![],
    };
    let result = generate_catalogs(&table, SelectionMode::Name, "A", "Catalog", &MockFetcher);
    match result {
        Err(FolioError::MissingColumns { missing }) => {
            assert_eq!(missing, vec!["price", "product_url", "image_url"]);
        }
        other => panic!("expected MissingColumns, got {:?}", other.err()),
    }
}

// ---------------------------------------------------------------------------
// Test 5: Page arithmetic across a page boundary
// ---------------------------------------------------------------------------
#[test]
fn many_products_paginate() {
    let per_page = COLS * rows_per_page();

    let mut table = fixture_table();
    table.rows = (0..per_page + 1)
        .map(|i| {
            vec![
                format!("P{i}"),
                "pc".into(),
                format!("{i}"),
                String::new(),
                format!("https://shop/p{i}"),
                String::new(),
            ]
        })
        .collect();
    let selection: Vec<String> = (0..per_page + 1).map(|i| format!("P{i}")).collect();

    let pair = generate_catalogs(
        &table,
        SelectionMode::Name,
        &selection.join("\n"),
        "Full Range",
        &MockFetcher,
    )
    .unwrap();
    assert!(pair.with_price.starts_with(b"%PDF"));

    let plan = plan_cards(per_page + 1);
    assert_eq!(plan.page_count, 2);
}

// ---------------------------------------------------------------------------
// Test 6: Idempotence — same inputs, same plan and same artifact size class
// ---------------------------------------------------------------------------
#[test]
fn generation_is_repeatable() {
    let run = || {
        generate_catalogs(
            &fixture_table(),
            SelectionMode::Name,
            "A\nB\nC\nD",
            "Catalog",
            &MockFetcher,
        )
        .unwrap()
    };
    let first = run();
    let second = run();
    // Same card count and ordering must give the same document structure;
    // with a deterministic fetcher the bytes match exactly up to the
    // creation timestamp, so compare sizes.
    assert_eq!(first.without_price.len(), second.without_price.len());
    assert_eq!(first.with_price.len(), second.with_price.len());
}
