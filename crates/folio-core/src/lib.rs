pub mod assets;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod layout;
pub mod model;
pub mod normalize;

use assets::ImageFetcher;
use error::FolioError;
use model::{CatalogOptions, CatalogPair, Product, RawTable, SelectionMode};

/// Render a single catalog document from already-filtered products.
pub fn generate_catalog(
    products: &[Product],
    options: &CatalogOptions,
    fetcher: &dyn ImageFetcher,
) -> Result<Vec<u8>, FolioError> {
    layout::render::render_catalog(products, options, fetcher)
}

/// Main API entry point: one full generation request.
///
/// Normalizes the raw table, filters it by the selection input, and renders
/// the two catalog artifacts (without and with price tags). Everything is
/// request-scoped; nothing survives beyond the returned byte buffers.
///
/// Images are fetched per rendering pass, so each artifact fetches every
/// image once, sequentially.
pub fn generate_catalogs(
    table: &RawTable,
    mode: SelectionMode,
    selection_text: &str,
    heading: &str,
    fetcher: &dyn ImageFetcher,
) -> Result<CatalogPair, FolioError> {
    if heading.trim().is_empty() {
        return Err(FolioError::EmptyHeading);
    }
    if selection_text.lines().all(|l| l.trim().is_empty()) {
        return Err(FolioError::EmptySelection);
    }

    let products = normalize::normalize(table)?;
    let selected = filter::select(&products, mode, selection_text);
    if selected.is_empty() {
        return Err(FolioError::NoMatches);
    }

    log::info!("generating catalogs for {} matching product(s)", selected.len());

    let without_price = generate_catalog(
        &selected,
        &CatalogOptions {
            heading: heading.to_string(),
            show_price: false,
        },
        fetcher,
    )?;
    let with_price = generate_catalog(
        &selected,
        &CatalogOptions {
            heading: heading.to_string(),
            show_price: true,
        },
        fetcher,
    )?;

    Ok(CatalogPair {
        without_price,
        with_price,
    })
}
