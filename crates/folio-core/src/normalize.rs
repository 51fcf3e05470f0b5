use crate::error::FolioError;
use crate::model::{Product, RawTable};

/// Fixed rename table from spreadsheet headers to internal fields.
///
/// Raw headers are matched after trimming and ignoring ASCII case, so
/// " product name " in the sheet still maps to `name`. Columns not listed
/// here (Unit, Brand, keyword columns, ...) are ignored.
pub const COLUMN_MAP: &[(&str, &str)] = &[
    ("Product Name", "product_name"),
    ("SP", "price"),
    ("Product Link", "product_url"),
    ("Image Link", "image_url"),
];

/// Map a raw table onto the internal product schema.
///
/// All four mapped columns must be present; otherwise the whole table is
/// rejected with a `MissingColumns` error naming every absent field. Rows
/// shorter than the header row are padded with empty cells.
pub fn normalize(table: &RawTable) -> Result<Vec<Product>, FolioError> {
    let mut indices = [None::<usize>; 4];
    let mut missing = Vec::new();

    for (slot, (raw_header, internal)) in COLUMN_MAP.iter().enumerate() {
        let found = table
            .headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(raw_header));
        match found {
            Some(idx) => indices[slot] = Some(idx),
            None => missing.push(internal.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(FolioError::MissingColumns { missing });
    }

    let cell = |row: &[String], slot: usize| -> String {
        indices[slot]
            .and_then(|idx| row.get(idx))
            .map(|c| c.trim().to_string())
            .unwrap_or_default()
    };

    let products = table
        .rows
        .iter()
        .map(|row| {
            let price = cell(row, 1);
            Product {
                name: cell(row, 0),
                price: if price.is_empty() { None } else { Some(price) },
                product_url: cell(row, 2),
                image_url: cell(row, 3),
            }
        })
        .collect();

    Ok(products)
}
