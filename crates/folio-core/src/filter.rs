use crate::model::{Product, SelectionMode};

/// Reduce the normalized table to the rows named by the selection input.
///
/// Input is free text, one URL or name per line; blank lines are dropped.
/// URL matching is exact and case-sensitive, name matching is
/// case-insensitive. No partial or fuzzy matching. The result keeps the
/// source table's order, regardless of the order of the input lines.
pub fn select(products: &[Product], mode: SelectionMode, input_text: &str) -> Vec<Product> {
    let lines: Vec<&str> = input_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Vec::new();
    }

    match mode {
        SelectionMode::Url => products
            .iter()
            .filter(|p| lines.iter().any(|l| *l == p.product_url))
            .cloned()
            .collect(),
        SelectionMode::Name => {
            let wanted: Vec<String> = lines.iter().map(|l| l.to_lowercase()).collect();
            products
                .iter()
                .filter(|p| wanted.iter().any(|w| *w == p.name.to_lowercase()))
                .cloned()
                .collect()
        }
    }
}
