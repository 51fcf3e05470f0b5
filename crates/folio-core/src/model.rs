use serde::{Deserialize, Serialize};
use std::fmt;

/// A single product record after column normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "product_name")]
    pub name: String,
    /// Selling price as it appeared in the spreadsheet. Kept as text;
    /// presence/absence is the only thing the renderer cares about.
    pub price: Option<String>,
    pub product_url: String,
    pub image_url: String,
}

impl Product {
    /// True if there is a non-blank price to put on a price tag.
    pub fn has_price(&self) -> bool {
        self.price
            .as_deref()
            .map(|p| !p.trim().is_empty())
            .unwrap_or(false)
    }
}

/// How the selection input lines are matched against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Exact, case-sensitive match on `product_url`.
    Url,
    /// Case-insensitive match on `name`.
    Name,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Url => write!(f, "url"),
            SelectionMode::Name => write!(f, "name"),
        }
    }
}

impl SelectionMode {
    pub fn from_str_loose(s: &str) -> Option<SelectionMode> {
        match s.trim().to_lowercase().as_str() {
            "url" | "link" => Some(SelectionMode::Url),
            "name" => Some(SelectionMode::Name),
            _ => None,
        }
    }
}

/// An uploaded spreadsheet as raw text cells, before any normalization.
///
/// Row 0 of the source sheet becomes `headers`; every later row is padded
/// or truncated to the header width by the normalizer, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Per-request rendering options. No state outlives the request.
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    pub heading: String,
    pub show_price: bool,
}

/// The two artifacts of one generation request: identical layout, with the
/// price tag drawn only in the second.
pub struct CatalogPair {
    pub without_price: Vec<u8>,
    pub with_price: Vec<u8>,
}
