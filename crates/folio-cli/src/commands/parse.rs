use std::path::PathBuf;

use folio_core::error::FolioError;
use folio_core::{ingest, normalize};

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), FolioError> {
    let bytes = std::fs::read(&input_file)?;
    let table = ingest::read_xlsx(&bytes)?;
    let products = normalize::normalize(&table)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&products)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} product(s), written to {}",
                products.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&products)?,
            _ => print!("{}", output::table::format_products(&products)),
        },
    }

    Ok(())
}
