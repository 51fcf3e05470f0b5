use std::path::PathBuf;

use folio_core::assets::HttpFetcher;
use folio_core::error::FolioError;
use folio_core::model::SelectionMode;
use folio_core::{generate_catalogs, ingest};

pub fn run(
    input_file: PathBuf,
    mode: &str,
    select_file: PathBuf,
    heading: &str,
    out_dir: PathBuf,
) -> Result<(), FolioError> {
    let mode = SelectionMode::from_str_loose(mode).ok_or_else(|| {
        FolioError::Ingest(format!("unknown selection mode '{mode}' (use url or name)"))
    })?;

    let selection_text =
        std::fs::read_to_string(&select_file).map_err(|e| FolioError::SelectionLoad {
            path: select_file.clone(),
            reason: e.to_string(),
        })?;

    let bytes = std::fs::read(&input_file)?;
    let table = ingest::read_xlsx(&bytes)?;

    let fetcher = HttpFetcher::new();
    let pair = generate_catalogs(&table, mode, &selection_text, heading, &fetcher)?;

    std::fs::create_dir_all(&out_dir)?;
    let without = out_dir.join("catalog_without_price.pdf");
    let with = out_dir.join("catalog_with_price.pdf");
    std::fs::write(&without, &pair.without_price)?;
    std::fs::write(&with, &pair.with_price)?;

    eprintln!("Wrote {}", without.display());
    eprintln!("Wrote {}", with.display());

    Ok(())
}
