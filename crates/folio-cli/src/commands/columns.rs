use folio_core::error::FolioError;
use folio_core::normalize::COLUMN_MAP;

pub fn run() -> Result<(), FolioError> {
    println!("Expected spreadsheet columns (matched case- and whitespace-insensitively):\n");
    for (raw, internal) in COLUMN_MAP {
        println!("  {:<14} -> {}", raw, internal);
    }
    println!();
    println!("Any other columns (Unit, Brand, MRP, keyword columns, ...) are ignored.");
    println!("All four mapped columns must be present or the spreadsheet is rejected.");
    Ok(())
}
