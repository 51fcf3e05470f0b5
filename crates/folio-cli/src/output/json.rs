use folio_core::error::FolioError;
use folio_core::model::Product;

pub fn print(products: &[Product]) -> Result<(), FolioError> {
    let json = serde_json::to_string_pretty(products)?;
    println!("{json}");
    Ok(())
}
