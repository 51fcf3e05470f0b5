use std::io::Cursor;

use calamine::{Reader, Xlsx};

use crate::error::FolioError;
use crate::model::RawTable;

/// Read the first worksheet of an xlsx workbook into a `RawTable`.
///
/// Row 0 becomes the header row; everything below becomes data rows as
/// display text. Rows whose cells are all empty are dropped (trailing blank
/// rows are common in hand-maintained product sheets).
pub fn read_xlsx(bytes: &[u8]) -> Result<RawTable, FolioError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| FolioError::Ingest(format!("failed to open xlsx: {e}")))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| FolioError::Ingest("workbook contains no worksheets".into()))?;

    let sheet = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| FolioError::Ingest(format!("failed to read sheet '{sheet_name}': {e}")))?;

    let mut rows_iter = sheet.rows();

    let headers: Vec<String> = match rows_iter.next() {
        Some(row) => row.iter().map(cell_as_string).collect(),
        None => {
            return Err(FolioError::Ingest(format!(
                "sheet '{sheet_name}' is empty"
            )));
        }
    };

    let mut rows = Vec::new();
    for row in rows_iter {
        let cells: Vec<String> = row.iter().map(cell_as_string).collect();
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        rows.push(cells);
    }

    log::debug!(
        "read {} data row(s) from sheet '{}' ({} columns)",
        rows.len(),
        sheet_name,
        headers.len()
    );

    Ok(RawTable { headers, rows })
}

/// Cell-to-text coercion. Numeric cells use their `Display` form, so an
/// SP cell holding 350.0 comes out as "350".
fn cell_as_string(cell: &calamine::Data) -> String {
    match cell {
        calamine::Data::String(s) => s.trim().to_string(),
        calamine::Data::Float(f) => f.to_string(),
        calamine::Data::Int(i) => i.to_string(),
        calamine::Data::Bool(b) => b.to_string(),
        calamine::Data::DateTime(dt) => dt.to_string(),
        calamine::Data::Empty => String::new(),
        _ => format!("{cell}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_cells_render_without_trailing_zero() {
        assert_eq!(cell_as_string(&calamine::Data::Float(350.0)), "350");
        assert_eq!(cell_as_string(&calamine::Data::Float(12.5)), "12.5");
    }

    #[test]
    fn string_cells_are_trimmed() {
        assert_eq!(
            cell_as_string(&calamine::Data::String("  Widget A  ".into())),
            "Widget A"
        );
        assert_eq!(cell_as_string(&calamine::Data::Empty), "");
    }
}
