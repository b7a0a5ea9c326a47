use std::io;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use super::model::{SalesDataset, SalesRecord};

/// Columns a source must provide (case-sensitive, after trimming).
pub const REQUIRED_COLUMNS: [&str; 4] = ["Date", "Product", "Quantity", "Price"];

/// Date formats tried in order when coercing the Date column.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y", "%d/%m/%Y"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading CSV source: {0}")]
    Io(#[from] io::Error),

    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header does not contain the required column set. Reported with
    /// both sides so the user can see exactly what the file provided.
    #[error("CSV missing columns {missing:?}; expected {expected:?}, found {found:?}",
            expected = REQUIRED_COLUMNS)]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a sales dataset from a CSV file on disk.
pub fn load_path(path: &Path) -> Result<SalesDataset, LoadError> {
    let file = std::fs::File::open(path)?;
    load_reader(file)
}

/// Load a sales dataset from any byte source (e.g. an uploaded file's
/// contents). Header names are trimmed, the required column set is
/// validated, and each row is coerced field by field. Malformed values
/// never drop a row: they fall back to 0 / 0.0 / null.
pub fn load_reader<R: io::Read>(source: R) -> Result<SalesDataset, LoadError> {
    let mut reader = csv::Reader::from_reader(source);

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !columns.iter().any(|col| col == *c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns {
            missing,
            found: columns,
        });
    }

    // Positions are guaranteed by the validation above.
    let col_idx = |name: &str| columns.iter().position(|c| c == name).unwrap();
    let date_idx = col_idx("Date");
    let product_idx = col_idx("Product");
    let quantity_idx = col_idx("Quantity");
    let price_idx = col_idx("Price");

    let extra_positions: Vec<usize> = (0..columns.len())
        .filter(|i| ![date_idx, product_idx, quantity_idx, price_idx].contains(i))
        .collect();
    let extra_columns: Vec<String> = extra_positions
        .iter()
        .map(|&i| columns[i].clone())
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let field = |i: usize| row.get(i).unwrap_or("");

        let quantity = coerce_quantity(field(quantity_idx));
        let price = coerce_price(field(price_idx));
        records.push(SalesRecord {
            date: coerce_date(field(date_idx)),
            product: field(product_idx).to_string(),
            quantity,
            price,
            revenue: quantity as f64 * price,
            extras: extra_positions.iter().map(|&i| field(i).to_string()).collect(),
        });
    }

    Ok(SalesDataset::from_records(records, columns, extra_columns))
}

// ---------------------------------------------------------------------------
// Field coercion – pure per-field, lenient by design
// ---------------------------------------------------------------------------

/// Coerce a Quantity cell: integer parse, else float parse truncated, else 0.
pub fn coerce_quantity(s: &str) -> i64 {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return i;
    }
    if let Ok(f) = s.parse::<f64>() {
        return f.trunc() as i64;
    }
    0
}

/// Coerce a Price cell: float parse, else 0.0. Currency symbols are not
/// stripped, so "₹10" coerces to 0.0.
pub fn coerce_price(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(0.0)
}

/// Coerce a Date cell against the supported formats; `None` on failure.
pub fn coerce_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
