use anyhow::{Context, Result};

use super::model::{SalesDataset, SalesRecord};

// ---------------------------------------------------------------------------
// Filtered-view CSV export
// ---------------------------------------------------------------------------

/// Serialize the filtered view as UTF-8 CSV bytes.
///
/// The header is the input header in its original order plus a trailing
/// `Revenue` column. Coerced values are written (so a malformed Quantity
/// exports as 0); null dates export as an empty field; extra columns pass
/// through verbatim.
pub fn export_csv(dataset: &SalesDataset, indices: &[usize]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = dataset.columns.clone();
    header.push("Revenue".to_string());
    writer.write_record(&header).context("writing export header")?;

    for &i in indices {
        let record = &dataset.records[i];
        let mut row: Vec<String> = dataset
            .columns
            .iter()
            .map(|col| cell(dataset, record, col))
            .collect();
        row.push(record.revenue.to_string());
        writer
            .write_record(&row)
            .with_context(|| format!("writing export row {i}"))?;
    }

    writer.flush().context("flushing export buffer")?;
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("recovering export buffer: {e}"))
}

fn cell(dataset: &SalesDataset, record: &SalesRecord, column: &str) -> String {
    match column {
        "Date" => record
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        "Product" => record.product.clone(),
        "Quantity" => record.quantity.to_string(),
        "Price" => record.price.to_string(),
        other => dataset
            .extra_columns
            .iter()
            .position(|c| c == other)
            .and_then(|pos| record.extras.get(pos))
            .cloned()
            .unwrap_or_default(),
    }
}
