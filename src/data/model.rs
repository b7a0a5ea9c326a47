use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// SalesRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single sales record (one row of the source CSV) after coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    /// Calendar date, `None` when the source value did not parse.
    pub date: Option<NaiveDate>,
    /// Product name, verbatim from the source.
    pub product: String,
    /// Units sold; unparseable values coerce to 0.
    pub quantity: i64,
    /// Unit price; unparseable values coerce to 0.0.
    pub price: f64,
    /// Always `quantity * price`, recomputed after coercion – never read
    /// from the source even if a Revenue column is present.
    pub revenue: f64,
    /// Raw values of non-required input columns, in input order, kept so
    /// export can reproduce the full input header.
    pub extras: Vec<String>,
}

// ---------------------------------------------------------------------------
// SalesDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed column indices.
#[derive(Debug, Clone)]
pub struct SalesDataset {
    /// All records (rows), source order preserved.
    pub records: Vec<SalesRecord>,
    /// Trimmed input header, original order (required and extra columns).
    pub columns: Vec<String>,
    /// Input columns other than Date/Product/Quantity/Price, in input order.
    /// Aligned with `SalesRecord::extras`.
    pub extra_columns: Vec<String>,
    /// Sorted distinct product names.
    pub products: Vec<String>,
    /// Min/max over non-null dates; `None` when every date is null.
    pub date_bounds: Option<(NaiveDate, NaiveDate)>,
}

impl SalesDataset {
    /// Build column indices from the coerced records.
    pub fn from_records(
        records: Vec<SalesRecord>,
        columns: Vec<String>,
        extra_columns: Vec<String>,
    ) -> Self {
        let mut products: Vec<String> = records.iter().map(|r| r.product.clone()).collect();
        products.sort();
        products.dedup();

        let mut date_bounds: Option<(NaiveDate, NaiveDate)> = None;
        for d in records.iter().filter_map(|r| r.date) {
            date_bounds = Some(match date_bounds {
                None => (d, d),
                Some((lo, hi)) => (lo.min(d), hi.max(d)),
            });
        }

        SalesDataset {
            records,
            columns,
            extra_columns,
            products,
            date_bounds,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
