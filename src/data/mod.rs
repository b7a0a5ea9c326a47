/// Data layer: core types, loading, filtering, aggregation, and export.
///
/// Architecture:
/// ```text
///  sales_data.csv / opened file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  validate header, coerce fields → SalesDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ SalesDataset │  Vec<SalesRecord>, column index, date bounds
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  product set + date range → filtered indices
///   └──────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌───────────┐         ┌──────────┐
///   │ aggregate  │         │  export   │
///   │ total /    │         │  CSV of   │
///   │ by product │         │  the view │
///   │ / by day   │         └──────────┘
///   └───────────┘
/// ```

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
