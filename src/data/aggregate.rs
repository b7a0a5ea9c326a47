use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::model::SalesDataset;

// ---------------------------------------------------------------------------
// Summary – the aggregates behind the metric, bar chart, and trend line
// ---------------------------------------------------------------------------

/// Revenue aggregates over a filtered view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    /// Sum of revenue over the view; 0.0 for an empty view.
    pub total: f64,
    /// Product → summed revenue, only for products present in the view.
    /// BTreeMap iteration gives a deterministic (sorted) bar order.
    pub by_product: BTreeMap<String, f64>,
    /// Date → summed revenue, null-date rows excluded, keys ascending.
    pub by_day: BTreeMap<NaiveDate, f64>,
}

/// Compute all aggregates for the view in one pass. Pure: the dataset and
/// indices are untouched, and the same view always yields the same summary.
pub fn summarize(dataset: &SalesDataset, indices: &[usize]) -> Summary {
    let mut summary = Summary::default();
    for &i in indices {
        let r = &dataset.records[i];
        summary.total += r.revenue;
        *summary.by_product.entry(r.product.clone()).or_default() += r.revenue;
        if let Some(d) = r.date {
            *summary.by_day.entry(d).or_default() += r.revenue;
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{default_criteria, filtered_indices, DateRange};
    use crate::data::loader::load_reader;

    fn dataset() -> SalesDataset {
        load_reader(
            "Date,Product,Quantity,Price\n\
             2024-01-01,A,3,10\n\
             2024-01-02,B,x,5\n\
             2024-01-01,B,2,2.5\n\
             bad-date,A,4,1\n"
                .as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn full_criteria_total_matches_date_bounded_rows() {
        let ds = dataset();
        let idx = filtered_indices(&ds, &default_criteria(&ds));
        let summary = summarize(&ds, &idx);
        // 30 (A) + 0 (coerced quantity) + 5 (B); the null-date row cannot
        // fall inside any date range.
        assert_eq!(summary.total, 35.0);
        assert_eq!(summary.by_product.get("A"), Some(&30.0));
        assert_eq!(summary.by_product.get("B"), Some(&5.0));
    }

    #[test]
    fn full_criteria_preserve_total_when_all_dates_parse() {
        let ds = load_reader(
            "Date,Product,Quantity,Price\n\
             2024-01-05,A,1,2\n\
             2024-01-01,B,3,4\n\
             2024-01-03,A,5,6\n"
                .as_bytes(),
        )
        .unwrap();
        let all: Vec<usize> = (0..ds.len()).collect();
        let filtered = filtered_indices(&ds, &default_criteria(&ds));
        assert_eq!(filtered, all);
        assert_eq!(summarize(&ds, &filtered).total, summarize(&ds, &all).total);
    }

    #[test]
    fn by_day_is_sorted_and_skips_null_dates() {
        let ds = dataset();
        let idx: Vec<usize> = (0..ds.len()).collect();
        let summary = summarize(&ds, &idx);
        let days: Vec<NaiveDate> = summary.by_day.keys().copied().collect();
        assert_eq!(
            days,
            vec![
                "2024-01-01".parse::<NaiveDate>().unwrap(),
                "2024-01-02".parse().unwrap()
            ]
        );
        assert_eq!(summary.by_day[&days[0]], 35.0);
        // The bad-date row still contributes to total and by_product.
        assert_eq!(summary.total, 39.0);
        assert_eq!(summary.by_product["A"], 34.0);
    }

    #[test]
    fn empty_view_yields_zero_everything() {
        let ds = dataset();
        let summary = summarize(&ds, &[]);
        assert_eq!(summary.total, 0.0);
        assert!(summary.by_product.is_empty());
        assert!(summary.by_day.is_empty());
    }

    #[test]
    fn single_product_single_day_example() {
        let ds = load_reader(
            "Date,Product,Quantity,Price\n2024-01-01,A,3,10\n2024-01-02,B,x,5\n".as_bytes(),
        )
        .unwrap();
        let mut criteria = default_criteria(&ds);
        criteria.products = ["A".to_string()].into_iter().collect();
        criteria.range = Some(DateRange {
            start: "2024-01-01".parse().unwrap(),
            end: "2024-01-01".parse().unwrap(),
        });
        let idx = filtered_indices(&ds, &criteria);
        assert_eq!(idx.len(), 1);
        assert_eq!(summarize(&ds, &idx).total, 30.0);
    }
}
