use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::model::SalesDataset;

// ---------------------------------------------------------------------------
// Filter criteria: selected products + inclusive date range
// ---------------------------------------------------------------------------

/// Closed calendar-date interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }
}

/// User-selected restriction of the dataset.
///
/// `range: None` is the empty-range state (no date bounds could be derived
/// because every date in the dataset is null); it matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub products: BTreeSet<String>,
    pub range: Option<DateRange>,
}

/// Initialise criteria that show everything: all products selected and the
/// dataset's full date span. Falls back to the empty-range state when no
/// date in the dataset parsed.
pub fn default_criteria(dataset: &SalesDataset) -> FilterCriteria {
    FilterCriteria {
        products: dataset.products.iter().cloned().collect(),
        range: dataset
            .date_bounds
            .map(|(start, end)| DateRange { start, end }),
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of records matching both predicates, in dataset order.
///
/// A record matches when its product is in the selected set AND its date is
/// inside the inclusive range. Rows with a null date never match. An empty
/// product set, a missing range, or an inverted range (start > end) all
/// yield an empty view rather than an error.
pub fn filtered_indices(dataset: &SalesDataset, criteria: &FilterCriteria) -> Vec<usize> {
    let Some(range) = criteria.range else {
        return Vec::new();
    };
    if criteria.products.is_empty() || range.start > range.end {
        return Vec::new();
    }

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            criteria.products.contains(&r.product)
                && r.date.is_some_and(|d| range.contains(d))
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;

    fn dataset() -> SalesDataset {
        load_reader(
            "Date,Product,Quantity,Price\n\
             2024-01-01,A,3,10\n\
             2024-01-02,B,x,5\n\
             bad-date,A,1,1\n\
             2024-01-03,A,2,4\n"
                .as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn default_criteria_span_everything() {
        let ds = dataset();
        let criteria = default_criteria(&ds);
        assert_eq!(
            criteria.products.iter().cloned().collect::<Vec<_>>(),
            vec!["A", "B"]
        );
        assert_eq!(
            criteria.range,
            Some(DateRange {
                start: "2024-01-01".parse().unwrap(),
                end: "2024-01-03".parse().unwrap(),
            })
        );
        // Null-date row is excluded even under the full default span.
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 1, 3]);
    }

    #[test]
    fn filters_by_product_and_range_preserving_order() {
        let ds = dataset();
        let mut criteria = default_criteria(&ds);
        criteria.products = ["A".to_string()].into_iter().collect();
        criteria.range = Some(DateRange {
            start: "2024-01-01".parse().unwrap(),
            end: "2024-01-01".parse().unwrap(),
        });
        assert_eq!(filtered_indices(&ds, &criteria), vec![0]);
    }

    #[test]
    fn empty_selection_and_inverted_range_give_empty_views() {
        let ds = dataset();
        let mut criteria = default_criteria(&ds);
        criteria.products.clear();
        assert!(filtered_indices(&ds, &criteria).is_empty());

        let mut criteria = default_criteria(&ds);
        criteria.range = Some(DateRange {
            start: "2024-01-03".parse().unwrap(),
            end: "2024-01-01".parse().unwrap(),
        });
        assert!(filtered_indices(&ds, &criteria).is_empty());
    }

    #[test]
    fn all_null_dates_default_to_empty_range_state() {
        let ds = load_reader(
            "Date,Product,Quantity,Price\nsoon,A,1,1\nlater,B,2,2\n".as_bytes(),
        )
        .unwrap();
        let criteria = default_criteria(&ds);
        assert_eq!(criteria.range, None);
        assert!(filtered_indices(&ds, &criteria).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = dataset();
        let criteria = default_criteria(&ds);
        let once = filtered_indices(&ds, &criteria);

        // Re-filter the already-filtered sub-dataset with the same criteria.
        let sub = SalesDataset::from_records(
            once.iter().map(|&i| ds.records[i].clone()).collect(),
            ds.columns.clone(),
            ds.extra_columns.clone(),
        );
        let twice = filtered_indices(&sub, &criteria);
        assert_eq!(twice.len(), once.len());
        assert_eq!(twice, (0..once.len()).collect::<Vec<_>>());
    }
}
