use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use crate::color::ProductColors;
use crate::data::aggregate::{summarize, Summary};
use crate::data::filter::{default_criteria, filtered_indices, FilterCriteria};
use crate::data::loader::{self, LoadError};
use crate::data::model::SalesDataset;

/// Repo-local CSV used when the user has not opened a file.
pub const DEFAULT_CSV_PATH: &str = "sales_data.csv";

// ---------------------------------------------------------------------------
// Source identity – memo key for the loader
// ---------------------------------------------------------------------------

/// Identity of a data source, used to skip re-parsing on filter changes.
/// Paths are compared by path; in-memory uploads by a content hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKey {
    Path(PathBuf),
    Bytes(u64),
}

impl SourceKey {
    pub fn for_path(path: &Path) -> Self {
        SourceKey::Path(path.to_path_buf())
    }

    pub fn for_bytes(bytes: &[u8]) -> Self {
        let mut hasher = DefaultHasher::new();
        bytes.hash(&mut hasher);
        SourceKey::Bytes(hasher.finish())
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a source is loaded successfully).
    pub dataset: Option<SalesDataset>,

    /// Identity of the source backing `dataset`; the one-slot load memo.
    /// A load request with the same key reuses `dataset` instead of
    /// re-reading and re-parsing the source.
    source_key: Option<SourceKey>,

    /// Current product/date-range selection.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    /// Aggregates over the visible records (cached).
    pub summary: Summary,

    /// Product → colour for the bar chart and sidebar swatches.
    pub colors: ProductColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            source_key: None,
            criteria: FilterCriteria {
                products: Default::default(),
                range: None,
            },
            visible_indices: Vec::new(),
            summary: Summary::default(),
            colors: ProductColors::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Load the repo CSV if present; otherwise leave the blocking
    /// no-source message for the UI.
    pub fn load_default_source(&mut self) {
        let path = Path::new(DEFAULT_CSV_PATH);
        if path.exists() {
            self.load_path(path);
        } else {
            self.status_message = Some(format!(
                "No {DEFAULT_CSV_PATH} found — open a CSV (File → Open…) to continue."
            ));
        }
    }

    /// Load (or re-use) a dataset from a file path.
    pub fn load_path(&mut self, path: &Path) {
        let key = SourceKey::for_path(path);
        if self.source_key.as_ref() == Some(&key) && self.dataset.is_some() {
            log::debug!("load memo hit for {}", path.display());
            return;
        }
        self.install_load_result(key, loader::load_path(path));
    }

    /// Load (or re-use) a dataset from in-memory CSV bytes.
    pub fn load_bytes(&mut self, bytes: &[u8]) {
        let key = SourceKey::for_bytes(bytes);
        if self.source_key.as_ref() == Some(&key) && self.dataset.is_some() {
            log::debug!("load memo hit for in-memory source");
            return;
        }
        self.install_load_result(key, loader::load_reader(bytes));
    }

    /// A new dataset atomically replaces the old one: criteria reset to
    /// defaults and the derived view is rebuilt before the UI sees anything.
    fn install_load_result(&mut self, key: SourceKey, result: Result<SalesDataset, LoadError>) {
        match result {
            Ok(dataset) => {
                log::info!(
                    "loaded {} records, products {:?}",
                    dataset.len(),
                    dataset.products
                );
                self.criteria = default_criteria(&dataset);
                self.colors = ProductColors::new(&dataset.products);
                self.dataset = Some(dataset);
                self.source_key = Some(key);
                self.status_message = None;
                self.recompute();
            }
            Err(e) => {
                log::error!("failed to load source: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Recompute `visible_indices` and `summary` after a criteria change.
    pub fn recompute(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.criteria);
            self.summary = summarize(ds, &self.visible_indices);
        } else {
            self.visible_indices.clear();
            self.summary = Summary::default();
        }
    }

    /// Toggle one product in the selection.
    pub fn toggle_product(&mut self, product: &str) {
        if !self.criteria.products.remove(product) {
            self.criteria.products.insert(product.to_string());
        }
        self.recompute();
    }

    /// Select every product in the dataset.
    pub fn select_all_products(&mut self) {
        if let Some(ds) = &self.dataset {
            self.criteria.products = ds.products.iter().cloned().collect();
            self.recompute();
        }
    }

    /// Clear the product selection.
    pub fn select_no_products(&mut self) {
        self.criteria.products.clear();
        self.recompute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::DateRange;

    const CSV: &str = "Date,Product,Quantity,Price\n\
                       2024-01-01,A,3,10\n\
                       2024-01-02,B,1,5\n";

    #[test]
    fn load_installs_default_criteria_and_summary() {
        let mut state = AppState::default();
        state.load_bytes(CSV.as_bytes());
        assert!(state.status_message.is_none());
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.summary.total, 35.0);
    }

    #[test]
    fn repeated_load_of_same_bytes_hits_the_memo() {
        let mut state = AppState::default();
        state.load_bytes(CSV.as_bytes());

        // Narrow the view, then "re-upload" the identical source: the memo
        // must keep the dataset and the user's criteria untouched.
        state.criteria.range = Some(DateRange {
            start: "2024-01-01".parse().unwrap(),
            end: "2024-01-01".parse().unwrap(),
        });
        state.recompute();
        assert_eq!(state.visible_indices, vec![0]);

        state.load_bytes(CSV.as_bytes());
        assert_eq!(state.visible_indices, vec![0]);
        assert_eq!(state.summary.total, 30.0);
    }

    #[test]
    fn new_source_replaces_dataset_and_resets_criteria() {
        let mut state = AppState::default();
        state.load_bytes(CSV.as_bytes());
        state.select_no_products();
        assert!(state.visible_indices.is_empty());

        let other = "Date,Product,Quantity,Price\n2024-03-01,C,2,2\n";
        state.load_bytes(other.as_bytes());
        assert_eq!(state.visible_indices, vec![0]);
        assert_eq!(state.summary.total, 4.0);
        assert!(state.criteria.products.contains("C"));
    }

    #[test]
    fn failed_load_keeps_previous_dataset() {
        let mut state = AppState::default();
        state.load_bytes(CSV.as_bytes());

        state.load_bytes(b"Date,Product\n2024-01-01,A\n");
        assert!(state.status_message.as_deref().unwrap().contains("Quantity"));
        assert_eq!(state.summary.total, 35.0);
    }

    #[test]
    fn toggling_products_recomputes_the_view() {
        let mut state = AppState::default();
        state.load_bytes(CSV.as_bytes());
        state.toggle_product("B");
        assert_eq!(state.visible_indices, vec![0]);
        state.toggle_product("B");
        assert_eq!(state.visible_indices, vec![0, 1]);
    }
}
