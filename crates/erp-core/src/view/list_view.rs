//! List-View Pipeline
//!
//! Derives the visible rows of a table from the fetched collection:
//! inactive filter, then free-text search, then the page window.
//! Everything here is a pure function of its inputs.

use serde::{Deserialize, Serialize};

use crate::domain::Listable;

/// Rows per page; `All` disables paging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum PageSize {
    Rows(usize),
    All,
}

impl PageSize {
    /// Choices offered by the page-size selector
    pub const OPTIONS: [PageSize; 4] = [PageSize::Rows(5), PageSize::Rows(10), PageSize::Rows(25), PageSize::All];

    pub fn label(&self) -> String {
        match self {
            PageSize::Rows(n) => n.to_string(),
            PageSize::All => "All".to_string(),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Rows(10)
    }
}

impl TryFrom<i64> for PageSize {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(PageSize::All),
            n if n > 0 => Ok(PageSize::Rows(n as usize)),
            n => Err(format!("invalid page size {}", n)),
        }
    }
}

impl From<PageSize> for i64 {
    fn from(value: PageSize) -> Self {
        match value {
            PageSize::Rows(n) => n as i64,
            PageSize::All => -1,
        }
    }
}

/// User-controlled inputs of a table view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub filter_text: String,
    pub include_inactive: bool,
    /// Zero-based page index
    pub page: usize,
    pub page_size: PageSize,
}

impl ListState {
    pub fn new(page_size: PageSize) -> Self {
        Self { page_size, ..Default::default() }
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.page = 0;
    }

    pub fn set_include_inactive(&mut self, include: bool) {
        self.include_inactive = include;
        self.page = 0;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }
}

/// One page of filtered rows plus the counts the pager needs
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    /// Rows left after filtering, across all pages
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    /// Index of the first row of this page within the filtered rows
    pub offset: usize,
}

impl<T> ListPage<T> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    /// "1–10 of 42" style range, 1-based
    pub fn range_label(&self) -> String {
        if self.rows.is_empty() {
            return format!("0 of {}", self.total);
        }
        format!("{}–{} of {}", self.offset + 1, self.offset + self.rows.len(), self.total)
    }
}

/// Case-insensitive substring match against the row's search fields
pub fn matches_filter<T: Listable>(row: &T, filter_text: &str) -> bool {
    let needle = filter_text.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    row.search_fields().iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Inactive exclusion and text search, in backend order
pub fn filter_rows<'a, T: Listable>(rows: &'a [T], state: &ListState) -> Vec<&'a T> {
    rows.iter()
        .filter(|row| state.include_inactive || !row.is_inactive())
        .filter(|row| matches_filter(*row, &state.filter_text))
        .collect()
}

/// Number of pages for `total` rows; at least one so an empty table still has a page
pub fn page_count(total: usize, page_size: PageSize) -> usize {
    match page_size {
        PageSize::All => 1,
        PageSize::Rows(0) => 1,
        PageSize::Rows(n) => total.div_ceil(n).max(1),
    }
}

/// The rows a table shows for the current state.
/// A page index past the end (the list shrank after a reload) shows the last page.
pub fn visible_rows<T: Listable + Clone>(rows: &[T], state: &ListState) -> ListPage<T> {
    let filtered = filter_rows(rows, state);
    let total = filtered.len();
    let page_count = page_count(total, state.page_size);
    let page = state.page.min(page_count - 1);
    let (offset, rows) = match state.page_size {
        PageSize::All | PageSize::Rows(0) => (0, filtered.into_iter().cloned().collect()),
        PageSize::Rows(n) => {
            let offset = page * n;
            (offset, filtered.into_iter().skip(offset).take(n).cloned().collect())
        }
    };
    ListPage { rows, total, page, page_count, offset }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        inactive: bool,
    }

    impl Listable for Row {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![Cow::Borrowed(self.name)]
        }

        fn is_inactive(&self) -> bool {
            self.inactive
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        const NAMES: [&str; 5] = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"];
        (0..n).map(|i| Row { name: NAMES[i % NAMES.len()], inactive: i % 3 == 2 }).collect()
    }

    #[test]
    fn test_visible_rows_is_pure() {
        let data = rows(17);
        let mut state = ListState::new(PageSize::Rows(5));
        state.set_filter_text("a");
        state.set_page(1);
        assert_eq!(visible_rows(&data, &state), visible_rows(&data, &state));
    }

    #[test]
    fn test_pages_partition_filtered_rows() {
        let data = rows(23);
        for size in [1usize, 2, 4, 5, 7, 10, 50] {
            let mut state = ListState::new(PageSize::Rows(size));
            state.set_include_inactive(true);
            let first = visible_rows(&data, &state);
            let mut seen = 0;
            for page in 0..first.page_count {
                state.set_page(page);
                let current = visible_rows(&data, &state);
                if page + 1 < current.page_count {
                    assert_eq!(current.rows.len(), size);
                }
                seen += current.rows.len();
            }
            assert_eq!(seen, first.total, "page size {}", size);
        }
    }

    #[test]
    fn test_inactive_toggle() {
        let data = rows(9);
        let mut state = ListState::new(PageSize::All);
        let hidden = visible_rows(&data, &state);
        assert!(hidden.rows.iter().all(|r| !r.inactive));
        assert_eq!(hidden.total, 6);

        state.set_include_inactive(true);
        let shown = visible_rows(&data, &state);
        assert_eq!(shown.total, 9);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_trimmed() {
        let data = rows(5);
        let mut state = ListState::new(PageSize::All);
        state.set_include_inactive(true);
        state.set_filter_text("  GAM ");
        let page = visible_rows(&data, &state);
        assert_eq!(page.rows, vec![Row { name: "Gamma", inactive: true }]);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = ListState::new(PageSize::Rows(5));
        state.set_page(3);
        state.set_filter_text("x");
        assert_eq!(state.page, 0);
        state.set_page(2);
        state.set_page_size(PageSize::All);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_empty_collection_has_one_empty_page() {
        let page = visible_rows::<Row>(&[], &ListState::default());
        assert!(page.is_empty());
        assert_eq!(page.page_count, 1);
        assert!(!page.has_next());
        assert_eq!(page.range_label(), "0 of 0");
    }

    #[test]
    fn test_range_label() {
        let data = rows(12);
        let mut state = ListState::new(PageSize::Rows(5));
        state.set_include_inactive(true);
        state.set_page(2);
        assert_eq!(visible_rows(&data, &state).range_label(), "11–12 of 12");
    }

    #[test]
    fn test_page_past_the_end_shows_last_page() {
        let mut data: Vec<Row> = (0..11).map(|_| Row { name: "Alpha", inactive: false }).collect();
        let mut state = ListState::new(PageSize::Rows(10));
        state.set_page(1);
        assert_eq!(visible_rows(&data, &state).rows.len(), 1);

        // The only row on page 2 was deleted and the list reloaded
        data.pop();
        let page = visible_rows(&data, &state);
        assert_eq!(page.page, 0);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.rows.len(), 10);
        assert!(!page.has_previous());
        assert_eq!(page.range_label(), "1–10 of 10");

        data.clear();
        let page = visible_rows(&data, &state);
        assert_eq!(page.page, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_page_size_wire_values() {
        assert_eq!(PageSize::try_from(-1).unwrap(), PageSize::All);
        assert_eq!(i64::from(PageSize::Rows(25)), 25);
        assert!(PageSize::try_from(0).is_err());
    }
}
