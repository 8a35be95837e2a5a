use crate::Named;
use std::fmt::{Display, Formatter};

pub const PER_PAGE_DEFAULT: usize = 10;
pub const PER_PAGE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Records whose display name contains `filter`, ignoring case.
///
/// A blank filter keeps every record. Source order is preserved either way.
pub fn filter_by_name<'a, T: Named>(records: &'a [T], filter: &str) -> Vec<&'a T> {
    if filter.trim().is_empty() {
        return records.iter().collect();
    }
    let needle = filter.to_lowercase();
    records
        .iter()
        .filter(|record| record.name().to_lowercase().contains(&needle))
        .collect()
}

/// The `page`-th (1-based) window of `per_page` records, clipped to the slice.
///
/// Pages past the end come back empty; clamping is left to the caller.
pub fn paginate<T>(records: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(per_page)
        .min(records.len());
    let end = start.saturating_add(per_page).min(records.len());
    &records[start..end]
}

/// Number of pages needed for `item_count` records, never less than one.
pub fn last_page(item_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    item_count.div_ceil(per_page).max(1)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListViewAction {
    SetFilter(String),
    SetPage(usize),
    SetPerPage(usize),
    PreviousPage,
    NextPage,
}

/// Filter text and pagination owned by one list page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListViewState {
    pub filter: String,
    pub page: usize,
    pub per_page: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            filter: String::new(),
            page: 1,
            per_page: PER_PAGE_DEFAULT,
        }
    }
}

impl ListViewState {
    /// Applies one user action. `item_count` is the size of the filtered set
    /// the pagination controls currently show.
    pub fn apply(&mut self, action: ListViewAction, item_count: usize) {
        match action {
            ListViewAction::SetFilter(filter) => {
                self.filter = filter;
                self.page = 1;
            }
            ListViewAction::SetPerPage(per_page) => {
                self.per_page = per_page.max(1);
                self.page = 1;
            }
            ListViewAction::SetPage(page) => {
                self.page = page.clamp(1, self.last_page(item_count));
            }
            ListViewAction::PreviousPage => {
                self.page = self.page.saturating_sub(1).clamp(1, self.last_page(item_count));
            }
            ListViewAction::NextPage => {
                self.page = self.page.saturating_add(1).clamp(1, self.last_page(item_count));
            }
        }
    }

    pub fn last_page(&self, item_count: usize) -> usize {
        last_page(item_count, self.per_page)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, item_count: usize) -> bool {
        self.page < self.last_page(item_count)
    }

    pub fn visible<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        paginate(filtered, self.page, self.per_page)
    }

    pub fn range(&self, item_count: usize) -> PageRange {
        PageRange::new(self.page, self.per_page, item_count)
    }
}

/// 1-based bounds of the rows on the current page, as shown in the
/// pagination toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl PageRange {
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let start = page.saturating_sub(1).saturating_mul(per_page);
        if start >= total {
            return Self { first: 0, last: 0, total };
        }
        Self {
            first: start + 1,
            last: start.saturating_add(per_page).min(total),
            total,
        }
    }
}

impl Display for PageRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} of {}", self.first, self.last, self.total)
    }
}
