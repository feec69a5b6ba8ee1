use serde::{Deserialize, Serialize};

/// One page of a list, plus enough bookkeeping to ask for the next one
///
/// Pages are numbered from 1. A size of 0 means the list is not paged and
/// everything sits on page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult<T> {
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub size: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_previous: bool,
    #[serde(default)]
    pub total_pages: usize,
}

impl<T> ListResult<T> {
    /// Everything on a single page
    pub fn unpaged(items: Vec<T>) -> Self {
        Self::paginate(items, 1, 0)
    }

    /// Cut one page out of the full, already ordered list
    pub fn paginate(items: Vec<T>, page: usize, size: usize) -> Self {
        let total = items.len();

        if size == 0 {
            return Self {
                page: 1,
                size: 0,
                total,
                items,
                first: true,
                last: true,
                has_next: false,
                has_previous: false,
                total_pages: 1,
            };
        }

        let page = page.max(1);
        let total_pages = total.div_ceil(size);
        let start = (page - 1).saturating_mul(size).min(total);
        let items: Vec<T> = items.into_iter().skip(start).take(size).collect();

        let has_next = page < total_pages;
        let has_previous = page > 1;
        Self {
            page,
            size,
            total,
            items,
            first: !has_previous,
            last: !has_next,
            has_next,
            has_previous,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Convert the items, keeping the page bookkeeping
    pub fn map<U, F>(self, f: F) -> ListResult<U>
    where
        F: FnMut(T) -> U,
    {
        ListResult {
            page: self.page,
            size: self.size,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
            first: self.first,
            last: self.last,
            has_next: self.has_next,
            has_previous: self.has_previous,
            total_pages: self.total_pages,
        }
    }
}
