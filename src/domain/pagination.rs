use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Which rows a listing covers with respect to the soft-delete marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Active,
    Trashed,
}

impl Scope {
    pub const fn name(self) -> &'static str {
        match self {
            Scope::All => "all",
            Scope::Active => "active",
            Scope::Trashed => "trashed",
        }
    }
}

/// A normalized page request. Non-positive page numbers and sizes fall back
/// to the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: i64,
    pub page_size: i64,
    pub search: String,
}

impl PageQuery {
    pub fn new(page: i64, page_size: i64, search: impl Into<String>) -> Self {
        Self {
            page: if page <= 0 { DEFAULT_PAGE } else { page },
            page_size: if page_size <= 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            search: search.into().trim().to_string(),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE, "")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total_records: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(query: &PageQuery, total_records: i64) -> Self {
        let total_pages = if total_records <= 0 {
            0
        } else {
            total_records / query.page_size + i64::from(total_records % query.page_size != 0)
        };
        Self {
            page: query.page,
            page_size: query.page_size,
            total_records,
            total_pages,
        }
    }
}

/// One slice of rows plus the total count of the filtered set, as returned by
/// repositories and stored in the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResult<T> {
    pub data: Vec<T>,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn from_list(list: ListResult<T>, query: &PageQuery) -> Self {
        Self {
            pagination: Pagination::new(query, list.total),
            items: list.data,
        }
    }
}
