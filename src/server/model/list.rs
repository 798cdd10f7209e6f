//! Paging, sorting and search parameters shared by list operations.

use crate::model::list::ListRequestDto;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses a direction case-insensitively, falling back to `default` for anything that is
    /// not exactly `ASC` or `DESC`.
    pub fn parse(raw: Option<&str>, default: Self) -> Self {
        match raw.map(|s| s.trim().to_ascii_uppercase()).as_deref() {
            Some("ASC") => Self::Asc,
            Some("DESC") => Self::Desc,
            _ => default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl From<SortOrder> for sea_orm::Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => sea_orm::Order::Asc,
            SortOrder::Desc => sea_orm::Order::Desc,
        }
    }
}

/// Raw list parameters before per-entity defaults are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pub page: u64,
    pub limit: u64,
    pub order: Option<String>,
    pub order_by: Option<String>,
    pub search: Option<String>,
}

impl ListParams {
    /// Converts the query string DTO into list parameters.
    ///
    /// `search_by` is dropped since every entity searches a fixed column.
    pub fn from_dto(dto: ListRequestDto) -> Self {
        Self {
            page: dto.page,
            limit: dto.limit,
            order: dto.order,
            order_by: dto.order_by,
            search: dto.search,
        }
    }
}

/// One page of list results together with the normalized request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of rows matching the filter, independent of paging.
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub order: SortOrder,
    pub order_by: String,
}
