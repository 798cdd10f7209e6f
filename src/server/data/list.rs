//! Filtered, sorted and paginated list queries.
//!
//! A [`ListQuery`] is built once from request parameters and then applied to a SeaORM query.
//! Repositories apply the filter first, clone the filtered query to count matches, and then
//! apply ordering and paging to fetch the page. Both statements therefore share the same
//! predicate, and every value is bound as a parameter.

use sea_orm::{
    sea_query::{BinOper, Expr, ExprTrait, Func},
    ColumnTrait, Condition, EntityTrait, IdenStatic, Iterable, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::{
    error::validation::ValidationError,
    model::list::{ListParams, SortOrder, DEFAULT_LIMIT, DEFAULT_PAGE},
    util::sanitize::{like_contains, sanitize_identifier},
};

/// An entity that supports list queries.
///
/// Every column of the entity may be used for sorting; unknown columns fall back to
/// `DEFAULT_ORDER_BY`.
pub trait Listable: EntityTrait {
    const DEFAULT_ORDER: SortOrder;
    const DEFAULT_ORDER_BY: Self::Column;
    /// Column matched case-insensitively by the `search` parameter.
    const SEARCH_COLUMN: Self::Column;
}

impl Listable for entity::car::Entity {
    const DEFAULT_ORDER: SortOrder = SortOrder::Asc;
    const DEFAULT_ORDER_BY: Self::Column = entity::car::Column::CarName;
    const SEARCH_COLUMN: Self::Column = entity::car::Column::CarName;
}

impl Listable for entity::order::Entity {
    const DEFAULT_ORDER: SortOrder = SortOrder::Desc;
    const DEFAULT_ORDER_BY: Self::Column = entity::order::Column::OrderDate;
    const SEARCH_COLUMN: Self::Column = entity::order::Column::PickupLocation;
}

/// Normalized list request for entity `E`.
pub struct ListQuery<E: Listable> {
    pub page: u64,
    pub limit: u64,
    pub order: SortOrder,
    pub order_by: E::Column,
    /// Trimmed search term; `None` when blank.
    pub search: Option<String>,
}

impl<E: Listable> ListQuery<E> {
    /// Applies defaults and sanitizes the sort column.
    ///
    /// Zero page or limit become 1 and 10, the direction falls back to the entity default
    /// unless it is `ASC` or `DESC`, and the sort column must name one of the entity's
    /// columns after sanitizing.
    ///
    /// # Returns
    /// - `Ok(ListQuery)` - Normalized request
    /// - `Err(ValidationError::Invalid("limit"))` - Limit does not fit a signed 64-bit integer
    /// - `Err(ValidationError::Invalid("page"))` - The resulting offset does not fit a signed
    ///   64-bit integer
    pub fn from_request(params: &ListParams) -> Result<Self, ValidationError> {
        let page = if params.page == 0 {
            DEFAULT_PAGE
        } else {
            params.page
        };
        let limit = if params.limit == 0 {
            DEFAULT_LIMIT
        } else {
            params.limit
        };

        if i64::try_from(limit).is_err() {
            return Err(ValidationError::Invalid("limit"));
        }
        (page - 1)
            .checked_mul(limit)
            .and_then(|offset| i64::try_from(offset).ok())
            .ok_or(ValidationError::Invalid("page"))?;

        Ok(Self {
            page,
            limit,
            order: SortOrder::parse(params.order.as_deref(), E::DEFAULT_ORDER),
            order_by: resolve_column::<E>(params.order_by.as_deref()),
            search: params
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }

    /// Row offset of the requested page, bounded by `from_request`.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    /// Name of the resolved sort column, echoed back in list responses.
    pub fn order_by_name(&self) -> &'static str {
        self.order_by.as_str()
    }

    /// Filter predicate `LOWER(col) LIKE LOWER('%term%') ESCAPE '\'`, or an empty condition.
    ///
    /// Both sides are folded by the database so that the column and the term follow the same
    /// case rules.
    pub fn condition(&self) -> Condition {
        match &self.search {
            Some(term) => {
                let column = Expr::col(E::SEARCH_COLUMN.as_column_ref());
                let pattern = Expr::expr(Func::lower(Expr::val(like_contains(term))))
                    .binary(BinOper::Escape, Expr::cust(r"'\'"));
                Condition::all()
                    .add(Expr::expr(Func::lower(column)).binary(BinOper::Like, pattern))
            }
            None => Condition::all(),
        }
    }

    pub fn apply_filter<Q: QueryFilter>(&self, query: Q) -> Q {
        query.filter(self.condition())
    }

    /// Adds a single `ORDER BY` plus `LIMIT`/`OFFSET`.
    pub fn apply_page<Q: QueryOrder + QuerySelect>(&self, query: Q) -> Q {
        query
            .order_by(self.order_by, self.order.into())
            .limit(self.limit)
            .offset(self.offset())
    }
}

fn resolve_column<E: Listable>(raw: Option<&str>) -> E::Column {
    let name = sanitize_identifier(raw.unwrap_or_default());
    if name.is_empty() {
        return E::DEFAULT_ORDER_BY;
    }

    E::Column::iter()
        .find(|col| col.as_str().eq_ignore_ascii_case(&name))
        .unwrap_or(E::DEFAULT_ORDER_BY)
}
