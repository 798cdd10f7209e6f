use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// Paging, sorting and search parameters accepted by every list endpoint.
///
/// All fields are optional; missing or zero values fall back to per-entity defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRequestDto {
    /// Page number starting at 1 (default: 1)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10)
    #[serde(default)]
    pub limit: u64,
    /// Sort direction, `ASC` or `DESC`
    #[serde(default)]
    pub order: Option<String>,
    /// Column to sort by
    #[serde(default)]
    pub order_by: Option<String>,
    /// Case-insensitive partial match on the entity's search column
    #[serde(default)]
    pub search: Option<String>,
    /// Accepted for compatibility; the search column is fixed per entity
    #[serde(default)]
    pub search_by: Option<String>,
}
