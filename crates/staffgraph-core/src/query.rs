//! List query model: equality filters plus an optional sort key.
//!
//! Built from raw query-string pairs. Keys and values are untrusted and must
//! only ever reach the database as bound parameters.

/// Query-string key that selects the sort attribute instead of filtering.
pub const SORT_KEY: &str = "sort_by";

/// Filters and ordering for the employee and department listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Attribute name → required value, in first-seen order.
    pub filters: Vec<(String, String)>,
    /// Attribute to order by (ascending).
    pub sort_by: Option<String>,
}

impl ListQuery {
    /// Split raw query-string pairs into filters and a sort key.
    ///
    /// `sort_by` never becomes a filter. A repeated key keeps its first
    /// value. An empty `sort_by` means no ordering.
    pub fn from_params<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut query = ListQuery::default();
        let mut sort_seen = false;

        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();

            if key == SORT_KEY {
                if !sort_seen {
                    sort_seen = true;
                    query.sort_by = Some(value).filter(|v| !v.is_empty());
                }
                continue;
            }

            if !query.filters.iter().any(|(k, _)| *k == key) {
                query.filters.push((key, value));
            }
        }

        query
    }
}
