//! List query for the `facts` table

use crate::models::{Category, CategoryFilter, VoteKind};

/// Maximum number of rows a list fetch returns.
pub const DEFAULT_LIST_LIMIT: usize = 1000;

/// `select * from facts [where category = ?] order by votesInteresting desc limit ?`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactQuery {
    pub category: Option<Category>,
    pub limit: usize,
}

impl Default for FactQuery {
    fn default() -> Self {
        Self {
            category: None,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl FactQuery {
    #[must_use]
    pub fn for_filter(filter: CategoryFilter) -> Self {
        Self {
            category: filter.as_category(),
            ..Self::default()
        }
    }

    /// Column the rows are sorted on, descending.
    #[must_use]
    pub const fn order_column(&self) -> &'static str {
        VoteKind::Interesting.column()
    }

    /// PostgREST query-string parameters for this query.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("select", "*".to_string())];
        if let Some(category) = self.category {
            pairs.push(("category", format!("eq.{}", category.name())));
        }
        pairs.push(("order", format!("{}.desc", self.order_column())));
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}
