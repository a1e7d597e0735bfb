use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dsl::plan::Plan;
use crate::dsl::validate::validate_plan;
use crate::validate::static_check::parse_ok;

/// A ShopifyQL query. Empty when the plan could not be rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(String);

impl Query {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `needle` occurs anywhere in the query text.
    pub fn mentions(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

fn render_query_inner(table: &str, plan: &Plan) -> String {
    let metrics_clause = plan.metrics.join(", ");

    format!(
        "FROM {table}\nSHOW {metrics}\nSINCE -{days}d",
        table = table,
        metrics = metrics_clause,
        days = plan.time_range_days,
    )
}

/// Render a plan into ShopifyQL.
///
/// Plans without a table or without metrics produce the empty query.
pub fn generate(plan: &Plan) -> Query {
    if let Err(e) = validate_plan(plan) {
        tracing::debug!("plan not generatable: {e}");
        return Query::empty();
    }

    let table = plan.table.as_deref().unwrap_or_default();
    let shopifyql = render_query_inner(table, plan).trim().to_string();
    tracing::debug!("Generated ShopifyQL:\n{shopifyql}");
    if let Err(e) = parse_ok(&shopifyql) {
        tracing::warn!("generated ShopifyQL fails static check: {e}");
    }

    Query(shopifyql)
}
