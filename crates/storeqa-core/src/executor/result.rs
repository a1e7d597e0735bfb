use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::dsl::plan::Intent;

// A null or wrong-typed field reads as its default instead of failing the payload
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

// Keeps every product that is a JSON object; anything else is skipped
fn lenient_products<'de, D>(deserializer: D) -> Result<Vec<ProductSales>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| ProductSales::deserialize(item).ok())
        .collect())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryResult {
    #[serde(deserialize_with = "or_default")]
    pub average_daily_sales: f64,
    #[serde(deserialize_with = "or_default")]
    pub current_inventory: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSales {
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub units_sold: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesResult {
    /// Ranked by the query engine; order is kept as received.
    #[serde(deserialize_with = "lenient_products")]
    pub top_products: Vec<ProductSales>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomersResult {
    #[serde(deserialize_with = "or_default")]
    pub repeat_customers: f64,
}

/// Data returned by an executor, tagged by the kind of table queried.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResultData {
    Inventory(InventoryResult),
    Sales(SalesResult),
    Customers(CustomersResult),
    #[default]
    Empty,
}

impl ResultData {
    /// Decode a loosely-typed payload for `intent`. Missing, null or
    /// wrong-typed fields take their defaults and unknown fields are ignored.
    /// Anything that is not a JSON object decodes to `Empty`.
    pub fn from_json(intent: Intent, value: Value) -> Self {
        if !value.is_object() {
            return ResultData::Empty;
        }

        let decoded = match intent {
            Intent::Inventory => serde_json::from_value(value).map(ResultData::Inventory),
            Intent::Sales => serde_json::from_value(value).map(ResultData::Sales),
            Intent::Customers => serde_json::from_value(value).map(ResultData::Customers),
            Intent::Unknown => return ResultData::Empty,
        };

        decoded.unwrap_or_else(|e| {
            tracing::warn!("could not decode {intent} result, using defaults: {e}");
            ResultData::Empty
        })
    }

    /// Inventory figures, or zeros when this is not an inventory result.
    pub fn inventory(&self) -> InventoryResult {
        match self {
            ResultData::Inventory(r) => r.clone(),
            _ => InventoryResult::default(),
        }
    }

    /// Sales figures, or no products when this is not a sales result.
    pub fn sales(&self) -> SalesResult {
        match self {
            ResultData::Sales(r) => r.clone(),
            _ => SalesResult::default(),
        }
    }

    pub fn customers(&self) -> CustomersResult {
        match self {
            ResultData::Customers(r) => r.clone(),
            _ => CustomersResult::default(),
        }
    }
}
