pub mod result;

use crate::shopifyql::Query;
use result::{CustomersResult, InventoryResult, ProductSales, ResultData, SalesResult};

/// Runs a ShopifyQL query and returns its data.
///
/// Implementations route on the table named in the query text. An empty
/// query yields `ResultData::Empty`.
pub trait Executor: Send + Sync {
    fn execute(&self, query: &Query) -> ResultData;
}

/// Deterministic stand-in for a live query engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockExecutor;

impl Executor for MockExecutor {
    fn execute(&self, query: &Query) -> ResultData {
        if query.mentions("inventory_levels") {
            return ResultData::Inventory(InventoryResult {
                average_daily_sales: 10.0,
                current_inventory: 40.0,
            });
        }

        if query.mentions("orders") {
            return ResultData::Sales(SalesResult {
                top_products: vec![
                    ProductSales { name: "Product A".into(), units_sold: 120.0 },
                    ProductSales { name: "Product B".into(), units_sold: 95.0 },
                ],
            });
        }

        if query.mentions("customers") {
            return ResultData::Customers(CustomersResult { repeat_customers: 32.0 });
        }

        ResultData::Empty
    }
}
