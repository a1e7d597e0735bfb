use crate::dsl::plan::{Intent, Plan};
use crate::executor::result::ResultData;

/// Days of demand a reorder should cover.
pub const REORDER_HORIZON_DAYS: f64 = 7.0;

pub const NO_SALES_ANSWER: &str = "There were no sales in the selected period.";
pub const FALLBACK_ANSWER: &str = "Unable to generate insights from the available data.";

/// Units to reorder so stock covers the horizon. Never negative.
pub fn recommended_reorder(daily_sales: f64, current_inventory: f64) -> f64 {
    (daily_sales * REORDER_HORIZON_DAYS - current_inventory).max(0.0)
}

/// Narrate query results for the plan that produced them.
pub fn explain(data: &ResultData, plan: &Plan) -> String {
    match plan.intent {
        Intent::Inventory => {
            let inv = data.inventory();
            let reorder = recommended_reorder(inv.average_daily_sales, inv.current_inventory);

            format!(
                "Based on recent sales, you sell about {} units per day. \
                 To avoid running out of stock next week, you should reorder at least {} units.",
                inv.average_daily_sales, reorder
            )
        }
        Intent::Sales => {
            let sales = data.sales();
            if sales.top_products.is_empty() {
                return NO_SALES_ANSWER.to_string();
            }

            let product_list = sales
                .top_products
                .iter()
                .map(|p| format!("{} ({} units)", p.name, p.units_sold))
                .collect::<Vec<_>>()
                .join(", ");

            format!("Your top selling products recently were: {}.", product_list)
        }
        Intent::Customers => {
            let repeat = data.customers().repeat_customers;
            format!("You had {} customers who placed repeat orders recently.", repeat)
        }
        Intent::Unknown => FALLBACK_ANSWER.to_string(),
    }
}
