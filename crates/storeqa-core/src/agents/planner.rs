use crate::dsl::plan::{Intent, Plan};

// Window used when an intent has no mapped table
const DEFAULT_TIME_RANGE_DAYS: u32 = 30;

struct PlanEntry {
    intent: Intent,
    table: &'static str,
    metrics: &'static [&'static str],
    time_range_days: u32,
}

const PLAN_TABLE: &[PlanEntry] = &[
    PlanEntry {
        intent: Intent::Inventory,
        table: "inventory_levels",
        metrics: &["available", "sold_per_day"],
        time_range_days: 30,
    },
    PlanEntry {
        intent: Intent::Sales,
        table: "orders",
        metrics: &["total_sales", "units_sold"],
        time_range_days: 7,
    },
    PlanEntry {
        intent: Intent::Customers,
        table: "customers",
        metrics: &["repeat_customers"],
        time_range_days: 90,
    },
];

/// Pick the table, metrics and window for an intent.
///
/// The question text is not consulted yet; explicit date ranges or product
/// names could refine the plan later.
pub fn plan(intent: Intent, _question: &str) -> Plan {
    match PLAN_TABLE.iter().find(|e| e.intent == intent) {
        Some(entry) => Plan {
            intent,
            table: Some(entry.table.to_string()),
            metrics: entry.metrics.iter().map(|m| m.to_string()).collect(),
            time_range_days: entry.time_range_days,
        },
        None => Plan::unmapped(intent, DEFAULT_TIME_RANGE_DAYS),
    }
}
