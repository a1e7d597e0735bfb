use insta::assert_snapshot;
use storeqa_core::agents::planner::plan;
use storeqa_core::dsl::plan::{Intent, Plan};
use storeqa_core::shopifyql::generate;
use storeqa_core::validate::static_check::{parse_ok, parse_query, ParsedQuery, QueryParseError};

#[test]
fn inventory_query_snapshot() {
    let query = generate(&plan(Intent::Inventory, ""));
    assert_snapshot!("inventory_query", query.as_str());
}

#[test]
fn sales_query_snapshot() {
    let query = generate(&plan(Intent::Sales, ""));
    assert_snapshot!("sales_query", query.as_str());
}

#[test]
fn customers_query_snapshot() {
    let query = generate(&plan(Intent::Customers, ""));
    assert_snapshot!("customers_query", query.as_str());
}

#[test]
fn unmapped_plan_renders_empty_query() {
    let query = generate(&plan(Intent::Unknown, "tell me a joke"));
    assert!(query.is_empty());
    assert_eq!(query.as_str(), "");
}

#[test]
fn table_without_metrics_renders_empty_query() {
    let p = Plan {
        intent: Intent::Sales,
        table: Some("orders".into()),
        metrics: vec![],
        time_range_days: 7,
    };
    assert!(generate(&p).is_empty());
}

#[test]
fn generated_queries_pass_static_check() {
    for intent in [Intent::Inventory, Intent::Sales, Intent::Customers] {
        let p = plan(intent, "");
        let query = generate(&p);
        let text = query.as_str();

        assert!(text.starts_with("FROM "), "query: {text}");
        assert_eq!(text.lines().filter(|l| l.starts_with("SHOW ")).count(), 1);
        assert_eq!(
            text.lines().filter(|l| l.starts_with("SINCE -")).collect::<Vec<_>>(),
            vec![format!("SINCE -{}d", p.time_range_days)]
        );
        assert_eq!(text, text.trim());

        let parsed = parse_query(text).expect("generated query parses");
        assert_eq!(
            parsed,
            ParsedQuery {
                table: p.table.clone().unwrap(),
                metrics: p.metrics.clone(),
                since_days: p.time_range_days,
            }
        );
    }
}

#[test]
fn custom_plan_keeps_metric_order() {
    let p = Plan {
        intent: Intent::Sales,
        table: Some("orders".into()),
        metrics: vec!["units_sold".into(), "total_sales".into(), "gross_margin".into()],
        time_range_days: 14,
    };
    assert_eq!(
        generate(&p).as_str(),
        "FROM orders\nSHOW units_sold, total_sales, gross_margin\nSINCE -14d"
    );
}

#[test]
fn rendering_is_deterministic() {
    let p = plan(Intent::Customers, "");
    assert_eq!(generate(&p), generate(&p.clone()));
}

#[test]
fn static_check_accepts_generated_and_rejects_unmapped() {
    for intent in [Intent::Inventory, Intent::Sales, Intent::Customers] {
        let query = generate(&plan(intent, ""));
        parse_ok(query.as_str()).expect("generated query passes static check");
    }

    let empty = generate(&plan(Intent::Unknown, ""));
    assert_eq!(parse_ok(empty.as_str()), Err(QueryParseError::Empty));
}
