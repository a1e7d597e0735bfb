use storeqa_core::agents::intent::classify;
use storeqa_core::dsl::plan::Intent;

mod common;
use crate::common::{CUSTOMER_QUESTIONS, INVENTORY_QUESTIONS, SALES_QUESTIONS, UNKNOWN_QUESTIONS};

#[test]
fn keyword_sets_map_to_their_intent() {
    for q in INVENTORY_QUESTIONS {
        assert_eq!(classify(q), Intent::Inventory, "question: {q}");
    }
    for q in SALES_QUESTIONS {
        assert_eq!(classify(q), Intent::Sales, "question: {q}");
    }
    for q in CUSTOMER_QUESTIONS {
        assert_eq!(classify(q), Intent::Customers, "question: {q}");
    }
}

#[test]
fn no_keyword_is_unknown() {
    for q in UNKNOWN_QUESTIONS {
        assert_eq!(classify(q), Intent::Unknown, "question: {q:?}");
    }
}

#[test]
fn inventory_takes_precedence_over_sales() {
    assert_eq!(classify("stock levels of my top products"), Intent::Inventory);
}

#[test]
fn sales_takes_precedence_over_customers() {
    assert_eq!(classify("revenue from repeat customers"), Intent::Sales);
}

#[test]
fn inventory_takes_precedence_over_customers() {
    assert_eq!(classify("stock for repeat customers"), Intent::Inventory);
    assert_eq!(classify("reorder for returning customer"), Intent::Inventory);
}

#[test]
fn keywords_match_inside_words() {
    // "sale" is matched as a substring of "wholesale"
    assert_eq!(classify("wholesale numbers"), Intent::Sales);
    assert_eq!(classify("customers"), Intent::Customers);
}
