#![allow(dead_code)]

use std::sync::Mutex;

use storeqa_core::executor::result::ResultData;
use storeqa_core::executor::{Executor, MockExecutor};
use storeqa_core::shopifyql::Query;

/// Wraps the mock executor and remembers every query it was handed.
#[derive(Default)]
pub struct RecordingExecutor {
    queries: Mutex<Vec<String>>,
}

impl RecordingExecutor {
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("queries lock").clone()
    }
}

impl Executor for RecordingExecutor {
    fn execute(&self, query: &Query) -> ResultData {
        self.queries
            .lock()
            .expect("queries lock")
            .push(query.as_str().to_string());
        MockExecutor.execute(query)
    }
}

pub const INVENTORY_QUESTIONS: &[&str] = &[
    "What's my inventory status?",
    "Which items are low on stock?",
    "Should I reorder anything?",
    "what is out of stock",
];

pub const SALES_QUESTIONS: &[&str] = &[
    "top selling products",
    "How much revenue did I make?",
    "Show me last week's sales",
];

pub const CUSTOMER_QUESTIONS: &[&str] = &[
    "repeat customers this quarter",
    "How many returning buyers?",
    "Who is my best customer?",
];

pub const UNKNOWN_QUESTIONS: &[&str] = &["tell me a joke", "hello", "", "what's the weather like"];
