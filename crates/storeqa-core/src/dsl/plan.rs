use std::fmt;

use serde::{Deserialize, Serialize};

// Coarse category of an analytics question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Inventory,
    Sales,
    Customers,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Inventory => "inventory",
            Intent::Sales => "sales",
            Intent::Customers => "customers",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// What to fetch to answer a classified question.
// A plan without a table never carries metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub intent: Intent,
    pub table: Option<String>,  // e.g. "inventory_levels"
    pub metrics: Vec<String>,   // e.g. ["available", "sold_per_day"]
    pub time_range_days: u32,   // trailing window, e.g. 30
}

impl Plan {
    /// Plan with no target table. Not generatable.
    pub fn unmapped(intent: Intent, time_range_days: u32) -> Self {
        Self {
            intent,
            table: None,
            metrics: Vec::new(),
            time_range_days,
        }
    }
}
