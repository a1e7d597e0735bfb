use crate::dsl::plan::Intent;

/// Keyword rules in priority order. The first rule with a keyword contained
/// in the lower-cased question wins.
const RULES: &[(&[&str], Intent)] = &[
    (&["inventory", "stock", "reorder", "out of stock"], Intent::Inventory),
    (&["sale", "revenue", "top", "selling"], Intent::Sales),
    (&["customer", "repeat", "returning"], Intent::Customers),
];

/// Classify a free-text question to an intent by keyword matching.
pub fn classify(user_prompt: &str) -> Intent {
    let q = user_prompt.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| q.contains(kw)))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_case_insensitive() {
        assert_eq!(classify("INVENTORY report"), Intent::Inventory);
        assert_eq!(classify("Revenue last week"), Intent::Sales);
        assert_eq!(classify("Returning shoppers"), Intent::Customers);
    }

    #[test]
    fn empty_question_is_unknown() {
        assert_eq!(classify(""), Intent::Unknown);
    }
}
