use crate::dsl::plan::Plan;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("plan for intent '{intent}' has no target table")]
    MissingTable { intent: String },

    #[error("plan for table '{table}' selects no metrics")]
    NoMetrics { table: String },
}

/// Checks that a plan can be rendered into a query.
pub fn validate_plan(plan: &Plan) -> Result<(), PlanError> {
    let table = plan
        .table
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| PlanError::MissingTable {
            intent: plan.intent.to_string(),
        })?;

    if plan.metrics.is_empty() {
        return Err(PlanError::NoMetrics {
            table: table.to_string(),
        });
    }

    Ok(())
}
