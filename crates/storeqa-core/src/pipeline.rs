use serde::{Deserialize, Serialize};

use crate::agents::{explain, intent, planner};
use crate::dsl::plan::Intent;
use crate::executor::Executor;
use crate::shopifyql;

pub const CLARIFICATION_PROMPT: &str =
    "Please provide more details such as product name or time range so I can help you better.";

/// Coarse label for whether the question was understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub confidence: Confidence,
}

/// Question answering pipeline: classify, plan, generate, execute, explain.
pub struct Pipeline<E> {
    executor: E,
}

impl<E: Executor> Pipeline<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Answer a question about a store.
    ///
    /// `store_id` only tags diagnostics; data is not scoped per store yet.
    pub fn ask(&self, store_id: &str, question: &str) -> Answer {
        let span = tracing::info_span!("ask", store_id = %store_id);
        let _guard = span.enter();

        let intent = intent::classify(question);
        tracing::debug!(%intent, "classified question");

        if intent == Intent::Unknown {
            tracing::info!("question not classifiable, asking for clarification");
            return Answer {
                answer: CLARIFICATION_PROMPT.to_string(),
                confidence: Confidence::Low,
            };
        }

        let plan = planner::plan(intent, question);
        let query = shopifyql::generate(&plan);
        let data = self.executor.execute(&query);
        let answer = explain::explain(&data, &plan);

        Answer {
            answer,
            confidence: Confidence::Medium,
        }
    }
}
