pub mod agents;
pub mod dsl;
pub mod executor;
pub mod pipeline;
pub mod shopifyql;
pub mod validate;
