// Written-answer scoring: grammar and spelling from the checker service,
// vocabulary/clarity/relevance from local token and sentence statistics.

pub mod analyzer;
pub mod handlers;
pub(crate) mod metrics;
