// Cross-test readiness verdict from the four analyzer scores.

pub mod handlers;
pub mod readiness;
