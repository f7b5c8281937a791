// Recorded-answer presentation scoring: eye contact, posture, gestures,
// and expression from per-frame landmark geometry.

pub mod aggregate;
pub mod analyzer;
pub mod geometry;
pub mod handlers;
