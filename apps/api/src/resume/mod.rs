// Resume scoring: document text extraction, heuristic field extraction,
// composite scoring, narrative feedback.

pub mod analyzer;
pub(crate) mod extract;
pub mod handlers;
pub(crate) mod narrative;
pub(crate) mod score;
pub(crate) mod sections;
pub mod skills;
pub(crate) mod vocab;
