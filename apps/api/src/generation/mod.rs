// Synthetic data: profile generation, dataset assembly, CSV persistence, summaries.
// Labels come from eligibility::resolver; nothing here evaluates rules directly.

pub mod dataset;
pub mod handlers;
pub mod profile_generator;
pub mod summary;
