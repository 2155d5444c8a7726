// Eligibility engine: rule table, per-path predicate, and label resolution.
// Everything here is pure apart from the RNG handed to the resolver.

pub mod handlers;
pub mod resolver;
pub mod rules;
