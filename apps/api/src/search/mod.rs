// Read-only queries over the parsed collection: skill search and analytics.

pub mod analytics;
pub mod handlers;
pub mod skill_search;
