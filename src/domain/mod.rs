//! Domain layer: entities, query model, and repository traits.

pub mod entities;
pub mod listing_query;
pub mod repositories;
