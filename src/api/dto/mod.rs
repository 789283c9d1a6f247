//! Request and response DTOs for the REST API.

pub mod amenity;
pub mod health;
pub mod listing;
pub mod pagination;
