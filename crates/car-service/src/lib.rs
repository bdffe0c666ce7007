//! A mock GraphQL service answering car lookups from hardcoded data.

pub mod catalog;
mod schema;

pub use catalog::Car;
pub use schema::{schema, schema_builder, CarSchema, Query};
