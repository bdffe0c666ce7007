//! A mock federation subgraph serving product reviews.
//!
//! Reviews come from a [`ReviewSource`] injected when the schema is built;
//! [`StaticReviews`] keeps them in memory.

mod error;
mod model;
mod schema;
mod source;

pub use error::Error;
pub use model::{Product, Review};
pub use schema::{schema, schema_builder, Query, ReviewsSchema};
pub use source::{ReviewSource, SharedReviewSource, StaticReviews};
