use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema, SchemaBuilder, ID};

use crate::{
    source::{review_source, SharedReviewSource},
    Product, Review, ReviewSource,
};

pub type ReviewsSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// A federated schema answering from the given review source.
pub fn schema_builder(source: impl ReviewSource + 'static) -> SchemaBuilder<Query, EmptyMutation, EmptySubscription> {
    let source: SharedReviewSource = Arc::new(source);

    Schema::build(Query, EmptyMutation, EmptySubscription)
        .enable_federation()
        .data(source)
}

pub fn schema(source: impl ReviewSource + 'static) -> ReviewsSchema {
    schema_builder(source).finish()
}

#[derive(Default)]
pub struct Query;

#[Object]
impl Query {
    /// Reviews of the product with the given id. A null id is passed on as a
    /// product without an id.
    async fn reviews(&self, ctx: &Context<'_>, product_id: Option<ID>) -> async_graphql::Result<Vec<Review>> {
        let product = Product::new(product_id.as_ref().map(parse_product_id).transpose()?);
        tracing::debug!(product_id = ?product.id, "resolving reviews");

        Ok(review_source(ctx)?.reviews(&product))
    }

    async fn all_reviews(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Review>> {
        tracing::debug!("resolving all reviews");
        Ok(review_source(ctx)?.all_reviews())
    }

    #[graphql(entity)]
    async fn find_product_by_id(&self, id: ID) -> async_graphql::Result<Product> {
        Ok(Product::new(Some(parse_product_id(&id)?)))
    }
}

fn parse_product_id(id: &ID) -> async_graphql::Result<i64> {
    id.parse::<i64>()
        .map_err(|_| async_graphql::Error::new(format!("invalid product id \"{}\": expected an integer", id.as_str())))
}
