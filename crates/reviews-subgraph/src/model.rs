use async_graphql::{ComplexObject, Context, Object, SimpleObject, ID};

use crate::source::review_source;

/// A product owned by another subgraph, known here only by its key.
///
/// The id is not validated: zero, negative and missing ids are all kept as given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Product {
    pub id: Option<i64>,
}

impl Product {
    pub fn new(id: Option<i64>) -> Self {
        Self { id }
    }
}

#[Object]
impl Product {
    /// The entity key. Always set on products resolved through `_entities`,
    /// null only for a `reviews(productId: null)` lookup.
    async fn id(&self) -> Option<ID> {
        self.id.map(|id| ID(id.to_string()))
    }

    /// Reviews of this product, exactly as the review source returns them.
    async fn reviews(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Review>> {
        tracing::debug!(product_id = ?self.id, "resolving product reviews");
        Ok(review_source(ctx)?.reviews(self))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, SimpleObject, serde::Serialize, serde::Deserialize)]
#[graphql(complex)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ID,
    #[graphql(skip)]
    pub product_id: i64,
    pub author: String,
    pub body: String,
    pub rating: i32,
}

#[ComplexObject]
impl Review {
    #[graphql(name = "productId")]
    async fn product_id_field(&self) -> ID {
        ID(self.product_id.to_string())
    }

    /// The reviewed product.
    async fn product(&self) -> Product {
        Product::new(Some(self.product_id))
    }
}
