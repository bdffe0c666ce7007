use std::{fs, path::Path, sync::Arc};

use async_graphql::{Context, ID};

use crate::{Error, Product, Review};

/// Where reviews come from. The schema passes results through unmodified, so
/// order and content are entirely up to the implementation.
pub trait ReviewSource: Send + Sync {
    /// Reviews of one product.
    fn reviews(&self, product: &Product) -> Vec<Review>;

    /// Every review known to the source.
    fn all_reviews(&self) -> Vec<Review>;
}

/// The form in which a review source is stored in the schema data.
pub type SharedReviewSource = Arc<dyn ReviewSource>;

pub(crate) fn review_source<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedReviewSource> {
    ctx.data::<SharedReviewSource>()
}

/// Reviews held in memory, in the order they were given.
#[derive(Clone, Debug, Default)]
pub struct StaticReviews {
    reviews: Vec<Review>,
}

impl StaticReviews {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    /// Reads a JSON array of reviews, e.g.
    /// `[{"id": "1", "productId": 1, "author": "Ada", "body": "Fine.", "rating": 4}]`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_owned(),
            source,
        })?;

        let reviews = serde_json::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_owned(),
            source,
        })?;

        Ok(Self::new(reviews))
    }

    /// The built-in mock reviews for products 1, 2 and 3.
    pub fn mock() -> Self {
        let review = |id: &str, product_id: i64, author: &str, body: &str, rating: i32| Review {
            id: ID(id.to_owned()),
            product_id,
            author: author.to_owned(),
            body: body.to_owned(),
            rating,
        };

        Self::new(vec![
            review("1", 1, "Ada", "Does exactly what it says on the box.", 5),
            review("2", 1, "Grace", "Sturdy, but the manual is useless.", 3),
            review("3", 2, "Linus", "Stopped working after a week.", 1),
            review("4", 3, "Margaret", "Great value for the price.", 4),
        ])
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

impl ReviewSource for StaticReviews {
    fn reviews(&self, product: &Product) -> Vec<Review> {
        let Some(product_id) = product.id else {
            return Vec::new();
        };

        self.reviews
            .iter()
            .filter(|review| review.product_id == product_id)
            .cloned()
            .collect()
    }

    fn all_reviews(&self) -> Vec<Review> {
        self.reviews.clone()
    }
}
