use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema, SchemaBuilder};

use crate::catalog::{self, Car};

pub type CarSchema = Schema<Query, EmptyMutation, EmptySubscription>;

pub fn schema_builder() -> SchemaBuilder<Query, EmptyMutation, EmptySubscription> {
    Schema::build(Query, EmptyMutation, EmptySubscription)
}

pub fn schema() -> CarSchema {
    schema_builder().finish()
}

#[derive(Default)]
pub struct Query;

#[Object]
impl Query {
    async fn ping(&self) -> String {
        catalog::ping().to_owned()
    }

    async fn car(&self, vin: Option<String>) -> Car {
        tracing::debug!(vin = ?vin, "resolving car");
        catalog::car(vin.as_deref())
    }

    async fn cars(&self, limit: Option<i32>) -> Vec<Car> {
        let cars = catalog::cars(limit);
        tracing::debug!(limit = ?limit, count = cars.len(), "resolving cars");
        cars
    }
}
