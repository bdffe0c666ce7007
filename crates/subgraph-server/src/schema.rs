/// Object-safe view of a GraphQL schema so the server does not have to be
/// generic over the Query, Mutation & Subscription params.
#[async_trait::async_trait]
pub trait Schema: Send + Sync {
    async fn execute(&self, request: async_graphql::Request) -> async_graphql::Response;

    /// The schema SDL, including federation directives when the schema has
    /// federation enabled.
    fn sdl(&self) -> String;
}

#[async_trait::async_trait]
impl<Q, M, S> Schema for async_graphql::Schema<Q, M, S>
where
    Q: async_graphql::ObjectType + 'static,
    M: async_graphql::ObjectType + 'static,
    S: async_graphql::SubscriptionType + 'static,
{
    async fn execute(&self, request: async_graphql::Request) -> async_graphql::Response {
        async_graphql::Schema::execute(self, request).await
    }

    fn sdl(&self) -> String {
        self.sdl_with_options(async_graphql::SDLExportOptions::new().federation())
    }
}
