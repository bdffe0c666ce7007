use std::{net::SocketAddr, sync::Arc};

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{Config, Error, Schema};

/// Start parameters for a service.
pub struct ServeConfig {
    /// Name used in the startup logs.
    pub name: &'static str,
    /// Listen address given on the command line, wins over the configuration file.
    pub listen_address: Option<SocketAddr>,
    /// Listen address used when neither the command line nor the configuration sets one.
    pub default_listen_address: SocketAddr,
    /// The service configuration.
    pub config: Config,
}

impl ServeConfig {
    /// The address to bind: the command line first, then the
    /// `network.listen_address` setting, and finally the service default.
    pub fn listen_address(&self) -> SocketAddr {
        self.listen_address
            .or(self.config.network.listen_address)
            .unwrap_or(self.default_listen_address)
    }
}

struct ServerStateInner {
    schema: Arc<dyn Schema>,
    graphql_path: String,
}

#[derive(Clone)]
struct ServerState {
    inner: Arc<ServerStateInner>,
}

impl ServerState {
    fn new(schema: Arc<dyn Schema>, graphql_path: String) -> Self {
        Self {
            inner: Arc::new(ServerStateInner { schema, graphql_path }),
        }
    }

    fn schema(&self) -> &dyn Schema {
        self.inner.schema.as_ref()
    }

    fn graphql_path(&self) -> &str {
        &self.inner.graphql_path
    }
}

/// Builds the HTTP routes for a schema: the GraphQL endpoint, `/sdl` and the
/// health check. Fails if the configured paths cannot be mounted.
pub fn router(config: &Config, schema: Arc<dyn Schema>) -> crate::Result<Router> {
    config.validate()?;

    let path = config.graph.path();
    let state = ServerState::new(schema, path.to_owned());

    let mut router = if config.graph.introspection {
        Router::new().route(path, get(graphiql).post(execute))
    } else {
        Router::new().route(path, get(execute).post(execute))
    };

    router = router.route("/sdl", get(sdl));

    if config.health.enabled {
        router = router.route(&config.health.path, get(health));
    }

    let mut router = router.with_state(state).layer(TraceLayer::new_for_http());

    if let Some(timeout) = config.http.timeout {
        router = router.layer(TimeoutLayer::new(timeout));
    }

    Ok(router.layer(CorsLayer::permissive()))
}

/// Binds the listener and serves the schema until a termination signal arrives.
pub async fn serve(serve_config: ServeConfig, schema: impl Schema + 'static) -> crate::Result<()> {
    let addr = serve_config.listen_address();
    let ServeConfig { name, config, .. } = serve_config;

    let router = router(&config, Arc::new(schema))?;

    let listener = TcpListener::bind(addr).await.map_err(|err| Error::Bind(addr, err))?;

    tracing::info!("{name} GraphQL endpoint exposed at http://{addr}{}", config.graph.path());

    axum::serve(listener, router)
        .with_graceful_shutdown(graceful_shutdown())
        .await
        .map_err(Error::Server)?;

    Ok(())
}

async fn execute(State(state): State<ServerState>, request: GraphQLRequest) -> GraphQLResponse {
    state.schema().execute(request.into_inner()).await.into()
}

async fn graphiql(State(state): State<ServerState>) -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(state.graphql_path()).finish())
}

async fn sdl(State(state): State<ServerState>) -> String {
    state.schema().sdl()
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Waits for Ctrl+C or, on unix, SIGTERM. Pending requests are allowed to
/// finish once this future resolves.
async fn graceful_shutdown() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down gracefully...");
}
