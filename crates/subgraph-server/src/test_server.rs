use std::{net::SocketAddr, sync::Arc};

use tokio::{net::TcpListener, sync::oneshot};

use crate::{router, Config, Error, Schema};

/// A server on an ephemeral localhost port, running in the background until
/// dropped. Meant for integration tests.
pub struct TestServer {
    shutdown: Option<oneshot::Sender<()>>,
    address: SocketAddr,
    graphql_path: String,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.send(()).ok();
        }
    }
}

impl TestServer {
    pub async fn start(schema: impl Schema + 'static) -> crate::Result<TestServer> {
        Self::start_with_config(schema, Config::default()).await
    }

    pub async fn start_with_config(schema: impl Schema + 'static, config: Config) -> crate::Result<TestServer> {
        let app = router(&config, Arc::new(schema))?;
        let bind_address = SocketAddr::from(([127, 0, 0, 1], 0));

        let listener = TcpListener::bind(bind_address)
            .await
            .map_err(|err| Error::Bind(bind_address, err))?;

        let address = listener.local_addr().map_err(Error::Server)?;

        let (shutdown_sender, shutdown_receiver) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_receiver.await.ok();
                })
                .await;

            if let Err(err) = result {
                tracing::error!("test server on {address} failed: {err}");
            }
        });

        Ok(TestServer {
            shutdown: Some(shutdown_sender),
            address,
            graphql_path: config.graph.path().to_owned(),
        })
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    /// Base URL without a path, e.g. `http://127.0.0.1:38211`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.address)
    }

    /// URL of the GraphQL endpoint.
    pub fn url(&self) -> String {
        format!("http://{}{}", self.address, self.graphql_path)
    }
}
