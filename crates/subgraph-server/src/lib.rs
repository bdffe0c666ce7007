//! Shared plumbing for the mock GraphQL services: configuration, logging,
//! command line arguments and the axum server executing a schema.

mod args;
mod config;
mod error;
mod logging;
mod schema;
mod server;
mod test_server;

pub use args::ServerArgs;
pub use config::{Config, GraphConfig, HealthConfig, HttpConfig, NetworkConfig};
pub use error::Error;
pub use logging::{LogLevel, LogStyle};
pub use schema::Schema;
pub use server::{router, serve, ServeConfig};
pub use test_server::TestServer;

pub type Result<T> = std::result::Result<T, Error>;
