use std::{net::SocketAddr, path::PathBuf};

/// The subgraph server error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file exists but cannot be read
    #[error("reading config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML or has unknown keys
    #[error("parsing config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// A configured route path cannot be mounted
    #[error("invalid {setting} {path:?}: {reason}")]
    InvalidPath {
        setting: &'static str,
        path: String,
        reason: &'static str,
    },
    /// Cannot bind the listener to the requested address
    #[error("binding to {0}: {1}")]
    Bind(SocketAddr, #[source] std::io::Error),
    /// Cannot start the HTTP server
    #[error("starting server: {0}")]
    Server(#[source] std::io::Error),
}
