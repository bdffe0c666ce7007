use std::{fs, io, net::SocketAddr, path::Path, time::Duration};

use async_graphql::{ObjectType, SchemaBuilder, SubscriptionType};

use crate::Error;

const DEFAULT_GRAPH_PATH: &str = "/graphql";
const DEFAULT_HEALTH_PATH: &str = "/health";
const SDL_PATH: &str = "/sdl";

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Configuration struct to define settings for a mock subgraph service.
pub struct Config {
    /// Server bind settings
    pub network: NetworkConfig,
    /// GraphQL endpoint location and features, such as introspection
    pub graph: GraphConfig,
    /// Health check endpoint configuration
    pub health: HealthConfig,
    /// HTTP layer settings
    pub http: HttpConfig,
}

impl Config {
    /// Reads the TOML configuration at `path`. A missing file is not an error,
    /// the caller decides what the defaults are.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Option<Config>> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_owned(),
                    source,
                })
            }
        };

        let config: Config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_owned(),
            source,
        })?;

        config.validate()?;

        Ok(Some(config))
    }

    /// Checks that the configured routes can be mounted next to each other and
    /// next to `/sdl`.
    pub fn validate(&self) -> crate::Result<()> {
        let graph_path = self.graph.path();
        validate_path("graph.path", graph_path)?;

        if graph_path == SDL_PATH {
            return Err(invalid_path("graph.path", graph_path, "reserved for the schema SDL"));
        }

        if self.health.enabled {
            validate_path("health.path", &self.health.path)?;

            if self.health.path == SDL_PATH {
                return Err(invalid_path("health.path", &self.health.path, "reserved for the schema SDL"));
            }

            if self.health.path == graph_path {
                return Err(invalid_path("health.path", &self.health.path, "already used by graph.path"));
            }
        }

        Ok(())
    }
}

fn validate_path(setting: &'static str, path: &str) -> crate::Result<()> {
    if !path.starts_with('/') {
        return Err(invalid_path(setting, path, "must start with `/`"));
    }

    Ok(())
}

fn invalid_path(setting: &'static str, path: &str, reason: &'static str) -> Error {
    Error::InvalidPath {
        setting,
        path: path.to_owned(),
        reason,
    }
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    pub listen_address: Option<SocketAddr>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    pub path: Option<String>,
    /// Enables schema introspection and the GraphiQL page on `GET`.
    pub introspection: bool,
}

impl GraphConfig {
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_GRAPH_PATH)
    }

    /// Applies the graph settings to a schema before it is built.
    pub fn apply<Q, M, S>(&self, builder: SchemaBuilder<Q, M, S>) -> SchemaBuilder<Q, M, S>
    where
        Q: ObjectType + 'static,
        M: ObjectType + 'static,
        S: SubscriptionType + 'static,
    {
        if self.introspection {
            builder
        } else {
            builder.disable_introspection()
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: DEFAULT_HEALTH_PATH.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    /// Requests taking longer than this are answered with `408 Request Timeout`.
    #[serde(deserialize_with = "duration_str::deserialize_option_duration")]
    pub timeout: Option<Duration>,
}
