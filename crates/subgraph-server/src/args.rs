use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use crate::{logging, Config, LogLevel, LogStyle};

/// Arguments shared by every service binary. Flatten them into the
/// service's own parser.
#[derive(Debug, clap::Args)]
pub struct ServerArgs {
    /// IP address on which the server will listen for incoming connections.
    #[arg(short, long, env = "SUBGRAPH_LISTEN_ADDRESS")]
    pub listen_address: Option<SocketAddr>,
    /// Path to the TOML configuration file
    #[arg(long, short, env = "SUBGRAPH_CONFIG_PATH", default_value = "./subgraph.toml")]
    pub config: PathBuf,
    /// Set the logging level
    #[arg(long = "log", env = "SUBGRAPH_LOG", default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
    /// Set the style of log output
    #[arg(long, env = "SUBGRAPH_LOG_STYLE", default_value_t = LogStyle::Text)]
    pub log_style: LogStyle,
    /// Print the schema SDL to stdout and exit
    #[arg(long)]
    pub print_sdl: bool,
}

impl ServerArgs {
    pub fn config_path(&self) -> &Path {
        &self.config
    }

    /// Loads the configuration file, falling back to defaults when it does not exist.
    pub fn config(&self) -> crate::Result<Config> {
        let config = Config::load(self.config_path())?;

        if config.is_none() {
            tracing::debug!("No configuration found at {}, using defaults", self.config.display());
        }

        Ok(config.unwrap_or_default())
    }

    pub fn init_logging(&self) {
        logging::init(self.log_level, self.log_style);
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::ServerArgs;
    use crate::{LogLevel, LogStyle};

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[command(flatten)]
        server: ServerArgs,
    }

    #[test]
    fn defaults() {
        let args = TestArgs::try_parse_from(["service"]).unwrap().server;

        assert_eq!(args.listen_address, None);
        assert_eq!(args.config_path().to_str(), Some("./subgraph.toml"));
        assert_eq!(args.log_level, LogLevel::Info);
        assert_eq!(args.log_style, LogStyle::Text);
        assert!(!args.print_sdl);
    }

    #[test]
    fn explicit_values() {
        let args = TestArgs::try_parse_from([
            "service",
            "--listen-address",
            "0.0.0.0:9000",
            "-c",
            "/etc/cars.toml",
            "--log",
            "debug",
            "--log-style",
            "json",
            "--print-sdl",
        ])
        .unwrap()
        .server;

        assert_eq!(args.listen_address, Some("0.0.0.0:9000".parse().unwrap()));
        assert_eq!(args.config_path().to_str(), Some("/etc/cars.toml"));
        assert_eq!(args.log_level, LogLevel::Debug);
        assert_eq!(args.log_style, LogStyle::Json);
        assert!(args.print_sdl);
    }

    #[test]
    fn missing_config_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let path = path.to_str().unwrap();

        let args = TestArgs::try_parse_from(["service", "--config", path]).unwrap().server;
        let config = args.config().unwrap();

        assert_eq!(config.graph.path(), "/graphql");
    }
}
