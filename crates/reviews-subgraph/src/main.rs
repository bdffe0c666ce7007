use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::{crate_version, Parser};
use reviews_subgraph::StaticReviews;
use subgraph_server::{ServeConfig, ServerArgs};
use tokio::runtime;

const THREAD_NAME: &str = "reviews-subgraph";
const DEFAULT_LISTEN_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 4002);

#[derive(Debug, Parser)]
#[command(name = "reviews-subgraph", version)]
/// Mock federation subgraph serving product reviews
struct Args {
    #[command(flatten)]
    server: ServerArgs,
    /// Path to a JSON array of reviews replacing the built-in mock data
    #[arg(long, env = "REVIEWS_FIXTURE_PATH")]
    reviews: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.server.init_logging();

    let config = args.server.config()?;

    let source = match args.reviews {
        Some(ref path) => {
            let source = StaticReviews::from_path(path)?;
            tracing::info!("Loaded {} reviews from {}", source.len(), path.display());
            source
        }
        None => StaticReviews::mock(),
    };

    let schema = config.graph.apply(reviews_subgraph::schema_builder(source)).finish();

    if args.server.print_sdl {
        println!("{}", subgraph_server::Schema::sdl(&schema));
        return Ok(());
    }

    let runtime = runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name(THREAD_NAME)
        .build()?;

    runtime.block_on(async move {
        let crate_version = crate_version!();
        tracing::info!("Reviews subgraph {crate_version}");

        let config = ServeConfig {
            name: "reviews-subgraph",
            listen_address: args.server.listen_address,
            default_listen_address: DEFAULT_LISTEN_ADDRESS,
            config,
        };

        subgraph_server::serve(config, schema).await?;

        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}
