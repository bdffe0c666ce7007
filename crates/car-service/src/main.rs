use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{crate_version, Parser};
use subgraph_server::{ServeConfig, ServerArgs};
use tokio::runtime;

const THREAD_NAME: &str = "car-service";
const DEFAULT_LISTEN_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 4001);

#[derive(Debug, Parser)]
#[command(name = "car-service", version)]
/// Mock GraphQL service answering car lookups from hardcoded data
struct Args {
    #[command(flatten)]
    server: ServerArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.server.init_logging();

    let config = args.server.config()?;
    let schema = config.graph.apply(car_service::schema_builder()).finish();

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
        tracing::info!("Car service {crate_version}");

        let config = ServeConfig {
            name: "car-service",
            listen_address: args.server.listen_address,
            default_listen_address: DEFAULT_LISTEN_ADDRESS,
            config,
        };

        subgraph_server::serve(config, schema).await?;

        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}
