use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use omada_exporter::config::Config;
use omada_exporter::metrics::MetricsSnapshot;
use omada_exporter::poller::Poller;
use omada_exporter::{server, Collector, OmadaClient};

#[tokio::main]
async fn main() {
    let config = Config::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(err) = run(config).await {
        error!("{err}");
        process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let client = OmadaClient::builder()
        .host(&config.host)
        .username(&config.username)
        .password(config.password)
        .site(&config.site)
        .timeout(Duration::from_secs(config.timeout))
        .accept_invalid_certs(config.insecure)
        .build()
        .await?;

    info!(
        "connected to controller at {}, site {:?} resolved to {}",
        config.host,
        client.site(),
        client.site_id()
    );

    let snapshot = Arc::new(ArcSwap::from_pointee(MetricsSnapshot::new()));
    let collector = Collector::new(client, snapshot.clone());

    // The first cycle runs before the listener binds so an external
    // scraper never sees an empty result. Failure here is fatal.
    collector.scrape().await?;

    let poller = Poller::new(collector, Duration::from_secs(config.interval));
    tokio::spawn(poller.run());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on :{}", config.port);
    server::serve(addr, snapshot).await?;

    Ok(())
}
