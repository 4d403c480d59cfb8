use clap::Parser;

/// Prometheus Exporter for TP-Link Omada Controller SDN.
#[derive(Parser, Debug)]
#[command(name = "omada_exporter", version, about)]
pub struct Config {
    /// The hostname of the Omada Controller, including protocol.
    #[arg(long, env = "OMADA_HOST")]
    pub host: String,

    /// Username of the Omada user you'd like to use to fetch metrics.
    #[arg(long, env = "OMADA_USER")]
    pub username: String,

    /// Password for your Omada user.
    #[arg(long, env = "OMADA_PASS", hide_env_values = true)]
    pub password: String,

    /// Port on which to expose the Prometheus metrics.
    #[arg(long, env = "OMADA_PORT", default_value_t = 9202)]
    pub port: u16,

    /// Omada site to scrape metrics from.
    #[arg(long, env = "OMADA_SITE", default_value = "Default")]
    pub site: String,

    /// Interval between scrapes, in seconds.
    #[arg(long, env = "OMADA_SCRAPE_INTERVAL", default_value_t = 5)]
    pub interval: u64,

    /// Timeout when making requests to the Omada Controller, in seconds.
    #[arg(long, env = "OMADA_REQUEST_TIMEOUT", default_value_t = 15)]
    pub timeout: u64,

    /// Whether to skip verifying the SSL certificate on the controller.
    #[arg(long, env = "OMADA_INSECURE", default_value_t = false)]
    pub insecure: bool,
}
