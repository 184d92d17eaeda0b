//! Prints every domain of a WEDOS account with its DNS records as JSON.

use anyhow::Context;
use clap::Parser;
use url::Url;
use wedos_wapi::Client;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// WAPI user.
    #[arg(long, env = "DNS_USER")]
    user: String,

    /// WAPI password.
    #[arg(long, env = "DNS_KEY", hide_env_values = true)]
    key: String,

    /// Send all commands in test mode.
    #[arg(long)]
    test: bool,

    /// Override the WAPI endpoint.
    #[arg(long)]
    endpoint: Option<Url>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let client = Client::builder()
        .user(&cli.user)
        .key(&cli.key)
        .test_mode(cli.test)
        .endpoint_if_some(cli.endpoint.as_ref())
        .build()?;

    let snapshot = client
        .domains_snapshot()
        .context("failed to retrieve domains")?;
    log::info!("retrieved {} domains", snapshot.len());

    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
