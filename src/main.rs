use color_eyre::Report;
use tokio::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ghstatus::Client;

const GITHUB_API: &str = "https://api.github.com";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Report> {
    setup()?;

    let client = Client::new()?;

    debug!("GET {GITHUB_API}");
    let before = Instant::now();
    let report = client.fetch_status(GITHUB_API).await?;
    debug!("{:?} request round-trip", before.elapsed());

    println!("{report}");

    Ok(())
}

fn setup() -> Result<(), Report> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "1")
    }
    color_eyre::install()?;

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    // stdout carries the two report lines and nothing else; diagnostics all
    // go to stderr.
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
