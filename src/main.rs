use bucketlist::config::Config;
use bucketlist::constants::ERROR_RUNTIME_PREFIX;
use bucketlist::{logger, ui};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {:#}", ERROR_RUNTIME_PREFIX, e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    logger::setup_logging(&config.logging)?;

    // Run the TUI application
    ui::run_app(config).await
}
