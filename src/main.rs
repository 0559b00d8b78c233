//! watch-signal entry point.

use clap::Parser;
use watch_signal::cli::Cli;
use watch_signal::lifecycle::startup;
use watch_signal::observability::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.log_format);

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("watch-signal: {e}");
            std::process::exit(1);
        }
    };

    match startup::start(&config).await {
        Ok(never) => match never {},
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("watch-signal: {e}");
            std::process::exit(1);
        }
    }
}
