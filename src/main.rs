use clap::Parser;

use sectionfeed::cli::Cli;
use sectionfeed::config::{Config, ConfigStore};
use sectionfeed::feed::FeedPhase;
use sectionfeed::{headless, logging, ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    if cli.once {
        logging::init_stderr_tracing();
        let mut stdout = std::io::stdout();
        let state = headless::run_once(&config, &mut stdout).await?;
        if let FeedPhase::Error(message) = state.phase() {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
        return Ok(());
    }

    logging::init_file_tracing();
    tracing::info!(url = %config.feed.url, "Starting sectionfeed");
    ui::run(ConfigStore::new(config, config_path), &cli)
}

/// File config with CLI overrides on top, validated as a whole.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::parse_from(&cli.config_path())?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}
