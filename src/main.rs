use std::process;

use actorcharts::{command::Cli, config::Config};

mod logging;

#[tokio::main]
async fn main() {
    logging::setup_logging();

    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            process::exit(2);
        }
    };

    let result = match cli.command {
        Some(command) => actorcharts::run(config, command).await,
        None => actorcharts::run_interactive(config).await,
    };

    if let Err(e) = result {
        log::error!("{}", e);
        process::exit(1);
    }
}
