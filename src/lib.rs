use std::io::{self, Write};

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};

pub mod clients;
pub mod command;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod extractors;
pub mod model;
pub mod panels;
pub mod persisters;
pub mod projectors;
pub mod views;

use command::{Cli, Command};
use config::Config;
use dashboard::{ActorSelection, Dashboard, LOADING_ACTOR};
use error::Result;

/// Runs a single command and prints the resulting panel.
pub async fn run(config: Config, command: Command) -> Result<()> {
    let mut dashboard = Dashboard::new(config)?;
    println!("{}", dashboard.execute(command).await);
    Ok(())
}

/// Reads commands from stdin until `quit` or end of input.
///
/// Actor selections run in the background so the prompt stays responsive;
/// when several are in flight only the latest one is shown.
pub async fn run_interactive(config: Config) -> Result<()> {
    let mut dashboard = Dashboard::new(config)?;
    println!("{}", dashboard.load_popular().await);
    println!("{}", Cli::usage());
    prompt();

    let (selection_tx, mut selection_rx) = mpsc::unbounded_channel::<ActorSelection>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        log::error!("Error reading from stdin: {}", e);
                        break;
                    }
                };
                match Cli::parse_line(&line) {
                    Ok(None) => {}
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(Command::Actor { name })) => {
                        println!("{}", views::placeholder(LOADING_ACTOR));
                        let pending = dashboard.start_selection(Command::text(&name));
                        let selection_tx = selection_tx.clone();
                        tokio::spawn(async move {
                            // Receiver only goes away when the loop has ended.
                            let _ = selection_tx.send(pending.await);
                        });
                    }
                    Ok(Some(command)) => println!("{}", dashboard.execute(command).await),
                    // Help and usage errors come back as clap errors
                    Err(e) => println!("{}", e),
                }
                prompt();
            }
            Some(selection) = selection_rx.recv() => {
                if let Some(panel) = dashboard.show_selection(selection) {
                    println!("{}", panel);
                    prompt();
                }
            }
        }
    }

    log::info!("Bye!");
    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
