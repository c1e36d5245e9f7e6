//! Rolodex - Main entry point
//!
//! An interactive console assistant over the address book core: reads
//! commands from stdin, dispatches them, and prints the replies.

use anyhow::Result;
use chrono::Local;
use rolodex::commands::{self, Command};
use rolodex::{AddressBook, Config};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout clean for the dialogue)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting rolodex assistant");

    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Welcome to the assistant bot!");

    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // stdin closed
            println!("Good bye!");
            break;
        }

        let today = Local::now().date_naive();
        match Command::parse(&line) {
            Ok(command) => {
                println!("{}", commands::execute(&mut book, &command, today));
                if command == Command::Close {
                    break;
                }
            }
            Err(e) => {
                debug!(input = %line.trim_end(), "unparseable command");
                println!("{}", e);
            }
        }
    }

    info!(contacts = book.len(), "rolodex assistant shutdown complete");
    Ok(())
}
