use clap::Parser;
use create_chatterino_plugin::cli::{style, Cli};
use create_chatterino_plugin::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Initialize tracing with RUST_LOG env filter; stderr keeps logs out of the prompts
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.run() {
        Ok(()) => {}
        Err(Error::Interrupted) => {
            println!("{}", style::notice("\nAborted by user. Exiting..."));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", style::error(&format!("Failed to create plugin: {}", e)));

            // Print error chain
            let mut source = std::error::Error::source(&e);
            while let Some(s) = source {
                eprintln!("  Caused by: {}", s);
                source = std::error::Error::source(s);
            }

            std::process::exit(1);
        }
    }
}
