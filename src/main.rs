use clap::Parser;
use rightsizer::cli::Cli;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> rightsizer::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    rightsizer::runner::run(&cli.run_options()).await
}
