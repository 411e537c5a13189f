use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod probe;

#[derive(Parser)]
#[command(name = "greeter", about = "Greeter CLI - probe a running greeter server")]
struct Cli {
    /// Greeter server URL
    #[arg(long, env = "GREETER_URL", default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the greeting and print its message
    Greet,

    /// Check the health endpoint; fails unless the server reports "ok"
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Greet => {
            let greeting = probe::greet(&client, &cli.url).await?;
            println!("{}", greeting.message);
        }
        Commands::Health => {
            let health = probe::health(&client, &cli.url).await?;
            println!("{}", health.status);
        }
    }

    Ok(())
}
