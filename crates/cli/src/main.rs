use crate::error::CliError;
use catalog::PgCatalog;
use clap::Parser;
use console::Console;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod menu;

#[derive(Parser)]
#[command(
    name = "querent",
    version = "0.1.0",
    about = "Interactive SQL SELECT console for PostgreSQL"
)]
struct Cli {
    /// PostgreSQL connection string
    #[arg(long)]
    conn_str: String,

    /// Base schema the queried tables live in
    #[arg(long, default_value = "public")]
    schema: String,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Default to warn so log lines do not interleave with prompts;
    // RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let catalog = PgCatalog::connect(&cli.conn_str).await?;
    info!("Connected; base schema is '{}'", cli.schema);

    let mut console = Console::stdio();
    menu::run(&catalog, &mut console, &cli.schema).await
}
