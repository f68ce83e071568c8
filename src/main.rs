use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use goal_creator::config::Config;
use goal_creator::console::{suggest_once, Console};
use goal_creator::suggestion::SuggestionClient;

#[derive(Parser)]
#[command(name = "goal-creator")]
#[command(about = "Create, edit and delete goals with AI-generated suggestions")]
struct Cli {
    /// Base URL of the Suggestion Service
    #[arg(long, global = true)]
    url: Option<String>,

    /// Request timeout in seconds (0 disables)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive goal editor
    Run,
    /// Fetch a single suggestion and print it
    Suggest {
        /// Goal text to ask about
        goal: String,
    },
}

/// Initialize tracing on stderr; stdout belongs to the console.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "goal_creator=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(cli));
    // The blocking stdin reader may still be parked on a read
    runtime.shutdown_background();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load();
    if let Some(url) = cli.url {
        config.suggestion_url = url;
    }
    if let Some(timeout) = cli.timeout {
        config.request_timeout_secs = timeout;
    }

    let client = SuggestionClient::from_config(&config)?;

    match cli.command {
        Some(Commands::Suggest { goal }) => {
            suggest_once(&client, &goal, &mut tokio::io::stdout()).await?;
        }
        Some(Commands::Run) | None => {
            tracing::info!("Using suggestion service at {}", client.endpoint());

            // Ctrl-C tears the session down, cancelling any in-flight request
            let shutdown = CancellationToken::new();
            let on_ctrl_c = shutdown.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    on_ctrl_c.cancel();
                }
            });

            let mut console = Console::new(client, shutdown);
            let mut stdout = tokio::io::stdout();
            console
                .run(BufReader::new(tokio::io::stdin()), &mut stdout)
                .await?;
        }
    }

    Ok(())
}
