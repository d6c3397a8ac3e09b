use clap::{Parser, Subcommand};
use searchfront::api::{AppState, create_router};
use searchfront::client::ProxyClient;
use searchfront::config::Config;
use searchfront::results::ResultsPage;

#[derive(Parser)]
#[command(name = "searchfront", about = "Web search front-end backed by a search-results API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server.
    Serve {
        /// Listen address, overrides BIND_ADDR.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Run one query against a running server and print the results page.
    Query {
        text: String,
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { bind } => {
            let mut config = Config::from_env();
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            if config.provider_api_key.is_none() {
                tracing::warn!("SERP_API is not set; searches will fail with a configuration error");
            }

            let addr = config.bind_addr.clone();
            let app = create_router(AppState::new(config)?);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("listening on {addr}");
            axum::serve(listener, app).await?;
        }
        Command::Query { text, server } => {
            let client = ProxyClient::new(server);
            let mut page = ResultsPage::new();
            client.run(&mut page, Some(&text)).await;
            print!("{page}");
        }
    }
    Ok(())
}
