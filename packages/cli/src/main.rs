// ABOUTME: Entry point for the taskboard server binary
// ABOUTME: Loads .env, initializes tracing, and runs the HTTP server

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false) // Don't show module paths in logs
        .compact() // Use compact format for cleaner output
        .init();

    taskboard_cli::run_server().await
}
