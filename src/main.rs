use turnstile::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");

    let router = router::routes().with_state(AppState { db });

    let address = format!("{}:{}", config.host, config.port);
    tracing::info!("Listening on {address}");

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, router)
        .await
        .expect("Server error");
}
