use employee_directory::server::{config::Config, error::Error, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_directory=info,directory_client=info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let directory_client = startup::build_directory_client(&config)?;
    let db = startup::connect_to_database(&config).await?;

    if config.warm_cache_on_startup {
        startup::warm_cache(&db, &directory_client).await;
    }

    let app = router::routes().with_state(AppState {
        db,
        directory_client,
    });

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Starting server on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
