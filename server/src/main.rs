mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let catalog = match services::seed::initial_catalog(config.activities_file.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "failed to seed activities");
            std::process::exit(1);
        }
    };
    tracing::info!(activities = catalog.len(), "catalog seeded");

    let state = state::AppState::new(catalog);
    let app = routes::app(state, &config.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, static_dir = %config.static_dir.display(), "activities server listening");
    axum::serve(listener, app).await.expect("server failed");
}
