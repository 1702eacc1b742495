use tracing_subscriber::EnvFilter;

use prospector_server::{build_app, load_fixtures, AppState, BasicAuthState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = prospector_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let companies = load_fixtures(&config.fixtures_path);
    tracing::info!(count = companies.len(), "loaded company fixtures");

    let auth = BasicAuthState::new(config.client_id.clone(), config.client_secret.clone());
    let app = build_app(AppState::new(companies), auth);

    tracing::info!(addr = %config.bind_addr, "mock prospector API listening");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
