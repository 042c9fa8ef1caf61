use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cadastro::config::Config;
use cadastro::db::{self, PersonStorage};
use cadastro::router::{CadastroState, cadastro_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel,
        legacy_status = cfg.legacy_status,
        expose_db_errors = cfg.expose_db_errors
    );

    // Without a database there is nothing to serve.
    let pool = match db::connect(&cfg).await {
        Ok(pool) => pool,
        Err(e) => {
            error!(error = %e, "database connection failed");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let storage = PersonStorage::new(pool);
    if cfg.init_schema {
        storage.init_schema().await?;
        info!("schema initialized");
    }

    let state = CadastroState::new(storage.clone(), &cfg);
    let app = cadastro_router(state);

    let listener = TcpListener::bind(cfg.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    storage.pool().close().await;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
