use hr_crm_backend::{
    config::{get_config, init_config, LogFormat},
    database::{
        pool::{create_pool, run_migrations},
        seed::seed_default_users,
    },
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;
    info!("Database migrations applied");

    if config.seed_default_users {
        let created = seed_default_users(&pool).await?;
        if created > 0 {
            info!("Seeded {} default HR users", created);
        }
    }

    tokio::fs::create_dir_all(&config.uploads_dir).await?;
    info!("Serving uploads from: {}", config.uploads_dir.display());

    let app_state = AppState::new(pool, config.clone());
    let app = routes::router(app_state);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
