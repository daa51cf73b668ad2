use dotenvy::dotenv;
use tracing::info;

use pearldecor::logging::init_tracing;
use pearldecor::router::init_router;
use pearldecor::state::AppState;
use pearldecor_config::{DatabaseConfig, ServerConfig};
use pearldecor_db::{init_db_pool, run_migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let server_config = ServerConfig::from_env();
    init_tracing(&server_config.log_dir)?;

    let database_config = DatabaseConfig::from_env()?;
    let db = init_db_pool(&database_config).await?;
    run_migrations(&db).await?;

    let state = AppState::new(db);
    let app = init_router(state);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(%address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app).await?;
    Ok(())
}
