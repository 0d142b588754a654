use std::sync::Arc;

use dotenvy::dotenv;
use hotel_service::infrastructure::PgDocumentStore;
use hotel_service::{build_server, create_pool, run_migrations, AppState, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(std::io::Error::other)?;

    let pool = create_pool(&config.database_url).map_err(std::io::Error::other)?;
    run_migrations(&pool)?;

    let state = AppState::new(Arc::new(PgDocumentStore::new(pool)), &config.uploads_dir);

    log::info!(
        "Starting server at http://{}:{} (uploads in {})",
        config.host,
        config.port,
        config.uploads_dir.display()
    );

    build_server(state, &config)?.await
}
