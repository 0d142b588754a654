pub mod application;
pub mod config;
pub mod db;
pub mod doc;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;
pub mod state;
pub mod storefront;

use actix_cors::Cors;
use actix_web::{http, middleware, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::Config;
pub use db::{create_pool, DbPool};
pub use state::AppState;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> std::io::Result<()> {
    let mut conn = pool.get().map_err(std::io::Error::other)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(())
}

/// CORS policy admitting only the configured frontend origins.
pub fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
        .allowed_headers(vec![http::header::CONTENT_TYPE, http::header::ACCEPT])
        .max_age(3600)
}

/// Build and return an actix-web `Server` bound to `config.host:config.port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(state: AppState, config: &Config) -> std::io::Result<actix_web::dev::Server> {
    let origins = config.allowed_origins.clone();
    let state = web::Data::new(state);
    let openapi = doc::ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors(&origins))
            .wrap(middleware::Logger::default())
            .service(actix_files::Files::new("/uploads", state.uploads_dir.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(handlers::configure)
    })
    .bind((config.host.clone(), config.port))?
    .run())
}
