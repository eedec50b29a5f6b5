//! Resource API host - Main entry point.
//!
//! Serves the coffee catalog CRUD endpoints. Applies its own catalog
//! migrations at startup; the identity provider's stores are never
//! touched from here.

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use coffeeshop_lib::api;
use coffeeshop_lib::config::Config;
use coffeeshop_lib::db;
use coffeeshop_lib::middleware::RequestLogger;
use coffeeshop_lib::migration::CatalogMigrator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL must be set");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Coffee Shop API");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    // Initialize database connection
    let pool = match db::connect(&config.database_url).await {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };
    info!("Database connection established");

    // Apply catalog migrations
    if let Err(e) = CatalogMigrator::up(&pool, None).await {
        error!("Failed to run catalog migrations: {}", e);
        std::process::exit(1);
    }
    info!("Catalog migrations complete");

    let bind_address = config.api_bind_address();
    let is_development = config.is_development();

    let worker_count = if is_development {
        info!(
            "Starting API at http://{} (4 workers - development mode)",
            bind_address
        );
        4
    } else {
        let cpus = num_cpus::get();
        info!("Starting API at http://{} ({} workers)", bind_address, cpus);
        cpus
    };

    if is_development {
        info!("Swagger UI enabled at /swagger-ui/");
    }

    let server = HttpServer::new(move || {
        // Permissive CORS for development, same-origin in production
        let cors = if is_development {
            Cors::default()
                .allowed_origin("http://localhost:3000")
                .allowed_origin("http://127.0.0.1:3000")
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec![
                    header::AUTHORIZATION,
                    header::ACCEPT,
                    header::CONTENT_TYPE,
                ])
                .max_age(3600)
        } else {
            Cors::default()
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec![
                    header::AUTHORIZATION,
                    header::ACCEPT,
                    header::CONTENT_TYPE,
                ])
                .max_age(3600)
        };

        let mut app = App::new()
            .wrap(cors)
            .wrap(RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .service(
                web::scope("/api/v1")
                    .configure(api::configure_health_routes)
                    .configure(api::configure_coffee_routes),
            );

        // Serve OpenAPI docs in development
        if is_development {
            app = app.service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
            );
        }

        app
    });

    server.workers(worker_count).bind(&bind_address)?.run().await
}
