//! Identity provider host - Main entry point.
//!
//! Starts the Actix-web server with the OIDC endpoints. When invoked
//! with `--seed`, runs the store bootstrap (migrations + seeding) before
//! binding the listener; a bootstrap failure terminates the process
//! without serving.

use actix_web::{web, App, HttpServer};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use coffeeshop_lib::api;
use coffeeshop_lib::auth::SigningSecret;
use coffeeshop_lib::config::Config;
use coffeeshop_lib::db;
use coffeeshop_lib::middleware::RequestLogger;
use coffeeshop_lib::models::SeedData;
use coffeeshop_lib::services::seed;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // The seed flag is the whole administrative surface: present means
    // bootstrap-then-serve, absent means serve immediately.
    let args: Vec<String> = std::env::args().collect();
    let seed_requested = args.iter().any(|arg| arg == "--seed");

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
            error!("  - In production, DATABASE_URL and SHOP_SIGNING_SECRET must be set");
            error!("  - In production, values must not match development defaults");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Coffee Shop Identity Provider");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
        info!("Using development defaults for DATABASE_URL and SHOP_SIGNING_SECRET");
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

    // Run the bootstrap only on explicit request; without the flag the
    // host starts serving against whatever state the stores are in.
    if seed_requested {
        info!("Seed flag detected, running store bootstrap");

        let seed_data = match SeedData::load(config.seed_file.as_deref()) {
            Ok(data) => data,
            Err(e) => {
                error!("Failed to load seed data: {}", e);
                std::process::exit(1);
            }
        };

        if let Err(e) = seed::ensure_seed_data(&pool, &seed_data).await {
            error!("Store bootstrap failed: {}", e);
            std::process::exit(1);
        }

        info!("Store bootstrap complete");
    }

    let bind_address = config.idp_bind_address();
    let signing_secret = SigningSecret::new(config.signing_secret.clone());
    let is_development = config.is_development();

    let worker_count = if is_development {
        info!(
            "Starting identity provider at http://{} (4 workers - development mode)",
            bind_address
        );
        4
    } else {
        let cpus = num_cpus::get();
        info!(
            "Starting identity provider at http://{} ({} workers)",
            bind_address, cpus
        );
        cpus
    };

    let server = HttpServer::new(move || {
        App::new()
            // Add request logging middleware
            .wrap(RequestLogger)
            // Add shared state
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(signing_secret.clone()))
            // OIDC endpoints at the root
            .configure(api::configure_oidc_routes)
            // Health endpoints
            .service(web::scope("/api/v1").configure(api::configure_health_routes))
    });

    server.workers(worker_count).bind(&bind_address)?.run().await
}
