use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use registro_usuarios::config::{CorsConfig, DatabaseConfig, PasswordConfig, ServerConfig, StorageBackend};
use registro_usuarios::db::Database;
use registro_usuarios::repositories::users::{MemoryUserStore, MongoUserRepository, UserStore};
use registro_usuarios::routes::configure_all_routes;
use registro_usuarios::services::users::RegistrationService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("Starting registration service...");

    let store = initialize_store().await?;

    if let Err(e) = store.ensure_indexes().await {
        error!("Index setup failed: {}", e);
        return Err(std::io::Error::other(e.to_string()));
    }

    let bcrypt_cost = PasswordConfig::bcrypt_cost();
    info!("bcrypt cost: {}", bcrypt_cost);

    let service = web::Data::new(RegistrationService::new(store, bcrypt_cost));

    start_http_server(service).await
}

async fn start_http_server(service: web::Data<RegistrationService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let allowed_origins = CorsConfig::allowed_origins();

    info!("Server running at http://{}", bind_address);
    info!("Registration form: http://{}/", bind_address);
    info!("Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // The logger is not up yet; report on stderr.
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("profile {}: loaded {}", profile, file),
        Err(e) => eprintln!("profile {}: no env file loaded ({})", profile, e),
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

async fn initialize_store() -> std::io::Result<Arc<dyn UserStore>> {
    match StorageBackend::current() {
        StorageBackend::Memory => {
            warn!("Using in-memory user store; registrations are lost on restart");
            Ok(Arc::new(MemoryUserStore::new()))
        }
        StorageBackend::MongoDb => {
            info!("Connecting to MongoDB...");

            let database = Database::new().await.map_err(|e| {
                error!("MongoDB connection failed: {}", e);
                std::io::Error::other(e.to_string())
            })?;

            let collection = DatabaseConfig::users_collection();
            info!("Users collection: {}.{}", database.database_name(), collection);

            Ok(Arc::new(MongoUserRepository::new(&database, &collection)))
        }
    }
}

fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
