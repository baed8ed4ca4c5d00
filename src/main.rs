use dotenvy::dotenv;
use storefront::{build_server, create_pool, observability, run_migrations, AppConfig, Backends};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().expect("Invalid configuration");
    observability::install().expect("Failed to install the Prometheus recorder");

    let pool = create_pool(&config.database_url).expect("Failed to create database connection pool");
    run_migrations(&pool).expect("Failed to run database migrations");

    let backends = Backends::connect(&config, pool).expect("Failed to connect to Kafka");

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    build_server(backends, &config.host, config.port)?.await
}
