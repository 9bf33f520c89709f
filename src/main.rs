use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;

use taskmanager::auth::AuthMiddleware;
use taskmanager::config::Config;
use taskmanager::routes::{self, health};
use taskmanager::services;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    // Accounts have no signup endpoint; seed a demo user when configured.
    if let (Ok(email), Ok(password)) = (
        std::env::var("DEMO_USER_EMAIL"),
        std::env::var("DEMO_USER_PASSWORD"),
    ) {
        let full_name =
            std::env::var("DEMO_USER_NAME").unwrap_or_else(|_| "Demo User".to_string());
        services::auth::seed_user(&pool, &email, &password, &full_name)
            .await
            .expect("Failed to seed demo user");
        log::info!("Seeded demo user {}", email);
    }

    log::info!("Starting server at {}", config.server_url());
    let bind_addr = (config.server_host.clone(), config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(health::health)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .configure(routes::config),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
