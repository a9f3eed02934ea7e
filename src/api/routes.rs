// src/api/routes.rs
use super::handlers;
use super::utils::json_error_handler;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    // Password tooling
    cfg.service(
        web::scope("/api/password")
            .route("/generate", web::post().to(handlers::generator::generate_password))
            .route("/strength", web::post().to(handlers::generator::analyze_strength))
            .route("/hash", web::post().to(handlers::hashing::hash_password))
            .route("/verify", web::post().to(handlers::hashing::verify_password))
    );

    cfg.route("/health", web::get().to(handlers::system::health));
}
