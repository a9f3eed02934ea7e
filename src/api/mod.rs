// src/api/mod.rs
use actix_web::{middleware, web, App, HttpServer};
use actix_cors::Cors;
use crate::core::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_strength,
        crate::api::handlers::hashing::hash_password,
        crate::api::handlers::hashing::verify_password,
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::ErrorResponse,
            crate::api::types::GeneratePasswordRequest,
            crate::api::types::GeneratePasswordResponse,
            crate::api::types::GenerationConfig,
            crate::api::types::HashPasswordRequest,
            crate::api::types::HashPasswordResponse,
            crate::api::types::VerifyPasswordRequest,
            crate::api::types::VerifyPasswordResponse,
            crate::api::types::StrengthRequest,
            crate::api::types::HealthResponse,
            crate::models::StrengthReport,
            crate::models::StrengthDetails,
            crate::models::StrengthLabel
        )
    ),
    tags(
        (name = "Password", description = "Password generation, hashing and verification"),
        (name = "System", description = "Service status")
    ),
    info(
        title = "RustPassTool API",
        version = "0.1.0",
        description = "Password generator, strength scorer and bcrypt hash verifier",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

fn build_cors(config: &Config) -> Cors {
    let cors = match &config.cors_allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };

    cors.allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
        .max_age(3600)
}

/// Register the API routes and shared state. Used by the server and by tests.
pub fn configure_app(config: Config) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(config));
        routes::configure_routes(cfg);
    }
}

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let bind = config.bind_address();
    log::info!("Starting RustPassTool API server on {}:{}", bind.0, bind.1);

    if config.enable_api_docs {
        log::info!("API docs available at /swagger-ui/ and /redoc");
    }

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(middleware::Logger::new("%a \"%r\" %s %Dms"))
            .wrap(build_cors(&config))
            .configure(configure_app(config.clone()));

        if config.enable_api_docs {
            app = app
                .service(
                    SwaggerUi::new("/swagger-ui/{_:.*}")
                        .url("/api-docs/openapi.json", ApiDoc::openapi())
                )
                .service(Redoc::with_url("/redoc", ApiDoc::openapi()));
        }

        app
    })
    .bind(bind)?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
pub mod utils;
