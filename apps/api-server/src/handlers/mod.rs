//! HTTP handlers and route configuration.

mod formulas;
mod health;


use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler};

/// Largest accepted JSON request body. Formula content is unbounded
/// text, so this sits well above actix-web's 2 MiB default.
pub const JSON_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_BODY_LIMIT)
            .error_handler(json_error_handler),
    )
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/formulas")
                        .route("", web::post().to(formulas::create_formula))
                        .route("", web::get().to(formulas::list_formulas))
                        .route("/{id}", web::get().to(formulas::get_formula))
                        .route("/{id}", web::patch().to(formulas::update_formula))
                        .route("/{id}", web::delete().to(formulas::delete_formula)),
                ),
        );
}
