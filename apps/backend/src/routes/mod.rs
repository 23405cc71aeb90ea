use actix_web::web;

pub mod games;
pub mod health;

/// Register every route. Shared by `main.rs` and the HTTP tests so both serve
/// the same paths; middleware is added by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Games: /api/v1/games/**
    cfg.service(web::scope("/api/v1/games").configure(games::configure_routes));
}
