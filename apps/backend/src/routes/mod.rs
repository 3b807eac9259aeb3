use actix_web::web;

pub mod games;
pub mod health;
pub mod scores;
pub mod stats;
pub mod users;

/// Register every route. Shared by `main.rs` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    health::configure_routes(cfg);

    cfg.service(web::scope("/api/users").configure(users::configure_routes));
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
    cfg.service(web::scope("/api/scores").configure(scores::configure_routes));
    cfg.service(web::scope("/api/rankings").configure(scores::configure_rankings));
    cfg.service(web::scope("/api/stats").configure(stats::configure_routes));
}
