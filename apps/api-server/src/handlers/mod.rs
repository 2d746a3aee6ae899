//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    // Registered before "/{id}" so it is not captured as an id.
                    .route("/liked", web::get().to(posts::liked_posts))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::put().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post))
                    .route("/{id}/comments", web::get().to(posts::get_comments))
                    .route("/{id}/comments", web::post().to(posts::add_comment))
                    .route("/{id}/like", web::post().to(posts::like_post))
                    .route("/{id}/like", web::delete().to(posts::unlike_post)),
            ),
    );
}
