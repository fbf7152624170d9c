/// Route table
use actix_web::web;

use crate::handlers::{auth, comments, posts, users};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(auth::register))
            .route("/login", web::post().to(auth::login)),
    )
    .service(
        web::scope("/posts")
            .route("", web::get().to(posts::list_posts))
            .route("", web::post().to(posts::create_post))
            .route("/{id}", web::get().to(posts::get_post))
            .route("/{id}", web::put().to(posts::update_post))
            .route("/{id}", web::delete().to(posts::delete_post))
            .route("/{id}/like", web::post().to(posts::toggle_like))
            .route("/{id}/comments", web::get().to(comments::list_comments))
            .route("/{id}/comments", web::post().to(comments::create_comment))
            .route(
                "/{id}/comments/{comment_id}",
                web::delete().to(comments::delete_comment),
            ),
    )
    .service(
        web::scope("/users")
            .route("/{id}", web::get().to(users::get_profile))
            .route("/{id}", web::put().to(users::update_profile)),
    );
}
