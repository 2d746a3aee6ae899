//! Post store handlers.

use actix_web::{HttpResponse, web};

use post_shared::ApiResponse;
use post_shared::dto::{AddCommentRequest, LikesResponse, PostPayload};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_post(&id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// GET /api/posts/{id}/comments
pub async fn get_comments(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let comments = state.posts.get_comments(&id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(comments)))
}

/// GET /api/posts/liked - posts liked by the caller
pub async fn liked_posts(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let posts = state.posts.get_liked_posts(&identity).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .create_post(&identity, body.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    identity: Identity,
    id: web::Path<String>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .update_post(&identity, &id, body.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let removed = state.posts.delete_post(&identity, &id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(removed, "Post deleted")))
}

/// POST /api/posts/{id}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    id: web::Path<String>,
    body: web::Json<AddCommentRequest>,
) -> AppResult<HttpResponse> {
    let comment = state
        .posts
        .add_comment(&identity, &id, body.into_inner().content)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(comment)))
}

/// POST /api/posts/{id}/like
pub async fn like_post(
    state: web::Data<AppState>,
    identity: Identity,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let likes = state.posts.like_post(&identity, &id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(LikesResponse { likes })))
}

/// DELETE /api/posts/{id}/like
pub async fn unlike_post(
    state: web::Data<AppState>,
    identity: Identity,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let likes = state.posts.unlike_post(&identity, &id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(LikesResponse { likes })))
}
