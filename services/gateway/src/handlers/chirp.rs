use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::models::{CreateChirpRequest, ListChirpsQuery};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use types::{Post, PostId};

pub async fn create_chirp(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateChirpRequest>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let post = state.repo.create_post(user.user_id, &payload.body)?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn list_chirps(
    State(state): State<AppState>,
    Query(query): Query<ListChirpsQuery>,
) -> Result<Json<Vec<Post>>, AppError> {
    let posts = state.repo.list_posts(query.author_id, query.sort)?;
    Ok(Json(posts))
}

pub async fn get_chirp(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<Json<Post>, AppError> {
    let post = state.repo.get_post(id)?;
    Ok(Json(post))
}

pub async fn delete_chirp(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<PostId>,
) -> Result<Json<Post>, AppError> {
    // Ownership is the repository's decision, not ours.
    let post = state.repo.delete_post(id, user.user_id)?;
    Ok(Json(post))
}
