use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use maud::Markup;

use super::error::{ApiError, AppError};
use super::extract::FormOrJson;
use super::pages::{
    render_edit_post_page, render_new_post_page, render_not_found_page, render_post_detail_page,
    render_post_list_page, EditPostFormParams, NewPostFormParams,
};
use super::AppState;
use crate::store::{NewPost, Post, PostUpdate, StoreError};

/// Create the router with all routes.
///
/// An unknown verb on a known path answers like an unknown path.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home).fallback(not_found))
        .route(
            "/posts",
            get(list_posts).post(create_post).fallback(not_found),
        )
        .route("/posts/new", get(new_post_form).fallback(not_found))
        .route(
            "/posts/:id",
            get(show_post)
                .patch(update_post)
                .put(update_post)
                .delete(delete_post)
                .fallback(not_found),
        )
        .route("/posts/:id/edit", get(edit_post_form).fallback(not_found))
        .route("/api/posts", get(api_list_posts).fallback(not_found))
        .route("/api/posts/:id", get(api_get_post).fallback(not_found))
        .route("/healthz", get(health))
}

// ========== HTML Routes ==========

async fn home() -> Redirect {
    Redirect::to("/posts")
}

async fn list_posts(State(state): State<AppState>) -> Result<Markup, AppError> {
    let posts = state.read_store()?.list().to_vec();
    Ok(render_post_list_page(&posts))
}

async fn new_post_form() -> Markup {
    render_new_post_page(&NewPostFormParams::new())
}

/// Handler for creating a post (POST /posts).
async fn create_post(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<NewPost>,
) -> Result<Response, AppError> {
    let result = state.write_store()?.create(&form.username, &form.content);

    match result {
        Ok(_) => Ok(Redirect::to("/posts").into_response()),
        Err(StoreError::Validation(message)) => {
            tracing::warn!(%message, "Rejected new post");
            let params = NewPostFormParams::new()
                .error(message)
                .submitted(&form.username, &form.content);
            Ok((StatusCode::BAD_REQUEST, render_new_post_page(&params)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Copy a post out of the store so the lock is released before rendering.
fn find_post(state: &AppState, id: &str) -> Result<Post, AppError> {
    let post = state.read_store()?.find_by_id(id).cloned();
    post.ok_or(AppError::NotFound)
}

async fn show_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Markup, AppError> {
    let post = find_post(&state, &id)?;
    Ok(render_post_detail_page(&post))
}

async fn edit_post_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Markup, AppError> {
    let post = find_post(&state, &id)?;
    Ok(render_edit_post_page(&EditPostFormParams::new(&post)))
}

/// Handler for updating a post's content (PATCH/PUT /posts/:id).
///
/// An unknown id is a 404 whatever the body holds. A rejected update
/// re-renders the edit form with a 400 status.
async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<FormOrJson<PostUpdate>, AppError>,
) -> Result<Response, AppError> {
    let post = find_post(&state, &id)?;
    let FormOrJson(form) = body?;

    let result = state.write_store()?.update(&id, &form.content);

    match result {
        Ok(_) => Ok(Redirect::to("/posts").into_response()),
        Err(StoreError::Validation(message)) => {
            tracing::warn!(post_id = %id, %message, "Rejected post update");
            let params = EditPostFormParams::new(&post).rejected(message, &form.content);
            Ok((StatusCode::BAD_REQUEST, render_edit_post_page(&params)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Handler for deleting a post (DELETE /posts/:id).
async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    state.write_store()?.delete(&id)?;
    Ok(Redirect::to("/posts"))
}

async fn health() -> &'static str {
    "OK"
}

/// Fallback for unmatched paths and verbs.
pub async fn not_found(uri: Uri) -> (StatusCode, Markup) {
    tracing::debug!(%uri, "No route matched");
    (StatusCode::NOT_FOUND, render_not_found_page("Page not found"))
}

// ========== JSON API Routes ==========

async fn api_list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.read_store()?.list().to_vec();
    Ok(Json(posts))
}

async fn api_get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let post = state.read_store()?.find_by_id(&id).cloned();
    post.map(Json).ok_or(ApiError::NotFound)
}
