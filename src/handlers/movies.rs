use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::routes::AppState;
use crate::schemas::Movie;

// Path/query bounds, checked before any store call
const MOVIE_ID_MIN: i64 = 1;
const MOVIE_ID_MAX: i64 = 2000;
const CATEGORY_LEN_MIN: usize = 5;
const CATEGORY_LEN_MAX: usize = 15;

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: String,
}

/// GET /movies - full catalog listing; the only bearer-gated route
pub async fn movie_list(
    _user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state.movies.get_movies().await?;
    Ok(Json(movies))
}

/// GET /movies/:id - fetch a single movie, id bounded to 1..=2000
pub async fn movie_get(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Movie>, ApiError> {
    validate_movie_id(id)?;

    match state.movies.get_movie(id).await? {
        Some(movie) => Ok(Json(movie)),
        None => Err(ApiError::not_found("No encontrado")),
    }
}

/// GET /movies/?category= - filter by category; an empty list is a success
pub async fn movie_by_category(
    Query(query): Query<CategoryQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    validate_category(&query.category)?;

    let movies = state.movies.get_movies_by_category(&query.category).await?;
    Ok(Json(movies))
}

/// POST /movies - register a movie; any schema-valid body is accepted
pub async fn movie_create(
    State(state): State<AppState>,
    Json(movie): Json<Movie>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    state.movies.create_movie(movie).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Se ha registrado la película" })),
    ))
}

/// PUT /movies/:id - replace a movie; the record is looked up before the write
pub async fn movie_update(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(movie): Json<Movie>,
) -> Result<Json<Value>, ApiError> {
    if state.movies.get_movie(id).await?.is_none() {
        return Err(ApiError::not_found("No encontrado"));
    }

    state.movies.update_movie(id, movie).await?;
    Ok(Json(json!({ "message": "Se ha modificado la película" })))
}

/// DELETE /movies/:id - remove a movie; the record is looked up before the write
pub async fn movie_delete(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    if state.movies.get_movie(id).await?.is_none() {
        return Err(ApiError::not_found("No se encontró"));
    }

    state.movies.delete_movie(id).await?;
    Ok(Json(json!({ "message": "Se ha eliminado la película" })))
}

fn validate_movie_id(id: i64) -> Result<(), ApiError> {
    if (MOVIE_ID_MIN..=MOVIE_ID_MAX).contains(&id) {
        return Ok(());
    }

    let mut field_errors = HashMap::new();
    field_errors.insert(
        "id".to_string(),
        format!("must be between {} and {}", MOVIE_ID_MIN, MOVIE_ID_MAX),
    );
    Err(ApiError::validation_error(
        "Invalid path parameter",
        Some(field_errors),
    ))
}

fn validate_category(category: &str) -> Result<(), ApiError> {
    let len = category.chars().count();
    if (CATEGORY_LEN_MIN..=CATEGORY_LEN_MAX).contains(&len) {
        return Ok(());
    }

    let mut field_errors = HashMap::new();
    field_errors.insert(
        "category".to_string(),
        format!(
            "length must be between {} and {} characters",
            CATEGORY_LEN_MIN, CATEGORY_LEN_MAX
        ),
    );
    Err(ApiError::validation_error(
        "Invalid query parameter",
        Some(field_errors),
    ))
}
