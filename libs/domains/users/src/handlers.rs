use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{UuidPath, ValidatedJson};
use domain_addresses::CepResolver;
use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{RegisterUser, UserFilter, UserPublic};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Create the users router with all HTTP endpoints
pub fn router<R, C>(service: UserService<R, C>) -> Router
where
    R: UserRepository + 'static,
    C: CepResolver + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user))
        .with_state(shared_service)
}

/// Register a new user with their address
///
/// POST /users
async fn create_user<R: UserRepository, C: CepResolver>(
    State(service): State<Arc<UserService<R, C>>>,
    ValidatedJson(input): ValidatedJson<RegisterUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.register(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List users with pagination
///
/// GET /users?skip=0&limit=10&active=true
async fn list_users<R: UserRepository, C: CepResolver>(
    State(service): State<Arc<UserService<R, C>>>,
    Query(filter): Query<UserFilter>,
) -> UserResult<Json<Vec<UserPublic>>> {
    let users = service.list_users(filter).await?;
    Ok(Json(users))
}

/// Get a user by ID
///
/// GET /users/:id
async fn get_user<R: UserRepository, C: CepResolver>(
    State(service): State<Arc<UserService<R, C>>>,
    UuidPath(id): UuidPath,
) -> UserResult<Json<UserPublic>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}
