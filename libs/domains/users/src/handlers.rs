//! HTTP handlers for the Users API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse, NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use object_cache::ObjectCache;
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{PageQuery, User, UserDto, UserForm};
use crate::service::UserService;

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(
        schemas(UserForm, UserDto),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<C: ObjectCache<Uuid, User> + 'static>(service: UserService<C>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// List users one page at a time
///
/// GET /users?pageNumber=1&pageSize=10
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    params(PageQuery),
    responses(
        (status = 200, description = "A page of users (empty past the end of the data)", body = Vec<UserDto>),
        (status = 400, description = "Non-positive pagination parameters")
    )
)]
async fn list_users<C: ObjectCache<Uuid, User>>(
    State(service): State<Arc<UserService<C>>>,
    Query(page): Query<PageQuery>,
) -> UserResult<Json<Vec<UserDto>>> {
    let users = service.get_users(page.page_number, page.page_size).await?;
    Ok(Json(users))
}

/// Create a new user
///
/// POST /users
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = UserForm,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse)
    )
)]
async fn create_user<C: ObjectCache<Uuid, User>>(
    State(service): State<Arc<UserService<C>>>,
    ValidatedJson(form): ValidatedJson<UserForm>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(form).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
///
/// GET /users/:id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The requested user", body = UserDto),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_user<C: ObjectCache<Uuid, User>>(
    State(service): State<Arc<UserService<C>>>,
    UuidPath(id): UuidPath,
) -> UserResult<Json<UserDto>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Replace a user
///
/// PUT /users/:id
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User identifier")),
    request_body = UserForm,
    responses(
        (status = 204, description = "User replaced"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse)
    )
)]
async fn update_user<C: ObjectCache<Uuid, User>>(
    State(service): State<Arc<UserService<C>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(form): ValidatedJson<UserForm>,
) -> UserResult<impl IntoResponse> {
    service.update_user(id, form).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user
///
/// DELETE /users/:id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_user<C: ObjectCache<Uuid, User>>(
    State(service): State<Arc<UserService<C>>>,
    UuidPath(id): UuidPath,
) -> UserResult<impl IntoResponse> {
    service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
