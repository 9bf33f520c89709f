use crate::{auth::AuthenticatedUser, error::AppError, models::ProjectInput, services};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Creates a project for the authenticated user.
///
/// ## Responses:
/// - `201 Created`: the new `ProjectView` with zero tasks.
/// - `400 Bad Request`: title missing/too long or description too long.
/// - `401 Unauthorized`: missing or invalid token.
#[post("")]
pub async fn create_project(
    pool: web::Data<PgPool>,
    project_data: web::Json<ProjectInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    project_data.validate()?;

    let project = services::projects::create(&pool, &project_data, &user.email).await?;
    Ok(HttpResponse::Created().json(project))
}

/// Lists all projects owned by the authenticated user, with live-computed
/// task counts and progress, oldest first.
#[get("")]
pub async fn list_projects(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let projects = services::projects::list_all(&pool, &user.email).await?;
    Ok(HttpResponse::Ok().json(projects))
}

/// Retrieves one of the authenticated user's projects by id.
///
/// A project owned by someone else returns the same 404 as a missing one.
#[get("/{id}")]
pub async fn get_project(
    pool: web::Data<PgPool>,
    project_id: web::Path<i64>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let project =
        services::projects::get_by_id(&pool, project_id.into_inner(), &user.email).await?;
    Ok(HttpResponse::Ok().json(project))
}

/// Replaces a project's title and description.
#[put("/{id}")]
pub async fn update_project(
    pool: web::Data<PgPool>,
    project_id: web::Path<i64>,
    project_data: web::Json<ProjectInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    project_data.validate()?;

    let project = services::projects::update(
        &pool,
        project_id.into_inner(),
        &project_data,
        &user.email,
    )
    .await?;
    Ok(HttpResponse::Ok().json(project))
}

/// Deletes a project and, transitively, all its tasks.
#[delete("/{id}")]
pub async fn delete_project(
    pool: web::Data<PgPool>,
    project_id: web::Path<i64>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    services::projects::delete(&pool, project_id.into_inner(), &user.email).await?;
    Ok(HttpResponse::NoContent().finish())
}
