use crate::{auth::AuthenticatedUser, error::AppError, models::TaskInput, services};
use actix_web::{delete, get, patch, post, put, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

// All task routes are nested under /projects/{project_id} and every one of
// them re-verifies project ownership; the task id alone never grants access.

/// Creates a task under one of the authenticated user's projects.
///
/// ## Responses:
/// - `201 Created`: the new `TaskView` with `completed: false`.
/// - `400 Bad Request`: title missing/too long or description too long.
/// - `404 Not Found`: the project does not exist or is not owned.
#[post("/{project_id}/tasks")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    project_id: web::Path<i64>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task =
        services::tasks::create(&pool, project_id.into_inner(), &task_data, &user.email).await?;
    Ok(HttpResponse::Created().json(task))
}

/// Lists the tasks of one of the authenticated user's projects, oldest first.
#[get("/{project_id}/tasks")]
pub async fn list_tasks(
    pool: web::Data<PgPool>,
    project_id: web::Path<i64>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks =
        services::tasks::list_for_project(&pool, project_id.into_inner(), &user.email).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Updates a task's title, description, and due date. The completion flag is
/// only changed through the toggle endpoint.
///
/// A valid task id addressed through the wrong project is a 404.
#[put("/{project_id}/tasks/{task_id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    path: web::Path<(i64, i64)>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let (project_id, task_id) = path.into_inner();
    let task = services::tasks::update(&pool, project_id, task_id, &task_data, &user.email).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Flips a task's completion flag.
#[patch("/{project_id}/tasks/{task_id}/toggle")]
pub async fn toggle_task(
    pool: web::Data<PgPool>,
    path: web::Path<(i64, i64)>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let (project_id, task_id) = path.into_inner();
    let task = services::tasks::toggle_completion(&pool, project_id, task_id, &user.email).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task.
#[delete("/{project_id}/tasks/{task_id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    path: web::Path<(i64, i64)>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let (project_id, task_id) = path.into_inner();
    services::tasks::delete(&pool, project_id, task_id, &user.email).await?;
    Ok(HttpResponse::NoContent().finish())
}
