use sqlx::PgPool;

use crate::error::AppError;
use crate::models::task::Task;
use crate::models::{TaskInput, TaskView};
use crate::services::auth::current_user;

const TASK_COLUMNS: &str = "id, title, description, due_date, completed, created_at, project_id";

/// Resolves a project id under the caller's ownership.
///
/// Every task operation goes through this gate first: a task id alone never
/// authorizes access, the whole `user -> project -> task` chain must hold.
async fn owned_project_id<'e, E>(
    executor: E,
    project_id: i64,
    user_id: i64,
) -> Result<i64, AppError>
where
    E: sqlx::PgExecutor<'e>,
{
    let id = sqlx::query_scalar::<_, i64>("SELECT id FROM projects WHERE id = $1 AND user_id = $2")
        .bind(project_id)
        .bind(user_id)
        .fetch_optional(executor)
        .await?;

    id.ok_or_else(|| AppError::NotFound(format!("Project not found with id: {}", project_id)))
}

/// Creates a task under a project the caller owns, with `completed = false`
/// and a server-assigned id and timestamp.
pub async fn create(
    pool: &PgPool,
    project_id: i64,
    input: &TaskInput,
    owner_email: &str,
) -> Result<TaskView, AppError> {
    let mut tx = pool.begin().await?;

    let user = current_user(&mut *tx, owner_email).await?;
    let project_id = owned_project_id(&mut *tx, project_id, user.id).await?;

    let task = sqlx::query_as::<_, Task>(&format!(
        "INSERT INTO tasks (title, description, due_date, project_id)
         VALUES ($1, $2, $3, $4)
         RETURNING {}",
        TASK_COLUMNS
    ))
    .bind(&input.title)
    .bind(&input.description)
    .bind(input.due_date)
    .bind(project_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(TaskView::from(task))
}

/// Lists the tasks of a project the caller owns, oldest first.
pub async fn list_for_project(
    pool: &PgPool,
    project_id: i64,
    owner_email: &str,
) -> Result<Vec<TaskView>, AppError> {
    let user = current_user(pool, owner_email).await?;
    let project_id = owned_project_id(pool, project_id, user.id).await?;

    let tasks = sqlx::query_as::<_, Task>(&format!(
        "SELECT {} FROM tasks WHERE project_id = $1 ORDER BY created_at ASC, id ASC",
        TASK_COLUMNS
    ))
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(tasks.into_iter().map(TaskView::from).collect())
}

/// Updates a task's title, description, and due date. The completion flag
/// and creation timestamp are untouched. The task must belong to the exact
/// project supplied, a valid task id under some other project is a 404.
pub async fn update(
    pool: &PgPool,
    project_id: i64,
    task_id: i64,
    input: &TaskInput,
    owner_email: &str,
) -> Result<TaskView, AppError> {
    let mut tx = pool.begin().await?;

    let user = current_user(&mut *tx, owner_email).await?;
    let project_id = owned_project_id(&mut *tx, project_id, user.id).await?;

    let task = sqlx::query_as::<_, Task>(&format!(
        "UPDATE tasks SET title = $1, description = $2, due_date = $3
         WHERE id = $4 AND project_id = $5
         RETURNING {}",
        TASK_COLUMNS
    ))
    .bind(&input.title)
    .bind(&input.description)
    .bind(input.due_date)
    .bind(task_id)
    .bind(project_id)
    .fetch_optional(&mut *tx)
    .await?;

    let task =
        task.ok_or_else(|| AppError::NotFound(format!("Task not found with id: {}", task_id)))?;

    tx.commit().await?;
    Ok(TaskView::from(task))
}

/// Flips a task's completion flag. No "set to" value exists; toggling twice
/// restores the original state.
pub async fn toggle_completion(
    pool: &PgPool,
    project_id: i64,
    task_id: i64,
    owner_email: &str,
) -> Result<TaskView, AppError> {
    let mut tx = pool.begin().await?;

    let user = current_user(&mut *tx, owner_email).await?;
    let project_id = owned_project_id(&mut *tx, project_id, user.id).await?;

    let task = sqlx::query_as::<_, Task>(&format!(
        "UPDATE tasks SET completed = NOT completed
         WHERE id = $1 AND project_id = $2
         RETURNING {}",
        TASK_COLUMNS
    ))
    .bind(task_id)
    .bind(project_id)
    .fetch_optional(&mut *tx)
    .await?;

    let task =
        task.ok_or_else(|| AppError::NotFound(format!("Task not found with id: {}", task_id)))?;

    tx.commit().await?;
    Ok(TaskView::from(task))
}

/// Deletes a task under the same double-scoped check as every other task
/// operation.
pub async fn delete(
    pool: &PgPool,
    project_id: i64,
    task_id: i64,
    owner_email: &str,
) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let user = current_user(&mut *tx, owner_email).await?;
    let project_id = owned_project_id(&mut *tx, project_id, user.id).await?;

    let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND project_id = $2")
        .bind(task_id)
        .bind(project_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Task not found with id: {}",
            task_id
        )));
    }

    tx.commit().await?;
    Ok(())
}
