use sqlx::PgPool;

use crate::error::AppError;
use crate::models::project::{progress_percentage, ProjectWithStats};
use crate::models::{ProjectInput, ProjectView};
use crate::services::auth::current_user;

/// Projection of a project row with live task statistics. The `WHERE` clause
/// always carries `p.user_id`, so a project owned by someone else is
/// indistinguishable from one that does not exist.
const PROJECT_STATS_SELECT: &str = "SELECT p.id, p.title, p.description, p.created_at, \
     COUNT(t.id) AS total_tasks, \
     COUNT(t.id) FILTER (WHERE t.completed) AS completed_tasks \
     FROM projects p \
     LEFT JOIN tasks t ON t.project_id = p.id";

/// Creates a project owned by the caller. The id and creation timestamp are
/// assigned by the database; the view starts with zero tasks.
pub async fn create(
    pool: &PgPool,
    input: &ProjectInput,
    owner_email: &str,
) -> Result<ProjectView, AppError> {
    let user = current_user(pool, owner_email).await?;

    let row = sqlx::query_as::<_, (i64, String, Option<String>, chrono::DateTime<chrono::Utc>)>(
        "INSERT INTO projects (title, description, user_id) VALUES ($1, $2, $3)
         RETURNING id, title, description, created_at",
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(user.id)
    .fetch_one(pool)
    .await?;

    Ok(ProjectView {
        id: row.0,
        title: row.1,
        description: row.2,
        created_at: row.3,
        total_tasks: 0,
        completed_tasks: 0,
        progress_percentage: 0.0,
    })
}

/// Lists the caller's projects, oldest first, with live task counts.
pub async fn list_all(pool: &PgPool, owner_email: &str) -> Result<Vec<ProjectView>, AppError> {
    let user = current_user(pool, owner_email).await?;

    let rows = sqlx::query_as::<_, ProjectWithStats>(&format!(
        "{} WHERE p.user_id = $1 GROUP BY p.id ORDER BY p.created_at ASC, p.id ASC",
        PROJECT_STATS_SELECT
    ))
    .bind(user.id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(ProjectView::from).collect())
}

/// Fetches a single project owned by the caller.
pub async fn get_by_id(
    pool: &PgPool,
    project_id: i64,
    owner_email: &str,
) -> Result<ProjectView, AppError> {
    let user = current_user(pool, owner_email).await?;

    let row = sqlx::query_as::<_, ProjectWithStats>(&format!(
        "{} WHERE p.id = $1 AND p.user_id = $2 GROUP BY p.id",
        PROJECT_STATS_SELECT
    ))
    .bind(project_id)
    .bind(user.id)
    .fetch_optional(pool)
    .await?;

    row.map(ProjectView::from)
        .ok_or_else(|| AppError::NotFound(format!("Project not found with id: {}", project_id)))
}

/// Replaces a project's title and description. The creation timestamp and
/// task list are untouched. Runs in one transaction so the ownership check
/// and the write observe the same snapshot.
pub async fn update(
    pool: &PgPool,
    project_id: i64,
    input: &ProjectInput,
    owner_email: &str,
) -> Result<ProjectView, AppError> {
    let mut tx = pool.begin().await?;

    let user = current_user(&mut *tx, owner_email).await?;

    let row = sqlx::query_as::<_, (i64, String, Option<String>, chrono::DateTime<chrono::Utc>)>(
        "UPDATE projects SET title = $1, description = $2
         WHERE id = $3 AND user_id = $4
         RETURNING id, title, description, created_at",
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(project_id)
    .bind(user.id)
    .fetch_optional(&mut *tx)
    .await?;

    let row = row
        .ok_or_else(|| AppError::NotFound(format!("Project not found with id: {}", project_id)))?;

    let (total_tasks, completed_tasks) = sqlx::query_as::<_, (i64, i64)>(
        "SELECT COUNT(*), COUNT(*) FILTER (WHERE completed) FROM tasks WHERE project_id = $1",
    )
    .bind(project_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(ProjectView {
        id: row.0,
        title: row.1,
        description: row.2,
        created_at: row.3,
        total_tasks,
        completed_tasks,
        progress_percentage: progress_percentage(completed_tasks, total_tasks),
    })
}

/// Deletes a project owned by the caller. The `ON DELETE CASCADE` on
/// `tasks.project_id` removes its tasks in the same statement.
pub async fn delete(pool: &PgPool, project_id: i64, owner_email: &str) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let user = current_user(&mut *tx, owner_email).await?;

    let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
        .bind(project_id)
        .bind(user.id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Project not found with id: {}",
            project_id
        )));
    }

    tx.commit().await?;
    Ok(())
}
