use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Input structure for creating or updating a project.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ProjectInput {
    /// Project title, 1 to 200 characters.
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    /// Optional description, at most 1000 characters.
    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,
}

/// A project row joined with its live task statistics.
///
/// Task counts come from a `LEFT JOIN tasks ... GROUP BY` projection at query
/// time; they are never stored, so they cannot go stale.
#[derive(Debug, FromRow)]
pub struct ProjectWithStats {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub total_tasks: i64,
    pub completed_tasks: i64,
}

/// The externally-serialized projection of a project.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub progress_percentage: f64,
}

/// Completion percentage for a task mix. Zero when there are no tasks.
pub fn progress_percentage(completed_tasks: i64, total_tasks: i64) -> f64 {
    if total_tasks == 0 {
        return 0.0;
    }
    completed_tasks as f64 * 100.0 / total_tasks as f64
}

impl From<ProjectWithStats> for ProjectView {
    fn from(row: ProjectWithStats) -> Self {
        let progress = progress_percentage(row.completed_tasks, row.total_tasks);
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            created_at: row.created_at,
            total_tasks: row.total_tasks,
            completed_tasks: row.completed_tasks,
            progress_percentage: progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_progress_percentage() {
        assert_eq!(progress_percentage(0, 0), 0.0);
        assert_eq!(progress_percentage(0, 4), 0.0);
        assert_eq!(progress_percentage(1, 4), 25.0);
        assert_eq!(progress_percentage(2, 3), 200.0 / 3.0);
        assert_eq!(progress_percentage(5, 5), 100.0);
    }

    #[test]
    fn test_project_view_from_stats() {
        let row = ProjectWithStats {
            id: 7,
            title: "Trip".to_string(),
            description: Some("Plan trip".to_string()),
            created_at: Utc::now(),
            total_tasks: 2,
            completed_tasks: 1,
        };

        let view = ProjectView::from(row);
        assert_eq!(view.id, 7);
        assert_eq!(view.total_tasks, 2);
        assert_eq!(view.completed_tasks, 1);
        assert_eq!(view.progress_percentage, 50.0);
    }

    #[test]
    fn test_project_input_validation() {
        let valid = ProjectInput {
            title: "Trip".to_string(),
            description: Some("Plan trip".to_string()),
        };
        assert!(valid.validate().is_ok());

        let empty_title = ProjectInput {
            title: "".to_string(),
            description: None,
        };
        assert!(empty_title.validate().is_err());

        let long_title = ProjectInput {
            title: "a".repeat(201),
            description: None,
        };
        assert!(long_title.validate().is_err());

        let long_description = ProjectInput {
            title: "Trip".to_string(),
            description: Some("b".repeat(1001)),
        };
        assert!(long_description.validate().is_err());
    }

    #[test]
    fn test_project_view_serializes_camel_case() {
        let view = ProjectView {
            id: 1,
            title: "Trip".to_string(),
            description: None,
            created_at: Utc::now(),
            total_tasks: 0,
            completed_tasks: 0,
            progress_percentage: 0.0,
        };

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("totalTasks").is_some());
        assert!(json.get("completedTasks").is_some());
        assert!(json.get("progressPercentage").is_some());
    }
}
