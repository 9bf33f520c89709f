pub mod project;
pub mod task;
pub mod user;

pub use project::{ProjectInput, ProjectView};
pub use task::{TaskInput, TaskView};
pub use user::User;
