//!
//! # Service Layer
//!
//! The ownership-scoped CRUD logic behind the REST handlers. Every function
//! takes the caller's verified email explicitly; there is no ambient
//! current-user state. Ownership checks are composite SQL predicates
//! (`id AND user_id`, `id AND project_id`), never a bare-id fetch followed by
//! a comparison in application code, and every read-check-write sequence runs
//! inside a single transaction.

pub mod auth;
pub mod projects;
pub mod tasks;
