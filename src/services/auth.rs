use sqlx::PgPool;

use crate::auth::{generate_token, hash_password, verify_password, LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::models::User;

const USER_COLUMNS: &str = "id, email, password_hash, full_name, created_at";

/// Authenticates an email/password pair and issues a token.
///
/// Unknown email and wrong password produce the same `Unauthorized` response
/// so the API never confirms whether an account exists.
pub async fn login(pool: &PgPool, request: &LoginRequest) -> Result<LoginResponse, AppError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE email = $1",
        USER_COLUMNS
    ))
    .bind(&request.email)
    .fetch_optional(pool)
    .await?;

    match user {
        Some(user) if verify_password(&request.password, &user.password_hash)? => {
            let token = generate_token(&user.email)?;
            Ok(LoginResponse {
                token,
                email: user.email,
                full_name: user.full_name,
            })
        }
        _ => Err(AppError::Unauthorized("Invalid credentials".into())),
    }
}

/// Resolves the user behind a verified identity claim.
///
/// The sole authorization anchor: every project/task operation starts here.
/// Fails only if the account disappeared after the token was issued.
pub async fn current_user<'e, E>(executor: E, email: &str) -> Result<User, AppError>
where
    E: sqlx::PgExecutor<'e>,
{
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE email = $1",
        USER_COLUMNS
    ))
    .bind(email)
    .fetch_optional(executor)
    .await?;

    user.ok_or_else(|| AppError::Unauthorized("User not found".into()))
}

/// Inserts a user account if the email is not already taken.
///
/// Accounts have no signup endpoint; they come from startup seeding. The
/// `ON CONFLICT DO NOTHING` makes repeated startups idempotent, and the
/// unique index on email is what prevents duplicate accounts under
/// concurrent seeding.
pub async fn seed_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<(), AppError> {
    let password_hash = hash_password(password)?;

    sqlx::query(
        "INSERT INTO users (email, password_hash, full_name) VALUES ($1, $2, $3)
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(email)
    .bind(password_hash)
    .bind(full_name)
    .execute(pool)
    .await?;

    Ok(())
}
