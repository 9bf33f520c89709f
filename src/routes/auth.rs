use crate::{auth::LoginRequest, error::AppError, services};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Login user
///
/// Authenticates an email/password pair and returns a bearer token alongside
/// the user's profile fields. Bad credentials always get the same 401.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let response = services::auth::login(&pool, &login_data).await?;
    Ok(HttpResponse::Ok().json(response))
}
