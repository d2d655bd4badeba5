// src/handlers/auth.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    config::Config,
    error::AppError,
    extract::ValidatedJson,
    models::user::{LoginRequest, LoginResponse, NewUser, SignupRequest, SignupResponse},
    store::DynStore,
    utils::hash::{find_verified_user, hash_password},
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Registers a new student.
///
/// The password is hashed with Argon2 before storing. Duplicate emails are
/// accepted.
#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User created", body = SignupResponse),
        (status = 400, description = "Malformed payload or email")
    )
)]
pub async fn signup(
    State(store): State<DynStore>,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let password_hash = hash_password(&payload.password)?;

    store
        .insert_user(NewUser {
            name: payload.name,
            student_class: payload.student_class,
            email: payload.email,
            password_hash,
        })
        .await?;

    tracing::info!("New student signed up");

    Ok(Json(SignupResponse {
        message: "User created successfully".to_string(),
    }))
}

/// Logs a user in.
///
/// The configured administrator pair is checked first and wins over any
/// stored user with the same email. Otherwise every stored user with the
/// email is tried and the first whose hash verifies is returned.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 400, description = "Malformed payload"),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(
    State(store): State<DynStore>,
    State(config): State<Config>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.email == config.admin_email && payload.password == config.admin_password {
        tracing::info!("Administrator logged in");
        return Ok(Json(LoginResponse::admin()));
    }

    let candidates = store.find_users_by_email(&payload.email).await?;

    if let Some(user) = find_verified_user(&payload.password, candidates)? {
        return Ok(Json(LoginResponse::student(user)));
    }

    tracing::warn!("Rejected login for {}", payload.email);
    Err(AppError::AuthError(INVALID_CREDENTIALS.to_string()))
}
