use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthData, LoginRequest, ProfileData, RegisterRequest},
        jwt::{AuthUser, JwtKeys},
        password::{hash_password, verify_password},
        repo_types::User,
        validation::{validate_login_input, validate_register_input},
    },
    error::{ApiError, ApiResponse},
    state::AppState,
};

// Same message for unknown email and wrong password, so responses don't
// reveal which accounts exist.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/profile", get(get_profile))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthData>>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    let errors =
        validate_register_input(&payload.email, &payload.password, payload.name.as_deref());
    if !errors.is_empty() {
        warn!(email = %payload.email, "register input rejected");
        return Err(ApiError::Validation(errors.join(", ")));
    }

    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("User with this email already exists"));
    }

    let hash = hash_password(&payload.password, state.config.bcrypt_cost)?;
    let name = payload.name.as_deref().map(str::trim);
    let user = User::create(&state.db, &payload.email, &hash, name).await?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.email)?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "User registered successfully",
            AuthData {
                user: (&user).into(),
                token,
            },
        )),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthData>>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    let errors = validate_login_input(&payload.email, &payload.password);
    if !errors.is_empty() {
        warn!(email = %payload.email, "login input rejected");
        return Err(ApiError::Validation(errors.join(", ")));
    }

    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "login unknown email");
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS));
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.email)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Login successful",
            AuthData {
                user: (&user).into(),
                token,
            },
        )),
    ))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<(StatusCode, Json<ApiResponse<ProfileData>>), ApiError> {
    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Profile retrieved successfully",
            ProfileData { user: user.into() },
        )),
    ))
}
