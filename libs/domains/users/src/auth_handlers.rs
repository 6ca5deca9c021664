use axum::{extract::State, routing::post, Json, Router};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use axum_helpers::{AppError, JwtAuth, JwtClaims, ValidatedJson};
use domain_addresses::CepResolver;
use std::sync::Arc;

use crate::models::{LoginRequest, TokenResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Shared state for the auth endpoints: the user service plus the JWT
/// signer.
pub struct AuthState<R: UserRepository, C: CepResolver> {
    pub service: Arc<UserService<R, C>>,
    pub jwt: JwtAuth,
}

impl<R: UserRepository, C: CepResolver> Clone for AuthState<R, C> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            jwt: self.jwt.clone(),
        }
    }
}

/// Create the auth router: login and token introspection
pub fn router<R, C>(service: Arc<UserService<R, C>>, jwt: JwtAuth) -> Router
where
    R: UserRepository + 'static,
    C: CepResolver + 'static,
{
    let state = AuthState { service, jwt };

    Router::new()
        .route("/", post(login).get(me))
        .with_state(state)
}

/// Exchange email/password credentials for a bearer token
///
/// POST /auth
async fn login<R: UserRepository, C: CepResolver>(
    State(state): State<AuthState<R, C>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user_id = state
        .service
        .authenticate(&input.email, &input.password)
        .await?;

    let token = state.jwt.issue(user_id)?;

    Ok(Json(TokenResponse::bearer(token)))
}

/// Echo the claims of a valid bearer token
///
/// GET /auth
async fn me<R: UserRepository, C: CepResolver>(
    State(state): State<AuthState<R, C>>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<JwtClaims>, AppError> {
    let claims = state.jwt.verify(bearer.token())?;
    Ok(Json(claims))
}
