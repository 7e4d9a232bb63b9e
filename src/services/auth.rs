//! Auth services - Gestione autenticazione e registrazione utenti

use crate::core::{AppError, AppState, LoginOutcome};
use crate::dtos::{CredentialsForm, LoginResponse, StatusResponse};
use axum::{
    extract::{Form, State, rejection::FormRejection},
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::Validate;

#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    form: Result<Form<CredentialsForm>, FormRejection>, // form urlencoded
) -> Result<Json<StatusResponse>, AppError> {
    // 1. Decodificare il form, 400 se malformato
    // 2. Verificare che username e password siano presenti
    // 3. Salvare l'utente: l'hash bcrypt viene calcolato dallo store, CONFLICT se lo username esiste già
    let Form(body) = form?;
    body.validate()?;
    debug!(username = %body.username, "Registering user");

    let user = state
        .users
        .register(&body.username, &body.password, state.auth.hash_cost())
        .await?;
    info!(user_id = user.id, username = %user.username, "User registered");

    Ok(Json(StatusResponse::success("user registered")))
}

#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Form(body) = form?;
    body.validate()?;
    debug!(username = %body.username, "Login attempt");

    match state
        .auth
        .login(state.users.as_ref(), &body.username, &body.password)
        .await?
    {
        LoginOutcome::UnknownUser => Err(AppError::unauthorized("user not found")),
        // password errata: 200 con status "failed", non un errore HTTP
        LoginOutcome::WrongPassword => Ok(Json(LoginResponse::failed("wrong password"))),
        LoginOutcome::Authenticated { token } => Ok(Json(LoginResponse::authenticated(token))),
    }
}
