use crate::kredenco::{
    handlers::{valid_field, Credentials},
    outcome::Outcome,
    password,
};
use crate::store::{CreateOutcome, CredentialStore, UserRecord};
use axum::{extract::Extension, Json};
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::{debug, error, instrument};

#[utoipa::path(
    post,
    path= "/user/register",
    request_body = Credentials,
    responses (
        (status = 200, description = "User created"),
        (status = 400, description = "Missing or empty fields"),
        (status = 409, description = "User with the specified username already exists"),
        (status = 500, description = "Storage failure"),
    ),
    tag= "auth"
)]
// axum handler for registration
#[instrument(skip(store, payload))]
pub async fn register(
    store: Extension<Arc<dyn CredentialStore>>,
    payload: Option<Json<Credentials>>,
) -> Outcome {
    let credentials: Credentials = match payload {
        Some(Json(payload)) => payload,
        None => {
            debug!("Missing payload");
            return Outcome::InvalidRequest;
        }
    };

    debug!("credentials: {:?}", credentials);

    let username = credentials.username.trim();
    let password = credentials.password.expose_secret();

    // fail fast, before hashing and before any store interaction
    if !valid_field(username) || !valid_field(password) {
        return Outcome::InvalidRequest;
    }

    let password_hash = match password::hash(password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Error hashing password: {}", e);
            return Outcome::StorageError;
        }
    };

    // One atomic conditional insert; the store resolves concurrent
    // registrations for the same username.
    match store
        .try_create(UserRecord {
            username: username.to_string(),
            password_hash,
        })
        .await
    {
        Ok(CreateOutcome::Created) => Outcome::Created,
        Ok(CreateOutcome::AlreadyExists) => {
            debug!("User already exists");
            Outcome::Conflict
        }
        Err(e) => {
            error!("Error creating user: {:?}", e);
            Outcome::StorageError
        }
    }
}
