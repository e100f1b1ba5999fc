use crate::kredenco::{
    handlers::{valid_field, Credentials},
    outcome::Outcome,
    password,
};
use crate::store::CredentialStore;
use axum::{extract::Extension, Json};
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::{debug, error, instrument};

#[utoipa::path(
    post,
    path= "/user/login",
    request_body = Credentials,
    responses (
        (status = 200, description = "Login successful"),
        (status = 400, description = "Missing or empty fields"),
        (status = 401, description = "Unknown user or wrong password"),
        (status = 500, description = "Storage failure"),
    ),
    tag= "auth"
)]
// axum handler for login, read-only and token-free
#[instrument(skip(store, payload))]
pub async fn login(
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

    if !valid_field(username) || !valid_field(password) {
        return Outcome::InvalidRequest;
    }

    match store.lookup(username).await {
        Ok(Some(record)) => {
            if password::verify(password, &record.password_hash) {
                Outcome::Authenticated
            } else {
                debug!("Password mismatch");
                Outcome::InvalidCredentials
            }
        }
        Ok(None) => {
            // Spend the same bcrypt work as a real verification so unknown
            // usernames are not distinguishable by timing.
            password::burn_verification(password);
            debug!("Unknown user");
            Outcome::InvalidCredentials
        }
        Err(e) => {
            error!("Error fetching user: {:?}", e);
            Outcome::StorageError
        }
    }
}
