//! # Remote collaborators for the user directory
//!
//! The frontend touches the network exactly once: a GET of the static user
//! list at startup. This crate owns that call, plus the deterministic
//! avatar-URL derivation used by the cards. Everything else in the app is
//! purely local state.

use store::User;
use thiserror::Error;

mod avatar;
pub use avatar::avatar_url;

/// Endpoint serving the static user list.
pub const USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Failure of the startup fetch. The caller's policy is to log it and
/// fall back to an empty directory; it is never surfaced to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("user request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Fetch the user list from the default endpoint.
pub async fn fetch_users() -> Result<Vec<User>, FetchError> {
    fetch_users_from(USERS_URL).await
}

/// Fetch the user list from `url`. Non-success status codes are errors.
pub async fn fetch_users_from(url: &str) -> Result<Vec<User>, FetchError> {
    tracing::debug!("fetching users from {url}");
    let users = reqwest::get(url)
        .await?
        .error_for_status()?
        .json::<Vec<User>>()
        .await?;
    tracing::debug!("fetched {} users", users.len());
    Ok(users)
}
