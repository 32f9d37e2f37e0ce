//! Wire DTOs for the `/api/auth/` endpoint.
//!
//! DESIGN
//! ======
//! The endpoint answers with a union discriminated by field presence:
//! `{ user, sign_out_url }` when a session cookie is valid, `{ sign_in_url }`
//! otherwise. [`AuthResponse`] accepts both shapes leniently and
//! [`AuthResponse::into_status`] turns it into a typed [`AuthStatus`], rejecting
//! bodies where the user and the sign-out endpoint do not travel together.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::http::FetchError;

/// Identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub is_superuser: bool,
}

/// A signed-in user together with the endpoint that ends their session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub sign_out_url: String,
}

/// Raw `/api/auth/` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub sign_out_url: Option<String>,
    #[serde(default)]
    pub sign_in_url: Option<String>,
}

/// Typed view of an [`AuthResponse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated(Session),
    /// No session; `sign_in_url` is where the identity provider flow starts.
    Anonymous { sign_in_url: Option<String> },
}

impl AuthResponse {
    /// Discriminate the union by field presence.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Malformed`] if `user` is present without
    /// `sign_out_url`.
    pub fn into_status(self) -> Result<AuthStatus, FetchError> {
        match (self.user, self.sign_out_url) {
            (Some(user), Some(sign_out_url)) => Ok(AuthStatus::Authenticated(Session { user, sign_out_url })),
            (Some(_), None) => Err(FetchError::Malformed("user present without sign_out_url".to_owned())),
            (None, _) => Ok(AuthStatus::Anonymous {
                sign_in_url: self.sign_in_url,
            }),
        }
    }
}
