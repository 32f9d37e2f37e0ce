//! Session controller: the single writer of the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell calls [`SessionController::mount`] and spawns
//! [`SessionController::probe`] once when it mounts; the navigation bar calls
//! [`SessionController::sign_in`] / [`SessionController::sign_out`] from clicks.
//! Results land in the [`SessionStore`] and reach the UI through its
//! subscribers.
//!
//! ERROR HANDLING
//! ==============
//! Probe failures are recorded as the store's last fetch error. Sign-in and
//! sign-out failures are only logged. A malformed 2xx body never touches the
//! session. Results of operations that outlive their shell generation are
//! dropped without writing anything.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::future::Future;

use crate::config::ConsoleConfig;
use crate::net::http::{FetchError, HttpGateway, HttpResponse, Method};
use crate::net::types::{AuthResponse, AuthStatus, User};
use crate::state::session::SessionStore;

use super::lifecycle::{Generation, Lifecycle};
use super::navigator::Navigator;

/// Result of [`SessionController::probe`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    Authenticated(User),
    Anonymous,
    Failed(FetchError),
    Malformed(FetchError),
    /// The shell was torn down or remounted while the request was in flight.
    Discarded,
}

/// Result of [`SessionController::sign_in`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInOutcome {
    /// The browser was sent to this identity-provider URL.
    Redirected(String),
    Authenticated(User),
    Anonymous,
    Failed(FetchError),
    Malformed(FetchError),
    Discarded,
}

/// Result of [`SessionController::sign_out`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignOutOutcome {
    SignedOut,
    Failed(FetchError),
    /// No sign-out endpoint is known, so nothing was sent.
    NotSignedIn,
    Discarded,
}

pub struct SessionController<G, N> {
    gateway: G,
    navigator: N,
    store: SessionStore,
    config: ConsoleConfig,
    lifecycle: Lifecycle,
}

impl<G, N> std::fmt::Debug for SessionController<G, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("store", &self.store)
            .field("config", &self.config)
            .field("generation", &self.lifecycle.current())
            .finish_non_exhaustive()
    }
}

impl<G: HttpGateway, N: Navigator> SessionController<G, N> {
    #[must_use]
    pub fn new(gateway: G, navigator: N, config: ConsoleConfig) -> Self {
        Self {
            gateway,
            navigator,
            store: SessionStore::new(),
            config,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Read/subscribe handle to the store this controller writes.
    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    #[must_use]
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Start a new shell generation. Call once when the shell mounts.
    pub fn mount(&self) -> Generation {
        self.lifecycle.advance()
    }

    /// Invalidate every in-flight operation. Call when the shell unmounts.
    pub fn teardown(&self) {
        let generation = self.lifecycle.advance();
        log::debug!("session controller torn down (generation {})", generation.value());
    }

    /// Check the current session with `GET <auth_endpoint>`.
    ///
    /// The generation is captured when this is called, not when the future is
    /// first polled, so a teardown before the first poll still discards it.
    pub fn probe(&self) -> impl Future<Output = ProbeOutcome> + '_ {
        let generation = self.lifecycle.current();
        async move {
            let result = self.gateway.request(Method::Get, &self.config.auth_endpoint).await;
            if !self.still_current(generation, "probe") {
                return ProbeOutcome::Discarded;
            }

            let response = match result {
                Ok(response) => response,
                Err(e) => {
                    log::warn!("session probe failed: {e}");
                    self.store.record_fetch_error(e.clone());
                    return ProbeOutcome::Failed(e);
                }
            };

            // Observers see the error go away before the user state changes.
            self.store.clear_fetch_error();

            match decode(&response).and_then(AuthResponse::into_status) {
                Ok(AuthStatus::Authenticated(session)) => {
                    let user = session.user.clone();
                    log::info!("signed in as {}", user.email);
                    self.store.set_session(Some(session));
                    ProbeOutcome::Authenticated(user)
                }
                Ok(AuthStatus::Anonymous { .. }) => {
                    self.store.set_session(None);
                    ProbeOutcome::Anonymous
                }
                Err(e) => {
                    log::warn!("ignoring session probe response: {e}");
                    self.store.mark_settled();
                    ProbeOutcome::Malformed(e)
                }
            }
        }
    }

    /// Start sign-in: follow the backend's `sign_in_url` if it issues one,
    /// otherwise adopt the session it reports.
    ///
    /// A failed request is logged and returned; the last fetch error belongs
    /// to the probe alone.
    pub fn sign_in(&self) -> impl Future<Output = SignInOutcome> + '_ {
        let generation = self.lifecycle.current();
        async move {
            let result = self.gateway.request(Method::Get, &self.config.auth_endpoint).await;
            if !self.still_current(generation, "sign-in") {
                return SignInOutcome::Discarded;
            }

            let response = match result {
                Ok(response) => response,
                Err(e) => {
                    log::warn!("sign-in request failed: {e}");
                    return SignInOutcome::Failed(e);
                }
            };

            let mut body = match decode(&response) {
                Ok(body) => body,
                Err(e) => {
                    log::warn!("ignoring sign-in response: {e}");
                    return SignInOutcome::Malformed(e);
                }
            };

            if let Some(sign_in_url) = body.sign_in_url.take() {
                let target = self.config.rewrite_sign_in_url(&sign_in_url);
                self.navigator.navigate_to(&target);
                return SignInOutcome::Redirected(target);
            }

            match body.into_status() {
                Ok(AuthStatus::Authenticated(session)) => {
                    let user = session.user.clone();
                    self.store.clear_fetch_error();
                    self.store.set_session(Some(session));
                    SignInOutcome::Authenticated(user)
                }
                Ok(AuthStatus::Anonymous { .. }) => {
                    self.store.clear_fetch_error();
                    self.store.set_session(None);
                    SignInOutcome::Anonymous
                }
                Err(e) => {
                    log::warn!("ignoring sign-in response: {e}");
                    SignInOutcome::Malformed(e)
                }
            }
        }
    }

    /// End the session with `POST <sign_out_url>` and forget it locally on success.
    ///
    /// The endpoint and generation are read when this is called.
    pub fn sign_out(&self) -> impl Future<Output = SignOutOutcome> + '_ {
        let endpoint = self.store.snapshot().sign_out_endpoint().map(str::to_owned);
        let generation = self.lifecycle.current();
        async move {
            let Some(endpoint) = endpoint else {
                log::debug!("sign-out requested without a session");
                return SignOutOutcome::NotSignedIn;
            };

            let result = self.gateway.request(Method::Post, &endpoint).await;
            if !self.still_current(generation, "sign-out") {
                return SignOutOutcome::Discarded;
            }

            match result {
                Ok(response) => {
                    log::info!("signed out (status {})", response.status);
                    self.store.set_session(None);
                    SignOutOutcome::SignedOut
                }
                Err(e) => {
                    log::warn!("sign-out failed: {e}");
                    SignOutOutcome::Failed(e)
                }
            }
        }
    }

    fn still_current(&self, generation: Generation, operation: &str) -> bool {
        if self.lifecycle.is_current(generation) {
            return true;
        }
        log::debug!(
            "dropping {operation} result from generation {} (now {})",
            generation.value(),
            self.lifecycle.current().value()
        );
        false
    }
}

fn decode(response: &HttpResponse) -> Result<AuthResponse, FetchError> {
    response.json::<AuthResponse>()
}
