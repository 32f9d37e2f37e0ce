//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One store per shell. `SessionController` is its only writer; the navigation
//! bar, error banner and pages read it through subscriptions that the shell
//! bridges into a Leptos signal.
//!
//! DESIGN
//! ======
//! Every write builds a new [`SessionSnapshot`] and swaps it in whole, then
//! notifies subscribers with the lock released. Readers never see a user
//! without its sign-out endpoint, and callbacks may read the store again.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::net::http::FetchError;
use crate::net::types::{Session, User};

/// Coarse lifecycle of the session as seen by the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// The mount-time probe has not resolved yet.
    Pending,
    Authenticated,
    Anonymous,
    /// No session and the last probe failed.
    Failed,
}

/// Immutable view of the session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session: Option<Session>,
    pub last_fetch_error: Option<FetchError>,
    pub probe_settled: bool,
}

impl SessionSnapshot {
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn sign_out_endpoint(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.sign_out_url.as_str())
    }

    #[must_use]
    pub fn is_superuser(&self) -> bool {
        self.current_user().is_some_and(|u| u.is_superuser)
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (&self.session, &self.last_fetch_error) {
            (Some(_), _) => SessionPhase::Authenticated,
            (None, Some(_)) => SessionPhase::Failed,
            (None, None) if self.probe_settled => SessionPhase::Anonymous,
            (None, None) => SessionPhase::Pending,
        }
    }
}

/// Identifier handed out by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&SessionSnapshot) + Send + Sync>;

#[derive(Default)]
struct StoreInner {
    snapshot: SessionSnapshot,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Observable container of [`SessionSnapshot`].
///
/// Cloning yields another handle to the same store.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("SessionStore")
            .field("snapshot", &inner.snapshot)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot.clone()
    }

    /// Register `listener` for every subsequent replacement.
    ///
    /// The listener stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SessionSnapshot) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        Subscription {
            store: Arc::downgrade(&self.inner),
            id,
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Clear the recorded fetch error. Does nothing (and notifies nobody) if
    /// there is none.
    pub(crate) fn clear_fetch_error(&self) {
        self.replace_with(|snap| {
            if snap.last_fetch_error.is_none() {
                return false;
            }
            snap.last_fetch_error = None;
            true
        });
    }

    /// Record a failed probe. The session is left as it was.
    pub(crate) fn record_fetch_error(&self, error: FetchError) {
        self.replace_with(|snap| {
            snap.last_fetch_error = Some(error);
            snap.probe_settled = true;
            true
        });
    }

    /// Replace the session (user and sign-out endpoint together).
    pub(crate) fn set_session(&self, session: Option<Session>) {
        self.replace_with(|snap| {
            if snap.probe_settled && snap.session == session {
                return false;
            }
            snap.session = session;
            snap.probe_settled = true;
            true
        });
    }

    /// Note that a probe resolved without changing the session.
    pub(crate) fn mark_settled(&self) {
        self.replace_with(|snap| {
            if snap.probe_settled {
                return false;
            }
            snap.probe_settled = true;
            true
        });
    }

    /// Build the next snapshot from a copy of the current one; publish it if
    /// `edit` reports a change.
    fn replace_with<F>(&self, edit: F)
    where
        F: FnOnce(&mut SessionSnapshot) -> bool,
    {
        let (next, listeners) = {
            let mut inner = self.lock();
            let mut next = inner.snapshot.clone();
            if !edit(&mut next) {
                return;
            }
            inner.snapshot = next.clone();
            let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (next, listeners)
        };
        for listener in listeners {
            listener(&next);
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// RAII guard for a store listener.
#[derive(Debug)]
pub struct Subscription {
    store: Weak<Mutex<StoreInner>>,
    id: SubscriptionId,
}

impl Subscription {
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            let mut inner = store.lock().unwrap_or_else(PoisonError::into_inner);
            inner.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
