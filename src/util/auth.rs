//! Shared access-gating helpers for pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages gate their content on the session the same way, so the notice shown
//! in place of a gated page is decided here from the session snapshot alone.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::session::{SessionPhase, SessionSnapshot};

/// Who may see a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Anyone,
    SignedIn,
    Superuser,
}

pub const CHECKING_SESSION: &str = "Checking your session…";
pub const SIGN_IN_REQUIRED: &str = "You need to sign in to see this page.";
pub const SUPERUSER_REQUIRED: &str = "You need to be a superuser to see this page.";

/// Notice to show instead of page content, or `None` if access is granted.
#[must_use]
pub fn access_notice(snapshot: &SessionSnapshot, access: Access) -> Option<&'static str> {
    if access == Access::Anyone {
        return None;
    }
    match snapshot.current_user() {
        None if snapshot.phase() == SessionPhase::Pending => Some(CHECKING_SESSION),
        None => Some(SIGN_IN_REQUIRED),
        Some(user) if access == Access::Superuser && !user.is_superuser => Some(SUPERUSER_REQUIRED),
        Some(_) => None,
    }
}

/// Render `content` when the current session satisfies `access`, a notice otherwise.
pub fn gated<F, V>(access: Access, content: F) -> impl IntoView
where
    F: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let session = expect_context::<ReadSignal<SessionSnapshot>>();
    move || match access_notice(&session.get(), access) {
        Some(notice) => view! { <div class="notification is-warning">{notice}</div> }.into_any(),
        None => content().into_any(),
    }
}
