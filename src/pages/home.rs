//! Start page.
//!
//! Shows where the session probe stands so a visitor is never left guessing
//! whether the console knows who they are.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::app::ConsoleController;
use crate::state::session::{SessionPhase, SessionSnapshot};

/// One-line session summary for the start page.
#[must_use]
pub fn session_summary(snapshot: &SessionSnapshot) -> String {
    match (snapshot.phase(), snapshot.current_user()) {
        (SessionPhase::Authenticated, Some(user)) if user.is_superuser => {
            format!("Signed in as {} (superuser).", user.email)
        }
        (SessionPhase::Authenticated, Some(user)) => format!("Signed in as {}.", user.email),
        (SessionPhase::Pending, _) => "Checking your session…".to_owned(),
        (SessionPhase::Failed, _) => "Your session could not be checked.".to_owned(),
        _ => "Sign in to manage API tokens and see your uploads.".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<ReadSignal<SessionSnapshot>>();
    let title = expect_context::<ConsoleController>().config().site_title.clone();

    view! {
        <div class="content">
            <h1 class="title">{title}</h1>
            <p>{move || session_summary(&session.get())}</p>
        </div>
    }
}
