//! Banner for the last failed session probe.

#[cfg(test)]
#[path = "error_banner_test.rs"]
mod error_banner_test;

use leptos::prelude::*;

use crate::net::http::FetchError;
use crate::state::session::SessionSnapshot;

/// Human-readable description of a fetch error.
#[must_use]
pub fn describe(error: &FetchError) -> String {
    match error {
        FetchError::Status { status, message } => format!("The server responded with {status} {message}."),
        FetchError::Network(message) => format!("The server could not be reached ({message})."),
        FetchError::Malformed(message) => format!("The server sent an unexpected response ({message})."),
    }
}

/// Banner text for `snapshot`, or `None` when there is nothing to show.
#[must_use]
pub fn banner_message(snapshot: &SessionSnapshot) -> Option<String> {
    snapshot.last_fetch_error.as_ref().map(describe)
}

/// Renders nothing unless the session snapshot carries a fetch error.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let session = expect_context::<ReadSignal<SessionSnapshot>>();
    let message = Memo::new(move |_| banner_message(&session.get()));

    move || {
        message.get().map(|message| {
            view! {
                <article class="message is-danger">
                    <div class="message-header">
                        <p>"Fetch Error"</p>
                    </div>
                    <div class="message-body">{message}</div>
                </article>
            }
        })
    }
}
