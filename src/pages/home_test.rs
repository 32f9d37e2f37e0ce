use super::*;
use crate::net::http::FetchError;
use crate::net::types::{Session, User};

fn signed_in(is_superuser: bool) -> SessionSnapshot {
    SessionSnapshot {
        session: Some(Session {
            user: User {
                email: "a@b.com".to_owned(),
                is_superuser,
            },
            sign_out_url: "/logout".to_owned(),
        }),
        last_fetch_error: None,
        probe_settled: true,
    }
}

#[test]
fn summary_while_probe_pending() {
    assert_eq!(session_summary(&SessionSnapshot::default()), "Checking your session…");
}

#[test]
fn summary_for_signed_in_users() {
    assert_eq!(session_summary(&signed_in(false)), "Signed in as a@b.com.");
    assert_eq!(session_summary(&signed_in(true)), "Signed in as a@b.com (superuser).");
}

#[test]
fn summary_for_anonymous_visitor() {
    let snapshot = SessionSnapshot {
        probe_settled: true,
        ..SessionSnapshot::default()
    };
    assert_eq!(
        session_summary(&snapshot),
        "Sign in to manage API tokens and see your uploads."
    );
}

#[test]
fn summary_after_failed_probe() {
    let snapshot = SessionSnapshot {
        last_fetch_error: Some(FetchError::Status {
            status: 500,
            message: "Internal Server Error".to_owned(),
        }),
        probe_settled: true,
        ..SessionSnapshot::default()
    };
    assert_eq!(session_summary(&snapshot), "Your session could not be checked.");
}
