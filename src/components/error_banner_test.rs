use super::*;
use crate::net::types::{Session, User};

#[test]
fn describe_status_error_includes_code_and_text() {
    let error = FetchError::Status {
        status: 500,
        message: "Internal Server Error".to_owned(),
    };
    assert_eq!(describe(&error), "The server responded with 500 Internal Server Error.");
}

#[test]
fn describe_network_error_mentions_reachability() {
    let error = FetchError::Network("connection refused".to_owned());
    assert_eq!(describe(&error), "The server could not be reached (connection refused).");
}

#[test]
fn describe_malformed_error() {
    let error = FetchError::Malformed("expected value at line 1 column 1".to_owned());
    assert!(describe(&error).starts_with("The server sent an unexpected response"));
}

// =============================================================
// banner_message
// =============================================================

#[test]
fn no_banner_without_fetch_error() {
    assert_eq!(banner_message(&SessionSnapshot::default()), None);

    let signed_in = SessionSnapshot {
        session: Some(Session {
            user: User {
                email: "a@b.com".to_owned(),
                is_superuser: false,
            },
            sign_out_url: "/logout".to_owned(),
        }),
        last_fetch_error: None,
        probe_settled: true,
    };
    assert_eq!(banner_message(&signed_in), None);
}

#[test]
fn banner_describes_recorded_fetch_error() {
    let snapshot = SessionSnapshot {
        last_fetch_error: Some(FetchError::Status {
            status: 503,
            message: "Service Unavailable".to_owned(),
        }),
        probe_settled: true,
        ..SessionSnapshot::default()
    };
    assert_eq!(
        banner_message(&snapshot).as_deref(),
        Some("The server responded with 503 Service Unavailable.")
    );
}
