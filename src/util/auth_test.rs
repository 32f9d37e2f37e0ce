use super::*;
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

fn anonymous() -> SessionSnapshot {
    SessionSnapshot {
        probe_settled: true,
        ..SessionSnapshot::default()
    }
}

#[test]
fn anyone_is_always_allowed() {
    assert_eq!(access_notice(&SessionSnapshot::default(), Access::Anyone), None);
    assert_eq!(access_notice(&anonymous(), Access::Anyone), None);
}

#[test]
fn pending_probe_shows_checking_notice() {
    assert_eq!(
        access_notice(&SessionSnapshot::default(), Access::SignedIn),
        Some(CHECKING_SESSION)
    );
}

#[test]
fn anonymous_needs_to_sign_in() {
    assert_eq!(access_notice(&anonymous(), Access::SignedIn), Some(SIGN_IN_REQUIRED));
    assert_eq!(access_notice(&anonymous(), Access::Superuser), Some(SIGN_IN_REQUIRED));
}

#[test]
fn failed_probe_without_user_needs_sign_in() {
    let snapshot = SessionSnapshot {
        last_fetch_error: Some(crate::net::http::FetchError::Network("offline".to_owned())),
        probe_settled: true,
        ..SessionSnapshot::default()
    };
    assert_eq!(access_notice(&snapshot, Access::SignedIn), Some(SIGN_IN_REQUIRED));
}

#[test]
fn signed_in_user_passes_signed_in_gate() {
    assert_eq!(access_notice(&signed_in(false), Access::SignedIn), None);
}

#[test]
fn regular_user_is_blocked_from_superuser_pages() {
    assert_eq!(access_notice(&signed_in(false), Access::Superuser), Some(SUPERUSER_REQUIRED));
    assert_eq!(access_notice(&signed_in(true), Access::Superuser), None);
}
