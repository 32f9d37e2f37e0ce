use super::*;
use crate::net::types::{Session, User};

fn signed_in(email: &str, is_superuser: bool) -> SessionSnapshot {
    SessionSnapshot {
        session: Some(Session {
            user: User {
                email: email.to_owned(),
                is_superuser,
            },
            sign_out_url: "/logout".to_owned(),
        }),
        last_fetch_error: None,
        probe_settled: true,
    }
}

fn labels(model: &NavModel) -> Vec<&'static str> {
    model.links.iter().map(|l| l.label).collect()
}

// =============================================================
// NavModel
// =============================================================

#[test]
fn anonymous_sees_sign_in_and_no_user_management() {
    let model = NavModel::from_snapshot(&SessionSnapshot::default());
    assert_eq!(labels(&model), vec!["Home", "API Tokens", "Uploads", "Help"]);
    assert_eq!(model.action, SessionAction::SignIn);
}

#[test]
fn superuser_sees_user_management() {
    let model = NavModel::from_snapshot(&signed_in("root@b.com", true));
    assert_eq!(
        labels(&model),
        vec!["Home", "User Management", "API Tokens", "Uploads", "Help"]
    );
}

#[test]
fn regular_user_does_not_see_user_management() {
    let model = NavModel::from_snapshot(&signed_in("a@b.com", false));
    assert!(!labels(&model).contains(&"User Management"));
    assert_eq!(
        model.action,
        SessionAction::SignOut {
            email: "a@b.com".to_owned(),
        }
    );
}

#[test]
fn signed_in_user_keeps_session_action_through_probe_error() {
    let mut snapshot = signed_in("a@b.com", false);
    snapshot.last_fetch_error = Some(crate::net::http::FetchError::Network("offline".to_owned()));
    let model = NavModel::from_snapshot(&snapshot);
    assert!(matches!(model.action, SessionAction::SignOut { .. }));
}

// =============================================================
// SessionAction
// =============================================================

#[test]
fn sign_out_label_and_title_include_email() {
    let action = SessionAction::SignOut {
        email: "a@b.com".to_owned(),
    };
    assert_eq!(action.label(), "Sign Out (a@b.com)");
    assert_eq!(action.title().as_deref(), Some("Signed in as a@b.com"));
}

#[test]
fn sign_in_has_no_title() {
    assert_eq!(SessionAction::SignIn.label(), "Sign In");
    assert_eq!(SessionAction::SignIn.title(), None);
}

// =============================================================
// nav_link_class
// =============================================================

#[test]
fn home_link_is_active_only_on_root() {
    assert_eq!(nav_link_class("/", &HOME), "nav-item is-tab is-active");
    assert_eq!(nav_link_class("/uploads", &HOME), "nav-item is-tab");
}

#[test]
fn uploads_link_is_active_for_nested_upload_pages() {
    assert_eq!(nav_link_class("/uploads/upload/3", &UPLOADS), "nav-item is-tab is-active");
    assert_eq!(nav_link_class("/help", &UPLOADS), "nav-item is-tab");
}
