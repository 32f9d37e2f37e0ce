use super::*;
use crate::net::http::HttpResponse;

fn parse(body: &str) -> Result<AuthResponse, FetchError> {
    HttpResponse::new(200, body).json()
}

#[test]
fn authenticated_body_parses_into_session() {
    let body = r#"{"user":{"email":"a@b.com","is_superuser":false},"sign_out_url":"/logout"}"#;
    let status = parse(body).unwrap().into_status().unwrap();
    assert_eq!(
        status,
        AuthStatus::Authenticated(Session {
            user: User {
                email: "a@b.com".to_owned(),
                is_superuser: false,
            },
            sign_out_url: "/logout".to_owned(),
        })
    );
}

#[test]
fn anonymous_body_carries_sign_in_url() {
    let body = r#"{"sign_in_url":"http://web:8000/oidc/authenticate/"}"#;
    let status = parse(body).unwrap().into_status().unwrap();
    assert_eq!(
        status,
        AuthStatus::Anonymous {
            sign_in_url: Some("http://web:8000/oidc/authenticate/".to_owned()),
        }
    );
}

#[test]
fn empty_object_is_anonymous_without_sign_in_url() {
    let status = parse("{}").unwrap().into_status().unwrap();
    assert_eq!(status, AuthStatus::Anonymous { sign_in_url: None });
}

#[test]
fn missing_superuser_flag_defaults_to_false() {
    let body = r#"{"user":{"email":"a@b.com"},"sign_out_url":"/logout"}"#;
    let response = parse(body).unwrap();
    assert_eq!(response.user.map(|u| u.is_superuser), Some(false));
}

#[test]
fn unknown_fields_are_ignored() {
    let body = r#"{"user":{"email":"a@b.com","is_superuser":true,"permissions":[]},"sign_out_url":"/logout","extra":1}"#;
    let status = parse(body).unwrap().into_status().unwrap();
    assert!(matches!(status, AuthStatus::Authenticated(ref s) if s.user.is_superuser));
}

#[test]
fn user_without_sign_out_url_is_malformed() {
    let body = r#"{"user":{"email":"a@b.com","is_superuser":false}}"#;
    let err = parse(body).unwrap().into_status().unwrap_err();
    assert!(matches!(err, FetchError::Malformed(_)));
}

#[test]
fn non_object_body_is_malformed() {
    assert!(matches!(parse("[1,2,3]"), Err(FetchError::Malformed(_))));
    assert!(matches!(parse("<html>"), Err(FetchError::Malformed(_))));
}

#[test]
fn user_without_email_is_malformed() {
    let body = r#"{"user":{"is_superuser":true},"sign_out_url":"/logout"}"#;
    assert!(matches!(parse(body), Err(FetchError::Malformed(_))));
}
