use super::*;

#[test]
fn check_status_accepts_2xx() {
    assert_eq!(check_status(200, "OK"), Ok(()));
    assert_eq!(check_status(204, "No Content"), Ok(()));
    assert_eq!(check_status(299, ""), Ok(()));
}

#[test]
fn check_status_rejects_non_2xx_with_status_text() {
    assert_eq!(
        check_status(500, "Internal Server Error"),
        Err(FetchError::Status {
            status: 500,
            message: "Internal Server Error".to_owned(),
        })
    );
    assert!(check_status(302, "Found").is_err());
    assert!(check_status(403, "Forbidden").is_err());
}

#[test]
fn check_status_fills_in_blank_status_text() {
    let err = check_status(502, "  ").unwrap_err();
    assert_eq!(err.message(), "request failed");
}

#[test]
fn status_code_is_absent_for_network_failures() {
    assert_eq!(FetchError::Network("offline".to_owned()).status_code(), None);
    assert_eq!(FetchError::Malformed("eof".to_owned()).status_code(), None);
    let err = FetchError::Status {
        status: 401,
        message: "Unauthorized".to_owned(),
    };
    assert_eq!(err.status_code(), Some(401));
}

#[test]
fn display_formats_each_variant() {
    assert_eq!(FetchError::Network("offline".to_owned()).to_string(), "network error: offline");
    assert_eq!(
        FetchError::Status {
            status: 500,
            message: "Internal Server Error".to_owned(),
        }
        .to_string(),
        "500 Internal Server Error"
    );
    assert_eq!(FetchError::Malformed("eof".to_owned()).to_string(), "malformed response: eof");
}

#[test]
fn json_decodes_body() {
    #[derive(serde::Deserialize)]
    struct Body {
        ok: bool,
    }
    let resp = HttpResponse::new(200, r#"{"ok":true}"#);
    assert!(resp.json::<Body>().unwrap().ok);
}

#[test]
fn json_reports_malformed_body() {
    let resp = HttpResponse::new(200, "not json");
    assert!(matches!(resp.json::<serde_json::Value>(), Err(FetchError::Malformed(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_gateway_is_unavailable_off_the_browser() {
    let result = futures::executor::block_on(BrowserGateway.request(Method::Get, "/api/auth/"));
    let err = result.unwrap_err();
    assert!(err.is_network());
    assert_eq!(err.message(), "not available on server");
}

#[test]
fn method_names() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
}
