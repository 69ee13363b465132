use super::*;

#[test]
fn api_urls_carry_prefix() {
    assert_eq!(api_url("/auth/login"), "/api/auth/login");
    assert_eq!(user_path("u1"), "/api/users/u1");
    assert_eq!(resume_upload_path("u1"), "/api/auth/upload-resume/u1");
    assert_eq!(user_stats_path("u1"), "/api/statistics/user/u1");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok123"), "Bearer tok123");
}

#[test]
fn server_error_extracts_detail_field() {
    let err = server_error(401, r#"{"detail": "Invalid email or password"}"#);
    assert_eq!(
        err,
        ApiError::Server {
            status: 401,
            message: "Invalid email or password".to_owned(),
        }
    );
}

#[test]
fn server_error_falls_back_to_error_field() {
    let err = server_error(500, r#"{"error": "database unavailable"}"#);
    assert_eq!(
        err,
        ApiError::Server {
            status: 500,
            message: "database unavailable".to_owned(),
        }
    );
}

#[test]
fn server_error_prefers_detail_over_error() {
    let err = server_error(400, r#"{"detail": "primary", "error": "secondary"}"#);
    assert!(matches!(err, ApiError::Server { message, .. } if message == "primary"));
}

#[test]
fn server_error_handles_unparseable_body() {
    let err = server_error(502, "<html>Bad Gateway</html>");
    assert_eq!(
        err,
        ApiError::Server {
            status: 502,
            message: "Request failed with status 502".to_owned(),
        }
    );
}

#[test]
fn server_error_handles_structured_validation_detail() {
    // Validation failures ship `detail` as a list, not a string.
    let body = r#"{"detail": [{"loc": ["body", "email"], "msg": "field required"}]}"#;
    let err = server_error(422, body);
    assert!(matches!(
        err,
        ApiError::Server { status: 422, message } if message == "Request failed with status 422"
    ));
}

#[test]
fn error_display_is_user_presentable() {
    let rejected = ApiError::Server {
        status: 401,
        message: "Invalid email or password".to_owned(),
    };
    assert_eq!(rejected.to_string(), "Invalid email or password");
    assert_eq!(
        ApiError::Network.to_string(),
        "Network error. Check your connection and try again."
    );
}
