use auth_functions::{AuthError, FunctionEvent, FunctionName, Invoker};
use serde_json::{json, Value};

fn login_event(email: &str, password: &str) -> FunctionEvent {
    FunctionEvent::post(json!({ "email": email, "password": password }).to_string())
}

#[tokio::test]
async fn test_login_accepts_demo_account() {
    let invoker = Invoker::new(FunctionName::LoginUser.handler());

    let resp = invoker
        .run(login_event("test@email.com", "password123"))
        .await
        .unwrap();

    assert_eq!(resp.status_code, 200);
    let body: Value = serde_json::from_str(&resp.body).unwrap();
    assert_eq!(
        body,
        json!({ "message": "Login successful!", "token": "fake-jwt-token" })
    );
}

#[tokio::test]
async fn test_login_rejects_other_pairs() {
    let invoker = Invoker::new(FunctionName::LoginUser.handler());
    let pairs = [
        ("test@email.com", "wrong"),
        ("other@email.com", "password123"),
        ("Test@Email.com", "password123"),
        ("", ""),
    ];

    for (email, password) in pairs {
        let resp = invoker.run(login_event(email, password)).await.unwrap();
        assert_eq!(resp.status_code, 401, "{} / {}", email, password);
        let body: Value = serde_json::from_str(&resp.body).unwrap();
        assert_eq!(body, json!({ "message": "Invalid credentials" }));
    }
}

#[tokio::test]
async fn test_login_missing_fields_are_invalid_credentials() {
    let invoker = Invoker::new(FunctionName::LoginUser.handler());

    for body in [r#"{}"#, r#"{"email":"test@email.com"}"#, r#"{"password":"password123"}"#] {
        let resp = invoker.run(FunctionEvent::post(body)).await.unwrap();
        assert_eq!(resp.status_code, 401, "body: {}", body);
    }
}

#[tokio::test]
async fn test_login_non_post_methods() {
    let invoker = Invoker::new(FunctionName::LoginUser.handler());

    for method in ["GET", "PUT", "DELETE", "PATCH", "OPTIONS", "post", ""] {
        let event = FunctionEvent::new(
            method,
            Some(r#"{"email":"test@email.com","password":"password123"}"#.to_string()),
        );
        let resp = invoker.run(event).await.unwrap();
        assert_eq!(resp.status_code, 405, "method: {:?}", method);
        assert_eq!(resp.body, "Method Not Allowed");
    }
}

#[tokio::test]
async fn test_login_malformed_json_is_an_error() {
    let invoker = Invoker::new(FunctionName::LoginUser.handler());

    let err = invoker
        .run(FunctionEvent::post("{email: test@email.com}"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::MalformedBody(_)));
}

#[tokio::test]
async fn test_login_is_idempotent() {
    let invoker = Invoker::new(FunctionName::LoginUser.handler());

    let first = invoker
        .run(login_event("test@email.com", "password123"))
        .await
        .unwrap();
    let second = invoker
        .run(login_event("test@email.com", "password123"))
        .await
        .unwrap();
    assert_eq!(first, second);

    let bad_first = invoker.run(login_event("x", "y")).await.unwrap();
    let bad_second = invoker.run(login_event("x", "y")).await.unwrap();
    assert_eq!(bad_first, bad_second);
}

#[tokio::test]
async fn test_login_huge_numbers_and_deep_nesting_are_invalid_credentials() {
    let invoker = Invoker::new(FunctionName::LoginUser.handler());
    let deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
    let bodies = [
        r#"{"email":"test@email.com","password":1e400}"#.to_string(),
        deep.clone(),
        format!(r#"{{"email":"test@email.com","password":{}}}"#, deep),
    ];

    for body in bodies {
        let resp = invoker.run(FunctionEvent::post(body)).await.unwrap();
        assert_eq!(resp.status_code, 401);
    }

    // Unrelated exotic members do not get in the way of a valid login
    let resp = invoker
        .run(FunctionEvent::post(format!(
            r#"{{"n":1e400,"email":"test@email.com","nested":{},"password":"password123"}}"#,
            deep
        )))
        .await
        .unwrap();
    assert_eq!(resp.status_code, 200);
}
