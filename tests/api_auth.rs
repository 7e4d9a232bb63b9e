//! Integration tests per gli endpoints di autenticazione
//!
//! Test per:
//! - POST /v1/register
//! - POST /v1/login

mod common;

#[cfg(test)]
mod auth_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use item_server::auth::decode_jwt;
    use item_server::repositories::CredentialStore;
    use item_server::session::SessionCache;
    use serde_json::Value;

    fn credentials<'a>(username: &'a str, password: &'a str) -> [(&'static str, &'a str); 2] {
        [("username", username), ("password", password)]
    }

    // ============================================================
    // Test per POST /v1/register - register_user
    // ============================================================

    #[tokio::test]
    async fn test_register_success() {
        let ctx = create_test_context();

        let response = ctx
            .server
            .post("/v1/register")
            .form(&credentials("newuser", "Password123"))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "success");
        assert_eq!(body["description"], "user registered");

        let stored = ctx.users.find_by_username("newuser").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "Password123");
        assert!(stored.verify_password("Password123").unwrap());
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let ctx = create_test_context();

        ctx.server
            .post("/v1/register")
            .form(&credentials("alice", "first"))
            .await
            .assert_status_ok();

        let response = ctx
            .server
            .post("/v1/register")
            .form(&credentials("alice", "second"))
            .await;

        response.assert_status_conflict();
        let body: Value = response.json();
        assert_eq!(body["status"], "failed");
        assert_eq!(ctx.users.len(), 1);
    }

    #[tokio::test]
    async fn test_register_missing_password() {
        let ctx = create_test_context();

        let response = ctx
            .server
            .post("/v1/register")
            .form(&[("username", "alice")])
            .await;

        response.assert_status_bad_request();
        assert!(ctx.users.is_empty());
    }

    #[tokio::test]
    async fn test_register_password_too_long() {
        let ctx = create_test_context();
        let password = format!("{}correct", "a".repeat(72));

        let response = ctx
            .server
            .post("/v1/register")
            .form(&credentials("alice", &password))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["status"], "failed");
        assert!(ctx.users.is_empty());
    }

    #[tokio::test]
    async fn test_register_json_body_rejected() {
        let ctx = create_test_context();

        let response = ctx
            .server
            .post("/v1/register")
            .json(&serde_json::json!({"username": "alice", "password": "pw"}))
            .await;

        response.assert_status_bad_request();
        assert!(ctx.users.is_empty());
    }

    #[tokio::test]
    async fn test_register_wrong_method() {
        let ctx = create_test_context();

        let response = ctx.server.get("/v1/register").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    // ============================================================
    // Test per POST /v1/login - login_user
    // ============================================================

    #[tokio::test]
    async fn test_login_success_caches_token() {
        let ctx = create_test_context();

        ctx.server
            .post("/v1/register")
            .form(&credentials("logintest", "TestLogin123"))
            .await
            .assert_status_ok();

        let response = ctx
            .server
            .post("/v1/login")
            .form(&credentials("logintest", "TestLogin123"))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "success");
        assert_eq!(body["description"], "ok");
        let token = body["access_token"].as_str().expect("access_token missing");

        // il token in cache è esattamente quello restituito al client
        let cached = ctx.sessions.fetch("logintest").await.unwrap();
        assert_eq!(cached.as_deref(), Some(token));
        assert_eq!(
            ctx.state.auth.session_token("logintest").await.unwrap().as_deref(),
            Some(token)
        );

        let claims = decode_jwt(token, TEST_JWT_SECRET).unwrap().claims;
        assert_eq!(claims.sub, "logintest");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let ctx = create_test_context();
        ctx.users
            .register("alice", "password123", TEST_BCRYPT_COST)
            .await
            .unwrap();

        let response = ctx
            .server
            .post("/v1/login")
            .form(&credentials("alice", "wrongpassword"))
            .await;

        // non è un errore HTTP: 200 con status "failed"
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "failed");
        assert_eq!(body["description"], "wrong password");
        assert!(body.get("access_token").is_none());
        assert!(ctx.sessions.is_empty());
    }

    #[tokio::test]
    async fn test_login_long_password_sharing_prefix() {
        let ctx = create_test_context();
        let prefix = "a".repeat(71);
        ctx.users
            .register("alice", &prefix, TEST_BCRYPT_COST)
            .await
            .unwrap();

        let response = ctx
            .server
            .post("/v1/login")
            .form(&credentials("alice", &format!("{prefix}WRONG")))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "failed");
        assert_eq!(body["description"], "wrong password");
        assert!(ctx.sessions.is_empty());
    }

    #[tokio::test]
    async fn test_login_nonexistent_user() {
        let ctx = create_test_context();

        let response = ctx
            .server
            .post("/v1/login")
            .form(&credentials("nonexistent", "password123"))
            .await;

        response.assert_status_unauthorized();
        let body: Value = response.json();
        assert_eq!(body["status"], "failed");
        assert!(ctx.sessions.is_empty());
    }

    #[tokio::test]
    async fn test_login_overwrites_previous_session() {
        let ctx = create_test_context();
        ctx.users
            .register("alice", "password123", TEST_BCRYPT_COST)
            .await
            .unwrap();

        for _ in 0..2 {
            let response = ctx
                .server
                .post("/v1/login")
                .form(&credentials("alice", "password123"))
                .await;
            response.assert_status_ok();
            let body: Value = response.json();
            let token = body["access_token"].as_str().unwrap().to_string();
            assert_eq!(ctx.sessions.fetch("alice").await.unwrap(), Some(token));
        }
        assert_eq!(ctx.sessions.len(), 1);
    }

    #[tokio::test]
    async fn test_login_empty_form() {
        let ctx = create_test_context();

        let response = ctx
            .server
            .post("/v1/login")
            .form(&credentials("", ""))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_login_wrong_method() {
        let ctx = create_test_context();

        let response = ctx.server.get("/v1/login").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
