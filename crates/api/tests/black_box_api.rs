use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use reqwest::StatusCode;
use serde_json::json;

use vulnapi_auth::JwtClaims;
use vulnapi_core::AppConfig;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
    // Keep the tempdir alive for the lifetime of the server.
    _db_dir: tempfile::TempDir,
}

impl TestServer {
    async fn spawn() -> Self {
        let db_dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            database_url: format!("sqlite://{}/app.db", db_dir.path().display()),
            ..AppConfig::default()
        };

        // Build the same router as prod, but bind to an ephemeral port.
        let app = vulnapi_api::app::build_app(config)
            .await
            .expect("failed to build app");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            handle,
            _db_dir: db_dir,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn login_issues_a_decodable_hs256_token() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/login", srv.base_url))
        .basic_auth("admin", Some("admin123"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["token_type"], "bearer");

    // The signing secret is hardcoded in the default config, so anyone can
    // decode (and forge) these tokens.
    let token = body["access_token"].as_str().unwrap();
    let claims = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(vulnapi_core::config::DEFAULT_JWT_SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .expect("token should decode with the published secret")
    .claims;

    assert_eq!(claims.sub, "admin");
    assert_eq!(claims.role, "admin");
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/login", srv.base_url))
        .basic_auth("admin", Some("not-the-password"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(format!("{}/login", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn comment_injection_in_the_username_bypasses_the_password() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/login", srv.base_url))
        .basic_auth("admin' --", Some("anything"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["access_token"].as_str().is_some());
}

#[tokio::test]
async fn search_injection_returns_every_post() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // A narrow search matches one seeded post.
    let res = client
        .get(format!("{}/posts/search/", srv.base_url))
        .query(&[("query", "Welcome")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let narrow: serde_json::Value = res.json().await.unwrap();
    assert_eq!(narrow.as_array().unwrap().len(), 1);

    // The classic tautology payload matches the whole table.
    let res = client
        .get(format!("{}/posts/search/", srv.base_url))
        .query(&[("query", "' OR 1=1 --")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let all: serde_json::Value = res.json().await.unwrap();
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn any_authenticated_user_can_list_all_accounts() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Unauthenticated is still rejected...
    let res = client
        .get(format!("{}/admin/users/", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // ...but the plain "user" role gets the admin listing just fine.
    let res = client
        .get(format!("{}/admin/users/", srv.base_url))
        .basic_auth("user1", Some("password123"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let usernames: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert!(usernames.contains(&"admin"));
    assert!(usernames.contains(&"user1"));
}

#[tokio::test]
async fn password_reset_needs_no_authentication_at_all() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/password/reset", srv.base_url))
        .query(&[("username", "user1"), ("new_password", "pwned")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Password for user1 has been reset");

    // The victim's old password no longer works; the attacker's does.
    let res = client
        .post(format!("{}/login", srv.base_url))
        .basic_auth("user1", Some("password123"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(format!("{}/login", srv.base_url))
        .basic_auth("user1", Some("pwned"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn user_lookup_leaks_the_plaintext_password() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/users/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["username"], "admin");
    assert_eq!(body["password"], "admin123");

    // A miss is still a 200, with the id echoed back.
    let res = client
        .get(format!("{}/users/9999", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "User with ID 9999 not found");
}

#[tokio::test]
async fn debug_config_discloses_the_signing_secret() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/debug/config", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["jwt_secret"],
        vulnapi_core::config::DEFAULT_JWT_SECRET
    );
    assert_eq!(body["debug_mode"], true);
    assert!(body["environment"].is_object());
}

#[tokio::test]
async fn register_then_login_round_trips_plaintext_credentials() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/register", srv.base_url))
        .query(&[
            ("username", "alice"),
            ("password", "1"), // no complexity rules
            ("email", "not-an-email"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "User created successfully");
    let user_id = body["user_id"].as_i64().unwrap();

    // The new row is immediately readable, password and all.
    let res = client
        .get(format!("{}/users/{}", srv.base_url, user_id))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["password"], "1");

    // Duplicate registration is the one thing that fails.
    let res = client
        .post(format!("{}/register", srv.base_url))
        .query(&[
            ("username", "alice"),
            ("password", "2"),
            ("email", "alice@example.com"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn import_accepts_unvalidated_users() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let payload = json!({
        "users": [{
            "username": "imported",
            "password": "plaintext",
            "email": "imported@example.com",
            "role": "admin"
        }]
    })
    .to_string();

    let res = client
        .post(format!("{}/import/data", srv.base_url))
        .query(&[("data", payload.as_str())])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Data imported successfully");
    assert_eq!(body["items"], 1);

    // The imported account works, self-granted admin role included.
    let res = client
        .post(format!("{}/login", srv.base_url))
        .basic_auth("imported", Some("plaintext"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Malformed JSON is echoed back as an error body, status 200.
    let res = client
        .post(format!("{}/import/data", srv.base_url))
        .query(&[("data", "{not json")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn system_check_executes_chained_shell_commands() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Default command.
    let res = client
        .get(format!("{}/system/check", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["output"].as_str().unwrap().contains("System check running"));

    // Chaining with `;` works because the string goes through `sh -c`.
    let res = client
        .get(format!("{}/system/check", srv.base_url))
        .query(&[("command", "echo first; echo second")])
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let output = body["output"].as_str().unwrap();
    assert!(output.contains("first"));
    assert!(output.contains("second"));

    // A failing command comes back as an error body with its stderr.
    let res = client
        .get(format!("{}/system/check", srv.base_url))
        .query(&[("command", "ls /definitely/not/a/path")])
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn fetch_resource_reaches_loopback_addresses() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Point the server at itself: the classic SSRF demonstration, no
    // outbound network required.
    let target = format!("{}/debug/config", srv.base_url);
    let res = client
        .get(format!("{}/fetch-resource/", srv.base_url))
        .query(&[("url", target.as_str())])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], 200);
    assert!(!body["content"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn cors_mirrors_any_origin() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/debug/config", srv.base_url))
        .header("Origin", "http://evil.example")
        .send()
        .await
        .unwrap();

    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://evil.example")
    );
}
