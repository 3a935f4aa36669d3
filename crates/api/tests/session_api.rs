use std::sync::Arc;

use chrono::Duration as ChronoDuration;
use reqwest::StatusCode;
use serde_json::json;

use tillpoint_api::config::ApiConfig;
use tillpoint_users::InMemoryUserDirectory;

const SECRET: &str = "black-box-test-secret";

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let config = ApiConfig {
            token_secret: SECRET.to_string(),
            session_ttl: ChronoDuration::hours(1),
            secure_cookies: false,
            bind_addr: "127.0.0.1:0".to_string(),
        };

        // Same router as prod, demo directory, ephemeral port.
        let app = tillpoint_api::app::build_app(&config, Arc::new(InMemoryUserDirectory::demo()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn cookie_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap()
}

async fn login(client: &reqwest::Client, base_url: &str, email: &str) -> reqwest::Response {
    client
        .post(format!("{}/auth/login", base_url))
        .json(&json!({ "email": email, "password": "pos" }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_is_open() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn verify_without_cookie_is_401() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/auth/verify", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn login_sets_cookie_and_verify_reports_the_session() {
    let srv = TestServer::spawn().await;
    let client = cookie_client();

    let res = login(&client, &srv.base_url, "ada@tillpoint.test").await;
    assert_eq!(res.status(), StatusCode::OK);

    let set_cookie = res
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("auth-token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["user"]["role"], "admin");

    let res = client
        .get(format!("{}/auth/verify", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user"]["email"], "ada@tillpoint.test");
    assert_eq!(body["user"]["role"], "admin");
}

#[tokio::test]
async fn bad_credentials_are_rejected_without_a_cookie() {
    let srv = TestServer::spawn().await;
    let client = cookie_client();

    let res = client
        .post(format!("{}/auth/login", srv.base_url))
        .json(&json!({ "email": "ada@tillpoint.test", "password": "nope" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().get(reqwest::header::SET_COOKIE).is_none());

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_credentials");
}

#[tokio::test]
async fn tampered_and_missing_tokens_get_the_same_401_body() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let missing = client
        .get(format!("{}/auth/verify", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    let missing_body: serde_json::Value = missing.json().await.unwrap();

    let tampered = client
        .get(format!("{}/auth/verify", srv.base_url))
        .header("cookie", "auth-token=definitely.not.valid")
        .send()
        .await
        .unwrap();
    assert_eq!(tampered.status(), StatusCode::UNAUTHORIZED);
    let tampered_body: serde_json::Value = tampered.json().await.unwrap();

    // No distinction leaks to the client.
    assert_eq!(missing_body, tampered_body);
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Valid signature, exp two hours in the past.
    let now = chrono::Utc::now().timestamp();
    let claims = json!({
        "sub": uuid::Uuid::now_v7(),
        "name": "Ada Admin",
        "email": "ada@tillpoint.test",
        "role": "admin",
        "iat": now - 10_800,
        "exp": now - 7_200,
    });
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let res = client
        .get(format!("{}/auth/verify", srv.base_url))
        .header("cookie", format!("auth-token={token}"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_route_is_gated_on_the_admin_permission() {
    let srv = TestServer::spawn().await;

    // Manager holds {read, write} but not admin.
    let manager = cookie_client();
    login(&manager, &srv.base_url, "mori@tillpoint.test").await;
    let res = manager
        .get(format!("{}/admin/rbac", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "forbidden");

    let admin = cookie_client();
    login(&admin, &srv.base_url, "ada@tillpoint.test").await;
    let res = admin
        .get(format!("{}/admin/rbac", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["roles"].as_array().unwrap().len() == 3);
}

#[tokio::test]
async fn logout_clears_the_session() {
    let srv = TestServer::spawn().await;
    let client = cookie_client();

    login(&client, &srv.base_url, "uma@tillpoint.test").await;

    let res = client
        .post(format!("{}/auth/logout", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/auth/verify", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn diagnostics_redacts_the_token_value() {
    let srv = TestServer::spawn().await;
    let client = cookie_client();

    login(&client, &srv.base_url, "ada@tillpoint.test").await;

    let res = client
        .get(format!("{}/auth/diagnostics", srv.base_url))
        .header("x-trace-probe", "1")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["session_cookie_present"], true);
    assert_eq!(body["cookies"]["auth-token"], "[REDACTED]");
    assert_eq!(body["secret_configured"], true);
    assert!(
        body["headers"]
            .as_array()
            .unwrap()
            .iter()
            .any(|h| h == "x-trace-probe")
    );
}

#[tokio::test]
async fn diagnostics_reports_a_missing_cookie() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/auth/diagnostics", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["session_cookie_present"], false);
}
