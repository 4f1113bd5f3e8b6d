//! Shared helpers for the HTTP integration tests
//!
//! Every test gets its own router over an in-memory database and drives it
//! with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::io::Cursor;

use axum::Router;
use axum::body::Body;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use kiosk_server::{Config, ServerState, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "Passw0rd";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub text: String,
    pub json: Value,
}

impl TestResponse {
    /// Value of a cookie set by this response
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.set_cookie_header(name)
            .and_then(|h| h.split(';').next().map(str::to_string))
            .and_then(|pair| pair.split_once('=').map(|(_, v)| v.to_string()))
    }

    /// Full `Set-Cookie` header for a cookie
    pub fn set_cookie_header(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with(&format!("{name}=")))
            .map(str::to_string)
    }
}

/// Cookies sent with a request
#[derive(Default, Clone)]
pub struct Cookies {
    pub session: Option<String>,
    pub device: Option<String>,
}

impl Cookies {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn admin(token: &str) -> Self {
        Self {
            session: Some(token.to_string()),
            device: None,
        }
    }

    pub fn device(token: &str) -> Self {
        Self {
            session: None,
            device: Some(token.to_string()),
        }
    }

    fn header(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(t) = &self.session {
            parts.push(format!("token={t}"));
        }
        if let Some(t) = &self.device {
            parts.push(format!("device-token={t}"));
        }
        (!parts.is_empty()).then(|| parts.join("; "))
    }
}

pub async fn app() -> Router {
    let mut config = Config::with_overrides("./target/kiosk-test", 0);
    config.environment = "development".into();
    let state = ServerState::in_memory(config).await.unwrap();
    build_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8_lossy(&bytes).to_string();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    TestResponse {
        status,
        headers,
        text,
        json,
    }
}

pub async fn post_json(app: &Router, path: &str, body: Value, cookies: &Cookies) -> TestResponse {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookies.header() {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    send(app, request).await
}

pub async fn get(app: &Router, path: &str) -> TestResponse {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    send(app, request).await
}

/// Create the admin account and log in, returning the session token
pub async fn admin_session(app: &Router) -> String {
    let credentials = json!({ "username": USERNAME, "password": PASSWORD });
    let signup = post_json(
        app,
        "/api/auth",
        json!({ "intent": "signup", "credentials": credentials }),
        &Cookies::none(),
    )
    .await;
    assert_eq!(signup.status, StatusCode::OK, "{}", signup.text);

    let login = post_json(
        app,
        "/api/auth",
        json!({ "intent": "login", "credentials": credentials }),
        &Cookies::none(),
    )
    .await;
    assert_eq!(login.status, StatusCode::OK, "{}", login.text);
    login.cookie("token").unwrap()
}

/// Open the pairing window and pair a new device, returning its token
pub async fn pair_device(app: &Router, admin: &str, device_type: &str) -> String {
    let open = post_json(
        app,
        "/api/device",
        json!({ "intent": "open" }),
        &Cookies::admin(admin),
    )
    .await;
    assert_eq!(open.status, StatusCode::OK, "{}", open.text);

    let pair = post_json(
        app,
        "/api/device",
        json!({ "intent": "pair", "deviceType": device_type }),
        &Cookies::none(),
    )
    .await;
    assert_eq!(pair.status, StatusCode::OK, "{}", pair.text);
    pair.cookie("device-token").unwrap()
}

/// Add a menu object as admin, returning its id
pub async fn add_object(app: &Router, admin: &str, object: Value) -> String {
    let response = post_json(
        app,
        "/api/menu",
        json!({ "intent": "add", "object": object }),
        &Cookies::admin(admin),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text);
    response.json["id"].as_str().unwrap().to_string()
}

/// Base64 PNG of a solid square
pub fn png_base64(width: u32, height: u32) -> String {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([240, 180, 20]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
        .unwrap();
    STANDARD.encode(buffer)
}
