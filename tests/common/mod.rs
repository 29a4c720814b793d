#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use swimmer_registry::{Config, RegistryState};
use tower::ServiceExt;
use wiremock::MockServer;

pub const WIKI_PATH: &str = "/w/api.php";

/// Router backed by a throwaway SQLite file and a mocked encyclopedia.
pub struct TestApp {
    pub router: Router,
    pub state: RegistryState,
    pub wiki: MockServer,
    db_path: PathBuf,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    pub async fn spawn_with(tweak: impl FnOnce(&mut Config)) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut db_path = std::env::temp_dir();
        db_path.push(format!(
            "swimmer-registry-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let wiki = MockServer::start().await;

        let mut cfg = Config::default();
        cfg.database_url = format!("sqlite:{}", db_path.display());
        cfg.wiki_api_url = format!("{}{}", wiki.uri(), WIKI_PATH);
        cfg.fetch_retries = 0;
        tweak(&mut cfg);

        let state = swimmer_registry::build_state(&cfg)
            .await
            .expect("failed to build state");
        let router = swimmer_registry::registry_router(state.clone());

        Self {
            router,
            state,
            wiki,
            db_path,
        }
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, String) {
        let resp = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("request failed");
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let body = String::from_utf8(body.to_vec()).expect("response body was not utf-8");
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, String) {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn put_json(&self, uri: &str, json: &str) -> (StatusCode, String) {
        self.send(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> (StatusCode, String) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .expect("failed to build request"),
        )
        .await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.db_path);
    }
}

/// A `action=query` body holding a single page.
pub fn single_page(title: &str, extract: &str) -> serde_json::Value {
    serde_json::json!({
        "batchcomplete": "",
        "query": {
            "pages": {
                "736": { "pageid": 736, "ns": 0, "title": title, "extract": extract }
            }
        }
    })
}
