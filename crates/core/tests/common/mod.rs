//! In-process mock of the SUPR REST API.
//!
//! Serves the two endpoints a delivery uses on a random local port and
//! records every request so tests can assert on what was sent.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use deliver_core::SuprConfig;

/// `Authorization` header for user "deliver" and key "secret".
pub const EXPECTED_AUTH: &str = "Basic ZGVsaXZlcjpzZWNyZXQ=";

#[derive(Debug)]
pub struct ServerState {
    /// Person records, each with at least `id` and `email`.
    pub people: Vec<Value>,
    /// Status override for the person search.
    pub search_status: StatusCode,
    /// Status override for project creation.
    pub create_status: StatusCode,
    /// Name handed out for created delivery projects.
    pub delivery_name: String,
    /// Query strings received by the person search.
    pub searches: Vec<HashMap<String, String>>,
    /// Bodies received by project creation.
    pub created: Vec<Value>,
    /// Authorization headers of every request.
    pub auth_headers: Vec<Option<String>>,
}

impl Default for ServerState {
    fn default() -> Self {
        Self {
            people: Vec::new(),
            search_status: StatusCode::OK,
            create_status: StatusCode::OK,
            delivery_name: "delivery00123".to_string(),
            searches: Vec::new(),
            created: Vec::new(),
            auth_headers: Vec::new(),
        }
    }
}

type Shared = Arc<Mutex<ServerState>>;

/// A running mock SUPR server.
pub struct MockSupr {
    pub base_url: String,
    pub state: Shared,
}

impl MockSupr {
    /// Start a server on 127.0.0.1 with an ephemeral port.
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(ServerState::default()));

        let app = Router::new()
            .route("/person/search/", get(search_person))
            .route("/ngi_delivery/project/create/", post(create_project))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock SUPR");
        let addr = listener.local_addr().expect("mock SUPR address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock SUPR server");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn add_person(&self, id: u64, email: &str) {
        self.state.lock().unwrap().people.push(json!({
            "id": id,
            "first_name": "Test",
            "last_name": format!("Person{}", id),
            "email": email,
        }));
    }

    pub fn set_search_status(&self, status: StatusCode) {
        self.state.lock().unwrap().search_status = status;
    }

    pub fn set_create_status(&self, status: StatusCode) {
        self.state.lock().unwrap().create_status = status;
    }

    pub fn created(&self) -> Vec<Value> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn searches(&self) -> Vec<HashMap<String, String>> {
        self.state.lock().unwrap().searches.clone()
    }

    pub fn auth_headers(&self) -> Vec<Option<String>> {
        self.state.lock().unwrap().auth_headers.clone()
    }

    /// Client configuration pointing at this server.
    pub fn config(&self) -> SuprConfig {
        SuprConfig {
            base_url: self.base_url.clone(),
            api_user: "deliver".to_string(),
            api_key: "secret".to_string(),
            timeout_secs: Some(10),
        }
    }
}

fn record_auth(state: &mut ServerState, headers: &HeaderMap) {
    state.auth_headers.push(
        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );
}

async fn search_person(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    record_auth(&mut state, &headers);
    state.searches.push(params.clone());

    if state.search_status != StatusCode::OK {
        return (
            state.search_status,
            Json(json!({"error": "search unavailable"})),
        );
    }

    let wanted = params.get("email_i").cloned().unwrap_or_default();
    let matches: Vec<Value> = state
        .people
        .iter()
        .filter(|p| {
            p["email"]
                .as_str()
                .is_some_and(|e| e.eq_ignore_ascii_case(&wanted))
        })
        .cloned()
        .collect();

    (StatusCode::OK, Json(json!({ "matches": matches })))
}

async fn create_project(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    record_auth(&mut state, &headers);
    state.created.push(body.clone());

    if state.create_status != StatusCode::OK {
        return (
            state.create_status,
            Json(json!({"error": "could not create project"})),
        );
    }

    let mut record = body;
    record["name"] = json!(state.delivery_name);
    record["id"] = json!(123);
    (StatusCode::OK, Json(record))
}
