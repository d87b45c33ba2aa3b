//! In-process HTTP stand-ins for the messaging API and the record store.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::Value;
use tokio::net::TcpListener;

pub type Seen<T> = Arc<Mutex<Vec<T>>>;

#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Text(&'static str),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Json(value) => Json(value).into_response(),
            Reply::Text(text) => text.into_response(),
        }
    }
}

/// Binds `router` to a free local port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Serves a single POST route that records every JSON body it receives and
/// answers with `status` + `reply`.
pub async fn stub_post(path: &str, status: StatusCode, reply: Reply) -> (String, Seen<Value>) {
    let seen = Seen::default();
    let recorded = seen.clone();
    let router = Router::new().route(
        path,
        post(move |Json(body): Json<Value>| {
            let recorded = recorded.clone();
            let reply = reply.clone();
            async move {
                recorded.lock().unwrap().push(body);
                (status, reply)
            }
        }),
    );
    (serve(router).await, seen)
}

/// Serves `GET /room/{room_id}/messages`, recording the room ids asked for.
pub async fn stub_room_messages(status: StatusCode, reply: Reply) -> (String, Seen<String>) {
    let seen = Seen::default();
    let recorded = seen.clone();
    let router = Router::new().route(
        "/room/{room_id}/messages",
        get(move |Path(room_id): Path<String>| {
            let recorded = recorded.clone();
            let reply = reply.clone();
            async move {
                recorded.lock().unwrap().push(room_id);
                (status, reply)
            }
        }),
    );
    (serve(router).await, seen)
}

/// Base URL nothing listens on.
pub fn dead_url() -> String {
    "http://127.0.0.1:1".to_owned()
}
