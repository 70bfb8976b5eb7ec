//! Stub upstream servers bound to ephemeral localhost ports.

use std::{
    net::TcpListener,
    sync::{Arc, Mutex},
};

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::Value;

#[derive(Debug, Clone)]
enum StubBody {
    Json(Value),
    Text(String),
}

/// Fixed answer for one path.
#[derive(Debug, Clone)]
pub struct StubRoute {
    path: String,
    status: u16,
    body: StubBody,
}

impl StubRoute {
    pub fn json(path: impl Into<String>, status: u16, body: Value) -> Self {
        Self {
            path: path.into(),
            status,
            body: StubBody::Json(body),
        }
    }

    pub fn text(path: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status,
            body: StubBody::Text(body.into()),
        }
    }
}

#[derive(Clone)]
struct StubState {
    routes: Arc<Vec<StubRoute>>,
    hits: Arc<Mutex<Vec<String>>>,
}

/// A running stub peer. Unknown paths answer 404.
pub struct StubUpstream {
    base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
}

impl StubUpstream {
    /// Must be called from inside an actix system, e.g. `#[actix_web::test]`.
    pub async fn spawn(routes: Vec<StubRoute>) -> Self {
        let state = StubState {
            routes: Arc::new(routes),
            hits: Arc::new(Mutex::new(Vec::new())),
        };
        let hits = state.hits.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state.clone()))
                .default_service(web::to(stub_handler))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("stub binds");
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            base_url: format!("http://{addr}"),
            hits,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Paths requested so far, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().expect("mutex poisoned").clone()
    }
}

async fn stub_handler(req: HttpRequest, state: web::Data<StubState>) -> HttpResponse {
    let path = req.path().to_string();
    state.hits.lock().expect("mutex poisoned").push(path.clone());

    let Some(route) = state.routes.iter().find(|route| route.path == path) else {
        return HttpResponse::NotFound().finish();
    };
    let status = actix_web::http::StatusCode::from_u16(route.status).expect("valid stub status");
    match &route.body {
        StubBody::Json(body) => HttpResponse::build(status).json(body),
        StubBody::Text(body) => HttpResponse::build(status)
            .content_type("text/plain")
            .body(body.clone()),
    }
}

/// Base URL of a port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
