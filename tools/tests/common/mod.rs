#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use ventas_model::SaleEvent;

pub const REJECTED_BODY: &str =
    r#"{"estado":"ERROR","detalle":"stock insuficiente"}"#;

/// How the stub `/ventas` endpoint answers a valid sale.
#[derive(Clone, Copy, Debug)]
pub enum Mode {
    Ok,
    ServerError,
    Rejected,
    Empty,
    Slow(Duration),
}

pub struct StubState {
    mode: Mode,
    pub received: AtomicU64,
}

pub struct Stub {
    pub url: String,
    pub state: Arc<StubState>,
}

/// Serves `POST /ventas` on an ephemeral port. Invalid sales get a 400, the
/// same way the real API treats them.
pub async fn start_stub(mode: Mode) -> Stub {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = Arc::new(StubState {
        mode,
        received: AtomicU64::new(0),
    });
    let app = Router::new()
        .route("/ventas", post(recibir_venta))
        .with_state(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Stub {
        url: format!("http://{addr}"),
        state,
    }
}

/// A local URL nothing is listening on.
pub fn closed_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn json_body(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn recibir_venta(
    State(state): State<Arc<StubState>>,
    Json(event): Json<SaleEvent>,
) -> Response {
    if let Err(e) = event.validate() {
        return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
    }
    let total = state.received.fetch_add(1, Ordering::Relaxed) + 1;
    match state.mode {
        Mode::Ok => json_body(format!(
            r#"{{"estado":"OK","requestId":"{}","totalVentasRecibidas":{total}}}"#,
            event.product_id
        )),
        Mode::ServerError => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .into_response()
        }
        Mode::Rejected => json_body(REJECTED_BODY.to_string()),
        Mode::Empty => json_body("{}".to_string()),
        Mode::Slow(delay) => {
            tokio::time::sleep(delay).await;
            json_body(r#"{"estado":"OK"}"#.to_string())
        }
    }
}
