//! Test harness: tracing and an in-process ViaCEP stub.

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

/// Initialize tracing to respect RUST_LOG.
/// Run tests with: RUST_LOG=debug cargo test -- --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// CEP that answers only after this long.
pub const SLOW_CEP: &str = "66666666";
pub const SLOW_DELAY: Duration = Duration::from_secs(2);

async fn viacep_stub(Path(cep): Path<String>) -> axum::response::Response {
    match cep.as_str() {
        "01001000" => Json(json!({
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "complemento": "lado ímpar",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308"
        }))
        .into_response(),
        "88888888" => "not json".into_response(),
        SLOW_CEP => {
            tokio::time::sleep(SLOW_DELAY).await;
            Json(json!({ "erro": true })).into_response()
        }
        _ => Json(json!({ "erro": "true" })).into_response(),
    }
}

/// Start a ViaCEP stub on a random local port. Returns the base URL to configure.
pub async fn spawn_viacep_stub() -> String {
    let app = Router::new().route("/ws/:cep/json/", get(viacep_stub));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr: SocketAddr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{}/ws", addr)
}

/// Base URL of a port nobody listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway address");
    drop(listener);
    format!("http://{}/ws", addr)
}
