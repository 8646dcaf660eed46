use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tokio::time::timeout;
use wordbook_config::lookup::LookupConfig;
use wordbook_config::network::NetworkConfig;

use crate::client::DatamuseClient;
use crate::service::Lookup;
use crate::state::LookupState;

/// Canned response for one request target.
pub enum Canned {
    Json(String),
    DelayedJson(String, u64),
    Garbage,
}

pub type Responder = fn(&str) -> Canned;

/// Minimal in-process HTTP fixture serving canned Datamuse-shaped JSON.
pub struct TestApi {
    pub base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
}

impl TestApi {
    pub async fn serve(responder: Responder) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener addr");
        let hits = Arc::new(Mutex::new(Vec::new()));

        let recorded = hits.clone();
        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    return;
                };
                let recorded = recorded.clone();
                tokio::spawn(answer(socket, responder, recorded));
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
        }
    }

    /// Request targets (path + query) seen so far, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().expect("hits lock").clone()
    }
}

async fn answer(mut socket: TcpStream, responder: Responder, recorded: Arc<Mutex<Vec<String>>>) {
    let Some(target) = read_target(&mut socket).await else {
        return;
    };
    recorded.lock().expect("hits lock").push(target.clone());

    let (body, delay_ms) = match responder(&target) {
        Canned::Json(body) => (body, 0),
        Canned::DelayedJson(body, delay_ms) => (body, delay_ms),
        Canned::Garbage => ("not json".to_string(), 0),
    };
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    let response = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

async fn read_target(socket: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|window| window == b"\r\n\r\n") {
            break;
        }
    }
    let head = String::from_utf8_lossy(&buf);
    let request_line = head.lines().next()?;
    request_line.split_whitespace().nth(1).map(str::to_string)
}

pub fn test_client(base_url: &str) -> DatamuseClient {
    let config = NetworkConfig {
        api_base_url: base_url.to_string(),
        timeout_ms: 2_000,
    };
    DatamuseClient::new(&config).expect("build client")
}

pub fn spawn_lookup(base_url: &str, debounce_ms: u64) -> Lookup {
    Lookup::spawn(test_client(base_url), LookupConfig { debounce_ms })
}

/// Waits (max 2s) until the published state satisfies the predicate.
pub async fn wait_for<F>(rx: &mut watch::Receiver<LookupState>, pred: F) -> LookupState
where
    F: Fn(&LookupState) -> bool,
{
    timeout(Duration::from_secs(2), async {
        loop {
            {
                let state = rx.borrow_and_update();
                if pred(&state) {
                    return state.clone();
                }
            }
            rx.changed().await.expect("state channel closed");
        }
    })
    .await
    .expect("timed out waiting for state")
}
