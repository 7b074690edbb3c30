//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Calls received by a mock RPC server, as `(method, params)`.
pub type CallLog = Arc<Mutex<Vec<(String, Value)>>>;

/// Start a mock JSON-RPC server on an ephemeral port.
///
/// `handler` maps `(method, params)` to the `result` value. Every
/// connection serves one request and is closed.
pub async fn start_mock_rpc<F>(handler: F) -> (SocketAddr, CallLog)
where
    F: Fn(&str, &Value) -> Value + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
    let handler = Arc::new(handler);

    let log = calls.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let handler = handler.clone();
                    let log = log.clone();
                    tokio::spawn(async move {
                        serve_one(socket, handler.as_ref(), &log).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, calls)
}

async fn serve_one<F>(mut socket: TcpStream, handler: &F, log: &CallLog)
where
    F: Fn(&str, &Value) -> Value,
{
    let Some(body) = read_request_body(&mut socket).await else {
        return;
    };
    let Ok(request) = serde_json::from_slice::<Value>(&body) else {
        return;
    };

    let method = request["method"].as_str().unwrap_or_default().to_string();
    let params = request["params"].clone();
    let result = handler(&method, &params);
    log.lock().unwrap().push((method, params));

    let response = json!({
        "jsonrpc": "2.0",
        "id": request["id"].clone(),
        "result": result,
    })
    .to_string();

    let response_str = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.len(),
        response
    );
    let _ = socket.write_all(response_str.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Read one HTTP request and return its body.
async fn read_request_body(socket: &mut TcpStream) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length: usize = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Some(buf[header_end..header_end + content_length].to_vec())
}

/// Canned responses of a healthy IoTeX mainnet endpoint.
///
/// Only `rpc_client.rs` uses this; other test crates that include `common`
/// would otherwise warn about it.
#[allow(dead_code)]
pub fn mainnet_handler(method: &str, _params: &Value) -> Value {
    match method {
        "eth_chainId" => json!("0x1251"),
        "eth_blockNumber" => json!("0x1a2b3c"),
        "eth_gasPrice" => json!("0xe8d4a51000"),
        // 1.5 IOTX
        "eth_getBalance" => json!("0x14d1120d7b160000"),
        "eth_getTransactionCount" => json!("0x7"),
        "eth_getCode" => json!("0x"),
        _ => Value::Null,
    }
}
