//! Minimal HTTP/1.1 server serving one canned response for integration tests.
//!
//! Every GET receives the same body with the configured status line, which
//! is all the query-API client needs: one request, one JSON document.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct ApiServerOptions {
    /// Status line after "HTTP/1.1 ", e.g. "200 OK".
    pub status: &'static str,
    pub content_type: &'static str,
}

impl Default for ApiServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            content_type: "application/json; charset=utf-8",
        }
    }
}

/// Starts a server in a background thread serving `body` with 200 OK.
/// Returns an endpoint URL (e.g. "http://127.0.0.1:12345/w/api.php"). The
/// server runs until the process exits.
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, ApiServerOptions::default())
}

/// Like `start` but with a custom status line or content type.
pub fn start_with_options(body: Vec<u8>, opts: ApiServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    format!("http://127.0.0.1:{}/w/api.php", port)
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: ApiServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    // Drain the request head before answering; the query always fits one read.
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    let header = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        opts.content_type,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}
