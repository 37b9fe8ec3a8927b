//! One-shot HTTP server for exercising the client against canned replies.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

pub struct MockServer {
    pub url: String,
    handle: Option<JoinHandle<Vec<u8>>>,
}

impl MockServer {
    /// Accepts one request, reads it fully, then answers with the given status line and body.
    pub async fn respond(status_line: &str, body: &str) -> Self {
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        Self::spawn(move |mut stream| async move {
            let request = read_request(&mut stream).await;
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
            request
        })
        .await
    }

    /// Accepts one request and never answers.
    pub async fn silent() -> Self {
        Self::spawn(|mut stream| async move {
            let request = read_request(&mut stream).await;
            sleep(Duration::from_secs(120)).await;
            drop(stream);
            request
        })
        .await
    }

    async fn spawn<F, Fut>(serve: F) -> Self
    where
        F: FnOnce(TcpStream) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Vec<u8>> + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!(
            "http://{}/transcribe-and-translate",
            listener.local_addr().unwrap()
        );
        let handle = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            serve(stream).await
        });
        Self {
            url,
            handle: Some(handle),
        }
    }

    /// Raw bytes of the request the server received.
    pub async fn received(mut self) -> Vec<u8> {
        self.handle.take().unwrap().await.unwrap()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Reads headers plus a Content-Length or chunked body.
async fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut request = Vec::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = stream.read(&mut buf).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
        if is_complete(&request) {
            break;
        }
    }
    request
}

fn is_complete(request: &[u8]) -> bool {
    let Some(header_end) = find(request, b"\r\n\r\n") else {
        return false;
    };
    let headers = String::from_utf8_lossy(&request[..header_end]).to_ascii_lowercase();
    let body = &request[header_end + 4..];

    for line in headers.lines() {
        if let Some(value) = line.strip_prefix("content-length:") {
            let length: usize = value.trim().parse().unwrap_or(0);
            return body.len() >= length;
        }
    }
    if headers.contains("transfer-encoding: chunked") {
        return body.ends_with(b"0\r\n\r\n");
    }
    true
}

pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
