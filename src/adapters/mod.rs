//! External integrations
//!
//! - [`intake`] - DME intake API that receives order payloads
//! - [`openai`] - Chat-completion endpoint for the LLM extraction strategy

pub mod intake;
pub mod openai;

/// Read a response body for diagnostics; a failed read yields an empty body
pub(crate) async fn response_body(response: reqwest::Response) -> String {
    let status = response.status().as_u16();
    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(status, error = %e, "Failed to read response body");
            String::new()
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one response whose body is shorter than its Content-Length,
    /// then close the connection. Returns the server URL.
    pub(crate) async fn truncated_body_server(status_line: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!("HTTP/1.1 {status_line}\r\nContent-Length: 100\r\n\r\npartial");

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/")
    }

    /// Consume headers and a Content-Length body so closing does not reset
    async fn read_request(socket: &mut tokio::net::TcpStream) {
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let Ok(n) = socket.read(&mut buf).await else { return };
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&request);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + content_length {
                    return;
                }
            }
        }
    }
}
