// src/fetch/mod.rs

use crate::error::{KingsError, KingsResult};
use reqwest::Client;
use tracing::{debug, error, info};
use url::Url;

/// Where the monarch list lives. There is no other source.
pub const MONARCHS_URL: &str = "https://gist.githubusercontent.com/christianpanton/10d65ccef9f29de3acd49d97ed423736/raw/b09563bc0c4b318132c7a738e679d4f984ef0048/kings";

pub fn monarchs_url() -> KingsResult<Url> {
    Url::parse(MONARCHS_URL).map_err(|e| KingsError::InvalidUrl {
        url: MONARCHS_URL.to_string(),
        reason: e.to_string(),
    })
}

/// Single GET, no retries. Transport failures and non-2xx statuses are logged and returned.
pub async fn fetch_monarchs_from(client: &Client, url: &Url) -> KingsResult<String> {
    info!(%url, "fetching monarchs");

    let resp = client.get(url.clone()).send().await.map_err(|e| {
        error!(%url, error = %e, "request failed");
        KingsError::Transport {
            url: url.to_string(),
            source: e,
        }
    })?;

    let status = resp.status();
    debug!(%url, %status, "response received");
    if !status.is_success() {
        error!(%url, %status, "non-success status");
        return Err(KingsError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = resp.text().await.map_err(|e| {
        error!(%url, error = %e, "reading body failed");
        KingsError::Transport {
            url: url.to_string(),
            source: e,
        }
    })?;
    debug!(bytes = body.len(), "body read");
    Ok(body)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on an ephemeral port.
    pub(crate) async fn serve_once(status_line: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let mut seen = Vec::new();
            // drain the request head
            loop {
                let n = sock.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                seen.extend_from_slice(&buf[..n]);
                if seen.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let resp = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            sock.write_all(resp.as_bytes()).await.unwrap();
            sock.shutdown().await.unwrap();
        });
        Url::parse(&format!("http://{}/kings", addr)).unwrap()
    }

    #[test]
    fn monarchs_url_parses() {
        let url = monarchs_url().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("gist.githubusercontent.com"));
    }

    #[tokio::test]
    async fn returns_body_on_success() {
        let url = serve_once("200 OK", r#"[{"id":1,"nm":"Ann","cty":"X","hse":"H1","yrs":"1000"}]"#).await;
        let body = fetch_monarchs_from(&Client::new(), &url).await.unwrap();
        assert!(body.starts_with('['));
        assert!(body.contains("\"nm\":\"Ann\""));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let url = serve_once("404 Not Found", "nope").await;
        let err = fetch_monarchs_from(&Client::new(), &url).await.unwrap_err();
        match err {
            KingsError::HttpStatus { status, .. } => assert_eq!(status.as_u16(), 404),
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{}/kings", addr)).unwrap();
        let err = fetch_monarchs_from(&Client::new(), &url).await.unwrap_err();
        assert!(matches!(err, KingsError::Transport { .. }), "got {err:?}");
        assert!(err.is_fetch_failure());
        // the reqwest cause hangs off source(), not the message
        assert_eq!(err.to_string(), format!("GET {} failed", url));
        assert!(std::error::Error::source(&err).is_some());
    }
}
