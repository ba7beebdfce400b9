use std::time::Duration;

use crate::source::{GlossarySource, SourceError};

/// Fetches the published spreadsheet over HTTP(S).
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: String, timeout_seconds: u64) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait::async_trait]
impl GlossarySource for HttpSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        tracing::debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let text = response.text().await?;
        tracing::debug!("Fetched {} bytes from {}", text.len(), self.url);
        Ok(text)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves a single canned response and returns the URL to hit.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "{status_line}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{addr}/sheet.csv")
    }

    fn local_source(url: String) -> HttpSource {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpSource::with_client(client, url)
    }

    #[tokio::test]
    async fn returns_body_on_success() {
        let url = serve_once("HTTP/1.1 200 OK", "term\nAPI\n").await;
        let source = local_source(url);

        let text = source.fetch().await.unwrap();

        assert_eq!(text, "term\nAPI\n");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let url = serve_once("HTTP/1.1 404 Not Found", "").await;
        let source = local_source(url.clone());

        let err = source.fetch().await.unwrap_err();

        match err {
            SourceError::Status { url: failed, status } => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
