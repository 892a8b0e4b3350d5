//! Acquisition of raw input bytes from local files or HTTP endpoints.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::error::LoadError;
use crate::parser::{parse_metadata, parse_positional};
use crate::types::{MetadataRecord, PositionalRecord};

/// Where an input record list lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    /// Treats anything starting with `http://` or `https://` as a URL, everything else as a path.
    pub fn parse(origin: &str) -> Self {
        if origin.starts_with("http://") || origin.starts_with("https://") {
            Source::Url(origin.to_string())
        } else {
            Source::File(PathBuf::from(origin))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => f.write_str(url),
        }
    }
}

/// Issues a GET for `url` and returns the body, failing on non-success statuses.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>, LoadError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| LoadError::unavailable(url, e))?;
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = client
        .execute(req)
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| LoadError::unavailable(url, e))?;

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| LoadError::unavailable(url, e))?;
    Ok(bytes.to_vec())
}

/// Reads the raw bytes behind `source`.
#[tracing::instrument(skip_all, fields(source = %source))]
pub async fn load_bytes(source: &Source) -> Result<Vec<u8>, LoadError> {
    let bytes = match source {
        Source::File(path) => tokio::fs::read(path)
            .await
            .map_err(|e| LoadError::unavailable(source.to_string(), e))?,
        Source::Url(url) => {
            let client =
                BasicClient::new().map_err(|e| LoadError::unavailable(source.to_string(), e))?;
            fetch_bytes(&client, url).await?
        }
    };
    debug!(bytes = bytes.len(), "Input bytes received");
    Ok(bytes)
}

/// Loads and decodes the positional record list at `origin` (path or URL).
pub async fn load_positional(origin: &str) -> Result<Vec<PositionalRecord>, LoadError> {
    let bytes = load_bytes(&Source::parse(origin)).await?;
    parse_positional(origin, &bytes)
}

/// Loads and decodes the metadata record list at `origin` (path or URL).
pub async fn load_metadata(origin: &str) -> Result<Vec<MetadataRecord>, LoadError> {
    let bytes = load_bytes(&Source::parse(origin)).await?;
    parse_metadata(origin, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    /// Serves a single HTTP response on a local port and returns its base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}")
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(
            Source::parse("https://example.com/places.json"),
            Source::Url("https://example.com/places.json".to_string())
        );
        assert_eq!(
            Source::parse("data/locations.json"),
            Source::File(PathBuf::from("data/locations.json"))
        );
        // A file whose name merely starts with "http" is still a file.
        assert_eq!(
            Source::parse("http_dump.json"),
            Source::File(PathBuf::from("http_dump.json"))
        );
    }

    #[tokio::test]
    async fn test_load_positional_from_file() {
        let path = temp_path("place_stats_test_positions.json");
        fs::write(&path, r#"[{"id": "A", "latitude": 1.0, "longitude": 2.0}]"#).unwrap();

        let records = load_positional(&path).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].longitude, 2.0);

        fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let path = temp_path("place_stats_test_does_not_exist.json");
        let _ = fs::remove_file(&path);

        let result = load_metadata(&path).await;
        assert!(matches!(result, Err(LoadError::Unavailable { .. })));
    }

    #[test]
    fn test_basic_client_builds() {
        assert!(BasicClient::new().is_ok());
    }

    #[tokio::test]
    async fn test_load_metadata_from_url() {
        let base = serve_once("200 OK", r#"[{"id": "A", "type": "park", "reviews": 7}]"#).await;

        let records = load_metadata(&format!("{base}/metadata.json")).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, "park");
        assert_eq!(records[0].review_count, Some(7));
    }

    #[tokio::test]
    async fn test_not_found_url_is_unavailable() {
        let base = serve_once("404 Not Found", "missing").await;

        let result = load_metadata(&format!("{base}/metadata.json")).await;
        assert!(matches!(result, Err(LoadError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn test_fetch_bytes_rejects_server_error() {
        let base = serve_once("500 Internal Server Error", "boom").await;
        let client = BasicClient::new().unwrap();

        let result = fetch_bytes(&client, &format!("{base}/locations.json")).await;
        let err = result.unwrap_err();
        assert!(matches!(err, LoadError::Unavailable { .. }));
        assert!(err.to_string().contains("locations.json"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_malformed() {
        let path = temp_path("place_stats_test_malformed.json");
        fs::write(&path, "{\"id\": \"A\"}").unwrap();

        let result = load_metadata(&path).await;
        assert!(matches!(result, Err(LoadError::Malformed { .. })));

        fs::remove_file(&path).unwrap();
    }
}
