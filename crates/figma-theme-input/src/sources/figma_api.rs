//! Figma REST API source.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::env::EnvReader;
use crate::source::DocumentSource;
use crate::InputError;

/// Environment variable holding the personal access token.
pub const FIGMA_TOKEN: &str = "FIGMA_TOKEN";

/// Base URL of the public Figma API.
pub const DEFAULT_API_BASE: &str = "https://api.figma.com";

const TOKEN_HEADER: &str = "X-Figma-Token";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Download a file export from the Figma API.
///
/// Issues `GET {base}/v1/files/{file_id}` with the `X-Figma-Token` header
/// and returns the response body when the API answers 200 OK.
///
/// # Example
///
/// ```no_run
/// use figma_theme_input::{env::RealEnv, DocumentSource, FigmaApiSource};
///
/// let json = FigmaApiSource::from_env("abc123", &RealEnv)?.read()?;
/// # Ok::<(), figma_theme_input::InputError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FigmaApiSource {
    file_id: String,
    token: String,
    base_url: String,
}

impl FigmaApiSource {
    /// Create a source with an explicit token.
    pub fn new(file_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            token: token.into(),
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Create a source whose token comes from [`FIGMA_TOKEN`].
    ///
    /// An unset or empty variable is [`InputError::MissingToken`].
    pub fn from_env(file_id: impl Into<String>, env: &impl EnvReader) -> Result<Self, InputError> {
        match env.var(FIGMA_TOKEN) {
            Some(token) if !token.is_empty() => Ok(Self::new(file_id, token)),
            _ => Err(InputError::MissingToken),
        }
    }

    /// Point the source at another API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The file id being downloaded.
    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    /// The full request URL.
    pub fn url(&self) -> String {
        format!(
            "{}/v1/files/{}",
            self.base_url.trim_end_matches('/'),
            self.file_id
        )
    }
}

impl DocumentSource for FigmaApiSource {
    fn name(&self) -> &'static str {
        "figma-api"
    }

    fn read(&self) -> Result<String, InputError> {
        let url = self.url();
        log::info!("downloading Figma file {}", self.file_id);
        log::debug!("GET {}", url);

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let response = client.get(&url).header(TOKEN_HEADER, &self.token).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(InputError::ApiStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        log::debug!("downloaded {} bytes", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{EnvOverlay, MockEnv};
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serve one canned HTTP response on a loopback port.
    ///
    /// The join handle yields the raw request head.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            )
            .unwrap();
            stream.flush().unwrap();
            head
        });

        (base, handle)
    }

    #[test]
    fn test_from_env_reads_token() {
        let env = MockEnv::new().with_var(FIGMA_TOKEN, "secret");
        let source = FigmaApiSource::from_env("abc123", &env).unwrap();
        assert_eq!(source.token, "secret");
        assert_eq!(source.file_id(), "abc123");
    }

    #[test]
    fn test_from_env_without_token_fails() {
        let err = FigmaApiSource::from_env("abc123", &MockEnv::new()).unwrap_err();
        assert!(matches!(err, InputError::MissingToken));
    }

    #[test]
    fn test_from_env_with_empty_token_fails() {
        let env = MockEnv::new().with_var(FIGMA_TOKEN, "");
        let err = FigmaApiSource::from_env("abc123", &env).unwrap_err();
        assert!(matches!(err, InputError::MissingToken));
    }

    #[test]
    fn test_from_env_prefers_overlay_value() {
        let env = EnvOverlay::new(MockEnv::new().with_var(FIGMA_TOKEN, "from-env"))
            .with_var(FIGMA_TOKEN, "from-flag");
        let source = FigmaApiSource::from_env("abc123", &env).unwrap();
        assert_eq!(source.token, "from-flag");
    }

    #[test]
    fn test_url_uses_default_base() {
        let source = FigmaApiSource::new("abc123", "secret");
        assert_eq!(source.url(), "https://api.figma.com/v1/files/abc123");
    }

    #[test]
    fn test_url_tolerates_trailing_slash() {
        let source = FigmaApiSource::new("abc123", "secret").with_base_url("http://localhost:8080/");
        assert_eq!(source.url(), "http://localhost:8080/v1/files/abc123");
    }

    #[test]
    fn test_downloads_body_with_token_header() {
        let (base, server) = serve_once("200 OK", r#"{"document":{"id":"0:0"},"styles":{}}"#);

        let body = FigmaApiSource::new("abc123", "secret")
            .with_base_url(base)
            .read()
            .unwrap();
        assert_eq!(body, r#"{"document":{"id":"0:0"},"styles":{}}"#);

        let head = server.join().unwrap().to_lowercase();
        assert!(head.starts_with("get /v1/files/abc123 "), "{}", head);
        assert!(head.contains("x-figma-token: secret"), "{}", head);
    }

    #[test]
    fn test_non_200_is_api_status() {
        let (base, server) = serve_once("404 Not Found", r#"{"status":404,"err":"Not found"}"#);

        let err = FigmaApiSource::new("missing", "secret")
            .with_base_url(base)
            .read()
            .unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, InputError::ApiStatus { status: 404 }));
        assert_eq!(err.to_string(), "Non-200 status code from Figma API: 404");
    }

    #[test]
    fn test_unreachable_host_is_request_error() {
        // Bind then drop to get a port nothing listens on.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let err = FigmaApiSource::new("abc123", "secret")
            .with_base_url(format!("http://127.0.0.1:{}", port))
            .read()
            .unwrap_err();
        assert!(matches!(err, InputError::Request(_)));
    }
}
