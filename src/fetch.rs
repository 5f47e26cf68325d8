//! Fetches the public contributions page over HTTP.
//!
//! One blocking GET, no retries. Timeouts are left to the transport's
//! defaults; the tool is a one-shot batch job and a hung run surfaces in
//! the calling workflow anyway.

use reqwest::blocking::Client;

use crate::{Error, GeneratorConfig, Result};

/// Fetch the raw contributions markup for the configured owner.
///
/// Returns the response body on a success status. A non-success status maps
/// to [`Error::Fetch`] carrying the status code; transport failures map to
/// [`Error::Network`].
pub fn fetch_contributions(config: &GeneratorConfig) -> Result<String> {
    let url = format!("{}/users/{}/contributions", config.host, config.owner);
    log::debug!("fetching {}", url);

    let client = Client::new();
    let res = client
        .get(&url)
        .header("User-Agent", config.user_agent.clone())
        .send()
        .map_err(|e| Error::Network(format!("HTTP GET failed: {}", e)))?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::Fetch {
            status: status.as_u16(),
        });
    }

    res.text()
        .map_err(|e| Error::Network(format!("Failed to read response body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serve_once(body: &'static str, status: u16) -> String {
        let server = tiny_http::Server::http("0.0.0.0:0").unwrap();
        let addr = server.server_addr();

        std::thread::spawn(move || {
            if let Ok(request) = server.recv() {
                let response =
                    tiny_http::Response::from_string(body).with_status_code(status);
                let _ = request.respond(response);
            }
        });

        format!("http://{}", addr)
    }

    #[test]
    fn fetch_returns_body_on_success() {
        let host = serve_once("<html>days</html>", 200);
        let config = GeneratorConfig {
            host,
            ..Default::default()
        };
        let body = fetch_contributions(&config).expect("fetch failed");
        assert!(body.contains("days"));
    }

    #[test]
    fn non_success_status_is_a_fetch_error() {
        let host = serve_once("nope", 500);
        let config = GeneratorConfig {
            host,
            ..Default::default()
        };
        match fetch_contributions(&config) {
            Err(Error::Fetch { status }) => assert_eq!(status, 500),
            other => panic!("expected Fetch error, got {:?}", other),
        }
    }

    #[test]
    fn unreachable_host_is_a_network_error() {
        // Port 1 on loopback refuses the connection immediately
        let config = GeneratorConfig {
            host: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        };
        match fetch_contributions(&config) {
            Err(Error::Network(_)) => {}
            other => panic!("expected Network error, got {:?}", other),
        }
    }
}
