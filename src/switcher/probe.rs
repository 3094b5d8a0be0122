//! Best-effort existence probe for switch targets.
//!
//! Before navigating, the switcher asks whether the computed URL actually
//! resolves, so visitors of an untranslated post land on the target locale's
//! home page instead of a 404. The probe is advisory only: any failure -
//! network error, cross-origin rejection, non-2xx status - counts as
//! "does not exist" and is never surfaced.

use reqwest::Client;

/// Boolean existence check against a site-relative URL.
pub trait ExistenceProbe {
    /// `true` only for a success-class response. Never errors.
    async fn exists(&self, url: &str) -> bool;
}

/// HEAD-request probe against a live site.
///
/// No timeout is configured; a hung request simply keeps the switch pending,
/// matching the browser behavior this mirrors.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    base_url: String,
}

impl HttpProbe {
    /// `base_url` is the site origin the relative URLs resolve against,
    /// e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl ExistenceProbe for HttpProbe {
    async fn exists(&self, url: &str) -> bool {
        let target = format!("{}{url}", self.base_url);
        match self.client.head(&target).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tiny_http::{Response, Server};

    /// Serve 200 for the given paths and 404 for everything else, on an
    /// OS-assigned port. Returns the base URL.
    fn spawn_site(known_paths: &'static [&'static str]) -> String {
        let server = Server::http("127.0.0.1:0").unwrap();
        let base = format!("http://{}", server.server_addr().to_ip().unwrap());

        thread::spawn(move || {
            for request in server.incoming_requests() {
                let status = if known_paths.contains(&request.url()) {
                    200
                } else {
                    404
                };
                let _ = request.respond(Response::empty(status));
            }
        });

        base
    }

    #[tokio::test]
    async fn test_head_success_means_exists() {
        let base = spawn_site(&["/en/blog/my-post/"]);
        let probe = HttpProbe::new(&base);

        assert!(probe.exists("/en/blog/my-post/").await);
    }

    #[tokio::test]
    async fn test_not_found_means_absent() {
        let base = spawn_site(&["/en/"]);
        let probe = HttpProbe::new(&base);

        assert!(!probe.exists("/se/blog/missing/").await);
    }

    #[tokio::test]
    async fn test_connection_error_means_absent() {
        // Nothing listens here; the probe must swallow the error
        let probe = HttpProbe::new("http://127.0.0.1:1");
        assert!(!probe.exists("/en/").await);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let probe = HttpProbe::new("http://example.test/");
        assert_eq!(probe.base_url, "http://example.test");
    }
}
