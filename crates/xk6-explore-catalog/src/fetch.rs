// SPDX-FileCopyrightText: 2026 xk6-explore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP retrieval of the extension catalog.
//!
//! Provides [`CatalogClient`], which issues a single GET per fetch, honours
//! caller cancellation through a [`CancellationToken`], and annotates every
//! descriptor with its resolved latest version. Failed fetches are not retried.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use xk6_explore_core::ExploreError;

pub use xk6_explore_core::DEFAULT_CATALOG_URL;

use crate::descriptor::Catalog;
use crate::version::resolve_latest;

/// Upper bound for the whole request, including reading the body.
pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `User-Agent` sent with every catalog request.
pub const USER_AGENT: &str = "xk6-subcommand-explore";

/// HTTP client for the extension registry.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
}

impl CatalogClient {
    /// Creates a client with the fixed user agent and request timeout.
    pub fn new() -> Result<Self, ExploreError> {
        Self::with_timeout(HTTP_REQUEST_TIMEOUT)
    }

    fn with_timeout(timeout: Duration) -> Result<Self, ExploreError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ExploreError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client })
    }

    /// Fetches and annotates the catalog at `url`.
    ///
    /// Returns [`ExploreError::Cancelled`] as soon as `cancel` fires, including
    /// when it was cancelled before the call.
    pub async fn fetch(
        &self,
        cancel: &CancellationToken,
        url: &str,
    ) -> Result<Catalog, ExploreError> {
        let url = Url::parse(url).map_err(|e| ExploreError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        debug!(%url, "fetching extension catalog");

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("extension catalog request cancelled");
                Err(ExploreError::Cancelled)
            }
            result = self.request(url) => result,
        }
    }

    async fn request(&self, url: Url) -> Result<Catalog, ExploreError> {
        let response = self.client.get(url).send().await.map_err(transport_error)?;

        let status = response.status();
        debug!(status = %status, "extension catalog response received");

        if status != StatusCode::OK {
            return Err(ExploreError::CatalogStatus {
                status: status.to_string(),
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        let mut catalog: Catalog =
            serde_json::from_slice(&body).map_err(|e| ExploreError::Decode {
                source: Box::new(e),
            })?;

        annotate_latest(&mut catalog);
        debug!(extensions = catalog.len(), "extension catalog decoded");

        Ok(catalog)
    }
}

/// Fetches the catalog at `url` with a fresh [`CatalogClient`].
pub async fn fetch_catalog(cancel: &CancellationToken, url: &str) -> Result<Catalog, ExploreError> {
    CatalogClient::new()?.fetch(cancel, url).await
}

/// Fetches the catalog from [`DEFAULT_CATALOG_URL`].
pub async fn fetch_default_catalog(cancel: &CancellationToken) -> Result<Catalog, ExploreError> {
    fetch_catalog(cancel, DEFAULT_CATALOG_URL).await
}

/// Overwrites every descriptor's `latest` with the value derived from `versions`.
pub fn annotate_latest(catalog: &mut Catalog) {
    for ext in catalog.values_mut() {
        ext.latest = resolve_latest(&ext.versions);
    }
}

fn transport_error(err: reqwest::Error) -> ExploreError {
    let message = if err.is_timeout() {
        "request timed out".to_string()
    } else {
        err.to_string()
    };

    ExploreError::Transport {
        message,
        source: Some(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PluginDescriptor;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalog.json"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    fn catalog_url(server: &MockServer) -> String {
        format!("{}/catalog.json", server.uri())
    }

    #[tokio::test]
    async fn fetch_single_extension_resolves_latest() {
        let body = serde_json::json!({
            "xk6-faker": {
                "module": "github.com/grafana/xk6-faker",
                "tier": "official",
                "description": "Generate fake data",
                "versions": ["v0.4.4", "v0.4.3", "v0.4.2"],
                "imports": ["k6/x/faker"]
            }
        });
        let server = serve(ResponseTemplate::new(200).set_body_json(&body)).await;

        let catalog = fetch_catalog(&CancellationToken::new(), &catalog_url(&server))
            .await
            .unwrap();

        assert_eq!(catalog.len(), 1);
        let ext = &catalog["xk6-faker"];
        assert_eq!(ext.module, "github.com/grafana/xk6-faker");
        assert_eq!(ext.latest, "v0.4.4");
    }

    #[tokio::test]
    async fn fetch_multiple_extensions() {
        let body = serde_json::json!({
            "xk6-faker": {"module": "github.com/grafana/xk6-faker", "tier": "official", "versions": ["v0.4.4"], "imports": ["k6/x/faker"]},
            "xk6-output-prometheus": {"module": "github.com/grafana/xk6-output-prometheus", "tier": "official", "versions": ["v1.0.0"], "outputs": ["prometheus"]},
            "xk6-dashboard": {"module": "github.com/grafana/xk6-dashboard", "tier": "community", "versions": ["v0.7.4"], "subcommands": ["dashboard"]}
        });
        let server = serve(ResponseTemplate::new(200).set_body_json(&body)).await;

        let catalog = fetch_catalog(&CancellationToken::new(), &catalog_url(&server))
            .await
            .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog["xk6-faker"].latest, "v0.4.4");
        assert_eq!(catalog["xk6-output-prometheus"].latest, "v1.0.0");
        assert_eq!(catalog["xk6-dashboard"].latest, "v0.7.4");
    }

    #[tokio::test]
    async fn wire_latest_is_overwritten() {
        let body = serde_json::json!({
            "xk6-test": {"module": "github.com/test/xk6-test", "latest": "v9.9.9", "versions": ["v0.2.0", "v0.3.0", "v0.1.0"]},
            "xk6-empty": {"module": "github.com/test/xk6-empty", "latest": "v1.0.0", "versions": []}
        });
        let server = serve(ResponseTemplate::new(200).set_body_json(&body)).await;

        let catalog = fetch_catalog(&CancellationToken::new(), &catalog_url(&server))
            .await
            .unwrap();

        assert_eq!(catalog["xk6-test"].latest, "v0.3.0");
        assert_eq!(catalog["xk6-empty"].latest, "");
    }

    #[tokio::test]
    async fn non_ok_status_is_an_error() {
        for code in [404u16, 500, 403] {
            let server = serve(ResponseTemplate::new(code)).await;

            let err = fetch_catalog(&CancellationToken::new(), &catalog_url(&server))
                .await
                .unwrap_err();

            match err {
                ExploreError::CatalogStatus { ref status } => {
                    assert!(status.starts_with(&code.to_string()), "got: {status}");
                }
                other => panic!("expected CatalogStatus for {code}, got: {other:?}"),
            }
            assert!(err.to_string().starts_with("failed to fetch extension catalog: "));
        }
    }

    #[tokio::test]
    async fn wrong_user_agent_is_not_served() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "something-else"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let result = fetch_catalog(&CancellationToken::new(), &catalog_url(&server)).await;
        assert!(matches!(result, Err(ExploreError::CatalogStatus { .. })));
    }

    #[tokio::test]
    async fn invalid_json_is_a_decode_error() {
        let server = serve(ResponseTemplate::new(200).set_body_string("invalid json")).await;

        let result = fetch_catalog(&CancellationToken::new(), &catalog_url(&server)).await;
        assert!(matches!(result, Err(ExploreError::Decode { .. })), "got: {result:?}");
    }

    #[tokio::test]
    async fn json_array_is_a_decode_error() {
        let server = serve(ResponseTemplate::new(200).set_body_string("[]")).await;

        let result = fetch_catalog(&CancellationToken::new(), &catalog_url(&server)).await;
        assert!(matches!(result, Err(ExploreError::Decode { .. })));
    }

    #[tokio::test]
    async fn already_cancelled_token_returns_promptly() {
        let server = serve(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_millis(100)),
        )
        .await;

        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = fetch_catalog(&cancel, &catalog_url(&server)).await;
        assert!(matches!(result, Err(ExploreError::Cancelled)));
    }

    #[tokio::test]
    async fn default_catalog_fetch_honours_cancellation() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = fetch_default_catalog(&cancel).await;
        assert!(matches!(result, Err(ExploreError::Cancelled)));
    }

    #[test]
    fn default_catalog_url_is_the_k6_registry() {
        let url = Url::parse(DEFAULT_CATALOG_URL).unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("registry.k6.io"));
        assert_eq!(url.path(), "/catalog.json");
    }

    #[tokio::test]
    async fn cancellation_aborts_in_flight_request() {
        let server = serve(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .await;

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let result = tokio::time::timeout(
            Duration::from_secs(2),
            fetch_catalog(&cancel, &catalog_url(&server)),
        )
        .await
        .expect("fetch should return promptly after cancellation");

        assert!(matches!(result, Err(ExploreError::Cancelled)));
    }

    #[tokio::test]
    async fn request_timeout_is_a_transport_error() {
        let server = serve(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .await;

        let client = CatalogClient::with_timeout(Duration::from_millis(50)).unwrap();
        let result = client
            .fetch(&CancellationToken::new(), &catalog_url(&server))
            .await;

        assert!(matches!(result, Err(ExploreError::Transport { .. })), "got: {result:?}");
    }

    #[tokio::test]
    async fn invalid_url_is_rejected_before_any_request() {
        let result = fetch_catalog(&CancellationToken::new(), "://invalid-url").await;
        assert!(matches!(result, Err(ExploreError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let result = fetch_catalog(&CancellationToken::new(), "http://127.0.0.1:0").await;
        assert!(matches!(result, Err(ExploreError::Transport { .. })), "got: {result:?}");
    }

    #[test]
    fn annotate_latest_recomputes_every_entry() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "a".into(),
            PluginDescriptor {
                module: "a".into(),
                latest: "stale".into(),
                versions: vec!["invalid".into(), "v1.0.0".into()],
                ..Default::default()
            },
        );
        catalog.insert(
            "b".into(),
            PluginDescriptor {
                module: "b".into(),
                versions: vec!["v0.1.0".into(), "v0.2.0".into()],
                ..Default::default()
            },
        );

        annotate_latest(&mut catalog);

        assert_eq!(catalog["a"].latest, "");
        assert_eq!(catalog["b"].latest, "v0.2.0");
    }
}
