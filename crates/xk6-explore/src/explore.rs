// SPDX-FileCopyrightText: 2026 xk6-explore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `xk6-explore explore` command implementation.
//!
//! Fetches the extension catalog, applies the `--type` and `--tier`
//! filters, and renders the sorted result. Output is buffered so that a
//! failure leaves stdout untouched.

use std::io::{IsTerminal, Write};

use clap::Args;
use tokio_util::sync::CancellationToken;
use tracing::info;
use xk6_explore_catalog::{fetch_catalog, select_extensions};
use xk6_explore_config::ExploreConfig;
use xk6_explore_core::{ExploreError, KindFilter, TierFilter};

use crate::output::{self, Format, RenderOptions};

/// Flags of the `explore` command.
#[derive(Args, Debug, Default, Clone)]
pub struct ExploreArgs {
    /// Output in JSON format.
    #[arg(long)]
    pub json: bool,

    /// Show only module and description columns.
    #[arg(long)]
    pub brief: bool,

    /// Show a detailed list instead of a table.
    #[arg(long)]
    pub detailed: bool,

    /// Do not truncate descriptions.
    #[arg(long = "no-trunc")]
    pub no_trunc: bool,

    /// Filter by tier (official, community).
    #[arg(long, value_name = "TIER", value_parser = TierFilter::parse)]
    pub tier: Option<TierFilter>,

    /// Filter by type (javascript, output, subcommand).
    #[arg(long = "type", value_name = "TYPE", value_parser = KindFilter::parse)]
    pub kind: Option<KindFilter>,

    /// Disable colors in the detailed view.
    #[arg(long)]
    pub plain: bool,

    /// Catalog endpoint to query instead of the configured one.
    #[arg(long, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExploreArgs {
    /// `--json` wins over `--detailed`, which wins over the table flags.
    pub fn format(&self) -> Format {
        if self.json {
            Format::Json
        } else if self.detailed {
            Format::Detailed
        } else {
            Format::Table {
                brief: self.brief,
                truncate: !self.no_trunc,
            }
        }
    }

    /// `--catalog-url`, falling back to `catalog.url` from config.
    pub fn catalog_url<'a>(&'a self, config: &'a ExploreConfig) -> &'a str {
        self.catalog_url.as_deref().unwrap_or(&config.catalog.url)
    }
}

/// Run the `explore` command against stdout.
pub async fn run_explore(
    config: &ExploreConfig,
    args: &ExploreArgs,
    cancel: &CancellationToken,
) -> Result<(), ExploreError> {
    let stdout = std::io::stdout();
    let opts = RenderOptions {
        format: args.format(),
        width: output::terminal_width(),
        color: !args.plain && !config.output.plain && stdout.is_terminal(),
    };

    let mut buf = Vec::new();
    explore_into(&mut buf, config, args, &opts, cancel).await?;

    let mut lock = stdout.lock();
    lock.write_all(&buf)?;
    lock.flush()?;
    Ok(())
}

/// Fetch, select, and render into `out`.
pub async fn explore_into<W: Write>(
    out: &mut W,
    config: &ExploreConfig,
    args: &ExploreArgs,
    opts: &RenderOptions,
    cancel: &CancellationToken,
) -> Result<(), ExploreError> {
    let catalog = fetch_catalog(cancel, args.catalog_url(config)).await?;
    let extensions = select_extensions(&catalog, args.kind, args.tier);

    info!(
        catalog = catalog.len(),
        shown = extensions.len(),
        "rendering extensions"
    );

    output::render(out, &extensions, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn registry() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalog.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "k6": {"module": "go.k6.io/k6", "tier": "official", "versions": ["v1.0.0"]},
                "faker": {
                    "module": "github.com/grafana/xk6-faker",
                    "tier": "official",
                    "description": "Generate fake data",
                    "versions": ["v0.4.3", "v0.4.4"],
                    "imports": ["k6/x/faker"]
                },
                "dashboard": {
                    "module": "github.com/grafana/xk6-dashboard",
                    "tier": "community",
                    "versions": ["v0.7.4"],
                    "subcommands": ["dashboard"]
                }
            })))
            .mount(&server)
            .await;
        server
    }

    fn config_for(server: &MockServer) -> ExploreConfig {
        let mut config = ExploreConfig::default();
        config.catalog.url = format!("{}/catalog.json", server.uri());
        config
    }

    fn opts(args: &ExploreArgs) -> RenderOptions {
        RenderOptions {
            format: args.format(),
            width: 120,
            color: false,
        }
    }

    async fn explore(config: &ExploreConfig, args: &ExploreArgs) -> Result<String, ExploreError> {
        let mut buf = Vec::new();
        explore_into(&mut buf, config, args, &opts(args), &CancellationToken::new()).await?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn format_precedence() {
        let args = ExploreArgs {
            json: true,
            detailed: true,
            brief: true,
            ..Default::default()
        };
        assert_eq!(args.format(), Format::Json);

        let args = ExploreArgs {
            detailed: true,
            brief: true,
            ..Default::default()
        };
        assert_eq!(args.format(), Format::Detailed);

        let args = ExploreArgs {
            brief: true,
            no_trunc: true,
            ..Default::default()
        };
        assert_eq!(
            args.format(),
            Format::Table {
                brief: true,
                truncate: false
            }
        );
    }

    #[test]
    fn catalog_url_flag_overrides_config() {
        let config = ExploreConfig::default();
        let args = ExploreArgs::default();
        assert_eq!(args.catalog_url(&config), "https://registry.k6.io/catalog.json");

        let args = ExploreArgs {
            catalog_url: Some("http://localhost:9999/catalog.json".into()),
            ..Default::default()
        };
        assert_eq!(args.catalog_url(&config), "http://localhost:9999/catalog.json");
    }

    #[tokio::test]
    async fn table_lists_sorted_extensions_without_k6() {
        let server = registry().await;
        let out = explore(&config_for(&server), &ExploreArgs::default()).await.unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("github.com/grafana/xk6-faker"));
        assert!(lines[2].starts_with("github.com/grafana/xk6-dashboard"));
        assert!(!out.contains("go.k6.io/k6"));
    }

    #[tokio::test]
    async fn json_respects_filters() {
        let server = registry().await;
        let args = ExploreArgs {
            json: true,
            tier: Some(TierFilter::Community),
            ..Default::default()
        };

        let out = explore(&config_for(&server), &args).await.unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0]["module"], "github.com/grafana/xk6-dashboard");
        assert_eq!(parsed[0]["latest"], "v0.7.4");
    }

    #[tokio::test]
    async fn flag_url_is_used_over_config() {
        let server = registry().await;
        let config = ExploreConfig::default();
        let args = ExploreArgs {
            json: true,
            kind: Some(KindFilter::JavaScript),
            catalog_url: Some(format!("{}/catalog.json", server.uri())),
            ..Default::default()
        };

        let out = explore(&config, &args).await.unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["latest"], "v0.4.4");
    }

    #[tokio::test]
    async fn failed_fetch_writes_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let args = ExploreArgs::default();
        let mut buf = Vec::new();
        let err = explore_into(
            &mut buf,
            &config_for(&server),
            &args,
            &opts(&args),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ExploreError::CatalogStatus { .. }));
        assert!(buf.is_empty());
    }
}
