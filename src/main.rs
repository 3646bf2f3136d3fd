use std::net::{Ipv4Addr, SocketAddr};

use api::{capabilities::Capabilities, serve, Config};
use capability::models::Models;
use tokio::net::TcpListener;
use toml::{map::Map, Value};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = util::load_config::<Config>("Config.toml")?;

    let capabilities = resolve_capabilities(&config)?;

    let transcript = transcript::init_transcript();

    let port = config.server.port;
    let router = serve(transcript, capabilities, config).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(&address).await?;
    info!(task = "start server", address = address.to_string());

    Ok(axum::serve(listener, router).await?)
}

/// Each capability is resolved on its own: it exists only when credentials
/// are present and its flag is on. Anything unresolved is served from mock
/// responses instead.
fn resolve_capabilities(config: &Config) -> anyhow::Result<Capabilities> {
    let secrets = match util::load_secrets() {
        Ok(secrets) => secrets,
        Err(e) => {
            warn!(
                task = "resolve capabilities",
                err = e.to_string(),
                "running without credentials, capabilities are mocked"
            );
            return Ok(Capabilities::default());
        }
    };

    let (Some(token), Some(account_id)) = (
        read_secret(&secrets, "WORKERS_AI_TOKEN"),
        read_secret(&secrets, "WORKERS_AI_ACCOUNT_ID"),
    ) else {
        warn!(
            task = "resolve capabilities",
            "incomplete credentials, capabilities are mocked"
        );
        return Ok(Capabilities::default());
    };

    let models = Models::new(token, account_id, &config.workers_ai.base_url)?;

    Ok(Capabilities {
        language_detection: config
            .workers_ai
            .language_detection
            .then(|| models.clone()),
        summarization: config.workers_ai.summarization.then(|| models.clone()),
        translation: config.workers_ai.translation.then(|| models.clone()),
    })
}

fn read_secret<'a>(
    secrets: &'a Map<String, Value>,
    key: &str,
) -> Option<&'a str> {
    secrets.get(key).and_then(|v| v.as_str())
}
