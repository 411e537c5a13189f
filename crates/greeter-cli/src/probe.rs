use reqwest::Client;

use greeter_core::types::{GREETING_PATH, HEALTH_PATH};
use greeter_core::{Greeting, HealthStatus};

/// Fetch the greeting from the server at `base_url`.
pub async fn greet(client: &Client, base_url: &str) -> anyhow::Result<Greeting> {
    let url = endpoint(base_url, GREETING_PATH);
    tracing::debug!("GET {url}");

    let resp = client.get(&url).send().await?;
    if !resp.status().is_success() {
        anyhow::bail!("{url} returned {}", resp.status());
    }

    Ok(resp.json().await?)
}

/// Fetch the health status and fail unless it is "ok".
pub async fn health(client: &Client, base_url: &str) -> anyhow::Result<HealthStatus> {
    let url = endpoint(base_url, HEALTH_PATH);
    tracing::debug!("GET {url}");

    let resp = client.get(&url).send().await?;
    if !resp.status().is_success() {
        anyhow::bail!("{url} returned {}", resp.status());
    }

    let health: HealthStatus = resp.json().await?;
    if !health.is_ok() {
        anyhow::bail!("server reported status {:?}", health.status);
    }

    Ok(health)
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}
