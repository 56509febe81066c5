//! Dataset and configuration access
//!
//! The only code that talks to the network. Everything it returns has already
//! gone through the core parsers.

use dioxus_logger::tracing::{info, warn};
use emissions_core::{DashboardConfig, EmissionRecord, LoadError, parse_config, parse_csv};
use gloo_net::http::Request;

const CONFIG_TOML: &str = include_str!("../dashboard.toml");

/// Load the bundled configuration, falling back to defaults if it is invalid
pub fn load_config() -> DashboardConfig {
    match parse_config(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "invalid dashboard.toml, using defaults");
            DashboardConfig::default()
        }
    }
}

/// Fetch the emissions CSV and parse it into rows
pub async fn fetch_dataset(url: &str) -> Result<Vec<EmissionRecord>, LoadError> {
    info!(url, "fetching dataset");

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    if !response.ok() {
        return Err(LoadError::Http {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let text = response.text().await.map_err(|e| LoadError::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    parse_csv(&text)
}
