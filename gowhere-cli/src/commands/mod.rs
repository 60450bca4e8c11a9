pub mod distance;
pub mod geocode;
pub mod reverse;

use std::time::Duration;

use anyhow::{Context, Result};
use gowhere::geocode::nominatim::{NominatimConfig, NominatimProvider};
use gowhere::GeocodeGateway;

use crate::ProviderArgs;

/// Build a gateway from CLI flags, falling back to the environment defaults.
pub fn build_gateway(args: &ProviderArgs) -> Result<GeocodeGateway> {
    let mut config = NominatimConfig::from_env();

    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    if let Some(user_agent) = &args.user_agent {
        config.user_agent = user_agent.clone();
    }
    if let Some(url) = &args.geocoder_url {
        config = config.with_base_url(url.clone());
    }

    let provider = NominatimProvider::new(config).context("Failed to create geocoding provider")?;
    Ok(GeocodeGateway::new(provider))
}
