use anyhow::{bail, Result};
use gowhere::GeocodeResult;
use serde::Serialize;

use super::build_gateway;
use crate::ProviderArgs;

#[derive(Serialize)]
struct ReverseOutput {
    lat: f64,
    lon: f64,
    address: String,
}

pub async fn run(provider: &ProviderArgs, lat: f64, lon: f64, json: bool) -> Result<()> {
    let gateway = build_gateway(provider)?;

    let place = match gateway.reverse_geocode(lat, lon).await {
        GeocodeResult::Found(place) => place,
        other => bail!(other.error_message().unwrap_or_default()),
    };

    if json {
        let output = ReverseOutput {
            lat,
            lon,
            address: place.address,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", place.address);
    }

    Ok(())
}
