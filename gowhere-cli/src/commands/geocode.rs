use anyhow::{bail, Result};
use gowhere::GeocodeResult;
use serde::Serialize;

use super::build_gateway;
use crate::ProviderArgs;

#[derive(Serialize)]
struct GeocodeOutput<'a> {
    query: &'a str,
    latitude: f64,
    longitude: f64,
    address: String,
}

pub async fn run(provider: &ProviderArgs, location: &str, json: bool) -> Result<()> {
    let gateway = build_gateway(provider)?;

    let place = match gateway.geocode_location(Some(location)).await {
        GeocodeResult::Found(place) => place,
        other => bail!(other.error_message().unwrap_or_default()),
    };

    if json {
        let output = GeocodeOutput {
            query: location,
            latitude: place.latitude,
            longitude: place.longitude,
            address: place.address,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}, {}", place.latitude, place.longitude);
        println!("{}", place.address);
    }

    Ok(())
}
