//! Forward and reverse lookups against the public Nominatim instance.
//!
//! Run with: cargo run --example geocode -- "Place name"

use gowhere::geocode::nominatim::{NominatimConfig, NominatimProvider};
use gowhere::{GeoError, GeocodeGateway, GeocodeResult};

#[tokio::main]
async fn main() -> Result<(), GeoError> {
    let query = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example geocode -- \"Place name\"");
        std::process::exit(1);
    });

    let gateway = GeocodeGateway::new(NominatimProvider::new(NominatimConfig::new(
        "gowhere_example",
    ))?);

    let place = match gateway.geocode_location(Some(&query)).await {
        GeocodeResult::Found(place) => place,
        GeocodeResult::NotFound => {
            println!("{}: not found", query);
            return Ok(());
        }
        GeocodeResult::Error(e) => return Err(e),
    };
    println!("{} -> {}, {}", query, place.latitude, place.longitude);
    println!("  {}", place.address);

    // Second request waits out the provider's one-second policy interval
    match gateway
        .reverse_geocode(place.latitude, place.longitude)
        .await
    {
        GeocodeResult::Found(back) => println!("Reverse: {}", back.address),
        other => println!("Reverse: {}", other.error_message().unwrap_or_default()),
    }

    Ok(())
}
