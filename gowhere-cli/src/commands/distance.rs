use anyhow::{Context, Result};
use gowhere::calculate_distance;
use serde::Serialize;

#[derive(Serialize)]
struct DistanceOutput {
    distance_km: f64,
    distance_miles: f64,
}

pub fn run(lat1: f64, lon1: f64, lat2: f64, lon2: f64, json: bool) -> Result<()> {
    let distance =
        calculate_distance(lat1, lon1, lat2, lon2).context("Failed to calculate distance")?;

    if json {
        let output = DistanceOutput {
            distance_km: distance.kilometers,
            distance_miles: distance.miles,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{:.3} km", distance.kilometers);
        println!("{:.3} mi", distance.miles);
    }

    Ok(())
}
