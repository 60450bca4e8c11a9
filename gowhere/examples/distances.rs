//! Geodesic distances between a few well-known city pairs.
//!
//! Run with: cargo run --example distances

use gowhere::{calculate_distance, GeoError};

fn main() -> Result<(), GeoError> {
    let pairs = [
        ("New York", 40.7128, -74.0060, "London", 51.5074, -0.1278),
        ("Sydney", -33.8688, 151.2093, "Tokyo", 35.6762, 139.6503),
        ("Quito", -0.1807, -78.4678, "Singapore", 1.3521, 103.8198),
    ];

    println!("{:<10} {:<10} {:>12} {:>12}", "From", "To", "km", "miles");
    println!("{:-<47}", "");

    for (from, lat1, lon1, to, lat2, lon2) in &pairs {
        let d = calculate_distance(*lat1, *lon1, *lat2, *lon2)?;
        println!(
            "{:<10} {:<10} {:>12.1} {:>12.1}",
            from, to, d.kilometers, d.miles
        );
    }

    Ok(())
}
