use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;

/// Geocoding and geodesic distance CLI tool
#[derive(Parser)]
#[command(name = "gowhere")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    provider: ProviderArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Geocoding provider settings shared by the lookup commands.
#[derive(Args, Debug, Clone)]
pub struct ProviderArgs {
    /// Client tag sent to the geocoding provider
    #[arg(long, env = "GOWHERE_USER_AGENT", global = true)]
    pub user_agent: Option<String>,

    /// Nominatim base URL
    #[arg(long, env = "GOWHERE_GEOCODER_URL", global = true)]
    pub geocoder_url: Option<String>,

    /// Request timeout in seconds (falls back to GOWHERE_GEOCODER_TIMEOUT, then 10)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a place name to coordinates
    Geocode {
        /// Place name or address
        location: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Resolve coordinates to an address
    Reverse {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Geodesic distance between two points
    Distance {
        /// Latitude of the first point
        #[arg(long, allow_hyphen_values = true)]
        lat1: f64,

        /// Longitude of the first point
        #[arg(long, allow_hyphen_values = true)]
        lon1: f64,

        /// Latitude of the second point
        #[arg(long, allow_hyphen_values = true)]
        lat2: f64,

        /// Longitude of the second point
        #[arg(long, allow_hyphen_values = true)]
        lon2: f64,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Geocode { location, json } => {
            commands::geocode::run(&cli.provider, &location, json).await
        }
        Commands::Reverse { lat, lon, json } => {
            commands::reverse::run(&cli.provider, lat, lon, json).await
        }
        Commands::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
            json,
        } => commands::distance::run(lat1, lon1, lat2, lon2, json),
    }
}
