//! rbxwear: command-line client for the Roblox clothing-asset endpoints.
//!
//! Set ROBLOSECURITY to a valid session cookie before running (a `.env` file
//! is honored).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use rbxwear_cli::init_tracing;
use rbxwear_client::RobloxClient;
use rbxwear_core::config::ClientConfig;
use rbxwear_core::constants::DEFAULT_SALE_PRICE;
use rbxwear_core::models::{AssetDetails, AssetType, BatchUploadItem};

#[derive(Parser)]
#[command(name = "rbxwear", about = "Roblox clothing asset upload tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Clothing subtypes the upload command accepts.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ClothingKind {
    Shirt,
    Pants,
}

impl From<ClothingKind> for AssetType {
    fn from(kind: ClothingKind) -> Self {
        match kind {
            ClothingKind::Shirt => AssetType::Shirt,
            ClothingKind::Pants => AssetType::Pants,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a clothing image
    Upload {
        /// Path to the image file
        image: PathBuf,
        /// Asset display name
        #[arg(long, short = 'n')]
        name: String,
        /// Asset description
        #[arg(long, short = 'd', default_value = "")]
        description: String,
        /// Asset type
        #[arg(long = "type", short = 't', value_enum, default_value_t = ClothingKind::Shirt)]
        asset_type: ClothingKind,
        /// Group ID to upload to
        #[arg(long, short = 'g')]
        group: u64,
        /// Publisher user ID
        #[arg(long, short = 'p')]
        publisher: u64,
        /// Max polling attempts
        #[arg(long, default_value_t = 10)]
        max_attempts: u32,
        /// Seconds between polls
        #[arg(long, default_value_t = 1.0)]
        poll_interval: f64,
    },
    /// Put an asset on sale
    Onsale {
        /// Asset ID
        asset_id: u64,
        /// Asset display name
        #[arg(long, short = 'n')]
        name: String,
        /// Asset description
        #[arg(long, short = 'd', default_value = "")]
        description: String,
        /// Group ID
        #[arg(long, short = 'g')]
        group: u64,
        /// Publisher user ID
        #[arg(long, short = 'p')]
        publisher: u64,
        /// Price in Robux
        #[arg(long, default_value_t = DEFAULT_SALE_PRICE)]
        price: u64,
    },
    /// Look up an asset by ID and print its details
    Lookup {
        /// Asset ID
        asset_id: u64,
    },
    /// Download the texture image behind a clothing asset
    Fetch {
        /// Asset ID (must be a shirt or pants)
        asset_id: u64,
        /// Output file path
        #[arg(long, short = 'o', default_value = "clothing.png")]
        output: PathBuf,
    },
}

fn security_cookie() -> anyhow::Result<String> {
    let token = std::env::var("ROBLOSECURITY").unwrap_or_default();
    if token.is_empty() {
        anyhow::bail!("ROBLOSECURITY environment variable is not set");
    }
    Ok(token)
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload {
            image,
            name,
            description,
            asset_type,
            group,
            publisher,
            max_attempts,
            poll_interval,
        } => {
            let image_bytes = std::fs::read(&image)
                .with_context(|| format!("Failed to read image file {}", image.display()))?;

            let config = ClientConfig {
                poll_max_attempts: max_attempts,
                poll_interval: Duration::from_secs_f64(poll_interval),
                ..ClientConfig::default()
            };
            let client = RobloxClient::with_config(security_cookie()?, publisher, config)?;

            let item = BatchUploadItem {
                image: image_bytes,
                name,
                asset_type: asset_type.into(),
                group_id: group,
                description,
            };
            let result = client.upload_clothing_image(&item).await?;

            match result.get("asset_id") {
                Some(asset_id) => println!("Uploaded successfully. Asset ID: {}", asset_id),
                None => {
                    println!("Upload result:");
                    print_json(&result)?;
                }
            }
        }
        Commands::Onsale {
            asset_id,
            name,
            description,
            group,
            publisher,
            price,
        } => {
            let client = RobloxClient::new(security_cookie()?, publisher)?;
            client
                .put_on_sale(asset_id, &name, &description, group, price)
                .await?;
            println!("Asset {} put on sale for {} Robux.", asset_id, price);
        }
        Commands::Lookup { asset_id } => {
            let client = RobloxClient::new(security_cookie()?, 0)?;
            let details = client.get_asset(asset_id).await?;
            print_json(&details)?;
        }
        Commands::Fetch { asset_id, output } => {
            let client = RobloxClient::new(security_cookie()?, 0)?;
            let clothing = match client.get_asset(asset_id).await? {
                AssetDetails::Clothing(clothing) => clothing,
                AssetDetails::Other(asset) => anyhow::bail!(
                    "Asset {} has type {} which is not a clothing type",
                    asset_id,
                    asset.asset_type_id
                ),
            };

            let image = client.download_clothing_image(&clothing).await?;
            std::fs::write(&output, &image)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Wrote {} bytes to {}", image.len(), output.display());
        }
    }

    Ok(())
}
