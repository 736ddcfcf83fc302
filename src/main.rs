use anyhow::Result;
use clap::Parser;
use dayalbum_generator::pipeline::Generator;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "dayalbum-generator")]
#[command(about = "Turn a description of your day into a fictitious album")]
struct CliArgs {
    /// Free-text description of your day (max 500 characters).
    #[arg(value_name = "DESCRIPTION")]
    description: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dayalbum_generator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let generator = match Generator::from_env() {
        Ok(generator) => generator,
        Err(e) => {
            error!("Failed to initialize generator: {}", e);
            std::process::exit(1);
        }
    };

    match generator.generate(&args.description).await {
        Ok(album) => {
            info!("Generation completed successfully");
            println!("{}", serde_json::to_string_pretty(&album)?);
            Ok(())
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
