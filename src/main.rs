use genimage::{
    app,
    config::{self, ImageConfig},
    logger::{self, LoggerConfig},
    ImageClient,
};
use std::io;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Env file first so LOG_LEVEL from it applies to the logger.
    let env_file = config::load_env_file();
    logger::init_with_config(LoggerConfig::from_env())?;

    match env_file {
        Some(name) => log::info!("✅ Loaded environment from {}", name),
        None => log::warn!("⚠️  No env file found, using process environment"),
    }

    let config = ImageConfig::from_env();
    log::debug!("Configuration: {:?}", config);

    let client = match ImageClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Failed to initialize image client: {}", e);
            return Err(e.into());
        }
    };

    log::debug!("🖼️  Available image generation models:");
    for (id, name, provider) in ImageClient::supported_models() {
        log::debug!("  {} - {} ({})", id, name, provider);
    }

    app::run(&client, app::PROMPT, &mut io::stdout().lock()).await?;
    Ok(())
}
