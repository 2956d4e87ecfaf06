use beamer::app_config::AppConfig;
use beamer::device_registry::DeviceRegistry;
use beamer::info_beamer::{FetchError, Resource};
use beamer::{github, http_client, info_beamer};
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt().with_max_level(config.core().log_level()).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");

    let client = http_client::new_client(&config)?;

    if let Some(username) = config.github().username() {
        match github::lookup_user(&client, &config, username).await {
            Ok(profile) => info!(
                login = profile.login,
                "🐙 {} ({}), bio: {}, avatar: {}, {} followers, {} following, repositories: {}",
                profile.name.as_deref().unwrap_or("no name"),
                profile.account_type,
                profile.bio.as_deref().unwrap_or("none"),
                profile.avatar_url,
                profile.followers,
                profile.following,
                profile.repositories.join(", ")
            ),
            Err(e) => warn!("⚠️ Could not look up GitHub user '{}': {}", username, e),
        }
    }

    let mut registry = DeviceRegistry::new();
    match info_beamer::fetch_devices(&client, &config, &mut registry).await {
        Ok(count) => {
            info!("✅  Discovered {} device(s)", count);
            for device in registry.devices() {
                info!(device_id = device.id, "📺 {}\n{}", device.description, device);
            }
        }
        Err(FetchError::Decode(e)) => error!(kind = ?e.kind(), "❌ Discarding device listing: {}", e),
        Err(e) => error!("❌ Could not retrieve devices: {}", e),
    }

    if config.info_beamer().dump_resources() {
        for resource in Resource::DUMPED {
            match info_beamer::fetch_resource(&client, &config, resource).await {
                Ok(json) => debug!("🔸 Retrieved {}: {}", resource, json),
                Err(e) => warn!("⚠️ Could not retrieve {}: {}", resource, e),
            }
        }
    }

    info!("🔥 {} is done", env!("CARGO_PKG_NAME"));
    Ok(())
}
