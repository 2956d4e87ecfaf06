use crate::app_config::AppConfig;
use crate::device_registry::DeviceRegistry;
use crate::info_beamer::decoder::DecodeError;
use crate::info_beamer::resource::Resource;
use crate::json_dump;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{Level, enabled, info, instrument, trace};

#[instrument(skip(client, config))]
pub async fn fetch_resource(client: &Client, config: &AppConfig, resource: Resource) -> Result<Value, FetchError> {
    info!("Retrieving info-beamer {}...", resource);

    let url = format!("{}/{}", config.info_beamer().url(), resource.path());
    let json = client
        .get(url)
        .basic_auth("", Some(config.info_beamer().api_key()))
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    if enabled!(Level::TRACE) {
        for line in json_dump::dump(&json) {
            trace!("{}", line);
        }
    }

    info!("Retrieving info-beamer {}... OK", resource);
    Ok(json)
}

/// Fetches the device listing and rebuilds `registry` from it.
#[instrument(skip_all)]
pub async fn fetch_devices(client: &Client, config: &AppConfig, registry: &mut DeviceRegistry) -> Result<usize, FetchError> {
    let json = fetch_resource(client, config, Resource::Devices).await?;
    Ok(registry.populate(&json)?)
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid device listing: {0}")]
    Decode(#[from] DecodeError),
}
