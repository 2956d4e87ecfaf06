use serde_json::Value;

// API: https://info-beamer.com/doc/api#devicelist
#[derive(Clone, PartialEq, Debug)]
pub struct Device {
    pub id: i64,
    pub description: String,
    pub location: String,
    pub serial: String,
    pub status: String, // Informal text of what the device is doing, empty when the API reports null
    pub is_online: bool,
    pub is_synced: Option<bool>,
    pub maintenance: Vec<String>,
    pub run: Option<RunInfo>,
    pub userdata: Option<Value>,
    pub reboot: i64,
    pub geo: Option<GeoInfo>,
    pub setup: Option<SetupInfo>,
    pub hw: Option<HwInfo>,
    pub offline: OfflineInfo,
    pub upgrade_blocked: i64, // In days
}

/// Information about the current boot cycle of a device.
#[derive(Clone, PartialEq, Debug)]
pub struct RunInfo {
    pub channel: String,
    pub public_addr: String,
    pub resolution: String,
    pub restarted: i64,
    pub tag: String,
    pub version: String,
    pub pi_revision: String,
}

#[derive(Clone, PartialEq, Debug)]
pub struct GeoInfo {
    pub lat: f64,
    pub lon: f64,
    pub source: String, // "wifi" or "ip"
}

#[derive(Clone, PartialEq, Debug)]
pub struct SetupInfo {
    pub id: i64,
    pub name: String,
    pub updated: i64,
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct HwInfo {
    pub hw_type: Option<String>,
    pub platform: Option<String>,
    pub model: Option<String>,
    pub memory: Option<i64>, // In MB
    pub features: Vec<String>,
}

/// Offline support status. The API marks these fields as work in progress, so they are not decoded yet.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct OfflineInfo {
    pub licensed: bool,
    pub plan: String,
    pub max_offline: i64, // In days
    pub chargeable: i64,  // In days
}
