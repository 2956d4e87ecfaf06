use crate::domain::device::Device;
use crate::info_beamer::{DecodeError, decode_entry, device_entries};
use serde_json::Value;
use tracing::{debug, info, instrument};

/// The ordered collection of known devices, rebuilt from every device listing.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        DeviceRegistry { devices: Vec::new() }
    }

    /// Replaces the devices with the ones in the `devices` array of `root`. The registry is cleared before validating,
    /// on error it holds the devices that were decoded before the failing entry.
    #[instrument(skip_all)]
    pub fn populate(&mut self, root: &Value) -> Result<usize, DecodeError> {
        self.devices.clear();

        let entries = device_entries(root)?;
        debug!("🔵 Registering {} device(s)...", entries.len());
        for (index, entry) in entries.iter().enumerate() {
            self.devices.push(decode_entry(index, entry)?);
        }

        info!("🔵 Registering {} device(s)... OK", self.devices.len());
        Ok(self.devices.len())
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn into_devices(self) -> Vec<Device> {
        self.devices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info_beamer::DecodeErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_log::test;

    fn device_json(id: i64) -> Value {
        json!({
            "id": id,
            "description": format!("device {}", id),
            "location": "hall",
            "serial": format!("serial-{}", id),
            "status": "",
            "is_online": false,
            "reboot": 4,
            "offline": {}
        })
    }

    fn ids(registry: &DeviceRegistry) -> Vec<i64> {
        registry.devices().iter().map(|device| device.id).collect()
    }

    #[test]
    fn populate_registers_all_devices_in_order() {
        let mut registry = DeviceRegistry::new();

        let count = registry.populate(&json!({"devices": [device_json(2), device_json(1)]})).unwrap();

        assert_eq!(count, 2);
        assert_eq!(ids(&registry), vec![2, 1]);
    }

    #[test]
    fn populate_replaces_the_previous_devices() {
        let mut registry = DeviceRegistry::new();
        registry.populate(&json!({"devices": [device_json(1), device_json(2)]})).unwrap();

        registry.populate(&json!({"devices": [device_json(3)]})).unwrap();

        assert_eq!(ids(&registry), vec![3]);
    }

    #[test]
    fn populate_keeps_the_devices_before_a_malformed_entry() {
        let mut registry = DeviceRegistry::new();
        let mut malformed = device_json(2);
        malformed.as_object_mut().unwrap().remove("reboot");

        let result = registry.populate(&json!({"devices": [device_json(1), malformed, device_json(3)]}));

        let err = result.unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::BadJson);
        assert_eq!(err.message(), "No reboot in json");
        assert_eq!(ids(&registry), vec![1]);
    }

    #[test]
    fn populate_clears_the_registry_before_validating() {
        let mut registry = DeviceRegistry::new();
        registry.populate(&json!({"devices": [device_json(1)]})).unwrap();

        let result = registry.populate(&json!({"devices": "none"}));

        assert_eq!(result.unwrap_err().message(), "json value \"devices\" is not an array");
        assert!(registry.is_empty());
    }

    #[test]
    fn into_devices_hands_out_the_devices() {
        let mut registry = DeviceRegistry::new();
        registry.populate(&json!({"devices": [device_json(5)]})).unwrap();

        assert_eq!(registry.len(), 1);
        let devices = registry.into_devices();
        assert_eq!(devices[0].serial, "serial-5");
    }
}
