use crate::domain::device::{Device, GeoInfo, HwInfo, OfflineInfo, RunInfo, SetupInfo};
use crate::json_kind::JsonKind;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

const NUMERIC: &str = "numeric";
const STRING: &str = "String";
const BOOL: &str = "Bool";
const OBJECT: &str = "Object";
const ARRAY: &str = "Array";

/// Decodes the `devices` array of a device list response, in order.
pub fn decode_devices(root: &Value) -> Result<Vec<Device>, DecodeError> {
    device_entries(root)?
        .iter()
        .enumerate()
        .map(|(index, entry)| decode_entry(index, entry))
        .collect()
}

pub(crate) fn device_entries(root: &Value) -> Result<&Vec<Value>, DecodeError> {
    match root.get("devices") {
        None => Err(DecodeError::bad_json("json missing key \"devices\"")),
        Some(Value::Array(entries)) => Ok(entries),
        Some(_) => Err(DecodeError::bad_json("json value \"devices\" is not an array")),
    }
}

pub(crate) fn decode_entry(index: usize, entry: &Value) -> Result<Device, DecodeError> {
    let object = entry
        .as_object()
        .ok_or_else(|| DecodeError::bad_json(format!("json \"devices[{}]\" not an object", index)))?;
    decode_device(object)
}

/// Decodes a single device object. The keys are validated in a fixed order, the first violation is returned.
pub fn decode_device(object: &Map<String, Value>) -> Result<Device, DecodeError> {
    let json = Fields::root(object);

    let id = json.integer("id")?;
    let description = json.string("description")?;
    let location = json.string("location")?;
    let serial = json.string("serial")?;
    let status = match json.required("status")? {
        Value::String(status) => status.clone(),
        Value::Null => String::new(),
        _ => return Err(json.mismatch("status", "String/Null")),
    };
    let is_online = json.boolean("is_online")?;
    let is_synced = json.optional_with("is_synced", Fields::boolean)?;
    let maintenance = decode_maintenance(id, json.get("maintenance"));
    let run = json.nested("run")?.map(|run| decode_run(&run)).transpose()?;
    let userdata = json.get("userdata").cloned();
    let reboot = json.integer("reboot")?;
    let geo = json.nullable_nested("geo")?.map(|geo| decode_geo(&geo)).transpose()?;
    let setup = json.nullable_nested("setup")?.map(|setup| decode_setup(&setup)).transpose()?;
    let hw = json.nullable_nested("hw")?.map(|hw| decode_hw(id, &hw)).transpose()?;
    json.required("offline")?;

    debug!(device_id = id, "🔸 Decoded device '{}'", description);
    Ok(Device {
        id,
        description,
        location,
        serial,
        status,
        is_online,
        is_synced,
        maintenance,
        run,
        userdata,
        reboot,
        geo,
        setup,
        hw,
        offline: OfflineInfo::default(),
        upgrade_blocked: 0,
    })
}

fn decode_maintenance(device_id: i64, value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| match entry {
                Value::String(flag) => Some(flag.clone()),
                other => {
                    warn!(device_id = device_id, "⚠️ Skipping maintenance entry, expected String but got {}", JsonKind::of(other));
                    None
                }
            })
            .collect(),
        Some(other) => {
            warn!(device_id = device_id, "⚠️ Ignoring maintenance, expected Array but got {}", JsonKind::of(other));
            Vec::new()
        }
    }
}

// Field order is the validation order
fn decode_run(run: &Fields) -> Result<RunInfo, DecodeError> {
    Ok(RunInfo {
        channel: run.string("channel")?,
        public_addr: run.string("public_addr")?,
        resolution: run.string("resolution")?,
        // Read from its own key on purpose. Older clients read "resolution" here, which always gave 0
        restarted: run.integer("restarted")?,
        tag: run.string("tag")?,
        version: run.string("version")?,
        pi_revision: run.string("pi_revision")?,
    })
}

fn decode_geo(geo: &Fields) -> Result<GeoInfo, DecodeError> {
    Ok(GeoInfo {
        lat: geo.double("lat")?,
        lon: geo.double("lon")?,
        source: geo.string("source")?,
    })
}

fn decode_setup(setup: &Fields) -> Result<SetupInfo, DecodeError> {
    Ok(SetupInfo {
        id: setup.integer("id")?,
        name: setup.string("name")?,
        updated: setup.integer("updated")?,
    })
}

fn decode_hw(device_id: i64, hw: &Fields) -> Result<HwInfo, DecodeError> {
    let hw_type = hw.optional_with("type", Fields::string)?;
    let platform = hw.nullable_with("platform", Fields::string)?;
    let model = hw.nullable_with("model", Fields::string)?;
    let memory = hw.optional_with("memory", Fields::integer)?;
    let features = match hw.get("features") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(features)) => features
            .iter()
            .map(|feature| match feature {
                Value::String(feature) => feature.clone(),
                other => {
                    warn!(device_id = device_id, "⚠️ Keeping hw feature {} as text, expected String but got {}", other, JsonKind::of(other));
                    other.to_string()
                }
            })
            .collect(),
        Some(_) => return Err(hw.mismatch("features", ARRAY)),
    };

    Ok(HwInfo {
        hw_type,
        platform,
        model,
        memory,
        features,
    })
}

// Numbers that are not whole or do not fit in an i64 read as 0
fn whole_or_zero(number: f64) -> i64 {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    if number.fract() == 0.0 && (-LIMIT..LIMIT).contains(&number) {
        number as i64
    } else {
        0
    }
}

/// A view on a JSON object that phrases its errors after the object it reads from.
struct Fields<'a> {
    name: Option<&'static str>,
    object: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn root(object: &'a Map<String, Value>) -> Self {
        Fields { name: None, object }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key)
    }

    fn required(&self, key: &str) -> Result<&'a Value, DecodeError> {
        self.object.get(key).ok_or_else(|| self.missing(key))
    }

    fn string(&self, key: &str) -> Result<String, DecodeError> {
        self.required(key)?
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.mismatch(key, STRING))
    }

    fn integer(&self, key: &str) -> Result<i64, DecodeError> {
        match self.required(key)? {
            Value::Number(number) => Ok(number.as_i64().unwrap_or_else(|| whole_or_zero(number.as_f64().unwrap_or_default()))),
            _ => Err(self.mismatch(key, NUMERIC)),
        }
    }

    fn double(&self, key: &str) -> Result<f64, DecodeError> {
        self.required(key)?.as_f64().ok_or_else(|| self.mismatch(key, NUMERIC))
    }

    fn boolean(&self, key: &str) -> Result<bool, DecodeError> {
        self.required(key)?.as_bool().ok_or_else(|| self.mismatch(key, BOOL))
    }

    /// Reads `key` only when it is present, an explicit null is still validated.
    fn optional_with<T>(&self, key: &str, read: fn(&Self, &str) -> Result<T, DecodeError>) -> Result<Option<T>, DecodeError> {
        self.object.contains_key(key).then(|| read(self, key)).transpose()
    }

    /// Reads `key` only when it is present and not null.
    fn nullable_with<T>(&self, key: &str, read: fn(&Self, &str) -> Result<T, DecodeError>) -> Result<Option<T>, DecodeError> {
        match self.object.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => read(self, key).map(Some),
        }
    }

    fn nested(&self, key: &'static str) -> Result<Option<Fields<'a>>, DecodeError> {
        match self.object.get(key) {
            None => Ok(None),
            Some(Value::Object(object)) => Ok(Some(Fields { name: Some(key), object })),
            Some(_) => Err(self.mismatch(key, OBJECT)),
        }
    }

    fn nullable_nested(&self, key: &'static str) -> Result<Option<Fields<'a>>, DecodeError> {
        match self.object.get(key) {
            Some(Value::Null) => Ok(None),
            _ => self.nested(key),
        }
    }

    fn missing(&self, key: &str) -> DecodeError {
        match self.name {
            None => DecodeError::bad_json(format!("No {} in json", key)),
            Some(name) => DecodeError::bad_json(format!("{} object does not contain \"{}\"", name, key)),
        }
    }

    fn mismatch(&self, key: &str, expected: &str) -> DecodeError {
        match self.name {
            None => DecodeError::bad_json(format!("{} in json not {}", key, expected)),
            Some(name) => DecodeError::bad_json(format!("{} object \"{}\" is not {}", name, key, expected)),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DecodeErrorKind {
    BadJson,
}

#[derive(Error, Clone, PartialEq, Debug)]
#[error("{message}")]
pub struct DecodeError {
    kind: DecodeErrorKind,
    message: String,
}

impl DecodeError {
    fn bad_json(message: impl Into<String>) -> Self {
        DecodeError {
            kind: DecodeErrorKind::BadJson,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
