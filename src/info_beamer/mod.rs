mod decoder;
mod fetch;
mod resource;

pub(crate) use decoder::{decode_entry, device_entries};
pub use decoder::{DecodeError, DecodeErrorKind, decode_device, decode_devices};
pub use fetch::{FetchError, fetch_devices, fetch_resource};
pub use resource::Resource;
