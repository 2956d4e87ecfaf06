pub mod device;
mod device_display;
