pub mod app_config;
pub mod device_registry;
pub mod domain;
pub mod extensions;
pub mod github;
pub mod http_client;
pub mod info_beamer;
pub mod json_dump;
mod json_kind;
