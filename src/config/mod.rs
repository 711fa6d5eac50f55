#[allow(clippy::module_inception)]
pub mod config;
pub mod manifest;
