pub mod config;
pub mod currency;
pub mod features;
pub mod geocode;
pub mod i18n;
pub mod metrics;
pub mod model;
pub mod predict;
pub mod retry;
pub mod server;
