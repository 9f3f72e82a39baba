#![doc = include_str!("RUSTDOC.md")]

pub mod gtag;
pub mod logger;
pub mod platform;
pub mod plugin;

pub use gtag::{install, install_with_config, GtagConfig};
