//! Startup plugins run by the host application during bootstrap.

mod host;
mod plugin;

pub use host::PluginHost;
pub use plugin::{Plugin, PluginMode, PluginSetup};
