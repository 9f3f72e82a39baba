mod api;
mod command;
mod config;
pub mod constants;
mod data_layer;
pub mod error;
mod logger;
mod page;

pub use api::{
    gtag_plugin, gtag_plugin_with_config, install, install_with_config, track,
    track_with_config, try_install_with_config, InstallOutcome,
};
pub use command::{CommandParams, GtagCommand};
pub use config::GtagConfig;
pub use data_layer::{DataLayer, Tracker};
pub use error::{GtagError, GtagErrorCode, GtagResult};
pub use page::{PageScope, ScriptTag};
