use std::sync::Arc;

use crate::gtag::command::GtagCommand;
use crate::gtag::config::GtagConfig;
use crate::gtag::constants::GTAG_PLUGIN_NAME;
use crate::gtag::error::GtagResult;
use crate::gtag::logger::LOGGER;
use crate::gtag::page::{PageScope, ScriptTag};
use crate::plugin::{Plugin, PluginMode};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The page is not a browser context; nothing was touched.
    Skipped,
    Installed { script_src: String },
}

/// Installs the gtag snippet with the default Google Ads configuration.
///
/// Failures are logged at debug level and otherwise ignored: a page without tracking behaves
/// exactly like a page whose tracking script was blocked.
pub fn install(page: &dyn PageScope) {
    install_with_config(page, &GtagConfig::default());
}

pub fn install_with_config(page: &dyn PageScope, config: &GtagConfig) {
    match try_install_with_config(page, config) {
        Ok(InstallOutcome::Installed { script_src }) => {
            LOGGER.debug(format!("gtag bootstrapped from {script_src}"));
        }
        Ok(InstallOutcome::Skipped) => {
            LOGGER.debug("Not a browser context, gtag installation skipped");
        }
        Err(err) => {
            log::debug!("gtag installation failed: {err}");
        }
    }
}

/// Runs the installation steps in order and reports the first failure.
///
/// The configuration is validated before the page is touched, so an invalid configuration leaves
/// the page unchanged. Calling this twice appends a second script tag and a second pair of
/// bootstrap commands.
pub fn try_install_with_config(
    page: &dyn PageScope,
    config: &GtagConfig,
) -> GtagResult<InstallOutcome> {
    if !page.is_browser() {
        return Ok(InstallOutcome::Skipped);
    }

    config.validate()?;
    let script_src = config.script_url()?;

    page.append_head_script(&ScriptTag::async_src(script_src.clone()))?;
    page.ensure_data_layer(&config.data_layer_name)?;
    page.bind_tracker(&config.function_name, &config.data_layer_name)?;

    page.call_tracker(&config.function_name, &GtagCommand::js_now())?;
    page.call_tracker(
        &config.function_name,
        &GtagCommand::config(config.tag_id.as_str()),
    )?;

    Ok(InstallOutcome::Installed { script_src })
}

/// Forwards `command` to the page's `gtag` function.
pub fn track(page: &dyn PageScope, command: GtagCommand) -> GtagResult<()> {
    track_with_config(page, &GtagConfig::default(), command)
}

/// Forwards `command` to the tracking function bound under `config.function_name`.
pub fn track_with_config(
    page: &dyn PageScope,
    config: &GtagConfig,
    command: GtagCommand,
) -> GtagResult<()> {
    page.call_tracker(&config.function_name, &command)
}

/// The loader packaged as a client-only startup plugin.
pub fn gtag_plugin() -> Plugin {
    gtag_plugin_with_config(GtagConfig::default())
}

pub fn gtag_plugin_with_config(config: GtagConfig) -> Plugin {
    let config = Arc::new(config);
    Plugin::new(GTAG_PLUGIN_NAME, PluginMode::Client, move |page| {
        install_with_config(page, &config)
    })
}
