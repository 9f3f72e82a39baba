use crate::gtag::PageScope;
use crate::plugin::plugin::Plugin;

/// Ordered set of startup plugins, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct PluginHost {
    plugins: Vec<Plugin>,
}

impl PluginHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `plugin` after the ones already registered. Returns `false` and keeps the existing
    /// plugin when the name is taken.
    pub fn register(&mut self, plugin: Plugin) -> bool {
        if self.plugins.iter().any(|existing| existing.name() == plugin.name()) {
            return false;
        }
        self.plugins.push(plugin);
        true
    }

    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    /// Runs every eligible plugin once, in registration order, and returns the names that ran.
    pub fn run(&self, page: &dyn PageScope) -> Vec<String> {
        self.plugins
            .iter()
            .filter(|plugin| plugin.should_run(page))
            .map(|plugin| {
                plugin.apply(page);
                plugin.name().to_string()
            })
            .collect()
    }
}
