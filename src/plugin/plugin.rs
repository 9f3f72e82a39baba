use std::fmt;
use std::sync::Arc;

use crate::gtag::PageScope;

pub type PluginSetup = Arc<dyn Fn(&dyn PageScope) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PluginMode {
    /// Runs only when the page is a browser context.
    Client,
    Universal,
}

#[derive(Clone)]
pub struct Plugin {
    name: Arc<str>,
    mode: PluginMode,
    setup: PluginSetup,
}

impl Plugin {
    pub fn new<F>(name: impl Into<String>, mode: PluginMode, setup: F) -> Self
    where
        F: Fn(&dyn PageScope) + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            mode,
            setup: Arc::new(setup),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> PluginMode {
        self.mode
    }

    pub fn should_run(&self, page: &dyn PageScope) -> bool {
        match self.mode {
            PluginMode::Client => page.is_browser(),
            PluginMode::Universal => true,
        }
    }

    /// Runs the setup hook unconditionally. [`crate::plugin::PluginHost`] checks the mode first.
    pub fn apply(&self, page: &dyn PageScope) {
        (self.setup)(page)
    }
}

impl fmt::Debug for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plugin")
            .field("name", &self.name())
            .field("mode", &self.mode)
            .finish()
    }
}
