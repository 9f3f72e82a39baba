use crate::gtag::command::GtagCommand;
use crate::gtag::error::GtagResult;

/// A `<script>` reference appended to the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptTag {
    pub src: String,
    pub is_async: bool,
}

impl ScriptTag {
    pub fn async_src(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            is_async: true,
        }
    }
}

/// The parts of a page the loader touches: the execution-context flag, the document head and the
/// global namespace.
///
/// [`crate::platform::MemoryPage`] keeps everything in process; on `wasm32` with the `wasm-web`
/// feature, [`crate::platform::browser::BrowserPage`] writes to the real `window`.
pub trait PageScope {
    /// Whether the page is a browser rendering context. Nothing else is called when this is
    /// `false`.
    fn is_browser(&self) -> bool;

    /// Appends `script` to the document head. Loading happens out of band and is never awaited.
    fn append_head_script(&self, script: &ScriptTag) -> GtagResult<()>;

    /// Creates an empty queue under `name` unless one already exists.
    fn ensure_data_layer(&self, name: &str) -> GtagResult<()>;

    /// Binds a tracking function under `function_name` that records onto the queue named
    /// `data_layer_name`, replacing any previous binding.
    fn bind_tracker(&self, function_name: &str, data_layer_name: &str) -> GtagResult<()>;

    /// Invokes the tracking function bound under `function_name`.
    fn call_tracker(&self, function_name: &str, command: &GtagCommand) -> GtagResult<()>;
}
