use js_sys::{Array, Date, Function, Reflect};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlScriptElement, Window};

use crate::gtag::error::{dom_error, global_scope_error, tracker_unbound, GtagResult};
use crate::gtag::{GtagCommand, PageScope, ScriptTag};
use crate::platform::browser::tracker_source;
use crate::platform::environment::is_browser;

/// Page scope writing to `window` and `document.head`.
///
/// The data layer is a plain JS array so gtag.js can pick it up once it loads, and the tracking
/// function pushes its `arguments` object rather than an array because gtag.js ignores arrays.
#[derive(Clone, Debug, Default)]
pub struct BrowserPage {
    window: Option<Window>,
}

impl BrowserPage {
    /// Captures the current window. Outside a browser the page reports itself as non-browser and
    /// the loader leaves it alone.
    pub fn new() -> Self {
        let window = if is_browser() { web_sys::window() } else { None };
        Self { window }
    }

    fn window(&self) -> GtagResult<&Window> {
        self.window
            .as_ref()
            .ok_or_else(|| global_scope_error("Window not available"))
    }

    fn document(&self) -> GtagResult<Document> {
        self.window()?
            .document()
            .ok_or_else(|| dom_error("Document not available"))
    }

    fn global(&self, name: &str) -> GtagResult<JsValue> {
        Reflect::get(self.window()?, &JsValue::from_str(name)).map_err(|err| {
            global_scope_error(format!("Failed to read window.{name}: {}", js_error_message(&err)))
        })
    }

    fn set_global(&self, name: &str, value: &JsValue) -> GtagResult<()> {
        Reflect::set(self.window()?, &JsValue::from_str(name), value)
            .map_err(|err| {
                global_scope_error(format!(
                    "Failed to assign window.{name}: {}",
                    js_error_message(&err)
                ))
            })
            .map(|_| ())
    }
}

impl PageScope for BrowserPage {
    fn is_browser(&self) -> bool {
        self.window
            .as_ref()
            .and_then(|window| window.document())
            .is_some()
    }

    fn append_head_script(&self, script: &ScriptTag) -> GtagResult<()> {
        let document = self.document()?;
        let element = document
            .create_element("script")
            .map_err(|err| {
                dom_error(format!("Failed to create script: {}", js_error_message(&err)))
            })?
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| dom_error("Script element has wrong type"))?;
        element.set_async(script.is_async);
        element.set_src(&script.src);

        let head = document
            .head()
            .ok_or_else(|| dom_error("No <head> element found"))?;
        head.append_child(&element).map_err(|err| {
            dom_error(format!(
                "Failed to append script to <head>: {}",
                js_error_message(&err)
            ))
        })?;
        Ok(())
    }

    fn ensure_data_layer(&self, name: &str) -> GtagResult<()> {
        // Same rule as `window.dataLayer = window.dataLayer || []`.
        if self.global(name)?.is_falsy() {
            self.set_global(name, &Array::new().into())?;
        }
        Ok(())
    }

    /// The function is compiled from source through the `Function` constructor, which pages with
    /// a Content-Security-Policy lacking `'unsafe-eval'` refuse. That refusal is reported as a
    /// `gtag/global-scope` error, leaving the script tag and data layer in place.
    fn bind_tracker(&self, function_name: &str, data_layer_name: &str) -> GtagResult<()> {
        let source = tracker_source(data_layer_name)?;
        let constructor = self
            .global("Function")?
            .dyn_into::<Function>()
            .map_err(|_| global_scope_error("window.Function is not a constructor"))?;
        let function = Reflect::construct(&constructor, &Array::of1(&JsValue::from_str(&source)))
            .map_err(|err| {
                global_scope_error(format!(
                    "Failed to compile window.{function_name}: {}",
                    js_error_message(&err)
                ))
            })?;
        self.set_global(function_name, &function)
    }

    fn call_tracker(&self, function_name: &str, command: &GtagCommand) -> GtagResult<()> {
        let function = self
            .global(function_name)?
            .dyn_into::<Function>()
            .map_err(|_| tracker_unbound(function_name))?;

        let args = Array::new();
        for value in command_arguments(command)? {
            args.push(&value);
        }
        function
            .apply(&JsValue::UNDEFINED, &args)
            .map_err(|err| {
                global_scope_error(format!(
                    "window.{function_name} threw: {}",
                    js_error_message(&err)
                ))
            })
            .map(|_| ())
    }
}

fn command_arguments(command: &GtagCommand) -> GtagResult<Vec<JsValue>> {
    match command {
        GtagCommand::Js(timestamp) => {
            let date = Date::new(&JsValue::from_f64(timestamp.timestamp_millis() as f64));
            Ok(vec![JsValue::from_str("js"), date.into()])
        }
        other => other.to_arguments().iter().map(json_to_js).collect(),
    }
}

fn json_to_js(value: &Value) -> GtagResult<JsValue> {
    match value {
        Value::Null => Ok(JsValue::NULL),
        Value::Bool(flag) => Ok(JsValue::from_bool(*flag)),
        Value::Number(number) => Ok(number
            .as_f64()
            .map(JsValue::from_f64)
            .unwrap_or(JsValue::NULL)),
        Value::String(text) => Ok(JsValue::from_str(text)),
        composite => js_sys::JSON::parse(&composite.to_string()).map_err(|err| {
            global_scope_error(format!(
                "Failed to convert argument to JS: {}",
                js_error_message(&err)
            ))
        }),
    }
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else if let Some(string) = value.as_string() {
        string
    } else {
        format!("{value:?}")
    }
}
