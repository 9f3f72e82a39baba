//! Page scope backed by the real `window` and `document`.

#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
mod page;

#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
pub use page::BrowserPage;

use crate::gtag::error::{global_scope_error, GtagResult};

/// Body of the `gtag` function bound on the window. It pushes the `arguments` object, not an
/// array built from it, because gtag.js only processes `Arguments` entries.
#[cfg_attr(
    not(all(feature = "wasm-web", target_arch = "wasm32")),
    allow(dead_code)
)]
pub(crate) fn tracker_source(data_layer_name: &str) -> GtagResult<String> {
    // A JSON string literal is also a valid JS string literal.
    let quoted = serde_json::to_string(data_layer_name)
        .map_err(|err| global_scope_error(format!("Invalid data layer name: {err}")))?;
    Ok(format!("window[{quoted}].push(arguments);"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_source_pushes_arguments_onto_named_layer() {
        assert_eq!(
            tracker_source("dataLayer").unwrap(),
            "window[\"dataLayer\"].push(arguments);"
        );
    }

    #[test]
    fn tracker_source_escapes_layer_name() {
        assert_eq!(
            tracker_source("ads\"];alert(1);//").unwrap(),
            "window[\"ads\\\"];alert(1);//\"].push(arguments);"
        );
    }
}
