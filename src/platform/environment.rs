//! Runtime environment detection.

/// Returns `true` if the JS global object is a `Window`.
pub fn is_browser() -> bool {
    #[cfg(all(target_arch = "wasm32", feature = "wasm-web"))]
    {
        use wasm_bindgen::JsCast;
        js_sys::global().dyn_into::<web_sys::Window>().is_ok()
    }

    #[cfg(not(all(target_arch = "wasm32", feature = "wasm-web")))]
    {
        false
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_targets_are_never_browsers() {
        assert!(!is_browser());
    }
}
