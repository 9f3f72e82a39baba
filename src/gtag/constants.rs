/// Google Ads account the loader reports to.
pub const DEFAULT_TAG_ID: &str = "AW-648113111";

/// Endpoint serving the gtag.js library. The tag id is passed as the `id` query parameter.
pub const GTAG_SCRIPT_ENDPOINT: &str = "https://www.googletagmanager.com/gtag/js";

pub const DATA_LAYER_NAME: &str = "dataLayer";
pub const GTAG_FUNCTION_NAME: &str = "gtag";

pub const GTAG_PLUGIN_NAME: &str = "gtag";
