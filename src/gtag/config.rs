use serde::Deserialize;
use url::Url;

use crate::gtag::constants::{
    DATA_LAYER_NAME, DEFAULT_TAG_ID, GTAG_FUNCTION_NAME, GTAG_SCRIPT_ENDPOINT,
};
use crate::gtag::error::{invalid_argument, GtagResult};

/// Settings for the gtag loader. The defaults reproduce the stock Google Ads snippet.
///
/// Hosts that keep their runtime configuration as JSON can deserialize it directly; missing keys
/// fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GtagConfig {
    pub tag_id: String,
    pub script_endpoint: String,
    pub data_layer_name: String,
    pub function_name: String,
}

impl Default for GtagConfig {
    fn default() -> Self {
        Self {
            tag_id: DEFAULT_TAG_ID.to_string(),
            script_endpoint: GTAG_SCRIPT_ENDPOINT.to_string(),
            data_layer_name: DATA_LAYER_NAME.to_string(),
            function_name: GTAG_FUNCTION_NAME.to_string(),
        }
    }
}

impl GtagConfig {
    pub fn from_json(raw: &str) -> GtagResult<Self> {
        serde_json::from_str(raw)
            .map_err(|err| invalid_argument(format!("Invalid gtag configuration: {err}")))
    }

    pub fn with_tag_id(mut self, tag_id: impl Into<String>) -> Self {
        self.tag_id = tag_id.into();
        self
    }

    pub fn with_script_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.script_endpoint = endpoint.into();
        self
    }

    pub fn with_data_layer_name(mut self, name: impl Into<String>) -> Self {
        self.data_layer_name = name.into();
        self
    }

    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    pub fn validate(&self) -> GtagResult<()> {
        if self.tag_id.trim().is_empty() {
            return Err(invalid_argument("Tag id must not be empty"));
        }
        if self.data_layer_name.trim().is_empty() {
            return Err(invalid_argument("Data layer name must not be empty"));
        }
        if self.function_name.trim().is_empty() {
            return Err(invalid_argument("Tracking function name must not be empty"));
        }
        if self.function_name == self.data_layer_name {
            return Err(invalid_argument(
                "Tracking function and data layer cannot share a global name",
            ));
        }
        Ok(())
    }

    /// Builds the gtag.js URL, e.g. `https://www.googletagmanager.com/gtag/js?id=AW-648113111`.
    pub fn script_url(&self) -> GtagResult<String> {
        let mut url = Url::parse(&self.script_endpoint).map_err(|err| {
            invalid_argument(format!(
                "Invalid script endpoint {}: {err}",
                self.script_endpoint
            ))
        })?;
        url.query_pairs_mut().append_pair("id", &self.tag_id);
        Ok(url.to_string())
    }
}
