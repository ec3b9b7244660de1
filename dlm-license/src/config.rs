//! License server configuration.

use serde::{Deserialize, Serialize};

/// Vendor store hosting the license API.
pub const DEFAULT_STORE_URL: &str = "https://www.download-monitor.com/";

/// `wc-api` endpoint handling activate and deactivate requests.
pub const ENDPOINT_ACTIVATION: &str = "wp_plugin_licencing_activation_api";

/// `wc-api` endpoint serving add-on update information.
pub const ENDPOINT_UPDATE: &str = "wp_plugin_licencing_update_api";

/// Where and how to reach the license server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseServerConfig {
    /// Base URL of the vendor store (e.g. `https://www.download-monitor.com/`).
    pub store_url: String,
    /// Value of the `wc-api` parameter for activation requests.
    pub activation_endpoint: String,
    /// Value of the `wc-api` parameter for update checks.
    pub update_endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for LicenseServerConfig {
    fn default() -> Self {
        Self {
            store_url: DEFAULT_STORE_URL.to_string(),
            activation_endpoint: ENDPOINT_ACTIVATION.to_string(),
            update_endpoint: ENDPOINT_UPDATE.to_string(),
            timeout_secs: 30,
            user_agent: concat!("download-monitor/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
