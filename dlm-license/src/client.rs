//! Activation and deactivation against the license server.

use crate::config::LicenseServerConfig;
use crate::error::{LicenseError, LicenseField, LicenseResult};
use crate::outcome::Outcome;
use crate::record::{LicenseRecord, LicenseStatus};
use crate::store::LicenseStore;
use crate::transport::{LicenseTransport, TransportResponse};
use dlm_types::{ProductId, SiteInstance};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Message returned on a confirmed activation.
pub const ACTIVATED_MESSAGE: &str = "License successfully activated.";

const MISSING_KEY_MESSAGE: &str = "Please enter your license key.";
const MISSING_EMAIL_MESSAGE: &str = "Please enter the email address associated with your license.";
const DEACTIVATE_MISSING_KEY_MESSAGE: &str = "Can't deactivate license without a license key.";

/// Talks to the license server on behalf of this site and keeps the local
/// records in sync with the outcome.
pub struct LicenseClient {
    config: LicenseServerConfig,
    instance: SiteInstance,
    transport: Arc<dyn LicenseTransport>,
    store: Arc<dyn LicenseStore>,
}

impl LicenseClient {
    pub fn new(
        config: LicenseServerConfig,
        instance: SiteInstance,
        transport: Arc<dyn LicenseTransport>,
        store: Arc<dyn LicenseStore>,
    ) -> Self {
        Self {
            config,
            instance,
            transport,
            store,
        }
    }

    #[must_use]
    pub fn config(&self) -> &LicenseServerConfig {
        &self.config
    }

    #[must_use]
    pub fn instance(&self) -> &SiteInstance {
        &self.instance
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn LicenseStore> {
        &self.store
    }

    /// Loads the stored record for a product, or a fresh inactive one.
    pub fn load_license(&self, product_id: &ProductId) -> LicenseResult<LicenseRecord> {
        Ok(self
            .store
            .load(product_id)?
            .unwrap_or_else(|| LicenseRecord::new(product_id.clone())))
    }

    /// Attempts to activate the license on this site.
    ///
    /// On success the record becomes `active`; on any failure it becomes
    /// `inactivate`. The record is persisted in both cases.
    pub async fn activate(&self, license: &mut LicenseRecord) -> Outcome {
        match self.request_activation(license).await {
            Ok(()) => {
                license.set_status(LicenseStatus::Active);
                if let Err(e) = self.store.save(license) {
                    warn!("License for {} activated but not saved: {e}", license.product_id());
                    return Outcome::failed(e);
                }
                info!("License for {} activated", license.product_id());
                Outcome::success(Some(ACTIVATED_MESSAGE))
            }
            Err(error) => {
                warn!("License activation for {} failed: {error:?}", license.product_id());
                license.set_status(LicenseStatus::Inactivate);
                if let Err(e) = self.store.save(license) {
                    warn!("Failed to save license for {}: {e}", license.product_id());
                }
                Outcome::failed(error)
            }
        }
    }

    /// Attempts to release the license from this site.
    ///
    /// Only a completed 200 exchange changes the record (to `inactive`).
    /// The response body is not inspected.
    pub async fn deactivate(&self, license: &mut LicenseRecord) -> Outcome {
        match self.request_deactivation(license).await {
            Ok(()) => {
                license.set_status(LicenseStatus::Inactive);
                if let Err(e) = self.store.save(license) {
                    warn!("License for {} deactivated but not saved: {e}", license.product_id());
                    return Outcome::failed(e);
                }
                info!("License for {} deactivated", license.product_id());
                Outcome::success(None)
            }
            Err(error) => {
                warn!("License deactivation for {} failed: {error:?}", license.product_id());
                Outcome::failed(error)
            }
        }
    }

    async fn request_activation(&self, license: &LicenseRecord) -> LicenseResult<()> {
        if license.key().is_empty() {
            return Err(LicenseError::validation(LicenseField::Key, MISSING_KEY_MESSAGE));
        }
        if license.email().is_empty() {
            return Err(LicenseError::validation(LicenseField::Email, MISSING_EMAIL_MESSAGE));
        }

        let query = [
            ("wc-api", self.config.activation_endpoint.as_str()),
            ("email", license.email()),
            ("licence_key", license.key()),
            ("api_product_id", license.product_id().as_str()),
            ("request", "activate"),
            ("instance", self.instance.as_str()),
        ];
        let response = self.send(&query).await?;
        interpret_activation(&response.body)
    }

    async fn request_deactivation(&self, license: &LicenseRecord) -> LicenseResult<()> {
        if license.key().is_empty() {
            return Err(LicenseError::validation(
                LicenseField::Key,
                DEACTIVATE_MISSING_KEY_MESSAGE,
            ));
        }

        let query = [
            ("wc-api", self.config.activation_endpoint.as_str()),
            ("api_product_id", license.product_id().as_str()),
            ("licence_key", license.key()),
            ("request", "deactivate"),
            ("instance", self.instance.as_str()),
        ];
        let response = self.send(&query).await?;
        debug!("deactivation response: {}", response.body);
        Ok(())
    }

    async fn send(&self, query: &[(&str, &str)]) -> LicenseResult<TransportResponse> {
        let response = self.transport.get(&self.config.store_url, query).await?;
        if response.status != 200 {
            return Err(LicenseError::transport(format!(
                "unexpected HTTP status {}",
                response.status
            )));
        }
        Ok(response)
    }
}

/// Reads an activation response body.
///
/// Checked in order: a truthy `activated` field, a body that decodes to
/// `false` (or not at all), an `error_code` field.
fn interpret_activation(body: &str) -> LicenseResult<()> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| LicenseError::transport(format!("undecodable response: {e}")))?;

    if value.get("activated").is_some_and(is_truthy) {
        return Ok(());
    }
    if value == Value::Bool(false) {
        return Err(LicenseError::transport("response body is false"));
    }
    if let Some(code) = value.get("error_code") {
        let code = value_to_string(code);
        let message = match value.get("error") {
            Some(Value::Null) | None => code.clone(),
            Some(error) => value_to_string(error),
        };
        return Err(LicenseError::Server { code, message });
    }
    Err(LicenseError::UnexpectedResponse)
}

/// Loose truthiness as used by the license server's clients: `true`,
/// non-zero numbers, strings other than `""` and `"0"`, and non-empty
/// arrays or objects.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
