//! Paid add-on descriptor.

use crate::client::LicenseClient;
use crate::error::{LicenseError, LicenseResult};
use crate::outcome::Outcome;
use crate::record::LicenseRecord;
use crate::store::LicenseStore;
use dlm_types::ProductId;

/// A paid add-on and its license.
#[derive(Debug, Clone)]
pub struct Product {
    product_id: ProductId,
    product_name: String,
    plugin_name: String,
    version: Option<String>,
    license: Option<LicenseRecord>,
}

impl Product {
    /// Describes an add-on. An empty name falls back to the product id.
    #[must_use]
    pub fn new(product_id: ProductId, version: Option<&str>, product_name: &str) -> Self {
        let plugin_name = format!("{product_id}/{product_id}.php");
        let product_name = if product_name.is_empty() {
            product_id.to_string()
        } else {
            product_name.to_string()
        };
        Self {
            product_id,
            product_name,
            plugin_name,
            version: version.map(str::to_string),
            license: None,
        }
    }

    #[must_use]
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn set_product_name(&mut self, name: &str) {
        self.product_name = name.to_string();
    }

    /// Plugin file relative to the plugins directory.
    #[must_use]
    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    pub fn set_plugin_name(&mut self, plugin_name: &str) {
        self.plugin_name = plugin_name.to_string();
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the license, loading it from the store on first access.
    pub fn license(&mut self, store: &dyn LicenseStore) -> LicenseResult<&mut LicenseRecord> {
        let license = match self.license.take() {
            Some(license) => license,
            None => store
                .load(&self.product_id)?
                .unwrap_or_else(|| LicenseRecord::new(self.product_id.clone())),
        };
        Ok(self.license.insert(license))
    }

    /// Replaces the license and persists it. The record must belong to
    /// this product.
    pub fn set_license(
        &mut self,
        license: LicenseRecord,
        store: &dyn LicenseStore,
    ) -> LicenseResult<()> {
        if license.product_id() != &self.product_id {
            return Err(LicenseError::Storage(format!(
                "license for {} cannot be set on {}",
                license.product_id(),
                self.product_id
            )));
        }
        store.save(&license)?;
        self.license = Some(license);
        Ok(())
    }

    /// Activates this product's license through `client`.
    pub async fn activate(&mut self, client: &LicenseClient) -> Outcome {
        let store = client.store().clone();
        match self.license(store.as_ref()) {
            Ok(license) => client.activate(license).await,
            Err(e) => Outcome::failed(e),
        }
    }

    /// Deactivates this product's license through `client`.
    pub async fn deactivate(&mut self, client: &LicenseClient) -> Outcome {
        let store = client.store().clone();
        match self.license(store.as_ref()) {
            Ok(license) => client.deactivate(license).await,
            Err(e) => Outcome::failed(e),
        }
    }
}
