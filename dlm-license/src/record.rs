//! The local license record.

use dlm_types::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Local activation status of a license.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    /// Activated against the license server.
    Active,
    /// Never activated, or deactivated.
    #[default]
    Inactive,
    /// The last activation attempt failed.
    Inactivate,
}

impl LicenseStatus {
    /// Returns true only for a confirmed activation.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns the stored string form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Inactivate => "inactivate",
        }
    }
}

impl fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product's license as stored on this site.
///
/// The status can only be changed by the crate: it becomes `active` solely
/// after the license server confirms an activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRecord {
    product_id: ProductId,
    #[serde(default)]
    key: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    status: LicenseStatus,
}

impl LicenseRecord {
    /// Creates an empty, inactive record for a product.
    #[must_use]
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            key: String::new(),
            email: String::new(),
            status: LicenseStatus::Inactive,
        }
    }

    /// Creates an inactive record with key and email filled in.
    #[must_use]
    pub fn with_credentials(product_id: ProductId, key: &str, email: &str) -> Self {
        let mut record = Self::new(product_id);
        record.set_key(key);
        record.set_email(email);
        record
    }

    #[must_use]
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Sets the license key. Surrounding whitespace is dropped.
    pub fn set_key(&mut self, key: &str) {
        self.key = key.trim().to_string();
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Sets the account email. Surrounding whitespace is dropped.
    pub fn set_email(&mut self, email: &str) {
        self.email = email.trim().to_string();
    }

    #[must_use]
    pub fn status(&self) -> LicenseStatus {
        self.status
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub(crate) fn set_status(&mut self, status: LicenseStatus) {
        self.status = status;
    }
}
