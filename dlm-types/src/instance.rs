//! The site instance a license is bound to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Public URL of the site running the plugin. The license server counts
/// activations per instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SiteInstance(String);

impl SiteInstance {
    /// Parses a site URL. Only `http` and `https` URLs with a host part are
    /// accepted; a trailing slash is dropped.
    pub fn parse(url: &str) -> crate::Result<Self> {
        let trimmed = url.trim().trim_end_matches('/');
        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .ok_or_else(|| crate::Error::InvalidInstance(url.to_string()))?;
        if rest.is_empty() || rest.starts_with('/') || rest.contains(char::is_whitespace) {
            return Err(crate::Error::InvalidInstance(url.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SiteInstance {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SiteInstance> for String {
    fn from(instance: SiteInstance) -> Self {
        instance.0
    }
}
