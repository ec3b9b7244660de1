//! Shared configuration and command handling for the `dlm` binary.

use anyhow::{Context, Result};
use dlm_license::{
    HttpTransport, LicenseClient, LicenseServerConfig, OptionLicenseStore,
};
use dlm_options::{Options, SqliteOptionStore};
use dlm_types::{ProductId, SiteInstance};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Contents of the JSON config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Site URL reported to the license server.
    pub instance: String,
    /// SQLite file holding the option table.
    pub options_db: Option<PathBuf>,
    pub server: LicenseServerConfig,
}

impl CliConfig {
    /// Reads a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
    }
}

/// One license operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseCommand {
    Activate {
        key: Option<String>,
        email: Option<String>,
    },
    Deactivate,
    Status,
}

/// Opens the option store and builds a client over HTTP.
pub fn build_client(config: &CliConfig, db_override: Option<&Path>) -> Result<LicenseClient> {
    let instance = SiteInstance::parse(&config.instance)
        .with_context(|| format!("invalid instance {:?} in config", config.instance))?;
    let db = db_override
        .map(Path::to_path_buf)
        .or_else(|| config.options_db.clone())
        .unwrap_or_else(|| PathBuf::from("dlm-options.sqlite"));

    let options: Arc<dyn Options> = Arc::new(
        SqliteOptionStore::open(&db)
            .with_context(|| format!("failed to open option store {}", db.display()))?,
    );
    let transport = Arc::new(HttpTransport::new(&config.server)?);
    let store = Arc::new(OptionLicenseStore::new(options));

    Ok(LicenseClient::new(config.server.clone(), instance, transport, store))
}

/// Runs a command for one product and returns the JSON printed to the user.
pub async fn execute(client: &LicenseClient, product: &str, command: LicenseCommand) -> Result<Value> {
    let product_id = ProductId::parse(product)?;
    let mut license = client.load_license(&product_id)?;

    let outcome = match command {
        LicenseCommand::Activate { key, email } => {
            if let Some(key) = key {
                license.set_key(&key);
            }
            if let Some(email) = email {
                license.set_email(&email);
            }
            client.activate(&mut license).await
        }
        LicenseCommand::Deactivate => client.deactivate(&mut license).await,
        LicenseCommand::Status => {
            return Ok(json!({
                "product_id": license.product_id(),
                "email": license.email(),
                "has_key": !license.key().is_empty(),
                "status": license.status(),
            }));
        }
    };

    Ok(serde_json::to_value(&outcome)?)
}
