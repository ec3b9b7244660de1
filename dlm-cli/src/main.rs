//! Download Monitor license tool
//!
//! Activates, deactivates and inspects add-on licenses for a site.
//!
//! Usage:
//!   dlm --config dlm.json activate dlm-email-lock --key KEY --email me@example.com
//!   dlm status dlm-email-lock

use anyhow::Result;
use clap::{Parser, Subcommand};
use dlm_cli::{CliConfig, LicenseCommand, build_client, execute};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "dlm")]
#[command(about = "Manage Download Monitor add-on licenses")]
struct Args {
    /// Path to the JSON config file
    #[arg(short, long, default_value = "dlm.json")]
    config: PathBuf,

    /// Option store to use instead of the one in the config
    #[arg(long)]
    db: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Activate a product license on this site
    Activate {
        product: String,
        /// License key (stored before activating)
        #[arg(long)]
        key: Option<String>,
        /// Account email (stored before activating)
        #[arg(long)]
        email: Option<String>,
    },
    /// Release a product license from this site
    Deactivate { product: String },
    /// Show the stored license
    Status { product: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = CliConfig::load(&args.config)?;
    let client = build_client(&config, args.db.as_deref())?;

    let (product, command) = match args.command {
        Command::Activate { product, key, email } => {
            (product, LicenseCommand::Activate { key, email })
        }
        Command::Deactivate { product } => (product, LicenseCommand::Deactivate),
        Command::Status { product } => (product, LicenseCommand::Status),
    };

    let output = execute(&client, &product, command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_is_positional() {
        let args = Args::try_parse_from([
            "dlm", "--db", "opts.sqlite", "activate", "dlm-email-lock", "--key", "K", "--email",
            "me@example.com",
        ])
        .unwrap();
        assert_eq!(args.db, Some(PathBuf::from("opts.sqlite")));
        match args.command {
            Command::Activate { product, key, email } => {
                assert_eq!(product, "dlm-email-lock");
                assert_eq!(key.as_deref(), Some("K"));
                assert_eq!(email.as_deref(), Some("me@example.com"));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let args = Args::try_parse_from(["dlm", "status", "dlm-email-lock"]).unwrap();
        assert!(matches!(args.command, Command::Status { product } if product == "dlm-email-lock"));
        assert!(Args::try_parse_from(["dlm", "status", "--product", "dlm-email-lock"]).is_err());
    }
}
