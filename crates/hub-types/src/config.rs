//! Static configuration of the transfer resolution.
//!
//! The only process-wide inputs of the transfer logic are the bech32 prefix of
//! local accounts and the port the transfer application is bound to. They are
//! loaded once at startup and passed explicitly to every operation.

pub mod error;

use std::{fs, fs::File, io::Write, path::Path};

use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use crate::account;
use crate::core::ics24_host::identifier::PortId;

pub use error::Error;

pub mod default {
    use crate::core::ics24_host::identifier::PortId;

    pub fn account_prefix() -> String {
        "hhub".to_string()
    }

    pub fn port_id() -> PortId {
        PortId::transfer()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Human-readable part of local bech32 account addresses.
    #[serde(default = "default::account_prefix")]
    pub account_prefix: String,

    /// Port the fungible token transfer application is bound to.
    #[serde(default = "default::port_id")]
    pub port_id: PortId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account_prefix: default::account_prefix(),
            port_id: default::port_id(),
        }
    }
}

impl Config {
    pub fn new(account_prefix: impl Into<String>) -> Self {
        Self {
            account_prefix: account_prefix.into(),
            ..Self::default()
        }
    }

    /// Checks that the account prefix can be used to encode addresses.
    pub fn validate(&self) -> Result<(), Error> {
        account::validate_prefix(&self.account_prefix)
            .map_err(|e| Error::invalid_account_prefix(self.account_prefix.clone(), e))
    }
}

/// Attempt to load and parse the TOML config file as a `Config`.
pub fn load(path: impl AsRef<Path>) -> Result<Config, Error> {
    let config_toml = fs::read_to_string(&path).map_err(Error::io)?;

    let config = toml::from_str::<Config>(&config_toml[..]).map_err(Error::decode)?;
    config.validate()?;

    debug!(
        account_prefix = %config.account_prefix,
        port_id = %config.port_id,
        "loaded transfer configuration"
    );

    Ok(config)
}

/// Serialize the given `Config` as TOML to the given config file.
pub fn store(config: &Config, path: impl AsRef<Path>) -> Result<(), Error> {
    let mut file = if path.as_ref().exists() {
        fs::OpenOptions::new().write(true).truncate(true).open(path)
    } else {
        File::create(path)
    }
    .map_err(Error::io)?;

    store_writer(config, &mut file)
}

/// Serialize the given `Config` as TOML to the given writer.
pub fn store_writer(config: &Config, mut writer: impl Write) -> Result<(), Error> {
    let toml_config = toml::to_string_pretty(&config).map_err(Error::encode)?;

    writeln!(writer, "{toml_config}").map_err(Error::io)?;

    Ok(())
}
