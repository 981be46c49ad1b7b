use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validate::{
    parse_channel_sequence, validate_channel_identifier, validate_port_identifier,
    CHANNEL_PREFIX,
};

/// Port name the fungible token transfer application binds to.
pub const TRANSFER_PORT_ID: &str = "transfer";

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PortId(String);

impl PortId {
    /// Infallible creator for the transfer port
    pub fn transfer() -> Self {
        Self(TRANSFER_PORT_ID.to_string())
    }

    /// Get this identifier as a borrowed `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get this identifier as a borrowed byte slice
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// This implementation provides a `to_string` method.
impl Display for PortId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PortId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_port_identifier(s).map(|_| Self(s.to_string()))
    }
}

impl TryFrom<String> for PortId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_port_identifier(&value)?;
        Ok(Self(value))
    }
}

impl From<PortId> for String {
    fn from(value: PortId) -> Self {
        value.0
    }
}

impl Default for PortId {
    fn default() -> Self {
        Self::transfer()
    }
}

impl AsRef<str> for PortId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelId(String);

impl ChannelId {
    /// Builds a new channel identifier. Like client and connection identifiers, channel ids are
    /// deterministically formed from two elements: a prefix `prefix`, and a monotonically
    /// increasing `counter`, separated by a dash "-".
    /// The prefix is currently determined statically (see `ChannelId::prefix()`) so this method
    /// accepts a single argument, the `counter`.
    ///
    /// ```
    /// # use hhub_types::core::ics24_host::identifier::ChannelId;
    /// let chan_id = ChannelId::new(27);
    /// assert_eq!(chan_id.to_string(), "channel-27");
    /// ```
    pub fn new(identifier: u64) -> Self {
        Self(format!("{CHANNEL_PREFIX}{identifier}"))
    }

    /// Returns the static prefix to be used across all channel identifiers.
    pub fn prefix() -> &'static str {
        CHANNEL_PREFIX
    }

    /// Get this identifier as a borrowed `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get this identifier as a borrowed byte slice
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// The counter of a handshake-allocated identifier, `None` for custom ones.
    pub fn sequence(&self) -> Option<u64> {
        parse_channel_sequence(&self.0).ok()
    }
}

impl Default for ChannelId {
    fn default() -> Self {
        Self::new(0)
    }
}

/// This implementation provides a `to_string` method.
impl Display for ChannelId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChannelId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_channel_identifier(s).map(|_| Self(s.to_string()))
    }
}

impl TryFrom<String> for ChannelId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_channel_identifier(&value)?;
        Ok(Self(value))
    }
}

impl From<ChannelId> for String {
    fn from(value: ChannelId) -> Self {
        value.0
    }
}

/// Equality check against string literal (satisfies &ChannelId == &str).
/// ```
/// use core::str::FromStr;
/// use hhub_types::core::ics24_host::identifier::ChannelId;
/// let channel_id = ChannelId::from_str("channelId-0");
/// assert!(channel_id.is_ok());
/// channel_id.map(|id| {assert_eq!(&id, "channelId-0")});
/// ```
impl PartialEq<str> for ChannelId {
    fn eq(&self, other: &str) -> bool {
        self.as_str().eq(other)
    }
}

impl PartialEq<str> for PortId {
    fn eq(&self, other: &str) -> bool {
        self.as_str().eq(other)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn channel_id_from_counter() {
        let channel_id = ChannelId::new(141);
        assert_eq!(channel_id.as_str(), "channel-141");
        assert_eq!(channel_id.sequence(), Some(141));
    }

    #[test]
    fn custom_channel_id_has_no_sequence() {
        let channel_id: ChannelId = "channelId-0".parse().unwrap();
        assert_eq!(channel_id.sequence(), None);
    }

    #[test]
    fn transfer_port_id() {
        assert_eq!(PortId::transfer().as_str(), TRANSFER_PORT_ID);
        assert_eq!(TRANSFER_PORT_ID.parse::<PortId>().unwrap(), PortId::transfer());
        assert_eq!(PortId::default(), PortId::transfer());
    }

    #[test]
    fn port_id_deserialization_is_validated() {
        let port: PortId = serde_json::from_str("\"transfer\"").unwrap();
        assert_eq!(port, PortId::transfer());

        assert!(serde_json::from_str::<PortId>("\"t\"").is_err());
        assert!(serde_json::from_str::<ChannelId>("\"channel/0\"").is_err());
    }
}
