//! Account identities and their bech32 / hex renderings.
//!
//! An account on hhub is a 20-byte identity. The same bytes are shown as a
//! bech32 string with the chain's human-readable prefix on the Cosmos side and
//! as a `0x` hex string on the EVM side. Addresses coming from other chains
//! carry their own prefix; [`decode_bech32`] ignores it so that any
//! syntactically valid bech32 address can be translated into a local one.

pub mod error;

use core::fmt::{Debug, Display, Error as FmtError, Formatter};
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use bech32::{FromBase32, ToBase32, Variant};
use sha3::{Digest, Keccak256};

pub use error::Error;

/// Length in bytes of an account identity.
pub const ACCOUNT_ID_LENGTH: usize = 20;

/// Decodes a bech32 string under any human-readable part into its data bytes.
pub fn decode_bech32(input: &str) -> Result<Vec<u8>, Error> {
    if input.is_empty() {
        return Err(Error::empty_address());
    }

    let (_hrp, data, variant) =
        bech32::decode(input).map_err(|e| Error::bech32(input.to_string(), e))?;

    if variant != Variant::Bech32 {
        return Err(Error::bech32m_variant(input.to_string()));
    }

    Vec::from_base32(&data).map_err(|e| Error::bech32(input.to_string(), e))
}

/// Encodes raw bytes as bech32 under the given human-readable part.
pub fn encode_bech32(account_prefix: &str, address: &[u8]) -> Result<String, Error> {
    bech32::encode(account_prefix, address.to_base32(), Variant::Bech32)
        .map_err(|e| Error::bech32_encode(account_prefix.to_string(), e))
}

/// Checks that `prefix` can serve as the human-readable part of account addresses.
pub fn validate_prefix(prefix: &str) -> Result<(), Error> {
    encode_bech32(prefix, &[0; ACCOUNT_ID_LENGTH]).map(|_| ())
}

fn keccak256(bytes: &[u8]) -> [u8; 32] {
    let mut output = [0u8; 32];
    output.copy_from_slice(&Keccak256::digest(bytes));
    output
}

/// The 20-byte identity behind every address format.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; ACCOUNT_ID_LENGTH]);

impl AccountId {
    pub const fn new(bytes: [u8; ACCOUNT_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Decodes a bech32 address regardless of its prefix.
    pub fn from_bech32(address: &str) -> Result<Self, Error> {
        let bytes = decode_bech32(address)?;
        Self::try_from(bytes.as_slice())
    }

    pub fn to_bech32(&self, prefix: &str) -> Result<String, Error> {
        encode_bech32(prefix, &self.0)
    }

    /// Parses a hex address, with or without the `0x` prefix and in any letter case.
    pub fn from_hex(address: &str) -> Result<Self, Error> {
        if address.is_empty() {
            return Err(Error::empty_address());
        }

        let digits = address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
            .unwrap_or(address);

        let bytes = hex::decode(digits).map_err(|e| Error::hex(address.to_string(), e))?;
        Self::try_from(bytes.as_slice())
    }

    /// Lower case `0x` hex rendering.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// EIP-55 mixed-case checksum rendering, as used by EVM tooling and events.
    pub fn to_checksum_hex(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = keccak256(lower.as_bytes());

        let mut checksummed = String::with_capacity(2 + lower.len());
        checksummed.push_str("0x");

        for (i, c) in lower.chars().enumerate() {
            let byte = hash[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };

            if c.is_ascii_alphabetic() && nibble >= 8 {
                checksummed.push(c.to_ascii_uppercase());
            } else {
                checksummed.push(c);
            }
        }

        checksummed
    }
}

impl TryFrom<&[u8]> for AccountId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let id = <[u8; ACCOUNT_ID_LENGTH]>::try_from(bytes)
            .map_err(|_| Error::invalid_length(ACCOUNT_ID_LENGTH, bytes.len()))?;
        Ok(Self(id))
    }
}

impl From<[u8; ACCOUNT_ID_LENGTH]> for AccountId {
    fn from(bytes: [u8; ACCOUNT_ID_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl Debug for AccountId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "AccountId({})", self.to_hex())
    }
}

/// Renders the identity in hex; use [`AccountId::to_bech32`] for the Cosmos form.
impl Display for AccountId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.to_checksum_hex())
    }
}

impl FromStr for AccountId {
    type Err = Error;

    /// Accepts both renderings: `0x` hex or bech32 under any prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("0x") || s.starts_with("0X") {
            Self::from_hex(s)
        } else {
            Self::from_bech32(s)
        }
    }
}

/// An account identity encoded under the local chain's bech32 prefix.
///
/// Two local addresses are equal iff their identities are equal.
#[derive(Clone)]
pub struct LocalAddress {
    id: AccountId,
    bech32: String,
}

impl LocalAddress {
    pub fn new(id: AccountId, prefix: &str) -> Result<Self, Error> {
        let bech32 = id.to_bech32(prefix)?;
        Ok(Self { id, bech32 })
    }

    /// Translates a bech32 address carrying any prefix into the local encoding.
    pub fn from_bech32(address: &str, prefix: &str) -> Result<Self, Error> {
        let id = AccountId::from_bech32(address)?;
        Self::new(id, prefix)
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn as_str(&self) -> &str {
        &self.bech32
    }

    pub fn to_hex(&self) -> String {
        self.id.to_checksum_hex()
    }
}

impl PartialEq for LocalAddress {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LocalAddress {}

impl Hash for LocalAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl Debug for LocalAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "LocalAddress({})", self.bech32)
    }
}

impl Display for LocalAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.bech32)
    }
}

impl From<LocalAddress> for AccountId {
    fn from(address: LocalAddress) -> Self {
        address.id
    }
}
